//! Patient detail display state.
//!
//! A [`PatientInformation`] is keyed by an identifier and looks the record up
//! in the store. Until the record turns up it stays [`DisplayState::Loading`];
//! there is deliberately no separate not-found state.

use crate::patient::PatientRecord;
use crate::store::PatientStore;
use registry_types::PatientId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Loaded(PatientRecord),
}

/// Read-only view of a single patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientInformation {
    patient_id: PatientId,
    state: DisplayState,
}

impl PatientInformation {
    /// Creates a view for `patient_id` and performs the first lookup.
    pub fn new(patient_id: PatientId, store: &PatientStore) -> Self {
        let mut info = Self {
            patient_id,
            state: DisplayState::Loading,
        };
        info.refresh(store);
        info
    }

    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DisplayState::Loading)
    }

    /// The displayed record, once found.
    pub fn record(&self) -> Option<&PatientRecord> {
        match &self.state {
            DisplayState::Loaded(record) => Some(record),
            DisplayState::Loading => None,
        }
    }

    /// Points the view at `patient_id` and looks it up again.
    ///
    /// A changed identifier drops the previously shown record first, so a
    /// stale patient is never shown under a new identifier.
    pub fn show(&mut self, patient_id: PatientId, store: &PatientStore) {
        if patient_id != self.patient_id {
            self.patient_id = patient_id;
            self.state = DisplayState::Loading;
        }
        self.refresh(store);
    }

    /// Looks the current identifier up in the store.
    ///
    /// A miss leaves the state as it is.
    pub fn refresh(&mut self, store: &PatientStore) {
        if let Some(found) = store.find(&self.patient_id) {
            self.state = DisplayState::Loaded(found);
        }
    }

    /// Labelled rows in display order; empty while loading.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let Some(record) = self.record() else {
            return Vec::new();
        };

        vec![
            ("ID", record.patient_id().to_string()),
            ("Name", record.name().to_owned()),
            ("Age", record.age().to_owned()),
            ("Gender", record.gender().to_string()),
            ("Condition", record.condition().to_owned()),
            ("Last Visit", record.last_visit().to_owned()),
        ]
    }
}
