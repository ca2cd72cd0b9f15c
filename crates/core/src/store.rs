//! In-memory patient store.
//!
//! The store is the only owner of patient records. Callers get clones back,
//! never references into the collection, so nothing outside the store can
//! change what it holds.

use crate::patient::{PatientFields, PatientRecord};
use registry_types::PatientId;

/// Sole authority for patient data, in insertion order.
#[derive(Debug, Default)]
pub struct PatientStore {
    records: Vec<PatientRecord>,
    sequence: u64,
}

impl PatientStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new record and returns a copy of it.
    ///
    /// The identifier comes from a counter that only ever increases, so an
    /// identifier is never handed out twice. No validation happens here;
    /// callers are expected to go through the registration flow.
    pub fn add(&mut self, fields: PatientFields) -> PatientRecord {
        self.sequence += 1;
        let record = PatientRecord::new(PatientId::from_sequence(self.sequence), fields);
        self.records.push(record.clone());

        tracing::info!(patient_id = %record.patient_id(), "patient registered");
        record
    }

    /// Returns a snapshot of all records in insertion order.
    pub fn list(&self) -> Vec<PatientRecord> {
        self.records.clone()
    }

    /// Exact-identifier lookup by linear scan.
    pub fn find(&self, id: &PatientId) -> Option<PatientRecord> {
        self.records
            .iter()
            .find(|record| record.patient_id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
