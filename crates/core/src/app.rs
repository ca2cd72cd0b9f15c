//! Top-level composition of store, form and display.

use crate::display::PatientInformation;
use crate::patient::PatientRecord;
use crate::registration::{FormSubmission, RegistrationForm, SubmitOutcome};
use crate::store::PatientStore;
use crate::RegistryResult;
use registry_types::PatientId;

/// One registration screen: a form, the store behind it, and a detail panel
/// for the most recently registered (or explicitly requested) patient.
#[derive(Debug, Default)]
pub struct PatientManagement {
    store: PatientStore,
    form: RegistrationForm,
    display: Option<PatientInformation>,
    last_registered: Option<PatientId>,
}

impl PatientManagement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &PatientStore {
        &self.store
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    /// The detail panel; `None` until something has been registered or shown.
    pub fn display(&self) -> Option<&PatientInformation> {
        self.display.as_ref()
    }

    pub fn last_registered_id(&self) -> Option<&PatientId> {
        self.last_registered.as_ref()
    }

    /// Submits the current form.
    ///
    /// The identifier of a new record comes straight from the store's reply,
    /// and the detail panel is pointed at it.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut registered = None;
        let outcome = self
            .form
            .submit(&mut self.store, &mut |record: &PatientRecord| {
                registered = Some(record.patient_id().clone());
            });

        if let Some(id) = registered {
            self.last_registered = Some(id.clone());
            self.show(id);
        }
        outcome
    }

    /// Points the detail panel at `patient_id`.
    pub fn show(&mut self, patient_id: PatientId) {
        match self.display.as_mut() {
            Some(display) => display.show(patient_id, &self.store),
            None => self.display = Some(PatientInformation::new(patient_id, &self.store)),
        }
    }

    /// Fills and submits the form once per submission, in order.
    ///
    /// Each entry starts from a cleared form. An entry whose gender text names
    /// no option is reported as an error and nothing is submitted for it.
    pub fn register_all(
        &mut self,
        submissions: &[FormSubmission],
    ) -> Vec<RegistryResult<SubmitOutcome>> {
        submissions
            .iter()
            .map(|submission| -> RegistryResult<SubmitOutcome> {
                self.form.reset();
                submission.apply_to(&mut self.form)?;
                Ok(self.submit())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::FormField;
    use crate::RegistryError;

    fn alice() -> FormSubmission {
        FormSubmission {
            name: "Alice".into(),
            age: "30".into(),
            gender: "Female".into(),
            condition: "Flu".into(),
            last_visit: "2024-01-01".into(),
        }
    }

    fn bob() -> FormSubmission {
        FormSubmission {
            name: "Bob".into(),
            age: "52".into(),
            gender: "Male".into(),
            condition: "Hypertension".into(),
            last_visit: "2024-05-17".into(),
        }
    }

    #[test]
    fn test_first_registration_is_displayed() {
        let mut app = PatientManagement::new();
        alice().apply_to(app.form_mut()).expect("apply");

        let outcome = app.submit();

        assert!(matches!(outcome, SubmitOutcome::Registered(_)));
        assert_eq!(app.store().len(), 1);
        assert_eq!(app.last_registered_id().map(|id| id.as_str()), Some("P001"));

        let display = app.display().expect("display should be shown");
        let rows: Vec<_> = display.lines().into_iter().map(|(_, v)| v).collect();
        assert_eq!(rows, ["P001", "Alice", "30", "Female", "Flu", "2024-01-01"]);
    }

    #[test]
    fn test_rejected_submission_leaves_store_and_display_alone() {
        let mut app = PatientManagement::new();
        let mut submission = alice();
        submission.name.clear();
        submission.apply_to(app.form_mut()).expect("apply");

        let outcome = app.submit();

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("missing name should be rejected");
        };
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.len(), 1);
        assert!(app.store().is_empty());
        assert!(app.display().is_none());
        assert_eq!(app.form().value(FormField::Condition), "Flu");
    }

    #[test]
    fn test_second_registration_replaces_display() {
        let mut app = PatientManagement::new();
        let outcomes = app.register_all(&[alice(), bob()]);

        assert!(outcomes
            .iter()
            .all(|o| matches!(o, Ok(SubmitOutcome::Registered(_)))));
        assert_eq!(app.last_registered_id().map(|id| id.as_str()), Some("P002"));

        let record = app
            .display()
            .and_then(|d| d.record())
            .expect("second patient should be displayed");
        assert_eq!(record.name(), "Bob");
        assert_eq!(record.patient_id().as_str(), "P002");
    }

    #[test]
    fn test_show_unknown_id_stays_loading() {
        let mut app = PatientManagement::new();
        app.show(PatientId::from_sequence(7));

        let display = app.display().expect("display exists once shown");
        assert!(display.is_loading());
        assert!(app.last_registered_id().is_none());
    }

    #[test]
    fn test_register_all_reports_each_entry() {
        let mut app = PatientManagement::new();
        let mut unnamed = bob();
        unnamed.name.clear();
        let mut odd_gender = bob();
        odd_gender.gender = "Robot".into();

        let outcomes = app.register_all(&[unnamed, odd_gender, alice()]);

        assert!(matches!(outcomes[0], Ok(SubmitOutcome::Rejected(_))));
        assert!(matches!(outcomes[1], Err(RegistryError::Type(_))));
        match &outcomes[2] {
            Ok(SubmitOutcome::Registered(record)) => {
                assert_eq!(record.patient_id().as_str(), "P001");
            }
            other => panic!("third entry should register, got {other:?}"),
        }
        assert_eq!(app.store().len(), 1);
    }
}
