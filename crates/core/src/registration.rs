//! Registration flow.
//!
//! The [`RegistrationForm`] sits between raw user input and the
//! [`PatientStore`]. Validation is presence-only: each of the five fields must
//! be non-empty, and nothing else about the values is checked. A rejected
//! submission never reaches the store and leaves the entered values in place
//! so only the missing fields need to be filled in.

use crate::patient::{PatientFields, PatientRecord};
use crate::store::PatientStore;
use registry_types::{Gender, TypeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The inputs of the registration form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Age,
    Gender,
    Condition,
    LastVisit,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Age,
        FormField::Gender,
        FormField::Condition,
        FormField::LastVisit,
    ];

    /// Key used for this field in submissions and error maps.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Gender => "gender",
            FormField::Condition => "condition",
            FormField::LastVisit => "lastVisit",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::Gender => "Gender",
            FormField::Condition => "Condition",
            FormField::LastVisit => "Last Visit",
        }
    }

    /// Hint shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Gender => "Select Gender",
            FormField::LastVisit => "Last Visit (YYYY-MM-DD)",
            other => other.label(),
        }
    }

    fn required_message(self) -> String {
        format!("{} is required", self.label())
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validation messages keyed by field, one per missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields in error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn require(&mut self, field: FormField) {
        self.0.insert(field, field.required_message());
    }
}

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; the form has been reset.
    Registered(PatientRecord),
    /// Nothing stored; the form keeps its values and shows these errors.
    Rejected(FieldErrors),
}

/// Receives a notification after each successful registration.
///
/// The notification carries the stored record, so observers learn the new
/// identifier without going back to the store.
pub trait RegistrationObserver {
    fn on_registered(&mut self, record: &PatientRecord);
}

impl<F> RegistrationObserver for F
where
    F: FnMut(&PatientRecord),
{
    fn on_registered(&mut self, record: &PatientRecord) {
        self(record)
    }
}

/// Editable registration form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    name: String,
    age: String,
    gender: Option<Gender>,
    condition: String,
    last_visit: String,
    errors: FieldErrors,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field` as text; an unselected gender is empty.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Gender => self.gender.map(Gender::as_str).unwrap_or(""),
            FormField::Condition => &self.condition,
            FormField::LastVisit => &self.last_visit,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Errors from the last submit attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Sets a field from raw text.
    ///
    /// For [`FormField::Gender`] the text is parsed: empty text clears the
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidGender`] if gender text names no option; the
    /// current selection is left unchanged.
    pub fn set_text(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), TypeError> {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Age => self.age = value,
            FormField::Gender => {
                self.gender = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            FormField::Condition => self.condition = value,
            FormField::LastVisit => self.last_visit = value,
        }
        Ok(())
    }

    pub fn select_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    /// Presence check over all five fields.
    ///
    /// The resulting errors replace those held by the form.
    pub fn validate(&mut self) -> Result<PatientFields, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in FormField::ALL {
            if self.value(field).is_empty() {
                errors.require(field);
            }
        }
        self.errors = errors.clone();

        match self.gender {
            Some(gender) if errors.is_empty() => Ok(PatientFields {
                name: self.name.clone(),
                age: self.age.clone(),
                gender,
                condition: self.condition.clone(),
                last_visit: self.last_visit.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// Validates, stores and notifies.
    ///
    /// On success the observer sees the stored record before the form is
    /// cleared.
    pub fn submit<O>(&mut self, store: &mut PatientStore, observer: &mut O) -> SubmitOutcome
    where
        O: RegistrationObserver + ?Sized,
    {
        let fields = match self.validate() {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(
                    missing = ?errors.fields().map(FormField::key).collect::<Vec<_>>(),
                    "registration rejected"
                );
                return SubmitOutcome::Rejected(errors);
            }
        };

        let record = store.add(fields);
        observer.on_registered(&record);
        self.reset();

        SubmitOutcome::Registered(record)
    }

    /// Clears every value and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raw field values as entered, used for batch registration.
///
/// Missing keys deserialise as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSubmission {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub condition: String,
    pub last_visit: String,
}

impl FormSubmission {
    /// Copies every value into `form`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidGender`] if the gender text names no option.
    pub fn apply_to(&self, form: &mut RegistrationForm) -> Result<(), TypeError> {
        form.set_text(FormField::Name, self.name.as_str())?;
        form.set_text(FormField::Age, self.age.as_str())?;
        form.set_text(FormField::Gender, self.gender.as_str())?;
        form.set_text(FormField::Condition, self.condition.as_str())?;
        form.set_text(FormField::LastVisit, self.last_visit.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        FormSubmission {
            name: "Alice".into(),
            age: "30".into(),
            gender: "Female".into(),
            condition: "Flu".into(),
            last_visit: "2024-01-01".into(),
        }
        .apply_to(&mut form)
        .expect("submission should apply");
        form
    }

    #[test]
    fn test_submit_registers_and_resets_form() {
        let mut store = PatientStore::new();
        let mut form = filled_form();
        let mut seen = Vec::new();

        let outcome = form.submit(&mut store, &mut |r: &PatientRecord| {
            seen.push(r.patient_id().clone())
        });

        let SubmitOutcome::Registered(record) = outcome else {
            panic!("submission should be registered");
        };
        assert_eq!(record.patient_id().as_str(), "P001");
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.gender(), Gender::Female);
        assert_eq!(seen, vec![record.patient_id().clone()]);
        assert_eq!(store.len(), 1);
        assert_eq!(form, RegistrationForm::new(), "form should be cleared");
    }

    #[test]
    fn test_missing_name_only_reports_name() {
        let mut store = PatientStore::new();
        let mut form = filled_form();
        form.set_text(FormField::Name, "").expect("name is text");

        let outcome = form.submit(&mut store, &mut |_: &PatientRecord| {
            panic!("observer must not be notified")
        });

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("submission should be rejected");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(store.len(), 0);
        assert_eq!(form.value(FormField::Age), "30", "valid values are kept");
        assert_eq!(form.error(FormField::Name), Some("Name is required"));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut store = PatientStore::new();
        let mut form = RegistrationForm::new();

        let SubmitOutcome::Rejected(errors) = form.submit(&mut store, &mut |_: &PatientRecord| {})
        else {
            panic!("empty form should be rejected");
        };

        let messages: Vec<_> = errors.iter().map(|(_, m)| m.to_owned()).collect();
        assert_eq!(
            messages,
            [
                "Name is required",
                "Age is required",
                "Gender is required",
                "Condition is required",
                "Last Visit is required",
            ]
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_only_missing_fields_are_reported() {
        let mut form = filled_form();
        form.select_gender(None);
        form.set_text(FormField::LastVisit, "").expect("text field");

        let errors = form.validate().expect_err("two fields are missing");
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, [FormField::Gender, FormField::LastVisit]);
    }

    #[test]
    fn test_successful_submit_clears_previous_errors() {
        let mut store = PatientStore::new();
        let mut form = filled_form();
        form.set_text(FormField::Condition, "").expect("text field");
        form.submit(&mut store, &mut |_: &PatientRecord| {});
        assert!(form.error(FormField::Condition).is_some());

        form.set_text(FormField::Condition, "Flu").expect("text field");
        let outcome = form.submit(&mut store, &mut |_: &PatientRecord| {});

        assert!(matches!(outcome, SubmitOutcome::Registered(_)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_values_are_not_format_checked() {
        let mut form = filled_form();
        form.set_text(FormField::Age, "thirty").expect("text field");
        form.set_text(FormField::LastVisit, "yesterday").expect("text field");
        form.set_text(FormField::Name, " ").expect("text field");

        let fields = form.validate().expect("presence is all that is checked");
        assert_eq!(fields.age, "thirty");
        assert_eq!(fields.last_visit, "yesterday");
    }

    #[test]
    fn test_invalid_gender_text_keeps_selection() {
        let mut form = filled_form();

        let err = form
            .set_text(FormField::Gender, "Unknown")
            .expect_err("unknown gender should be rejected");

        assert_eq!(err, TypeError::InvalidGender("Unknown".into()));
        assert_eq!(form.gender(), Some(Gender::Female));
    }

    #[test]
    fn test_submission_deserialises_with_defaults() {
        let submission: FormSubmission =
            serde_json::from_str(r#"{"name": "Bob", "lastVisit": "2024-03-03"}"#)
                .expect("partial submission should parse");

        assert_eq!(submission.name, "Bob");
        assert_eq!(submission.last_visit, "2024-03-03");
        assert!(submission.gender.is_empty());
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(FormField::LastVisit.key(), "lastVisit");
        assert_eq!(FormField::LastVisit.label(), "Last Visit");
        assert_eq!(FormField::Gender.placeholder(), "Select Gender");
        assert_eq!(FormField::Age.placeholder(), "Age");
    }
}
