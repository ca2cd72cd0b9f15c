//! Patient record types.
//!
//! A [`PatientRecord`] is created only by [`PatientStore::add`](crate::PatientStore::add)
//! and is never mutated afterwards, so its fields are private and exposed
//! through accessors.

use registry_types::{Gender, PatientId};
use serde::Serialize;

/// The five validated values of a registration, without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientFields {
    pub name: String,
    /// Free text; not interpreted as a number.
    pub age: String,
    pub gender: Gender,
    pub condition: String,
    /// Expected as `YYYY-MM-DD` but not checked.
    pub last_visit: String,
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(rename = "patientID")]
    patient_id: PatientId,
    name: String,
    age: String,
    gender: Gender,
    condition: String,
    last_visit: String,
}

impl PatientRecord {
    pub(crate) fn new(patient_id: PatientId, fields: PatientFields) -> Self {
        let PatientFields {
            name,
            age,
            gender,
            condition,
            last_visit,
        } = fields;

        Self {
            patient_id,
            name,
            age,
            gender,
            condition,
            last_visit,
        }
    }

    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn last_visit(&self) -> &str {
        &self.last_visit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialises_with_original_field_names() {
        let record = PatientRecord::new(
            PatientId::from_sequence(1),
            PatientFields {
                name: "Alice".into(),
                age: "30".into(),
                gender: Gender::Female,
                condition: "Flu".into(),
                last_visit: "2024-01-01".into(),
            },
        );

        let value = serde_json::to_value(&record).expect("record should serialise");
        assert_eq!(
            value,
            serde_json::json!({
                "patientID": "P001",
                "name": "Alice",
                "age": "30",
                "gender": "Female",
                "condition": "Flu",
                "lastVisit": "2024-01-01",
            })
        );
    }
}
