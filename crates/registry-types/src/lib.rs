//! Primitive types shared across the patient registry crates.

use std::fmt;
use std::str::FromStr;

/// Prefix carried by every patient identifier.
pub const PATIENT_ID_PREFIX: char = 'P';

/// Minimum number of digits in the numeric part of a patient identifier.
pub const PATIENT_ID_WIDTH: usize = 3;

/// Errors that can occur when creating validated primitive types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// The text is not of the form `P<digits>`
    #[error("invalid patient ID: {0}")]
    InvalidPatientId(String),
    /// The text is not one of the selectable genders
    #[error("invalid gender: {0} (expected Male or Female)")]
    InvalidGender(String),
}

/// A system-assigned patient identifier such as `P001`.
///
/// Identifiers are only minted by the patient store from its registration
/// sequence; [`PatientId::parse`] exists for lookups by user-supplied text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(String);

impl PatientId {
    /// Builds the identifier for the `sequence`-th registration (1-based).
    ///
    /// The numeric part is zero padded to [`PATIENT_ID_WIDTH`] digits and
    /// simply grows past that width once the sequence exceeds 999.
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!(
            "{PATIENT_ID_PREFIX}{sequence:0width$}",
            width = PATIENT_ID_WIDTH
        ))
    }

    /// Parses an identifier of the form `P` followed by one or more ASCII digits.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidPatientId`] for anything else.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix(PATIENT_ID_PREFIX)
            .ok_or_else(|| TypeError::InvalidPatientId(input.to_owned()))?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidPatientId(input.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PatientId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for PatientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Gender as offered by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Selectable options, in the order the form lists them.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Canonical display text.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = TypeError;

    /// Accepts `Male` / `Female` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TypeError::InvalidGender(s.to_owned()))
    }
}
