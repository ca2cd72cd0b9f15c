//! Constants used throughout the registry core crate.
//!
//! Display strings live here so the console and any other front end render
//! the same labels.

/// Heading shown above the registration form.
pub const APP_HEADING: &str = "Patient Management";

/// Heading of the patient detail panel.
pub const PATIENT_INFORMATION_HEADING: &str = "Patient Information";

/// Text shown while the displayed patient has not been found.
pub const LOADING_TEXT: &str = "Loading...";

/// Label of the submit action.
pub const SUBMIT_LABEL: &str = "Register Patient";

/// Environment variable naming an optional JSON seed file.
pub const SEED_FILE_ENV: &str = "REGISTRY_SEED_FILE";
