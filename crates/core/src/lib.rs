//! # Registry Core
//!
//! Core logic for the patient registration system:
//! - [`PatientStore`]: in-memory owner of patient records, assigns `P001`-style identifiers
//! - [`RegistrationForm`]: presence validation and submission into the store
//! - [`PatientInformation`]: lookup-by-identifier display state
//! - [`PatientManagement`]: the three wired together
//!
//! **No terminal concerns**: rendering and input handling belong in `registry-console`.
//! All data lives for the lifetime of the process only.

pub mod app;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod patient;
pub mod registration;
pub mod store;

pub use app::PatientManagement;
pub use config::CoreConfig;
pub use display::{DisplayState, PatientInformation};
pub use error::{RegistryError, RegistryResult};
pub use patient::{PatientFields, PatientRecord};
pub use registration::{
    FieldErrors, FormField, FormSubmission, RegistrationForm, RegistrationObserver, SubmitOutcome,
};
pub use store::PatientStore;

pub use registry_types::{Gender, PatientId, TypeError};
