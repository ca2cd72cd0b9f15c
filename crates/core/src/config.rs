//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! application. Nothing in this crate reads environment variables while the
//! registration flow is running.

use crate::constants::SEED_FILE_ENV;
use crate::registration::FormSubmission;
use crate::{RegistryError, RegistryResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    seed_file: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] if `seed_file` is given but is
    /// not an existing regular file.
    pub fn new(seed_file: Option<PathBuf>) -> RegistryResult<Self> {
        if let Some(path) = &seed_file {
            if !path.is_file() {
                return Err(RegistryError::InvalidInput(format!(
                    "{SEED_FILE_ENV} does not point to a file: {}",
                    path.display()
                )));
            }
        }

        Ok(Self { seed_file })
    }

    /// Resolve configuration from an optional raw environment value.
    ///
    /// Empty or whitespace-only values are treated as unset.
    pub fn from_env_value(seed_file: Option<String>) -> RegistryResult<Self> {
        let seed_file = seed_file
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self::new(seed_file)
    }

    pub fn seed_file(&self) -> Option<&Path> {
        self.seed_file.as_deref()
    }

    /// Load the submissions from the configured seed file, if any.
    pub fn load_seed(&self) -> RegistryResult<Vec<FormSubmission>> {
        match &self.seed_file {
            Some(path) => load_submissions(path),
            None => Ok(Vec::new()),
        }
    }
}

/// Read a JSON array of form submissions from `path`.
///
/// # Errors
///
/// Returns [`RegistryError::SeedFileRead`] if the file cannot be read and
/// [`RegistryError::SeedFileParse`] if it is not a JSON array of submissions.
pub fn load_submissions(path: &Path) -> RegistryResult<Vec<FormSubmission>> {
    let contents = std::fs::read_to_string(path).map_err(RegistryError::SeedFileRead)?;
    let submissions: Vec<FormSubmission> =
        serde_json::from_str(&contents).map_err(RegistryError::SeedFileParse)?;

    tracing::debug!(
        "loaded {} submissions from {}",
        submissions.len(),
        path.display()
    );
    Ok(submissions)
}
