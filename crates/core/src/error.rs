#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read seed file: {0}")]
    SeedFileRead(std::io::Error),
    #[error("failed to parse seed file: {0}")]
    SeedFileParse(serde_json::Error),
    #[error(transparent)]
    Type(#[from] registry_types::TypeError),
    #[error("console I/O failed: {0}")]
    Console(std::io::Error),
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
