// Registry error types
use thiserror::Error;

/// Terminal errors reported by registry operations. Every precondition is
/// checked before any mutation, so a returned error implies the store is
/// exactly as it was before the operation started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("operation restricted to the registry operator")]
    OwnerOnly,

    #[error("vault {vault_id} not found")]
    VaultNotFound { vault_id: u64 },

    #[error("vault {vault_id} already exists")]
    VaultExists { vault_id: u64 },

    #[error("caller {caller} is not an authorized assessor")]
    Unauthorized { caller: String },

    #[error("component score {value} is outside the valid range 0..=10000")]
    InvalidScore { value: u64 },

    #[error("invalid parameters: {message}")]
    InvalidParameters { message: String },

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },
}

impl From<config::ConfigError> for RegistryError {
    fn from(err: config::ConfigError) -> Self {
        RegistryError::ConfigurationError {
            message: err.to_string(),
        }
    }
}
