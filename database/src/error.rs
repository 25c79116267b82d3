use std::path::PathBuf;

use thiserror::Error;
use types::EntityId;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: EntityId },

    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),

    #[error("Duplicate {kind} id in seed: {id}")]
    DuplicateId { kind: &'static str, id: EntityId },

    #[error("No {0} ids left to assign")]
    IdsExhausted(&'static str),

    #[error("Seed file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported seed file format: {0}")]
    UnsupportedSeedFormat(PathBuf),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
