use std::path::PathBuf;

use database::StoreError;
use query::QueryError;
use thiserror::Error;
use types::EntityId;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Game not found: {0}")]
    GameNotFound(EntityId),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Blog post not found: {0}")]
    PostNotFound(String),

    #[error("Ad zone not found: {0}")]
    AdNotFound(EntityId),

    #[error("The {0} feature is disabled")]
    FeatureDisabled(&'static str),

    #[error("{0}")]
    Maintenance(String),

    #[error("Could not read config {path}: {source}")]
    Config {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),

    #[error("Could not render page: {0}")]
    Render(#[from] serde_json::Error),
}
