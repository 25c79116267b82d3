use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Page numbers start at 1")]
    InvalidPage,

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown {kind} field: {name}")]
    UnknownField { kind: &'static str, name: String },
}
