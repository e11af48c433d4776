//! Errors raised while navigating the record graph.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("unsupported identifier format: {0:?}")]
    UnsupportedIdentifierFormat(String),

    /// An intermediate hop matched more than one record.
    #[error("selector ({selector}) diverges at field ({field})")]
    SelectorDivergence { selector: String, field: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
