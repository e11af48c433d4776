//! Errors raised while composing a biography.

use record_graph::{GraphError, RecordId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiographyError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("record {0} is not an individual")]
    NotAnIndividual(RecordId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid place pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BiographyError>;
