use thiserror::Error;

/// Errors from interpreting fixture data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("invalid summary key: {0:?} (expected <granularity>_<structure>)")]
    InvalidKey(String),

    #[error("invalid granularity: {0:?}")]
    InvalidGranularity(String),

    #[error("invalid structure: {0:?}")]
    InvalidStructure(String),
}
