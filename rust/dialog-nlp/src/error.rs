//! Error types for statement decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("no named-entity service has been configured; entities cannot be retrieved")]
    EntityServiceUnavailable,

    #[error("named-entity service failed: {0}")]
    EntityService(String),

    #[error("part-of-speech tagger failed: {0}")]
    Tagger(String),
}

impl NlpError {
    /// True when the failure is a missing collaborator rather than a
    /// failing one.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, NlpError::EntityServiceUnavailable)
    }
}
