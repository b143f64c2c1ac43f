//! Error types for slot resolution.
//!
//! Only fatal conditions are errors. A slot that simply cannot be filled is
//! left out of the resolution map instead.

use dialog_nlp::NlpError;
use thiserror::Error;

/// The schema or registries are inconsistent with each other.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A slot names a type with no registered handler.
    #[error("No handler registered for slot type '{kind}' (slot '{slot}')")]
    UnknownType { slot: String, kind: String },

    /// A slot names a value supplier that was never registered.
    #[error("Value supplier '{supplier}' for slot '{slot}' is not registered")]
    UnknownSupplier { slot: String, supplier: String },

    /// A single-slot lookup named a slot the class does not declare.
    #[error("Parameter '{slot}' is not defined for class '{class}'")]
    UnknownParameter { class: String, slot: String },

    /// The schema catalog knows nothing about the class.
    #[error("No parameter schema found for class '{0}'")]
    UnknownClass(String),

    /// A setting could not be parsed.
    #[error("Invalid value '{value}' for setting {key}")]
    InvalidSetting { key: String, value: String },
}

/// The conversation gateway could not deliver a prompt or collect a reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// The user went away.
    #[error("Conversation closed before a reply was received")]
    Closed,

    /// No reply arrived in time.
    #[error("Timed out waiting for a reply")]
    TimedOut,

    /// The transport failed.
    #[error("Conversation transport failed: {0}")]
    Transport(String),
}

/// Fatal outcomes of a resolution request.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A linguistic collaborator failed.
    #[error("External service failed: {0}")]
    ExternalService(#[from] NlpError),

    #[error(transparent)]
    Conversation(#[from] ConversationError),

    /// A value supplier failed while fetching authoritative values.
    #[error("Value supplier '{supplier}' failed: {message}")]
    Supplier { supplier: String, message: String },

    /// A type handler failed for a reason of its own.
    #[error("Handler for type '{kind}' failed: {message}")]
    Handler { kind: String, message: String },
}

impl ResolveError {
    pub fn supplier(supplier: impl Into<String>, message: impl ToString) -> Self {
        ResolveError::Supplier {
            supplier: supplier.into(),
            message: message.to_string(),
        }
    }

    pub fn handler(kind: impl Into<String>, message: impl ToString) -> Self {
        ResolveError::Handler {
            kind: kind.into(),
            message: message.to_string(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ResolveError::Configuration(_))
    }

    /// True for failures of anything outside this crate: linguistic
    /// services, suppliers and the conversation transport.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            ResolveError::ExternalService(_)
                | ResolveError::Supplier { .. }
                | ResolveError::Conversation(_)
        )
    }
}
