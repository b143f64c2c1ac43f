//! Type handlers and the registry that maps slot types to them.
//!
//! A handler knows how to find a value of its type in a statement. Some
//! handlers can also enumerate *every* plausible value they see in a
//! statement, which the engine uses for fuzzy disambiguation when exact
//! extraction fails; those expose a [`CandidateSource`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use dialog_nlp::StatementDecoder;

use crate::error::{ConfigurationError, ResolveError};
use crate::handlers;
use crate::slot::ParameterSlot;

#[async_trait]
pub trait TypeHandler: Send + Sync {
    /// Find a value in `statement`.
    ///
    /// `candidates` is the universe of known values for the slot: the
    /// supplier's authoritative list when there is one, otherwise the slot's
    /// declared values. Handlers that recognise values by shape ignore it.
    async fn extract_value(
        &self,
        statement: &str,
        decoder: &StatementDecoder,
        candidates: &[String],
    ) -> Result<Option<String>, ResolveError>;

    /// The handler's candidate enumeration, if it has one.
    fn candidate_source(&self) -> Option<&dyn CandidateSource> {
        None
    }

    /// Whether enumerated candidates may be fuzzy matched against declared
    /// values even without a supplier.
    fn fuzzy_without_supplier(&self) -> bool {
        false
    }

    /// Whether a multi-word reply is accepted verbatim.
    fn accepts_free_text(&self) -> bool {
        false
    }
}

#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Every plausible value of the handler's type in `statement`.
    async fn candidates(
        &self,
        statement: &str,
        decoder: &StatementDecoder,
    ) -> Result<Vec<String>, ResolveError>;
}

/// Slot type name to handler.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn TypeHandler>>,
}

impl HandlerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in handler.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        handlers::register_builtins(&mut registry);
        registry
    }

    /// Register `handler` for `kind`, replacing any previous one.
    pub fn register(&mut self, kind: impl Into<String>, handler: impl TypeHandler + 'static) {
        self.register_shared(kind, Arc::new(handler));
    }

    pub fn register_shared(&mut self, kind: impl Into<String>, handler: Arc<dyn TypeHandler>) {
        self.handlers.insert(kind.into(), handler);
    }

    pub fn lookup(&self, kind: &str) -> Option<Arc<dyn TypeHandler>> {
        self.handlers.get(kind).cloned()
    }

    /// The handler for `slot`'s type.
    pub fn for_slot(&self, slot: &ParameterSlot) -> Result<Arc<dyn TypeHandler>, ConfigurationError> {
        self.lookup(&slot.kind)
            .ok_or_else(|| ConfigurationError::UnknownType {
                slot: slot.name.clone(),
                kind: slot.kind.clone(),
            })
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.kinds().collect();
        kinds.sort_unstable();
        f.debug_struct("HandlerRegistry").field("kinds", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_registers_every_builtin() {
        let registry = HandlerRegistry::with_builtins();
        let mut kinds: Vec<&str> = registry.kinds().collect();
        kinds.sort_unstable();
        assert_eq!(
            kinds,
            vec![
                "city", "entity", "keyword", "number", "reponame", "repourl", "repouser",
                "wildcard",
            ]
        );
    }

    #[test]
    fn it_reports_unknown_types() {
        let registry = HandlerRegistry::with_builtins();
        let slot = ParameterSlot::new("size", "shoe");
        let error = registry.for_slot(&slot).err();
        assert_eq!(
            error,
            Some(ConfigurationError::UnknownType {
                slot: "size".to_string(),
                kind: "shoe".to_string(),
            })
        );
    }
}
