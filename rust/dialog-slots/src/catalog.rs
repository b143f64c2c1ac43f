//! Class schemas: each request class's seed texts and parameter slots.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::slot::ParameterSlot;

#[async_trait]
pub trait SchemaCatalog: Send + Sync {
    /// Example phrasings of `class`; empty when none are known.
    async fn seed_texts(&self, class: &str) -> Result<Vec<String>, ResolveError>;

    /// The slots of `class`, or `None` for an unknown class.
    async fn parameters(&self, class: &str) -> Result<Option<Vec<ParameterSlot>>, ResolveError>;
}

/// One class's entry in an [`InMemoryCatalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSchema {
    #[serde(default)]
    pub texts: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterSlot>,
}

/// A catalog held in memory, loadable from JSON of the form
/// `{ "<class>": { "texts": [...], "parameters": [...] } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryCatalog {
    classes: HashMap<String, ClassSchema>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_class(
        mut self,
        class: impl Into<String>,
        texts: Vec<String>,
        parameters: Vec<ParameterSlot>,
    ) -> Self {
        self.classes
            .insert(class.into(), ClassSchema { texts, parameters });
        self
    }

    pub fn schema(&self, class: &str) -> Option<&ClassSchema> {
        self.classes.get(class)
    }
}

#[async_trait]
impl SchemaCatalog for InMemoryCatalog {
    async fn seed_texts(&self, class: &str) -> Result<Vec<String>, ResolveError> {
        Ok(self
            .schema(class)
            .map(|schema| schema.texts.clone())
            .unwrap_or_default())
    }

    async fn parameters(&self, class: &str) -> Result<Option<Vec<ParameterSlot>>, ResolveError> {
        Ok(self.schema(class).map(|schema| schema.parameters.clone()))
    }
}
