//! Value suppliers: sources of a slot's current, authoritative values.
//!
//! A database slot may declare a fixed list, but the databases that
//! actually exist right now come from a live service. A supplier fetches
//! that list per request and may depend on slots resolved earlier.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ConfigurationError, ResolveError};
use crate::resolution::Resolution;
use crate::slot::ParameterSlot;

/// What a supplier knows about the request it is serving.
#[derive(Debug, Clone, Copy)]
pub struct SupplierContext<'a> {
    /// The classified request class.
    pub class: &'a str,
    /// The user's original statement.
    pub statement: &'a str,
}

#[async_trait]
pub trait ValueSupplier: Send + Sync {
    /// Current values for `slot`, or `None` when the supplier has nothing
    /// to say yet (an empty list means "there are no valid values").
    async fn values(
        &self,
        context: SupplierContext<'_>,
        slot: &str,
        resolved: &Resolution,
    ) -> Result<Option<Vec<String>>, ResolveError>;
}

/// A supplier that always returns the same list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSupplier {
    values: Vec<String>,
}

impl StaticSupplier {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl ValueSupplier for StaticSupplier {
    async fn values(
        &self,
        _context: SupplierContext<'_>,
        _slot: &str,
        _resolved: &Resolution,
    ) -> Result<Option<Vec<String>>, ResolveError> {
        Ok(Some(self.values.clone()))
    }
}

/// Supplier name to supplier.
#[derive(Clone, Default)]
pub struct SupplierRegistry {
    suppliers: HashMap<String, Arc<dyn ValueSupplier>>,
}

impl SupplierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, supplier: impl ValueSupplier + 'static) {
        self.suppliers.insert(name.into(), Arc::new(supplier));
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ValueSupplier>> {
        self.suppliers.get(name).cloned()
    }

    /// Fetch the authoritative values for `slot`.
    ///
    /// `Ok(None)` when the slot declares no supplier or the supplier
    /// declines. A declared but unregistered supplier is a configuration
    /// error.
    pub async fn authoritative_values(
        &self,
        context: SupplierContext<'_>,
        slot: &ParameterSlot,
        resolved: &Resolution,
    ) -> Result<Option<Vec<String>>, ResolveError> {
        let Some(name) = &slot.supplier else {
            return Ok(None);
        };

        let supplier = self
            .lookup(name)
            .ok_or_else(|| ConfigurationError::UnknownSupplier {
                slot: slot.name.clone(),
                supplier: name.clone(),
            })?;

        supplier.values(context, &slot.name, resolved).await
    }
}

impl fmt::Debug for SupplierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.suppliers.keys().collect();
        names.sort_unstable();
        f.debug_struct("SupplierRegistry").field("names", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn context() -> SupplierContext<'static> {
        SupplierContext {
            class: "database.details",
            statement: "Get database details",
        }
    }

    #[tokio::test]
    async fn it_skips_slots_without_a_supplier() -> TestResult {
        let registry = SupplierRegistry::new();
        let slot = ParameterSlot::new("databasename", "entity");
        let values = registry
            .authoritative_values(context(), &slot, &Resolution::new())
            .await?;
        assert_eq!(values, None);
        Ok(())
    }

    #[tokio::test]
    async fn it_calls_the_named_supplier() -> TestResult {
        let mut registry = SupplierRegistry::new();
        registry.register("databases", StaticSupplier::new(["AppTestDB", "users"]));

        let slot = ParameterSlot::new("databasename", "entity").with_supplier("databases");
        let values = registry
            .authoritative_values(context(), &slot, &Resolution::new())
            .await?;
        assert_eq!(values, Some(vec!["AppTestDB".to_string(), "users".to_string()]));
        Ok(())
    }

    #[tokio::test]
    async fn it_rejects_unregistered_suppliers() {
        let registry = SupplierRegistry::new();
        let slot = ParameterSlot::new("databasename", "entity").with_supplier("databases");
        let error = registry
            .authoritative_values(context(), &slot, &Resolution::new())
            .await
            .unwrap_err();
        assert!(error.is_configuration());
    }
}
