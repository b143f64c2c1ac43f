//! The two-phase resolution engine.
//!
//! **Phase 1 (extraction)** runs every unresolved slot's handler against the
//! statement concurrently, strips whatever was found and repeats until a
//! pass finds nothing new. When several slots find the same value in one
//! pass, the first in schema order keeps it and the others try again on the
//! stripped statement. No user interaction happens here.
//!
//! **Phase 2 (completion)** walks the still-unresolved slots in schema order.
//! Each one gets its supplier's authoritative values, a best-match attempt
//! (with fuzzy disambiguation where the candidate universe allows it) and,
//! for required slots, a short conversation with the user. Every value
//! found is stripped from the working statement before the next slot.
//!
//! ```text
//! statement ─▶ Phase 1 ──(fixed point)──▶ partial map ─▶ Phase 2 ─▶ resolution
//!                 ▲            │                          │
//!                 └─ strip ────┘                 best match / converse
//! ```

mod interaction;

use std::fmt;
use std::sync::Arc;

use dialog_nlp::{FuzzyMatcher, LanguageTools, StatementDecoder};
use futures_util::future::try_join_all;
use tracing::{debug, info};

use crate::catalog::SchemaCatalog;
use crate::error::{ConfigurationError, ResolveError};
use crate::gateway::{Conversation, Expect, Reply};
use crate::handler::HandlerRegistry;
use crate::prompt::Prompts;
use crate::resolution::Resolution;
use crate::settings::ResolverSettings;
use crate::slot::ParameterSlot;
use crate::statement::{strip_value, strip_values};
use crate::supplier::{SupplierContext, SupplierRegistry};

/// Renders as `[class:slot]` in log lines.
struct SlotLabel<'a>(&'a str, &'a str);

impl fmt::Display for SlotLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.0, self.1)
    }
}

pub struct ResolutionEngine {
    handlers: HandlerRegistry,
    suppliers: SupplierRegistry,
    conversation: Arc<dyn Conversation>,
    catalog: Arc<dyn SchemaCatalog>,
    tools: LanguageTools,
    matcher: FuzzyMatcher,
    prompts: Prompts,
    parsing_disabled: bool,
}

impl ResolutionEngine {
    /// Start building an engine around its two mandatory collaborators.
    pub fn builder(
        conversation: impl Conversation + 'static,
        catalog: impl SchemaCatalog + 'static,
    ) -> ResolutionEngineBuilder {
        ResolutionEngineBuilder::new(Arc::new(conversation), Arc::new(catalog))
    }

    /// Resolve every slot of `class` from `statement`, asking the user for
    /// whatever the statement does not provide.
    ///
    /// Slots the user declined or that could not be matched are absent from
    /// the result. Only configuration and collaborator failures are errors.
    pub async fn resolve(
        &self,
        statement: &str,
        class: &str,
        slots: &[ParameterSlot],
    ) -> Result<Resolution, ResolveError> {
        debug!(class, statement, slots = slots.len(), "Resolving parameters");

        if self.parsing_disabled {
            debug!(class, "Statement parsing disabled; asking for each required value");
            return self.ask_each(class, slots).await;
        }

        if slots.is_empty() {
            debug!(class, "No parameters defined; nothing to do");
            return Ok(Resolution::new());
        }

        let seeds = self.catalog.seed_texts(class).await?;
        let mut decoder = StatementDecoder::new(statement, seeds, self.tools.clone());

        let (mut resolution, passes) = self.extract(class, statement, slots, &mut decoder).await?;
        debug!(class, passes, resolved = resolution.len(), "Extraction complete");

        if resolution.len() < slots.len() {
            let context = SupplierContext { class, statement };
            self.complete(context, slots, &mut decoder, &mut resolution)
                .await?;
        }

        info!(
            class,
            resolved = resolution.len(),
            total = slots.len(),
            "Parameter resolution complete"
        );
        Ok(resolution)
    }

    /// Resolve the slots the catalog declares for `class`.
    pub async fn resolve_class(
        &self,
        statement: &str,
        class: &str,
    ) -> Result<Resolution, ResolveError> {
        let slots = self
            .catalog
            .parameters(class)
            .await?
            .ok_or_else(|| ConfigurationError::UnknownClass(class.to_string()))?;
        self.resolve(statement, class, &slots).await
    }

    /// Resolve one named slot of `class` and add it to `resolved`.
    ///
    /// Values already in `resolved` are available to the slot's supplier
    /// but are not stripped from `statement`.
    pub async fn resolve_parameter(
        &self,
        statement: &str,
        class: &str,
        slot_name: &str,
        mut resolved: Resolution,
    ) -> Result<Resolution, ResolveError> {
        let slots = self
            .catalog
            .parameters(class)
            .await?
            .ok_or_else(|| ConfigurationError::UnknownClass(class.to_string()))?;

        let slot = slots
            .iter()
            .find(|slot| slot.name == slot_name)
            .ok_or_else(|| ConfigurationError::UnknownParameter {
                class: class.to_string(),
                slot: slot_name.to_string(),
            })?;

        let value = if self.parsing_disabled {
            self.ask_unparsed(class, slot).await?
        } else {
            let seeds = self.catalog.seed_texts(class).await?;
            let decoder = StatementDecoder::new(statement, seeds, self.tools.clone());
            let context = SupplierContext { class, statement };
            self.resolve_slot(context, statement, slot, &decoder, &resolved)
                .await?
        };

        if let Some(value) = value {
            resolved.insert(slot.name.clone(), value);
        }
        Ok(resolved)
    }

    /// Phase 1. Returns the partial resolution and the number of passes.
    async fn extract(
        &self,
        class: &str,
        statement: &str,
        slots: &[ParameterSlot],
        decoder: &mut StatementDecoder,
    ) -> Result<(Resolution, usize), ResolveError> {
        let mut resolution = Resolution::new();
        let mut passes = 0;

        loop {
            let missing: Vec<&ParameterSlot> = slots
                .iter()
                .filter(|slot| !resolution.contains(&slot.name))
                .collect();
            if missing.is_empty() {
                break;
            }

            let handlers = missing
                .iter()
                .map(|slot| self.handlers.for_slot(slot))
                .collect::<Result<Vec<_>, _>>()?;

            let remaining = strip_values(statement, resolution.values());
            decoder.modify_statement(remaining.as_str());
            passes += 1;

            let view: &StatementDecoder = decoder;
            let found = try_join_all(missing.iter().zip(&handlers).map(|(slot, handler)| {
                handler.extract_value(&remaining, view, slot.static_values())
            }))
            .await?;

            // Schema order decides which slot keeps a value claimed twice.
            let before = resolution.len();
            for (slot, value) in missing.iter().zip(found) {
                let Some(value) = value else {
                    continue;
                };
                let label = SlotLabel(class, &slot.name);
                if resolution.values().any(|claimed| claimed == value) {
                    debug!(
                        pass = passes,
                        value = %value,
                        "{label}: value already claimed; retrying"
                    );
                    continue;
                }
                if resolution.insert(slot.name.clone(), value) {
                    debug!(pass = passes, "{label}: extracted from statement");
                }
            }

            if resolution.len() == before {
                break;
            }
        }

        Ok((resolution, passes))
    }

    /// Phase 2.
    async fn complete(
        &self,
        context: SupplierContext<'_>,
        slots: &[ParameterSlot],
        decoder: &mut StatementDecoder,
        resolution: &mut Resolution,
    ) -> Result<(), ResolveError> {
        let mut remaining = strip_values(context.statement, resolution.values());
        decoder.modify_statement(remaining.as_str());

        for slot in slots {
            if resolution.contains(&slot.name) {
                continue;
            }

            let label = SlotLabel(context.class, &slot.name);
            match self
                .resolve_slot(context, &remaining, slot, decoder, resolution)
                .await?
            {
                Some(value) => {
                    remaining = strip_value(&remaining, &value);
                    decoder.modify_statement(remaining.as_str());
                    debug!(value = %value, "{label}: resolved");
                    resolution.insert(slot.name.clone(), value);
                }
                None if slot.required => info!("{label}: unable to obtain a value"),
                None => debug!("{label}: optional and unresolved"),
            }
        }

        Ok(())
    }

    /// Ask for every required slot without looking at the statement.
    async fn ask_each(
        &self,
        class: &str,
        slots: &[ParameterSlot],
    ) -> Result<Resolution, ResolveError> {
        let mut resolution = Resolution::new();
        for slot in slots {
            if let Some(value) = self.ask_unparsed(class, slot).await? {
                resolution.insert(slot.name.clone(), value);
            }
        }
        Ok(resolution)
    }

    async fn ask_unparsed(
        &self,
        class: &str,
        slot: &ParameterSlot,
    ) -> Result<Option<String>, ResolveError> {
        if !slot.required {
            debug!("{}: optional; not asking", SlotLabel(class, &slot.name));
            return Ok(None);
        }

        match self.ask(&self.prompts.unparsed(slot)).await? {
            Reply::Cancelled => Ok(None),
            Reply::Word(value) | Reply::Phrase(value) => Ok(Some(value)),
        }
    }

    async fn ask(&self, prompt: &str) -> Result<Reply, ResolveError> {
        let raw = self.conversation.ask(prompt, Expect::FreeText).await?;
        Ok(Reply::classify(&raw))
    }
}

impl fmt::Debug for ResolutionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionEngine")
            .field("handlers", &self.handlers)
            .field("suppliers", &self.suppliers)
            .field("tools", &self.tools)
            .field("fuzzy", self.matcher.options())
            .field("parsing_disabled", &self.parsing_disabled)
            .finish_non_exhaustive()
    }
}

pub struct ResolutionEngineBuilder {
    conversation: Arc<dyn Conversation>,
    catalog: Arc<dyn SchemaCatalog>,
    handlers: HandlerRegistry,
    suppliers: SupplierRegistry,
    tools: LanguageTools,
    settings: ResolverSettings,
    prompts: Prompts,
}

impl ResolutionEngineBuilder {
    pub fn new(conversation: Arc<dyn Conversation>, catalog: Arc<dyn SchemaCatalog>) -> Self {
        Self {
            conversation,
            catalog,
            handlers: HandlerRegistry::with_builtins(),
            suppliers: SupplierRegistry::new(),
            tools: LanguageTools::default(),
            settings: ResolverSettings::default(),
            prompts: Prompts::default(),
        }
    }

    /// Replace the built-in handlers.
    pub fn handlers(mut self, handlers: HandlerRegistry) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn suppliers(mut self, suppliers: SupplierRegistry) -> Self {
        self.suppliers = suppliers;
        self
    }

    pub fn language_tools(mut self, tools: LanguageTools) -> Self {
        self.tools = tools;
        self
    }

    pub fn settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn build(self) -> ResolutionEngine {
        ResolutionEngine {
            handlers: self.handlers,
            suppliers: self.suppliers,
            conversation: self.conversation,
            catalog: self.catalog,
            tools: self.tools,
            matcher: FuzzyMatcher::new(self.settings.fuzzy),
            prompts: self.prompts,
            parsing_disabled: self.settings.parsing_disabled,
        }
    }
}
