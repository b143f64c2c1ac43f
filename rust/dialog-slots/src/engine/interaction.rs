//! Per-slot completion: best match, fuzzy disambiguation and the follow-up
//! conversation.
//!
//! The conversation is a small state machine:
//!
//! ```text
//!  InitialAsk ──exit──────────────────────────────┐
//!      │ ──single word / free-text type──▶ Done   │
//!      ▼ phrase                                   ▼
//!  Disambiguate ──match──▶ Done          Done(None)
//!      │ no match                                 ▲
//!      ▼                                          │
//!   FinalAsk ──exit───────────────────────────────┘
//!      └──anything else──▶ Done
//! ```

use dialog_nlp::StatementDecoder;
use tracing::debug;

use super::{ResolutionEngine, SlotLabel};
use crate::error::ResolveError;
use crate::gateway::{Choice, Expect, Reply};
use crate::handler::TypeHandler;
use crate::resolution::Resolution;
use crate::slot::ParameterSlot;
use crate::supplier::SupplierContext;

/// States of the follow-up conversation for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Interaction {
    InitialAsk,
    /// Look for the value inside a multi-word reply.
    Disambiguate(String),
    FinalAsk,
    Done(Option<String>),
}

/// The slot being completed and the handler for its type.
struct SlotRequest<'a> {
    class: &'a str,
    slot: &'a ParameterSlot,
    handler: &'a dyn TypeHandler,
}

impl SlotRequest<'_> {
    fn label(&self) -> SlotLabel<'_> {
        SlotLabel(self.class, &self.slot.name)
    }
}

impl ResolutionEngine {
    /// Complete one slot against `statement`.
    pub(super) async fn resolve_slot(
        &self,
        context: SupplierContext<'_>,
        statement: &str,
        slot: &ParameterSlot,
        decoder: &StatementDecoder,
        resolved: &Resolution,
    ) -> Result<Option<String>, ResolveError> {
        let authoritative = self
            .suppliers
            .authoritative_values(context, slot, resolved)
            .await?;
        let handler = self.handlers.for_slot(slot)?;
        let request = SlotRequest {
            class: context.class,
            slot,
            handler: handler.as_ref(),
        };

        if let Some(count) = authoritative.as_ref().map(Vec::len) {
            debug!(count, "{}: supplier returned current values", request.label());
        }

        let found = self
            .best_match(&request, statement, decoder, authoritative.as_deref(), slot.required)
            .await?;
        if found.is_some() {
            return Ok(found);
        }

        if !slot.required {
            debug!("{}: optional; not asking", request.label());
            return Ok(None);
        }

        self.converse(&request, decoder, authoritative.as_deref())
            .await
    }

    /// Extract, then fall back to the handler's candidates.
    ///
    /// Candidates are fuzzy matched when the universe is authoritative or
    /// the handler's vocabulary is closed, and only when `may_prompt`.
    /// Otherwise a lone candidate is taken as is.
    async fn best_match(
        &self,
        request: &SlotRequest<'_>,
        statement: &str,
        decoder: &StatementDecoder,
        authoritative: Option<&[String]>,
        may_prompt: bool,
    ) -> Result<Option<String>, ResolveError> {
        let universe = authoritative
            .or(request.slot.values.as_deref())
            .unwrap_or_default();

        let extracted = request
            .handler
            .extract_value(statement, decoder, universe)
            .await?
            .filter(|value| !value.is_empty());
        if extracted.is_some() {
            return Ok(extracted);
        }

        let Some(source) = request.handler.candidate_source() else {
            return Ok(None);
        };

        let mut candidates = source.candidates(statement, decoder).await?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let fuzzy = authoritative.is_some() || request.handler.fuzzy_without_supplier();
        if fuzzy {
            if !may_prompt {
                return Ok(None);
            }
            return self.disambiguate(request, &candidates, universe).await;
        }

        if candidates.len() == 1 {
            debug!("{}: taking the only candidate", request.label());
            return Ok(candidates.pop());
        }
        Ok(None)
    }

    /// Offer the known values that `candidates` resemble as numbered choices.
    async fn disambiguate(
        &self,
        request: &SlotRequest<'_>,
        candidates: &[String],
        universe: &[String],
    ) -> Result<Option<String>, ResolveError> {
        let offered = self.matcher.best_matches(candidates, universe);
        if offered.is_empty() {
            debug!(?candidates, "{}: no fuzzy matches", request.label());
            return Ok(None);
        }

        let prompt = self.prompts.choices(request.slot, &offered);
        let reply = self
            .conversation
            .ask(&prompt, Expect::Choice { options: offered.len() + 1 })
            .await?;

        let choice = Choice::interpret(&reply, &offered, &self.prompts.none_label);
        debug!(?choice, "{}: disambiguation reply", request.label());
        Ok(choice.into_selected())
    }

    async fn converse(
        &self,
        request: &SlotRequest<'_>,
        decoder: &StatementDecoder,
        authoritative: Option<&[String]>,
    ) -> Result<Option<String>, ResolveError> {
        let slot = request.slot;
        let mut state = Interaction::InitialAsk;

        loop {
            debug!(?state, "{}: conversation step", request.label());

            state = match state {
                Interaction::InitialAsk => match self.ask(&self.prompts.value(slot)).await? {
                    Reply::Cancelled => Interaction::Done(None),
                    Reply::Word(value) => Interaction::Done(Some(value)),
                    Reply::Phrase(text) if request.handler.accepts_free_text() => {
                        Interaction::Done(Some(text))
                    }
                    Reply::Phrase(text) => Interaction::Disambiguate(text),
                },

                Interaction::Disambiguate(phrase) => {
                    let reparsed = decoder.clone_with(phrase.as_str());
                    // Declared values count as authoritative for the reply.
                    let universe = authoritative.or(slot.values.as_deref());
                    match self
                        .best_match(request, &phrase, &reparsed, universe, true)
                        .await?
                    {
                        Some(value) => Interaction::Done(Some(value)),
                        None => Interaction::FinalAsk,
                    }
                }

                Interaction::FinalAsk => match self.ask(&self.prompts.again(slot)).await? {
                    Reply::Cancelled => Interaction::Done(None),
                    Reply::Word(value) | Reply::Phrase(value) => Interaction::Done(Some(value)),
                },

                Interaction::Done(value) => return Ok(value),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::helpers::ScriptedConversation;
    use dialog_nlp::LanguageTools;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn engine(conversation: &ScriptedConversation) -> ResolutionEngine {
        ResolutionEngine::builder(conversation.clone(), InMemoryCatalog::new()).build()
    }

    fn context() -> SupplierContext<'static> {
        SupplierContext {
            class: "monitor",
            statement: "show me memry usage",
        }
    }

    fn resource() -> ParameterSlot {
        ParameterSlot::new("resource", "keyword").with_values(["cpu", "memory", "disk"])
    }

    fn decoder(statement: &str) -> StatementDecoder {
        StatementDecoder::new(statement, vec![], LanguageTools::default())
    }

    #[tokio::test]
    async fn it_skips_fuzzy_prompts_for_optional_slots() -> TestResult {
        let conversation = ScriptedConversation::new(Vec::<String>::new());
        let engine = engine(&conversation);
        let slot = resource().optional();

        let value = engine
            .resolve_slot(context(), context().statement, &slot, &decoder(context().statement), &Resolution::new())
            .await?;
        assert_eq!(value, None);
        assert!(conversation.prompts().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn it_takes_a_lone_candidate_without_fuzzy_matching() -> TestResult {
        let conversation = ScriptedConversation::new(Vec::<String>::new());
        let engine = engine(&conversation);
        let slot = ParameterSlot::new("databasename", "entity");

        let statement = "show AppTestDB";
        let value = engine
            .resolve_slot(context(), statement, &slot, &decoder(statement), &Resolution::new())
            .await?;
        assert_eq!(value.as_deref(), Some("AppTestDB"));
        assert!(conversation.prompts().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn it_walks_to_the_final_ask_when_a_phrase_yields_nothing() -> TestResult {
        let conversation = ScriptedConversation::new(["I do not know", "AppTestDB"]);
        let engine = engine(&conversation);
        let slot = ParameterSlot::new("databasename", "entity").with_title("database");

        let statement = "get details";
        let value = engine
            .resolve_slot(context(), statement, &slot, &decoder(statement), &Resolution::new())
            .await?;
        assert_eq!(value.as_deref(), Some("AppTestDB"));
        assert_eq!(
            conversation.prompts(),
            vec![
                "What is the database?".to_string(),
                "Please enter just the database.".to_string(),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn it_accepts_free_text_verbatim_for_wildcards() -> TestResult {
        let conversation = ScriptedConversation::new(["disk is almost full"]);
        let engine = engine(&conversation);
        let slot = ParameterSlot::new("comment", "wildcard");

        let statement = "open an issue";
        let value = engine
            .resolve_slot(context(), statement, &slot, &decoder(statement), &Resolution::new())
            .await?;
        assert_eq!(value.as_deref(), Some("disk is almost full"));
        Ok(())
    }
}
