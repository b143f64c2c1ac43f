//! Lazy, memoized linguistic views over a single statement.
//!
//! A [`StatementDecoder`] answers three questions about its statement: which
//! candidate nouns it contains, which standalone numbers it contains, and
//! which named entities it mentions. Each view is computed on first request
//! and cached until [`StatementDecoder::modify_statement`] swaps the text.
//!
//! ```rust,ignore
//! let decoder = StatementDecoder::new(
//!     "Get database details AppTestDB",
//!     vec!["Database details".to_string()],
//!     LanguageTools::default(),
//! );
//! assert_eq!(decoder.nouns().await?, &["AppTestDB".to_string()]);
//! ```

use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::entity::{CITY, EntityService, NamedEntity};
use crate::error::NlpError;
use crate::noun::{StopNouns, candidate_nouns, standalone_numbers};
use crate::tag::{LexiconTagger, TaggedWord, Tagger};

/// The tagger and optional entity service a decoder works with.
#[derive(Clone)]
pub struct LanguageTools {
    tagger: Arc<dyn Tagger>,
    entities: Option<Arc<dyn EntityService>>,
}

impl LanguageTools {
    pub fn new(tagger: impl Tagger + 'static) -> Self {
        Self {
            tagger: Arc::new(tagger),
            entities: None,
        }
    }

    pub fn with_entity_service(mut self, service: impl EntityService + 'static) -> Self {
        self.entities = Some(Arc::new(service));
        self
    }

    pub fn with_shared_entity_service(mut self, service: Arc<dyn EntityService>) -> Self {
        self.entities = Some(service);
        self
    }

    pub fn has_entity_service(&self) -> bool {
        self.entities.is_some()
    }

    pub fn tagger(&self) -> &dyn Tagger {
        self.tagger.as_ref()
    }
}

impl Default for LanguageTools {
    fn default() -> Self {
        Self::new(LexiconTagger::new())
    }
}

impl fmt::Debug for LanguageTools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageTools")
            .field("entity_service", &self.has_entity_service())
            .finish_non_exhaustive()
    }
}

/// Seed texts plus the stop set harvested from them, shared by clones.
#[derive(Debug)]
struct Seeds {
    texts: Vec<String>,
    stop: OnceCell<StopNouns>,
}

pub struct StatementDecoder {
    statement: String,
    tools: LanguageTools,
    seeds: Arc<Seeds>,
    tagged: OnceCell<Vec<TaggedWord>>,
    nouns: OnceCell<Vec<String>>,
    numbers: OnceCell<Vec<String>>,
    entities: OnceCell<Vec<NamedEntity>>,
}

impl StatementDecoder {
    pub fn new(statement: impl Into<String>, seed_texts: Vec<String>, tools: LanguageTools) -> Self {
        if !tools.has_entity_service() {
            warn!("No entity service configured; city entities will be unavailable");
        }

        Self::with_seeds(
            statement.into(),
            Arc::new(Seeds {
                texts: seed_texts,
                stop: OnceCell::new(),
            }),
            tools,
        )
    }

    fn with_seeds(statement: String, seeds: Arc<Seeds>, tools: LanguageTools) -> Self {
        Self {
            statement,
            tools,
            seeds,
            tagged: OnceCell::new(),
            nouns: OnceCell::new(),
            numbers: OnceCell::new(),
            entities: OnceCell::new(),
        }
    }

    /// The statement currently being decoded.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn seed_texts(&self) -> &[String] {
        &self.seeds.texts
    }

    /// Replace the statement and drop every cached view.
    pub fn modify_statement(&mut self, statement: impl Into<String>) {
        self.statement = statement.into();
        self.tagged = OnceCell::new();
        self.nouns = OnceCell::new();
        self.numbers = OnceCell::new();
        self.entities = OnceCell::new();
        debug!(statement = %self.statement, "Statement modified");
    }

    /// An independent decoder over `statement` that shares this decoder's
    /// seed configuration and collaborators.
    pub fn clone_with(&self, statement: impl Into<String>) -> Self {
        Self::with_seeds(statement.into(), self.seeds.clone(), self.tools.clone())
    }

    pub async fn tagged_words(&self) -> Result<&[TaggedWord], NlpError> {
        self.tagged
            .get_or_try_init(|| async { self.tools.tagger.tag(&self.statement) })
            .await
            .map(Vec::as_slice)
    }

    /// The stop set harvested from the seed texts.
    pub async fn stop_nouns(&self) -> Result<&StopNouns, NlpError> {
        self.seeds
            .stop
            .get_or_try_init(|| async {
                let stop = StopNouns::harvest(&self.seeds.texts, self.tools.tagger())?;
                debug!(count = stop.len(), "Harvested seed nouns");
                Ok(stop)
            })
            .await
    }

    /// Distinct singular nouns of the statement, excluding seed nouns.
    pub async fn nouns(&self) -> Result<&[String], NlpError> {
        self.nouns
            .get_or_try_init(|| async {
                let tagged = self.tagged_words().await?;
                let stop = self.stop_nouns().await?;
                Ok(candidate_nouns(tagged, stop))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Cardinal words that stand alone in the statement.
    pub async fn numbers(&self) -> Result<&[String], NlpError> {
        self.numbers
            .get_or_try_init(|| async {
                let tagged = self.tagged_words().await?;
                Ok(standalone_numbers(tagged, &self.statement))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Every entity the entity service reports for the statement.
    pub async fn entities(&self) -> Result<&[NamedEntity], NlpError> {
        let Some(service) = &self.tools.entities else {
            return Err(NlpError::EntityServiceUnavailable);
        };

        self.entities
            .get_or_try_init(|| service.entities(&self.statement))
            .await
            .map(Vec::as_slice)
    }

    /// Distinct mention texts of entities of the given kind.
    pub async fn entities_of_kind(&self, kind: &str) -> Result<Vec<String>, NlpError> {
        let mut texts: Vec<String> = Vec::new();
        for entity in self.entities().await? {
            if entity.kind == kind && !texts.contains(&entity.text) {
                texts.push(entity.text.clone());
            }
        }
        Ok(texts)
    }

    pub async fn cities(&self) -> Result<Vec<String>, NlpError> {
        self.entities_of_kind(CITY).await
    }
}

impl fmt::Debug for StatementDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementDecoder")
            .field("statement", &self.statement)
            .field("seed_texts", &self.seeds.texts.len())
            .field("tools", &self.tools)
            .finish()
    }
}
