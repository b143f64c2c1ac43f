//! Named-entity extraction.
//!
//! Entity recognition is delegated to an [`EntityService`], typically a
//! remote text-analysis API. [`Gazetteer`] is the local implementation: a
//! table of known `(kind, text)` entries matched against the statement on
//! word boundaries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::NlpError;
use crate::token::find_bounded;

/// Entity kind reported for cities.
pub const CITY: &str = "City";

/// An entity mention found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// The entity kind, e.g. `"City"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The mention as it appears in the text.
    pub text: String,
}

impl NamedEntity {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
pub trait EntityService: Send + Sync {
    /// Extract every entity mentioned in `text`.
    async fn entities(&self, text: &str) -> Result<Vec<NamedEntity>, NlpError>;
}

/// A fixed table of known entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gazetteer {
    entries: Vec<NamedEntity>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    pub fn entry(mut self, kind: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.push(NamedEntity::new(kind, text));
        self
    }

    /// Add several entries of the same kind.
    pub fn entries<I, S>(mut self, kind: &str, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .extend(texts.into_iter().map(|text| NamedEntity::new(kind, text)));
        self
    }

    /// Entries mentioned in `text`, ordered by where they first appear.
    ///
    /// Matching ignores case. Reported mentions keep the entry's own
    /// spelling.
    pub fn scan(&self, text: &str) -> Vec<NamedEntity> {
        let haystack = text.to_lowercase();

        let mut found: Vec<(usize, &NamedEntity)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                find_bounded(&haystack, &entry.text.to_lowercase()).map(|offset| (offset, entry))
            })
            .collect();
        found.sort_by_key(|(offset, _)| *offset);

        let mut mentions: Vec<NamedEntity> = Vec::with_capacity(found.len());
        for (_, entry) in found {
            if !mentions.contains(entry) {
                mentions.push(entry.clone());
            }
        }
        mentions
    }
}

#[async_trait]
impl EntityService for Gazetteer {
    async fn entities(&self, text: &str) -> Result<Vec<NamedEntity>, NlpError> {
        Ok(self.scan(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn cities() -> Gazetteer {
        Gazetteer::new().entries(CITY, ["Raleigh", "Austin", "New York"])
    }

    #[tokio::test]
    async fn it_finds_mentions_in_order() -> TestResult {
        let found = cities().entities("fly from new york to Raleigh").await?;
        assert_eq!(
            found,
            vec![
                NamedEntity::new(CITY, "New York"),
                NamedEntity::new(CITY, "Raleigh"),
            ]
        );
        Ok(())
    }

    #[test]
    fn it_respects_word_boundaries() {
        assert!(cities().scan("austinite weather").is_empty());
        assert_eq!(cities().scan("weather in austin?").len(), 1);
    }

    #[test]
    fn it_keeps_other_kinds() {
        let gazetteer = cities().entry("Company", "Acme");
        let found = gazetteer.scan("Acme offices in Austin");
        assert_eq!(found[0].kind, "Company");
        assert_eq!(found[1].kind, CITY);
    }
}
