use async_trait::async_trait;
use dialog_nlp::StatementDecoder;

use crate::error::ResolveError;
use crate::handler::{CandidateSource, TypeHandler};

/// Matches a statement against a list of known values.
///
/// The first listed value that occurs anywhere in the statement wins, even
/// inside a longer word. Candidates are the statement's nouns.
#[derive(Debug, Clone, Copy)]
pub struct KeywordHandler {
    fuzzy_without_supplier: bool,
}

impl KeywordHandler {
    /// Closed vocabularies: declared values are the whole universe, so nouns
    /// may always be fuzzy matched against them.
    pub fn keyword() -> Self {
        Self {
            fuzzy_without_supplier: true,
        }
    }

    /// Open vocabularies: fuzzy matching needs a supplier's current list.
    pub fn entity() -> Self {
        Self {
            fuzzy_without_supplier: false,
        }
    }
}

#[async_trait]
impl TypeHandler for KeywordHandler {
    async fn extract_value(
        &self,
        statement: &str,
        _decoder: &StatementDecoder,
        candidates: &[String],
    ) -> Result<Option<String>, ResolveError> {
        Ok(candidates
            .iter()
            .find(|value| !value.is_empty() && statement.contains(value.as_str()))
            .cloned())
    }

    fn candidate_source(&self) -> Option<&dyn CandidateSource> {
        Some(self)
    }

    fn fuzzy_without_supplier(&self) -> bool {
        self.fuzzy_without_supplier
    }
}

#[async_trait]
impl CandidateSource for KeywordHandler {
    async fn candidates(
        &self,
        _statement: &str,
        decoder: &StatementDecoder,
    ) -> Result<Vec<String>, ResolveError> {
        Ok(decoder.nouns().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::decoder;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn databases() -> Vec<String> {
        ["AppTestDB", "AppProdDB", "AppDevDB"]
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    #[tokio::test]
    async fn it_takes_the_first_listed_value_present() -> TestResult {
        let statement = "compare AppDevDB with AppTestDB";
        let found = KeywordHandler::entity()
            .extract_value(statement, &decoder(statement), &databases())
            .await?;
        assert_eq!(found.as_deref(), Some("AppTestDB"));
        Ok(())
    }

    #[tokio::test]
    async fn it_matches_inside_words() -> TestResult {
        let statement = "show cpus";
        let values = vec!["cpu".to_string()];
        let found = KeywordHandler::keyword()
            .extract_value(statement, &decoder(statement), &values)
            .await?;
        assert_eq!(found.as_deref(), Some("cpu"));
        Ok(())
    }

    #[tokio::test]
    async fn it_finds_nothing_without_values() -> TestResult {
        let statement = "Get database details AppTestDB";
        let found = KeywordHandler::entity()
            .extract_value(statement, &decoder(statement), &[])
            .await?;
        assert_eq!(found, None);
        Ok(())
    }

    #[tokio::test]
    async fn it_offers_nouns_as_candidates() -> TestResult {
        let statement = "show me memry usage";
        let handler = KeywordHandler::keyword();
        let Some(source) = handler.candidate_source() else {
            panic!("keyword handlers enumerate candidates");
        };
        let found = source.candidates(statement, &decoder(statement)).await?;
        assert_eq!(found, vec!["memry".to_string(), "usage".to_string()]);
        assert!(handler.fuzzy_without_supplier());
        assert!(!KeywordHandler::entity().fuzzy_without_supplier());
        Ok(())
    }
}
