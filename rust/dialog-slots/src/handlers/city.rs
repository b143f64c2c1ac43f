use async_trait::async_trait;
use dialog_nlp::{NlpError, StatementDecoder};
use tracing::debug;

use crate::error::ResolveError;
use crate::handler::{CandidateSource, TypeHandler};

/// Accepts the statement's city when the entity service reports exactly one.
///
/// Without an entity service no city is ever found. A failing service is an
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityHandler;

impl CityHandler {
    async fn cities(&self, decoder: &StatementDecoder) -> Result<Vec<String>, ResolveError> {
        match decoder.cities().await {
            Ok(cities) => Ok(cities),
            Err(NlpError::EntityServiceUnavailable) => {
                debug!("No entity service; treating statement as mentioning no city");
                Ok(Vec::new())
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl TypeHandler for CityHandler {
    async fn extract_value(
        &self,
        _statement: &str,
        decoder: &StatementDecoder,
        _candidates: &[String],
    ) -> Result<Option<String>, ResolveError> {
        let mut cities = self.cities(decoder).await?;
        if cities.len() == 1 {
            Ok(cities.pop())
        } else {
            Ok(None)
        }
    }

    fn candidate_source(&self) -> Option<&dyn CandidateSource> {
        Some(self)
    }
}

#[async_trait]
impl CandidateSource for CityHandler {
    async fn candidates(
        &self,
        _statement: &str,
        decoder: &StatementDecoder,
    ) -> Result<Vec<String>, ResolveError> {
        self.cities(decoder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::decoder;
    use dialog_nlp::{CITY, Gazetteer, LanguageTools};
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn with_gazetteer(statement: &str) -> StatementDecoder {
        let gazetteer = Gazetteer::new().entries(CITY, ["Raleigh", "Austin"]);
        let tools = LanguageTools::default().with_entity_service(gazetteer);
        StatementDecoder::new(statement, vec![], tools)
    }

    #[tokio::test]
    async fn it_extracts_a_lone_city() -> TestResult {
        let statement = "weather in Raleigh";
        let found = CityHandler
            .extract_value(statement, &with_gazetteer(statement), &[])
            .await?;
        assert_eq!(found.as_deref(), Some("Raleigh"));
        Ok(())
    }

    #[tokio::test]
    async fn it_offers_every_city_when_ambiguous() -> TestResult {
        let statement = "flights from Austin to Raleigh";
        let decoder = with_gazetteer(statement);
        assert_eq!(CityHandler.extract_value(statement, &decoder, &[]).await?, None);
        assert_eq!(
            CityHandler.candidates(statement, &decoder).await?,
            vec!["Austin".to_string(), "Raleigh".to_string()]
        );
        Ok(())
    }

    #[tokio::test]
    async fn it_finds_nothing_without_an_entity_service() -> TestResult {
        let statement = "weather in Raleigh";
        let found = CityHandler.extract_value(statement, &decoder(statement), &[]).await?;
        assert_eq!(found, None);
        Ok(())
    }
}
