use async_trait::async_trait;
use dialog_nlp::StatementDecoder;

use crate::error::ResolveError;
use crate::handler::TypeHandler;

/// Accepts the statement's number when it contains exactly one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberHandler;

#[async_trait]
impl TypeHandler for NumberHandler {
    async fn extract_value(
        &self,
        _statement: &str,
        decoder: &StatementDecoder,
        _candidates: &[String],
    ) -> Result<Option<String>, ResolveError> {
        match decoder.numbers().await? {
            [only] => Ok(Some(only.clone())),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::decoder;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    async fn extract(statement: &str) -> Result<Option<String>, ResolveError> {
        NumberHandler.extract_value(statement, &decoder(statement), &[]).await
    }

    #[tokio::test]
    async fn it_extracts_a_lone_number() -> TestResult {
        assert_eq!(extract("scale to 10 instances").await?.as_deref(), Some("10"));
        assert_eq!(extract("set five replicas").await?.as_deref(), Some("five"));
        Ok(())
    }

    #[tokio::test]
    async fn it_ignores_embedded_digits() -> TestResult {
        assert_eq!(extract("x10y items").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn it_refuses_to_choose_between_numbers() -> TestResult {
        assert_eq!(extract("scale from 3 to 10").await?, None);
        assert_eq!(extract("increase my instances").await?, None);
        Ok(())
    }
}
