use async_trait::async_trait;
use dialog_nlp::StatementDecoder;

use crate::error::ResolveError;
use crate::handler::TypeHandler;

/// Free text. Never extracted from the statement; always asked for, and
/// the reply is taken verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardHandler;

#[async_trait]
impl TypeHandler for WildcardHandler {
    async fn extract_value(
        &self,
        _statement: &str,
        _decoder: &StatementDecoder,
        _candidates: &[String],
    ) -> Result<Option<String>, ResolveError> {
        Ok(None)
    }

    fn accepts_free_text(&self) -> bool {
        true
    }
}
