//! Repository coordinates: `owner/name` pairs and repository URLs.
//!
//! Each pattern needs whitespace before the coordinate, so a statement that
//! *starts* with `alice/myrepo` yields nothing.

use std::sync::LazyLock;

use async_trait::async_trait;
use dialog_nlp::StatementDecoder;
use regex::Regex;

use crate::error::ResolveError;
use crate::handler::TypeHandler;

static OWNER_AND_NAME: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(.*)\s+(\w+)/(\S+)"));

static REPOSITORY_URL: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)(.*)\s+(https?://\S+)"));

fn capture(
    pattern: &LazyLock<Result<Regex, regex::Error>>,
    kind: &str,
    statement: &str,
    group: usize,
) -> Result<Option<String>, ResolveError> {
    let regex = pattern
        .as_ref()
        .map_err(|error| ResolveError::handler(kind, error))?;

    Ok(regex
        .captures(statement)
        .and_then(|captures| captures.get(group))
        .map(|found| found.as_str().to_string()))
}

/// The name half of `owner/name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryNameHandler;

#[async_trait]
impl TypeHandler for RepositoryNameHandler {
    async fn extract_value(
        &self,
        statement: &str,
        _decoder: &StatementDecoder,
        _candidates: &[String],
    ) -> Result<Option<String>, ResolveError> {
        capture(&OWNER_AND_NAME, super::REPONAME, statement, 3)
    }
}

/// The owner half of `owner/name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryUserHandler;

#[async_trait]
impl TypeHandler for RepositoryUserHandler {
    async fn extract_value(
        &self,
        statement: &str,
        _decoder: &StatementDecoder,
        _candidates: &[String],
    ) -> Result<Option<String>, ResolveError> {
        capture(&OWNER_AND_NAME, super::REPOUSER, statement, 2)
    }
}

/// An `http://` or `https://` URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryUrlHandler;

#[async_trait]
impl TypeHandler for RepositoryUrlHandler {
    async fn extract_value(
        &self,
        statement: &str,
        _decoder: &StatementDecoder,
        _candidates: &[String],
    ) -> Result<Option<String>, ResolveError> {
        capture(&REPOSITORY_URL, super::REPOURL, statement, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::decoder;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    async fn extract(handler: &dyn TypeHandler, statement: &str) -> Result<Option<String>, ResolveError> {
        handler.extract_value(statement, &decoder(statement), &[]).await
    }

    #[tokio::test]
    async fn it_splits_owner_and_name() -> TestResult {
        let statement = "issue for alice/myrepo";
        assert_eq!(extract(&RepositoryUserHandler, statement).await?.as_deref(), Some("alice"));
        assert_eq!(extract(&RepositoryNameHandler, statement).await?.as_deref(), Some("myrepo"));
        Ok(())
    }

    #[tokio::test]
    async fn it_takes_the_last_coordinate() -> TestResult {
        let statement = "compare bob/old with alice/new-repo";
        assert_eq!(extract(&RepositoryUserHandler, statement).await?.as_deref(), Some("alice"));
        assert_eq!(extract(&RepositoryNameHandler, statement).await?.as_deref(), Some("new-repo"));
        Ok(())
    }

    #[tokio::test]
    async fn it_needs_leading_whitespace() -> TestResult {
        assert_eq!(extract(&RepositoryNameHandler, "alice/myrepo").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn it_extracts_urls_in_any_case() -> TestResult {
        assert_eq!(
            extract(&RepositoryUrlHandler, "clone HTTPS://example.com/alice/myrepo.git").await?.as_deref(),
            Some("HTTPS://example.com/alice/myrepo.git")
        );
        assert_eq!(extract(&RepositoryUrlHandler, "clone ftp://example.com/x").await?, None);
        Ok(())
    }
}
