//! Test doubles for the engine's collaborators.

use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::catalog::InMemoryCatalog;
use crate::error::ConversationError;
use crate::gateway::{Conversation, Expect};

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<String>,
    prompts: Vec<(String, Expect)>,
}

/// A conversation that answers prompts from a fixed list of replies.
///
/// Every prompt is recorded. Asking after the replies run out fails with
/// [`ConversationError::Closed`], so an unexpected prompt surfaces as an
/// error. Clones share the same script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConversation {
    script: Arc<Mutex<Script>>,
}

impl ScriptedConversation {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Arc::new(Mutex::new(Script {
                replies: replies.into_iter().map(Into::into).collect(),
                prompts: Vec::new(),
            })),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.script
            .lock()
            .prompts
            .iter()
            .map(|(prompt, _)| prompt.clone())
            .collect()
    }

    /// What each prompt expected, in order.
    pub fn expectations(&self) -> Vec<Expect> {
        self.script
            .lock()
            .prompts
            .iter()
            .map(|(_, expect)| *expect)
            .collect()
    }

    /// Replies not yet consumed.
    pub fn unused_replies(&self) -> usize {
        self.script.lock().replies.len()
    }
}

#[async_trait]
impl Conversation for ScriptedConversation {
    async fn ask(&self, prompt: &str, expect: Expect) -> Result<String, ConversationError> {
        let mut script = self.script.lock();
        script.prompts.push((prompt.to_string(), expect));
        script.replies.pop_front().ok_or(ConversationError::Closed)
    }
}

/// Seed texts for a database lookup class.
pub const DATABASE_TEXTS: [&str; 3] = [
    "I would like to get cloudant database info",
    "I'd like details about a database",
    "Database details",
];

/// Fixture catalog declaring `database.details`, `app.scale` and `github.issue`.
pub fn sample_catalog() -> Result<InMemoryCatalog> {
    let catalog = InMemoryCatalog::from_json(
        r#"{
            "database.details": {
                "texts": [
                    "I would like to get cloudant database info",
                    "I'd like details about a database",
                    "Database details"
                ],
                "parameters": [
                    {
                        "name": "databasename",
                        "type": "entity",
                        "title": "database name",
                        "values": ["AppTestDB", "AppProdDB", "AppDevDB"]
                    }
                ]
            },
            "app.scale": {
                "texts": [
                    "I want to increase my application instances",
                    "Scale my application",
                    "Add more instances"
                ],
                "parameters": [
                    { "name": "instances", "type": "number", "prompt": "How many instances?" }
                ]
            },
            "github.issue": {
                "texts": ["Open an issue"],
                "parameters": [
                    { "name": "repouser", "type": "repouser", "title": "repository owner" },
                    { "name": "reponame", "type": "reponame", "title": "repository name" }
                ]
            }
        }"#,
    )?;
    Ok(catalog)
}
