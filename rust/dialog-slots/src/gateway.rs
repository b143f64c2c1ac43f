//! The conversation gateway: how the engine talks to the user.
//!
//! The engine only ever asks one question at a time and waits for the
//! answer. Replies come back as raw text and are interpreted here.

use async_trait::async_trait;

use crate::error::ConversationError;

/// Reply that abandons the current slot.
pub const EXIT: &str = "exit";

/// Reply that rejects every offered choice.
pub const NONE: &str = "none";

/// What kind of answer a prompt expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Any text.
    FreeText,
    /// A choice number in `1..=options`, or a choice's text.
    Choice { options: usize },
}

#[async_trait]
pub trait Conversation: Send + Sync {
    /// Show `prompt` to the user and wait for their reply.
    async fn ask(&self, prompt: &str, expect: Expect) -> Result<String, ConversationError>;
}

/// A free-text reply, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The user typed [`EXIT`] or nothing at all.
    Cancelled,
    /// A single word, accepted verbatim.
    Word(String),
    /// Several words, which may hide the value in a phrase.
    Phrase(String),
}

impl Reply {
    pub fn classify(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() || text == EXIT {
            Reply::Cancelled
        } else if text.contains(' ') {
            Reply::Phrase(text.to_string())
        } else {
            Reply::Word(text.to_string())
        }
    }
}

/// A reply to a numbered choice list, interpreted against the choices shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Selected(String),
    /// The user picked the none-of-these item, or typed [`NONE`] or the
    /// label it was shown with.
    NoneOfThese,
    /// Neither a valid number nor the text of a shown choice.
    Unrecognized,
}

impl Choice {
    pub fn interpret(raw: &str, shown: &[String], none_label: &str) -> Self {
        let text = raw.trim();

        match text.parse::<usize>() {
            Ok(number) if number == shown.len() + 1 => Choice::NoneOfThese,
            Ok(number) if (1..=shown.len()).contains(&number) => {
                Choice::Selected(shown[number - 1].clone())
            }
            Ok(_) => Choice::Unrecognized,
            Err(_) if text == NONE || (!text.is_empty() && text == none_label.trim()) => {
                Choice::NoneOfThese
            }
            Err(_) => shown
                .iter()
                .find(|choice| choice.as_str() == text)
                .map_or(Choice::Unrecognized, |choice| Choice::Selected(choice.clone())),
        }
    }

    pub fn into_selected(self) -> Option<String> {
        match self {
            Choice::Selected(value) => Some(value),
            Choice::NoneOfThese | Choice::Unrecognized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn interpret(raw: &str, shown: &[String]) -> Choice {
        Choice::interpret(raw, shown, NONE)
    }

    fn shown() -> Vec<String> {
        vec!["memory".to_string(), "disk".to_string()]
    }

    #[test]
    fn it_classifies_free_text() {
        assert_eq!(Reply::classify("exit"), Reply::Cancelled);
        assert_eq!(Reply::classify("   "), Reply::Cancelled);
        assert_eq!(Reply::classify(" AppTestDB "), Reply::Word("AppTestDB".to_string()));
        assert_eq!(
            Reply::classify("use AppTestDB"),
            Reply::Phrase("use AppTestDB".to_string())
        );
    }

    #[test]
    fn it_interprets_numbers() {
        assert_eq!(interpret("1", &shown()), Choice::Selected("memory".to_string()));
        assert_eq!(interpret("2", &shown()), Choice::Selected("disk".to_string()));
        assert_eq!(interpret("3", &shown()), Choice::NoneOfThese);
        assert_eq!(interpret("0", &shown()), Choice::Unrecognized);
        assert_eq!(interpret("4", &shown()), Choice::Unrecognized);
    }

    #[test]
    fn it_interprets_text() {
        assert_eq!(interpret("none", &shown()), Choice::NoneOfThese);
        assert_eq!(interpret("disk", &shown()), Choice::Selected("disk".to_string()));
        assert_eq!(interpret("Disk", &shown()), Choice::Unrecognized);
        assert_eq!(interpret("exit", &shown()), Choice::Unrecognized);
    }

    #[test]
    fn it_interprets_a_localized_none_label() {
        assert_eq!(Choice::interpret("aucun", &shown(), "aucun"), Choice::NoneOfThese);
        assert_eq!(Choice::interpret("none", &shown(), "aucun"), Choice::NoneOfThese);
        assert_eq!(Choice::interpret("3", &shown(), "aucun"), Choice::NoneOfThese);
        assert_eq!(Choice::interpret("aucun", &shown(), NONE), Choice::Unrecognized);
    }
}
