//! Part-of-speech tagging.
//!
//! Tags follow the Penn Treebank names. Decoding only cares about three of
//! them (`NN`, `NNP` and `CD`), but the full set is kept so that custom
//! taggers can report what they actually saw.
//!
//! [`LexiconTagger`] is the bundled tagger. It looks each word up in a
//! small closed-class lexicon, falls back to shape and suffix heuristics
//! for unknown words, then applies a couple of contextual corrections.

use std::fmt;

use crate::error::NlpError;
use crate::lexicon;
use crate::token::{Token, TokenKind, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    CoordinatingConjunction,
    Cardinal,
    Determiner,
    Existential,
    Preposition,
    Adjective,
    Modal,
    Noun,
    PluralNoun,
    ProperNoun,
    PluralProperNoun,
    Possessive,
    Pronoun,
    PossessivePronoun,
    Adverb,
    Particle,
    To,
    Interjection,
    Verb,
    PastVerb,
    Gerund,
    PastParticiple,
    PresentVerb,
    ThirdPersonVerb,
    WhDeterminer,
    WhPronoun,
    WhAdverb,
    Symbol,
}

impl PartOfSpeech {
    /// The Penn Treebank tag for this part of speech.
    pub fn penn(self) -> &'static str {
        match self {
            PartOfSpeech::CoordinatingConjunction => "CC",
            PartOfSpeech::Cardinal => "CD",
            PartOfSpeech::Determiner => "DT",
            PartOfSpeech::Existential => "EX",
            PartOfSpeech::Preposition => "IN",
            PartOfSpeech::Adjective => "JJ",
            PartOfSpeech::Modal => "MD",
            PartOfSpeech::Noun => "NN",
            PartOfSpeech::PluralNoun => "NNS",
            PartOfSpeech::ProperNoun => "NNP",
            PartOfSpeech::PluralProperNoun => "NNPS",
            PartOfSpeech::Possessive => "POS",
            PartOfSpeech::Pronoun => "PRP",
            PartOfSpeech::PossessivePronoun => "PRP$",
            PartOfSpeech::Adverb => "RB",
            PartOfSpeech::Particle => "RP",
            PartOfSpeech::To => "TO",
            PartOfSpeech::Interjection => "UH",
            PartOfSpeech::Verb => "VB",
            PartOfSpeech::PastVerb => "VBD",
            PartOfSpeech::Gerund => "VBG",
            PartOfSpeech::PastParticiple => "VBN",
            PartOfSpeech::PresentVerb => "VBP",
            PartOfSpeech::ThirdPersonVerb => "VBZ",
            PartOfSpeech::WhDeterminer => "WDT",
            PartOfSpeech::WhPronoun => "WP",
            PartOfSpeech::WhAdverb => "WRB",
            PartOfSpeech::Symbol => "SYM",
        }
    }

    /// Singular common or proper noun (`NN` or `NNP`).
    ///
    /// Plurals are deliberately excluded; they are what seed harvesting
    /// and noun extraction both ignore.
    pub fn is_singular_noun(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }

    pub fn is_cardinal(self) -> bool {
        self == PartOfSpeech::Cardinal
    }

    fn is_verb(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Verb
                | PartOfSpeech::PastVerb
                | PartOfSpeech::PresentVerb
                | PartOfSpeech::ThirdPersonVerb
        )
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.penn())
    }
}

/// A word paired with its part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    /// The word as it appeared in the statement.
    pub word: String,
    pub tag: PartOfSpeech,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: PartOfSpeech) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

/// Assigns parts of speech to the words of a text.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, NlpError>;
}

/// Lexicon and heuristic tagger for short imperative statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn initial(token: &Token) -> PartOfSpeech {
        match token.kind {
            TokenKind::Number => return PartOfSpeech::Cardinal,
            TokenKind::Punctuation => return PartOfSpeech::Symbol,
            TokenKind::Word => {}
        }

        if let Some(tag) = lexicon::lookup(&token.value) {
            return tag;
        }

        let starts_upper = token.original.chars().next().is_some_and(char::is_uppercase);
        if starts_upper {
            return PartOfSpeech::ProperNoun;
        }

        let word = token.value.as_str();
        let has_digit = word.chars().any(|c| c.is_ascii_digit());
        let alphabetic = word.chars().all(char::is_alphabetic);

        if has_digit || !alphabetic {
            PartOfSpeech::Noun
        } else if word.len() > 4 && word.ends_with("ing") {
            PartOfSpeech::Gerund
        } else if word.len() > 3 && word.ends_with("ed") {
            PartOfSpeech::PastParticiple
        } else if word.len() > 3 && word.ends_with("ly") {
            PartOfSpeech::Adverb
        } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
            PartOfSpeech::PluralNoun
        } else {
            PartOfSpeech::Noun
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, NlpError> {
        let tokens = tokenize(text);
        let mut tags: Vec<PartOfSpeech> = tokens.iter().map(Self::initial).collect();

        for index in 1..tags.len() {
            let previous = tags[index - 1];
            let current = tags[index];

            // A verb reading straight after a determiner is a noun: "the scale".
            let after_determiner = matches!(
                previous,
                PartOfSpeech::Determiner | PartOfSpeech::PossessivePronoun
            );
            if after_determiner && current.is_verb() {
                tags[index] = PartOfSpeech::Noun;
            }

            // "to issue", "to record".
            if previous == PartOfSpeech::To
                && current == PartOfSpeech::Noun
                && lexicon::has_verb_reading(&tokens[index].value)
            {
                tags[index] = PartOfSpeech::Verb;
            }
        }

        Ok(tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| TaggedWord::new(token.original, tag))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn tags(text: &str) -> Result<Vec<(String, &'static str)>, NlpError> {
        Ok(LexiconTagger::new()
            .tag(text)?
            .into_iter()
            .map(|word| (word.word, word.tag.penn()))
            .collect())
    }

    #[test]
    fn it_tags_a_request() -> TestResult {
        assert_eq!(
            tags("Get database details AppTestDB")?,
            vec![
                ("Get".to_string(), "VB"),
                ("database".to_string(), "NN"),
                ("details".to_string(), "NNS"),
                ("AppTestDB".to_string(), "NNP"),
            ]
        );
        Ok(())
    }

    #[test]
    fn it_tags_cardinals() -> TestResult {
        let tagged = tags("scale to 10 instances")?;
        assert_eq!(tagged[2], ("10".to_string(), "CD"));

        let tagged = tags("x10y items")?;
        assert_eq!(tagged[0], ("x10y".to_string(), "NN"));

        let tagged = tags("set five replicas")?;
        assert_eq!(tagged[1], ("five".to_string(), "CD"));
        Ok(())
    }

    #[test]
    fn it_corrects_verbs_after_determiners() -> TestResult {
        let tagged = tags("check the scale")?;
        assert_eq!(tagged[2], ("scale".to_string(), "NN"));
        Ok(())
    }

    #[test]
    fn it_treats_unknown_lowercase_words_as_nouns() -> TestResult {
        let tagged = tags("show me memry usage")?;
        assert_eq!(
            tagged,
            vec![
                ("show".to_string(), "VB"),
                ("me".to_string(), "PRP"),
                ("memry".to_string(), "NN"),
                ("usage".to_string(), "NN"),
            ]
        );
        Ok(())
    }
}
