//! Noun and number extraction over tagged words.
//!
//! A class's seed texts are example requests for that class ("Database
//! details", "I'd like details about a database"). Their singular nouns
//! describe the request itself rather than any parameter value, so they are
//! harvested into a [`StopNouns`] set and excluded whenever candidate nouns
//! are pulled from a statement.

use std::collections::HashSet;

use crate::error::NlpError;
use crate::tag::{TaggedWord, Tagger};
use crate::token::find_bounded;

/// Lowercased nouns that never count as candidate values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopNouns {
    words: HashSet<String>,
}

impl StopNouns {
    /// The first-person pronoun, which taggers routinely mislabel as a noun.
    pub const ALWAYS: &'static str = "i";

    /// Harvest the singular nouns of every seed text.
    pub fn harvest(seed_texts: &[String], tagger: &dyn Tagger) -> Result<Self, NlpError> {
        let mut words = HashSet::from([Self::ALWAYS.to_string()]);

        for text in seed_texts {
            for tagged in tagger.tag(text)? {
                if tagged.tag.is_singular_noun() {
                    words.insert(tagged.word.to_lowercase());
                }
            }
        }

        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopNouns {
    fn default() -> Self {
        Self {
            words: HashSet::from([Self::ALWAYS.to_string()]),
        }
    }
}

/// Distinct singular nouns in statement order, minus the stop set.
pub fn candidate_nouns(tagged: &[TaggedWord], stop: &StopNouns) -> Vec<String> {
    let mut seen = HashSet::new();

    tagged
        .iter()
        .filter(|word| word.tag.is_singular_noun())
        .filter(|word| !stop.contains(&word.word))
        .filter(|word| seen.insert(word.word.clone()))
        .map(|word| word.word.clone())
        .collect()
}

/// Cardinal words that stand on their own in `statement`.
///
/// A cardinal only counts when the statement contains it with a
/// non-alphanumeric character (or an edge) on both sides.
pub fn standalone_numbers(tagged: &[TaggedWord], statement: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    tagged
        .iter()
        .filter(|word| word.tag.is_cardinal())
        .filter(|word| find_bounded(statement, &word.word).is_some())
        .filter(|word| seen.insert(word.word.clone()))
        .map(|word| word.word.clone())
        .collect()
}
