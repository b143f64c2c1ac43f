//! # Dialog NLP: Statement Decoding and Fuzzy Ranking
//!
//! The linguistic layer beneath conversational parameter resolution. Given
//! a user's statement, it answers the questions a slot handler needs to ask:
//! *which nouns does it mention?*, *which numbers?*, *which cities?*, and,
//! when nothing matches exactly, *which known values does it resemble?*
//!
//! ## Core Ideas
//!
//! - **Views are lazy and memoized**: a [`StatementDecoder`] tags its
//!   statement once, on first demand, and caches each derived view until the
//!   statement is modified.
//! - **Seed texts describe the request, not its values**: nouns harvested
//!   from a class's example phrasings never count as candidate values.
//! - **Collaborators are traits**: tagging ([`Tagger`]) and entity
//!   extraction ([`EntityService`]) can be swapped out. The bundled
//!   [`LexiconTagger`] and [`Gazetteer`] work offline.
//! - **Ranking is merge-by-minimum**: several query words may hit the same
//!   known value, and the value keeps its best score.
//!
//! ## Architecture
//!
//! ```text
//! statement ─▶ tokenize ─▶ Tagger ─▶ tagged words ─┬─▶ nouns (minus seed nouns)
//!                                                  └─▶ standalone numbers
//! statement ─▶ EntityService ─▶ entities ─▶ cities
//!
//! nouns × known values ─▶ FuzzyMatcher ─▶ values worth offering
//! ```

pub mod decoder;
pub mod entity;
pub mod error;
pub mod fuzzy;
mod lexicon;
pub mod noun;
pub mod score;
pub mod tag;
pub mod token;

pub use decoder::{LanguageTools, StatementDecoder};
pub use entity::{CITY, EntityService, Gazetteer, NamedEntity};
pub use error::NlpError;
pub use fuzzy::{FuzzyMatcher, FuzzyOptions, ScoredMatch};
pub use noun::StopNouns;
pub use score::Score;
pub use tag::{LexiconTagger, PartOfSpeech, TaggedWord, Tagger};
pub use token::{Token, TokenKind, tokenize};
