//! Approximate-match scoring between a query and a candidate string.
//!
//! Scores run from 0.0 (perfect) to 1.0 (no resemblance):
//!
//! 1. **Whole score**: an exact substring scores only its distance from the
//!    expected location. Otherwise the query is aligned against every
//!    candidate window one character shorter, equal or longer than itself,
//!    and the best `errors / query length + proximity` wins.
//! 2. **Token score** (when tokenizing): every query word is paired with its
//!    closest candidate word by normalized Levenshtein distance, and the
//!    per-word distances are averaged.
//!
//! With tokenizing on, the final score is the mean of the two.

use crate::fuzzy::FuzzyOptions;

/// A match score where lower is better.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub const PERFECT: Score = Score(0.0);
    pub const WORST: Score = Score(1.0);

    pub fn new(value: f64) -> Self {
        Score(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Score `candidate` against `query`.
///
/// Only the first `max_pattern_length` characters of `query` are scored.
pub fn score(query: &str, candidate: &str, options: &FuzzyOptions) -> Score {
    let query: String = query.chars().take(options.max_pattern_length).collect();
    let (query, candidate) = if options.case_sensitive {
        (query, candidate.to_string())
    } else {
        (query.to_lowercase(), candidate.to_lowercase())
    };

    let whole = whole_score(&query, &candidate, options);
    if !options.tokenize {
        return Score::new(whole);
    }

    match token_score(&query, &candidate) {
        Some(tokens) => Score::new((whole + tokens) / 2.0),
        None => Score::new(whole),
    }
}

fn whole_score(query: &str, candidate: &str, options: &FuzzyOptions) -> f64 {
    let query_len = query.chars().count();
    if query_len == 0 {
        return Score::WORST.value();
    }

    if let Some(offset) = candidate.find(query) {
        let at = candidate[..offset].chars().count();
        return proximity(at, options).min(1.0);
    }

    let chars: Vec<char> = candidate.chars().collect();
    let shortest = query_len.saturating_sub(1).max(1);
    let longest = (query_len + 1).min(chars.len());

    if chars.len() < shortest {
        let errors = strsim::levenshtein(query, candidate) as f64;
        return (errors / query_len as f64 + proximity(0, options)).min(1.0);
    }

    let mut best = f64::INFINITY;
    for width in shortest..=longest {
        for start in 0..=(chars.len() - width) {
            let window: String = chars[start..start + width].iter().collect();
            let errors = strsim::levenshtein(query, &window) as f64;
            let attempt = errors / query_len as f64 + proximity(start, options);
            best = best.min(attempt);
        }
    }

    best.min(1.0)
}

fn proximity(at: usize, options: &FuzzyOptions) -> f64 {
    let offset = at.abs_diff(options.location);
    if options.distance == 0 {
        return if offset == 0 { 0.0 } else { 1.0 };
    }
    offset as f64 / options.distance as f64
}

fn token_score(query: &str, candidate: &str) -> Option<f64> {
    let query_tokens: Vec<&str> = query.split_whitespace().collect();
    let candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();
    if query_tokens.is_empty() || candidate_tokens.is_empty() {
        return None;
    }

    let total: f64 = query_tokens
        .iter()
        .map(|query_token| {
            candidate_tokens
                .iter()
                .map(|candidate_token| {
                    1.0 - strsim::normalized_levenshtein(query_token, candidate_token)
                })
                .fold(1.0, f64::min)
        })
        .sum();

    Some(total / query_tokens.len() as f64)
}
