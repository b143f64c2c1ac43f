//! Ranking a universe of known values against words from a statement.
//!
//! Every query is searched against the full candidate list. Per-query hits
//! are merged by candidate index, keeping the best score each candidate ever
//! achieved, and the merged list is sorted best first. [`FuzzyMatcher::best_matches`]
//! then keeps the hits that are close to the winner:
//!
//! ```text
//! queries ──search──▶ hits per query ──merge(min)──▶ ranked ──cut──▶ values
//!                                                      │
//!                           score - best <= distance_from_best, at most max_items
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::score::{Score, score};

/// Tuning for approximate matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyOptions {
    /// Hits scoring above this are dropped.
    pub threshold: f64,
    /// Where in a candidate the query is expected to start.
    pub location: usize,
    /// How far from `location` an exact hit may drift before scoring 1.0.
    pub distance: usize,
    /// Largest score gap to the best hit that is still reported.
    pub distance_from_best: f64,
    /// Maximum number of values reported.
    pub max_items: usize,
    pub case_sensitive: bool,
    /// Also compare word by word.
    pub tokenize: bool,
    /// Queries are cut to this many characters before scoring.
    pub max_pattern_length: usize,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            location: 0,
            distance: 100,
            distance_from_best: 0.5,
            max_items: 10,
            case_sensitive: false,
            tokenize: true,
            max_pattern_length: 32,
        }
    }
}

/// A candidate index with the score it matched at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    pub index: usize,
    pub score: Score,
}

#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    options: FuzzyOptions,
}

impl FuzzyMatcher {
    pub fn new(options: FuzzyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FuzzyOptions {
        &self.options
    }

    /// Candidates matching a single query within the threshold, best first.
    pub fn search(&self, query: &str, candidates: &[String]) -> Vec<ScoredMatch> {
        let mut hits: Vec<ScoredMatch> = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| ScoredMatch {
                index,
                score: score(query, candidate, &self.options),
            })
            .filter(|hit| hit.score.value() <= self.options.threshold)
            .collect();
        sort_matches(&mut hits);
        hits
    }

    /// Merged hits across all queries, best first.
    pub fn rank(&self, queries: &[String], candidates: &[String]) -> Vec<ScoredMatch> {
        queries.iter().fold(Vec::new(), |ranked, query| {
            merge(ranked, self.search(query, candidates))
        })
    }

    /// Candidate values close enough to the best hit to be worth offering.
    ///
    /// Empty when either side is empty or nothing clears the threshold.
    pub fn best_matches(&self, queries: &[String], candidates: &[String]) -> Vec<String> {
        if queries.is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let ranked = self.rank(queries, candidates);
        let Some(best) = ranked.first().map(|hit| hit.score.value()) else {
            return Vec::new();
        };

        ranked
            .iter()
            .filter(|hit| hit.index < candidates.len())
            .filter(|hit| hit.score.value() - best <= self.options.distance_from_best)
            .take(self.options.max_items)
            .map(|hit| candidates[hit.index].clone())
            .collect()
    }
}

/// Union two hit lists, keeping the lower score for shared indices.
///
/// The result is sorted by score, then by index.
pub fn merge(left: Vec<ScoredMatch>, right: Vec<ScoredMatch>) -> Vec<ScoredMatch> {
    let mut best: BTreeMap<usize, Score> = BTreeMap::new();

    for hit in left.into_iter().chain(right) {
        best.entry(hit.index)
            .and_modify(|score| {
                if hit.score < *score {
                    *score = hit.score;
                }
            })
            .or_insert(hit.score);
    }

    let mut merged: Vec<ScoredMatch> = best
        .into_iter()
        .map(|(index, score)| ScoredMatch { index, score })
        .collect();
    sort_matches(&mut merged);
    merged
}

fn sort_matches(hits: &mut [ScoredMatch]) {
    hits.sort_by(|a, b| {
        a.score
            .value()
            .total_cmp(&b.score.value())
            .then(a.index.cmp(&b.index))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn it_offers_the_intended_keyword() {
        let matcher = FuzzyMatcher::default();
        let found = matcher.best_matches(
            &strings(&["memry", "usage"]),
            &strings(&["cpu", "memory", "disk"]),
        );
        assert_eq!(found, strings(&["memory"]));
    }

    #[test]
    fn it_returns_nothing_for_empty_inputs() {
        let matcher = FuzzyMatcher::default();
        assert!(matcher.best_matches(&[], &strings(&["cpu"])).is_empty());
        assert!(matcher.best_matches(&strings(&["cpu"]), &[]).is_empty());
    }

    #[test]
    fn it_cuts_hits_far_from_the_best() {
        let queries = strings(&["memory"]);
        let candidates = strings(&["memoryx", "memory"]);

        let lenient = FuzzyMatcher::default();
        assert_eq!(
            lenient.best_matches(&queries, &candidates),
            strings(&["memory", "memoryx"])
        );

        let strict = FuzzyMatcher::new(FuzzyOptions {
            distance_from_best: 0.05,
            ..FuzzyOptions::default()
        });
        assert_eq!(strict.best_matches(&queries, &candidates), strings(&["memory"]));
    }

    #[test]
    fn it_caps_reported_values() {
        let candidates: Vec<String> = (0..12).map(|n| format!("app{n}")).collect();
        let matcher = FuzzyMatcher::default();
        let found = matcher.best_matches(&strings(&["app"]), &candidates);
        assert_eq!(found.len(), 10);

        let ranked = matcher.rank(&strings(&["app"]), &candidates);
        let best = ranked[0].score.value();
        assert!(ranked.iter().take(10).all(|hit| hit.score.value() - best <= 0.5));
    }

    #[test]
    fn it_merges_by_minimum_in_either_order() {
        let a = vec![
            ScoredMatch { index: 0, score: Score::new(0.4) },
            ScoredMatch { index: 2, score: Score::new(0.1) },
        ];
        let b = vec![
            ScoredMatch { index: 0, score: Score::new(0.2) },
            ScoredMatch { index: 1, score: Score::new(0.3) },
        ];

        let forward = merge(a.clone(), b.clone());
        let backward = merge(b, a);
        assert_eq!(forward, backward);
        assert_eq!(
            forward.iter().map(|hit| hit.index).collect::<Vec<_>>(),
            vec![2, 0, 1]
        );
        assert_eq!(forward[1].score, Score::new(0.2));
    }

    #[test]
    fn it_keeps_each_index_once_across_queries() {
        let matcher = FuzzyMatcher::default();
        let ranked = matcher.rank(
            &strings(&["memory", "memry"]),
            &strings(&["cpu", "memory"]),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[0].score, Score::PERFECT);
    }
}
