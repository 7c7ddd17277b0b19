//! Subsequence matching used by the domain search.
//!
//! A candidate matches when every query character appears in it, in order,
//! ignoring case. Scores reward matches at the start, after a separator, and
//! runs of adjacent characters; gaps and long candidates cost a little.

use std::cmp::Ordering;

const MATCH: i32 = 10;
const LEADING: i32 = 12;
const AFTER_SEPARATOR: i32 = 8;
const ADJACENT: i32 = 10;
const MAX_GAP_PENALTY: usize = 6;
const MAX_LENGTH_PENALTY: usize = 6;

/// One ranked hit: index into the candidate list and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub index: usize,
    pub score: i32,
}

fn is_separator(c: char) -> bool {
    matches!(c, '.' | '-' | '_')
}

/// Score `candidate` against `query`, or `None` when it does not match.
/// The query is trimmed first; an empty query matches with score 0.
pub fn fuzzy_score(query: &str, candidate: &str) -> Option<i32> {
    let query: Vec<char> = query.trim().to_lowercase().chars().collect();
    if query.is_empty() {
        return Some(0);
    }
    let target: Vec<char> = candidate.to_lowercase().chars().collect();

    let mut score = 0_i32;
    let mut position = 0;
    let mut previous: Option<usize> = None;

    for qc in query {
        let offset = target[position..].iter().position(|&c| c == qc)?;
        let at = position + offset;

        score += MATCH;
        if at == 0 {
            score += LEADING;
        } else if is_separator(target[at - 1]) {
            score += AFTER_SEPARATOR;
        }

        if let Some(prev) = previous {
            let gap = at - prev - 1;
            if gap == 0 {
                score += ADJACENT;
            } else {
                score -= penalty(gap.min(MAX_GAP_PENALTY));
            }
        }

        previous = Some(at);
        position = at + 1;
    }

    score -= penalty((target.len() / 8).min(MAX_LENGTH_PENALTY));
    Some(score)
}

fn penalty(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Match `query` against every candidate and order the hits by descending
/// score, then ascending case-insensitive label.
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<FuzzyMatch> {
    let mut matches: Vec<FuzzyMatch> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, c)| {
            fuzzy_score(query, c.as_ref()).map(|score| FuzzyMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| match b.score.cmp(&a.score) {
        Ordering::Equal => candidates[a.index]
            .as_ref()
            .to_lowercase()
            .cmp(&candidates[b.index].as_ref().to_lowercase()),
        other => other,
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything_with_zero() {
        assert_eq!(fuzzy_score("", "acme.dev"), Some(0));
        assert_eq!(fuzzy_score("   ", "x"), Some(0));
        let ranked = rank("", &["b", "a", "c"]);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|m| m.score == 0));
        // ties break alphabetically
        let order: Vec<usize> = ranked.iter().map(|m| m.index).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn non_subsequence_is_rejected() {
        assert_eq!(fuzzy_score("xyz", "acme.dev"), None);
        assert_eq!(fuzzy_score("ved", "acme.dev"), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(fuzzy_score("ACME", "acme.dev"), fuzzy_score("acme", "ACME.DEV"));
        assert!(fuzzy_score("ACME", "acme.dev").is_some());
    }

    #[test]
    fn exact_prefix_score() {
        // a: 10 + 12, c: 10 + 10, m: 10 + 10, e: 10 + 10, length 8 -> -1
        assert_eq!(fuzzy_score("acme", "acme.dev"), Some(81));
    }

    #[test]
    fn separator_and_gap_scoring() {
        // a@0: 22; d@5 after '.': 10 + 8 - min(4, 6) = 14; length 8 -> -1
        assert_eq!(fuzzy_score("ad", "acme.dev"), Some(35));
    }

    #[test]
    fn gap_penalty_is_capped() {
        let near = fuzzy_score("ab", "a1234567b").unwrap_or_default();
        let far = fuzzy_score("ab", "a12345678901234b").unwrap_or_default();
        // both gaps exceed the cap; only the length penalty differs
        assert_eq!(near - far, 1);
    }

    #[test]
    fn ranking_prefers_prefix_matches() {
        let candidates = ["beta-labs.io", "acme.dev", "alpha-example.net"];
        let ranked = rank("a", &candidates);
        assert_eq!(candidates[ranked[0].index], "acme.dev");
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn ranking_is_subsequence_filter() {
        let candidates = ["acme.dev", "bluebird.ai", "deltaops.com"];
        let ranked = rank("dev", &candidates);
        let names: Vec<&str> = ranked.iter().map(|m| candidates[m.index]).collect();
        assert_eq!(names, vec!["acme.dev"]);
    }
}
