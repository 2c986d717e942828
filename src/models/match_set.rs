// file: src/models/match_set.rs
// description: Ordered result of a surname prefix search
// reference: Produced by the repository, consumed by the renderers

use serde::Serialize;

/// Surnames returned by one search, in the order the store sorted them.
///
/// Duplicates are preserved. A `MatchSet` is built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchSet {
    surnames: Vec<String>,
}

impl MatchSet {
    pub fn new(surnames: Vec<String>) -> Self {
        Self { surnames }
    }

    pub fn len(&self) -> usize {
        self.surnames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surnames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.surnames.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.surnames
    }
}

/// Result of a prefix search: either a non-empty match set or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(MatchSet),
    NoMatches,
}

impl SearchOutcome {
    pub fn from_rows(rows: Vec<String>) -> Self {
        if rows.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(MatchSet::new(rows))
        }
    }
}
