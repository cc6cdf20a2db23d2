//! Search strategies for song lookup.
//!
//! This module provides abstractions for different search strategies used to
//! find songs by title across loaded songbooks.

use crate::song::Song;

/// Trait for song search strategies.
///
/// Different strategies can be combined to provide comprehensive matching
/// with fallbacks.
pub trait SearchStrategy: Send + Sync {
    /// Find matching songs for a query string.
    ///
    /// # Arguments
    /// * `query` - The search query (typically a partial title)
    /// * `songs` - The available songs to search
    /// * `limit` - Maximum number of results to return
    ///
    /// # Returns
    /// A vector of matching songs, sorted by relevance.
    fn find_matches<'a>(&self, query: &str, songs: &'a [Song], limit: usize) -> Vec<&'a Song>;

    /// Get the name of this search strategy (for debugging/logging).
    fn name(&self) -> &'static str;
}

/// Case-insensitive substring matching; an exact or containing title wins
/// outright.
#[derive(Debug, Default)]
pub struct SubstringSearch;

impl SearchStrategy for SubstringSearch {
    fn find_matches<'a>(&self, query: &str, songs: &'a [Song], limit: usize) -> Vec<&'a Song> {
        let query_lower = query.to_lowercase();
        songs
            .iter()
            .filter(|song| song.name.to_lowercase().contains(&query_lower))
            .take(limit)
            .collect()
    }

    fn name(&self) -> &'static str {
        "SubstringSearch"
    }
}

/// Fuzzy string matching search strategy.
pub struct FuzzySearch {
    /// Minimum score threshold (0-1000).
    pub min_score: i64,
}

impl Default for FuzzySearch {
    fn default() -> Self {
        Self { min_score: 50 }
    }
}

impl SearchStrategy for FuzzySearch {
    fn find_matches<'a>(&self, query: &str, songs: &'a [Song], limit: usize) -> Vec<&'a Song> {
        use fuzzy_matcher::skim::SkimMatcherV2;
        use fuzzy_matcher::FuzzyMatcher;

        let matcher = SkimMatcherV2::default();
        let query_lower = query.to_lowercase();

        let mut scored: Vec<_> = songs
            .iter()
            .filter_map(|song| {
                let score = matcher
                    .fuzzy_match(&song.name.to_lowercase(), &query_lower)
                    .unwrap_or(0);
                if score >= self.min_score {
                    Some((song, score))
                } else {
                    None
                }
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().take(limit).map(|(song, _)| song).collect()
    }

    fn name(&self) -> &'static str {
        "FuzzySearch"
    }
}

/// Composite search that tries multiple strategies.
pub struct CompositeSearch {
    strategies: Vec<Box<dyn SearchStrategy>>,
}

impl CompositeSearch {
    /// Create a new composite search with the given strategies.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn SearchStrategy>>) -> Self {
        Self { strategies }
    }

    /// Create with default strategies (substring first, then fuzzy).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(vec![Box::new(SubstringSearch), Box::new(FuzzySearch::default())])
    }
}

impl SearchStrategy for CompositeSearch {
    fn find_matches<'a>(&self, query: &str, songs: &'a [Song], limit: usize) -> Vec<&'a Song> {
        let mut results: Vec<&'a Song> = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for strategy in &self.strategies {
            for song in strategy.find_matches(query, songs, limit) {
                if seen.insert(song.id) {
                    results.push(song);
                    if results.len() >= limit {
                        return results;
                    }
                }
            }
        }

        results
    }

    fn name(&self) -> &'static str {
        "CompositeSearch"
    }
}
