//! Per-editor search state
//!
//! Each editor holds exactly one compiled query. It is seeded from the global
//! find/replace record when the editor is created and replaced wholesale by
//! every `SetQuery`/`Clear` effect. There is no separate "active" flag: an
//! empty search text is what "no search" looks like.

use super::query::{SearchQuery, SearchSpec};
use crate::model::find_replace::FindReplaceState;

/// Commands that change an editor's search state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEffect {
    /// Replace the query with one compiled from this spec
    SetQuery(SearchSpec),
    /// Replace the query with the empty query
    Clear,
}

/// The compiled query currently active in one editor
#[derive(Debug, Clone)]
pub struct SearchState {
    query: SearchQuery,
    /// Bumped on every replacement, even when the spec is unchanged
    generation: u64,
}

impl SearchState {
    /// Seed from the global find/replace parameters
    pub fn new(params: &FindReplaceState) -> Self {
        Self {
            query: SearchQuery::build(SearchSpec::from(params)),
            generation: 0,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn apply(&mut self, effect: SearchEffect) {
        let spec = match effect {
            SearchEffect::SetQuery(spec) => spec,
            SearchEffect::Clear => SearchSpec::default(),
        };
        self.query = SearchQuery::build(spec);
        self.generation += 1;
    }
}
