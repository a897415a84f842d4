//! Presentation-facing read model over the applied search response.

use common::search_response::{Facet, Product, RewrittenQuery, SearchResponse};

/// The reconciled result of the latest applied response. Replaced
/// wholesale on every apply; its absence means no search has completed
/// yet in this session.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseModel {
    response: SearchResponse,
}

impl ResponseModel {
    pub fn new(response: SearchResponse) -> Self {
        Self { response }
    }

    pub fn result_count(&self) -> usize {
        self.response.results.len()
    }

    pub fn results(&self) -> &[Product] {
        &self.response.results
    }

    pub fn facets(&self) -> &[Facet] {
        &self.response.facets
    }

    pub fn rewrite_info(&self) -> Option<&RewrittenQuery> {
        self.response.rewritten_query.as_ref()
    }

    /// Suffix for the result-count line, e.g. `" in 0.42s"`. Empty when
    /// the service reported no timing.
    pub fn search_time_line(&self) -> String {
        match self.response.search_time {
            Some(seconds) => format!(" in {}s", seconds),
            None => String::new(),
        }
    }
}
