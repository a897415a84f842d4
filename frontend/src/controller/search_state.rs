//! Canonical search state and its mutation operations.

use std::collections::{BTreeMap, BTreeSet};

use common::search_const::{DEFAULT_SESSION_QUERY, PRICE_FACET_NAME};
use common::search_request::SortOrder;


/// Per-request feature toggles for the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureConfig {
    pub rewrite_on: bool,
    pub rerank_on: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            rewrite_on: true,
            rerank_on: true,
        }
    }
}

/// The canonical mutable search state: query text, facet filter
/// selection, sort order, and feature toggles. Mutated only through
/// the methods below; requests are built from full snapshots of it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub filters: BTreeMap<String, BTreeSet<String>>,
    pub sort: SortOrder,
    pub config: FeatureConfig,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: DEFAULT_SESSION_QUERY.to_string(),
            filters: BTreeMap::new(),
            sort: SortOrder::default(),
            config: FeatureConfig::default(),
        }
    }
}

impl SearchState {
    /// Replaces the query and resets filters and sort for the new
    /// search. Input that is blank after trimming is ignored; returns
    /// whether the state changed.
    pub fn submit_query(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.query = text.to_string();
        self.filters.clear();
        self.sort = SortOrder::Relevance;
        true
    }

    /// Toggles `value` in the selection set for `facet_name`. The Price
    /// facet holds at most one value: adding replaces the current
    /// selection, removing the selected value empties it. Facets whose
    /// selection becomes empty are dropped from the map.
    pub fn toggle_filter(&mut self, facet_name: &str, value: &str) {
        let values = self.filters.entry(facet_name.to_string()).or_default();
        if !values.remove(value) {
            if facet_name == PRICE_FACET_NAME {
                values.clear();
            }
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.filters.remove(facet_name);
        }
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Updates either feature flag independently; `None` leaves a flag
    /// untouched. Query, filters, and sort are unaffected.
    pub fn set_config(&mut self, rewrite_on: Option<bool>, rerank_on: Option<bool>) {
        if let Some(rewrite_on) = rewrite_on {
            self.config.rewrite_on = rewrite_on;
        }
        if let Some(rerank_on) = rerank_on {
            self.config.rerank_on = rerank_on;
        }
    }

    pub fn is_filter_selected(&self, facet_name: &str, value: &str) -> bool {
        self.filters
            .get(facet_name)
            .map(|values| values.contains(value))
            .unwrap_or(false)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_rejected_without_changes() {
        let mut state = SearchState::default();
        state.toggle_filter("Brand", "Sony");
        state.set_sort(SortOrder::PriceDesc);
        let before = state.clone();

        assert!(!state.submit_query(""));
        assert!(!state.submit_query("   "));
        assert_eq!(state, before);
    }

    #[test]
    fn new_query_resets_filters_and_sort() {
        let mut state = SearchState::default();
        state.toggle_filter("Brand", "Sony");
        state.toggle_filter("Price", "50-100");
        state.set_sort(SortOrder::PriceAsc);

        assert!(state.submit_query("headphones"));
        assert_eq!(state.query, "headphones");
        assert!(state.filters.is_empty());
        assert_eq!(state.sort, SortOrder::Relevance);
    }

    #[test]
    fn submitted_query_is_trimmed() {
        let mut state = SearchState::default();
        assert!(state.submit_query("  gym earbuds  "));
        assert_eq!(state.query, "gym earbuds");
    }

    #[test]
    fn toggling_a_filter_twice_restores_the_selection() {
        let mut state = SearchState::default();
        state.toggle_filter("Brand", "Sony");
        let with_sony = state.filters.clone();

        state.toggle_filter("Brand", "Bose");
        state.toggle_filter("Brand", "Bose");
        assert_eq!(state.filters, with_sony);

        state.toggle_filter("Brand", "Sony");
        assert!(state.filters.is_empty());
    }

    #[test]
    fn price_selection_replaces_instead_of_accumulating() {
        let mut state = SearchState::default();
        state.toggle_filter("Price", "0-50");
        state.toggle_filter("Price", "50-100");

        let selected = state.filters.get("Price").unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected.contains("50-100"));

        state.toggle_filter("Price", "50-100");
        assert!(!state.filters.contains_key("Price"));
    }

    #[test]
    fn config_flags_update_independently() {
        let mut state = SearchState::default();
        state.toggle_filter("Brand", "Anker");
        let filters_before = state.filters.clone();

        state.set_config(Some(false), None);
        assert!(!state.config.rewrite_on);
        assert!(state.config.rerank_on);

        state.set_config(None, Some(false));
        assert!(!state.config.rewrite_on);
        assert!(!state.config.rerank_on);

        assert_eq!(state.filters, filters_before);
        assert_eq!(state.query, DEFAULT_SESSION_QUERY);
    }
}
