//! Pure projection from a search state snapshot to the wire request.

use common::search_const::TOP_K;
use common::search_request::SearchRequest;

use crate::controller::search_state::SearchState;

/// Builds the outbound payload from a state snapshot without mutating
/// it. Equal snapshots produce structurally equal requests.
pub fn build_search_request(state: &SearchState) -> SearchRequest {
    SearchRequest {
        query: state.query.clone(),
        rewrite_on: state.config.rewrite_on,
        rerank_on: state.config.rerank_on,
        top_k: TOP_K,
        filters: state
            .filters
            .iter()
            .map(|(facet, values)| (facet.clone(), values.iter().cloned().collect()))
            .collect(),
        sort_by: state.sort,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::search_request::SortOrder;

    fn example_state() -> SearchState {
        let mut state = SearchState::default();
        state.submit_query("foo");
        state.toggle_filter("Brand", "Sony");
        state.set_sort(SortOrder::PriceAsc);
        state.set_config(None, Some(false));
        state
    }

    #[test]
    fn request_matches_service_contract() {
        let state = example_state();
        let request = build_search_request(&state);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"query":"foo","rewrite_on":true,"rerank_on":false,"top_k":40,"filters":{"Brand":["Sony"]},"sort_by":"price_asc"}"#
        );
    }

    #[test]
    fn equal_snapshots_build_equal_requests() {
        let state = example_state();
        assert_eq!(build_search_request(&state), build_search_request(&state.clone()));
    }

    #[test]
    fn building_does_not_mutate_state() {
        let state = example_state();
        let before = state.clone();
        let _ = build_search_request(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn top_k_is_fixed() {
        assert_eq!(build_search_request(&SearchState::default()).top_k, 40);
    }
}
