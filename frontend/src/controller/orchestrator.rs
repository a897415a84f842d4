//! Search orchestration: dispatch gating, request sequencing, and
//! stale-response protection.

use common::search_request::{SearchRequest, SortOrder};
use common::search_response::SearchResponse;

use crate::controller::request_builder::build_search_request;
use crate::controller::response_model::ResponseModel;
use crate::controller::search_state::SearchState;


/// A request handed to the async layer for execution. The sequence
/// number must be passed back with the outcome so stale responses can
/// be discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedSearch {
    pub seq: u64,
    pub request: SearchRequest,
}

/// Owns the search state and reconciles asynchronous responses into a
/// consistent view. Every mutation entry point applies its state change
/// and then explicitly evaluates dispatch, returning the request the
/// caller should run. Responses may arrive in any order; only the one
/// matching the highest issued sequence number is ever applied.
#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    issued_seq: u64,
    loading: bool,
    error: Option<String>,
    response: Option<ResponseModel>,
}

impl SearchController {
    pub fn new(state: SearchState) -> Self {
        Self {
            state,
            issued_seq: 0,
            loading: false,
            error: None,
            response: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The current read model, or `None` when no response has been
    /// applied yet this session ("never searched").
    pub fn response(&self) -> Option<&ResponseModel> {
        self.response.as_ref()
    }

    /// Submits a new query. Blank input is ignored entirely; otherwise
    /// filters and sort reset and the previous results are dropped
    /// before the request goes out.
    pub fn submit_query(&mut self, text: &str) -> Option<IssuedSearch> {
        if !self.state.submit_query(text) {
            return None;
        }
        self.response = None;
        self.issue()
    }

    pub fn toggle_filter(&mut self, facet_name: &str, value: &str) -> Option<IssuedSearch> {
        self.state.toggle_filter(facet_name, value);
        self.issue()
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> Option<IssuedSearch> {
        self.state.set_sort(sort);
        self.issue()
    }

    pub fn set_config(
        &mut self,
        rewrite_on: Option<bool>,
        rerank_on: Option<bool>,
    ) -> Option<IssuedSearch> {
        self.state.set_config(rewrite_on, rerank_on);
        self.issue()
    }

    /// Issues a request for the current state without mutating it; used
    /// for the initial search at session start.
    pub fn refresh(&mut self) -> Option<IssuedSearch> {
        self.issue()
    }

    fn issue(&mut self) -> Option<IssuedSearch> {
        // dispatch gate: nothing goes out before a first query exists
        if self.state.query.is_empty() {
            return None;
        }
        self.issued_seq += 1;
        self.loading = true;
        Some(IssuedSearch {
            seq: self.issued_seq,
            request: build_search_request(&self.state),
        })
    }

    /// Applies the outcome of an issued request. An outcome that does
    /// not carry the highest issued sequence number is discarded
    /// without touching any flag: a newer request is in flight and its
    /// own resolution settles loading and the model.
    pub fn apply_result(&mut self, seq: u64, result: Result<SearchResponse, String>) {
        if seq != self.issued_seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.response = Some(ResponseModel::new(response));
                self.error = None;
            }
            Err(message) => {
                self.response = None;
                self.error = Some(format!(
                    "Search failed. Is the backend running and accessible? ({})",
                    message
                ));
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::search_response::Product;

    fn empty_session() -> SearchController {
        SearchController::new(SearchState {
            query: String::new(),
            ..Default::default()
        })
    }

    fn product(product_id: &str) -> Product {
        Product {
            product_id: product_id.to_string(),
            title: "Wireless Headphones".to_string(),
            brand: "Sony".to_string(),
            price: 79.99,
            rating: None,
            image_url: None,
        }
    }

    fn response_with(product_id: &str) -> SearchResponse {
        SearchResponse {
            results: vec![product(product_id)],
            ..Default::default()
        }
    }

    #[test]
    fn empty_query_never_dispatches() {
        let mut controller = empty_session();
        assert!(controller.refresh().is_none());
        assert!(controller.toggle_filter("Brand", "Sony").is_none());
        assert!(controller.set_sort(SortOrder::PriceAsc).is_none());
        assert!(controller.set_config(Some(false), None).is_none());
        assert!(!controller.is_loading());
    }

    #[test]
    fn blank_submission_is_a_silent_no_op() {
        let mut controller = empty_session();
        assert!(controller.submit_query("").is_none());
        assert!(controller.submit_query("   ").is_none());
        assert!(controller.state().query.is_empty());
        assert!(!controller.is_loading());
    }

    #[test]
    fn submission_resets_state_and_issues_a_request() {
        let mut controller = SearchController::default();
        controller.toggle_filter("Brand", "Sony");
        controller.set_sort(SortOrder::PriceDesc);

        let issued = controller.submit_query("headphones").unwrap();
        assert_eq!(issued.request.query, "headphones");
        assert!(issued.request.filters.is_empty());
        assert_eq!(issued.request.sort_by, SortOrder::Relevance);
        assert!(controller.is_loading());
        assert!(controller.response().is_none());
    }

    #[test]
    fn sequence_numbers_increase_per_issued_request() {
        let mut controller = SearchController::default();
        let first = controller.submit_query("headphones").unwrap();
        let second = controller.toggle_filter("Brand", "Sony").unwrap();
        let third = controller.set_sort(SortOrder::PriceAsc).unwrap();
        assert!(first.seq < second.seq);
        assert!(second.seq < third.seq);
    }

    #[test]
    fn request_is_a_snapshot_of_current_state() {
        let mut controller = SearchController::default();
        controller.submit_query("headphones");
        controller.set_config(Some(false), None);
        let issued = controller.toggle_filter("Price", "50-100").unwrap();

        assert!(!issued.request.rewrite_on);
        assert!(issued.request.rerank_on);
        assert_eq!(issued.request.top_k, 40);
        assert_eq!(
            issued.request.filters.get("Price"),
            Some(&vec!["50-100".to_string()])
        );
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut controller = SearchController::default();
        let first = controller.submit_query("headphones").unwrap();
        let second = controller.toggle_filter("Brand", "Sony").unwrap();

        controller.apply_result(second.seq, Ok(response_with("newer")));
        assert!(!controller.is_loading());

        // the older request resolves after the newer one was applied
        controller.apply_result(first.seq, Ok(response_with("older")));
        let model = controller.response().unwrap();
        assert_eq!(model.results()[0].product_id, "newer");
        assert!(!controller.is_loading());
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn stale_failure_does_not_disturb_applied_results() {
        let mut controller = SearchController::default();
        let first = controller.submit_query("headphones").unwrap();
        let second = controller.set_sort(SortOrder::PriceAsc).unwrap();

        controller.apply_result(second.seq, Ok(response_with("kept")));
        controller.apply_result(first.seq, Err("connection reset".to_string()));

        assert!(controller.last_error().is_none());
        assert_eq!(controller.response().unwrap().results()[0].product_id, "kept");
    }

    #[test]
    fn stale_resolution_leaves_loading_to_the_newest_request() {
        let mut controller = SearchController::default();
        let first = controller.submit_query("headphones").unwrap();
        let second = controller.toggle_filter("Brand", "Sony").unwrap();

        // the older request resolves while the newer one is still in flight
        controller.apply_result(first.seq, Ok(response_with("older")));
        assert!(controller.is_loading());
        assert!(controller.response().is_none());

        controller.apply_result(second.seq, Ok(response_with("newer")));
        assert!(!controller.is_loading());
        assert_eq!(controller.response().unwrap().results()[0].product_id, "newer");
    }

    #[test]
    fn failure_surfaces_an_error_and_clears_results() {
        let mut controller = SearchController::default();
        let issued = controller.submit_query("headphones").unwrap();
        controller.apply_result(issued.seq, Ok(response_with("p1")));

        let issued = controller.toggle_filter("Brand", "Sony").unwrap();
        assert!(controller.is_loading());
        controller.apply_result(issued.seq, Err("connection refused".to_string()));

        assert!(!controller.is_loading());
        assert!(controller.response().is_none());
        let error = controller.last_error().unwrap();
        assert!(error.contains("Search failed"));
        assert!(error.contains("connection refused"));
    }

    #[test]
    fn success_after_failure_clears_the_error() {
        let mut controller = SearchController::default();
        let issued = controller.submit_query("headphones").unwrap();
        controller.apply_result(issued.seq, Err("timeout".to_string()));
        assert!(controller.last_error().is_some());

        let issued = controller.refresh().unwrap();
        controller.apply_result(issued.seq, Ok(response_with("p1")));
        assert!(controller.last_error().is_none());
        assert_eq!(controller.response().unwrap().result_count(), 1);
    }

    #[test]
    fn zero_matches_is_distinct_from_never_searched() {
        let mut controller = SearchController::default();
        assert!(controller.response().is_none());

        let issued = controller
            .submit_query("cheap wireless headphones under 100 for gym")
            .unwrap();
        assert!(controller.is_loading());

        controller.apply_result(issued.seq, Ok(SearchResponse::default()));
        assert!(!controller.is_loading());
        assert!(controller.last_error().is_none());
        let model = controller.response().unwrap();
        assert_eq!(model.result_count(), 0);
        assert!(model.facets().is_empty());
    }
}
