//! Search endpoint relaying product queries to the search service.

use common::{search_request::SearchRequest, search_response::SearchResponse};

use crate::service_utils::search_api_utils::search_service_search;

/// Forwards the request to the search service unchanged. Query
/// semantics (rewriting, ranking, filtering, facet counts) all live on
/// the service side.
pub async fn search_products(request: SearchRequest) -> anyhow::Result<SearchResponse> {
    let t0 = std::time::Instant::now();
    let response = search_service_search(&request).await?;
    tracing::info!(
        query = %request.query,
        result_count = response.results.len(),
        took_ms = t0.elapsed().as_millis() as u64,
        "search relay complete"
    );
    Ok(response)
}
