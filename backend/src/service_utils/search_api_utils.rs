//! HTTP client for the external search and ranking service.

use common::{search_request::SearchRequest, search_response::SearchResponse};

fn search_service_base_url() -> String {
    std::env::var("SEARCH_API_URL").unwrap_or("http://localhost:8000".to_string())
}

fn search_endpoint_url(base_url: &str) -> String {
    format!("{}/api/v1/search", base_url)
}

pub async fn search_service_search(request: &SearchRequest) -> anyhow::Result<SearchResponse> {
    let endpoint_url = search_endpoint_url(&search_service_base_url());
    let client = reqwest::Client::new();

    let t0 = std::time::Instant::now();
    let response = client.post(endpoint_url).json(request).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis() as u32;
    tracing::debug!(
        response_len = response_txt.len(),
        took_ms = dt_ms,
        "search service responded"
    );
    let response: SearchResponse = serde_json::from_str(&response_txt)?;
    Ok(response)
}
