//! Client API calls for search endpoints.

use common::{search_request::SearchRequest, search_response::SearchResponse};
use dioxus::prelude::*;




#[server]
pub async fn search_products(request: SearchRequest) -> Result<SearchResponse, ServerFnError> {
    let x = backend::api::search::search_products(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
