//! Product search page: controller wiring and layout.

use dioxus::prelude::*;

use common::search_request::SortOrder;

use crate::api::search_api::search_products;
use crate::components::search_components::{
    facet_sidebar::FacetSidebar, feature_toggle_controls::FeatureToggleControls,
    search_input_top_bar::SearchInputTopBar, search_result_grid::SearchResultGrid,
};
use crate::controller::orchestrator::{IssuedSearch, SearchController};


/// Controller handle and mutation callbacks shared with the search
/// components below this page.
#[derive(Clone, Copy)]
pub struct SearchPageState {
    pub controller: Signal<SearchController>,
    pub submit_query: Callback<String>,
    pub toggle_filter: Callback<(String, String)>,
    pub set_sort: Callback<SortOrder>,
    pub set_config: Callback<(Option<bool>, Option<bool>)>,
}

/// Runs one issued request to completion and feeds the outcome back
/// through the controller's staleness check. Overlapping calls are
/// fine; the sequence number decides which response wins.
fn run_search(mut controller: Signal<SearchController>, issued: Option<IssuedSearch>) {
    let Some(IssuedSearch { seq, request }) = issued else {
        return;
    };
    spawn(async move {
        let result = search_products(request).await;
        controller
            .write()
            .apply_result(seq, result.map_err(|e| e.to_string()));
    });
}

#[component]
pub fn SearchPage() -> Element {
    let mut controller = use_signal(SearchController::default);

    // one search for the default session query on mount; later requests
    // go out from the mutation callbacks below
    use_future(move || async move {
        let issued = controller.write().refresh();
        run_search(controller, issued);
    });

    let submit_query = Callback::new(move |text: String| {
        let issued = controller.write().submit_query(&text);
        run_search(controller, issued);
    });
    let toggle_filter = Callback::new(move |(facet_name, value): (String, String)| {
        let issued = controller.write().toggle_filter(&facet_name, &value);
        run_search(controller, issued);
    });
    let set_sort = Callback::new(move |sort: SortOrder| {
        let issued = controller.write().set_sort(sort);
        run_search(controller, issued);
    });
    let set_config = Callback::new(move |(rewrite_on, rerank_on): (Option<bool>, Option<bool>)| {
        let issued = controller.write().set_config(rewrite_on, rerank_on);
        run_search(controller, issued);
    });

    use_context_provider(move || SearchPageState {
        controller,
        submit_query,
        toggle_filter,
        set_sort,
        set_config,
    });

    rsx! {
        Title { "Product Search" }
        div {
            id: "x-search-page-root",
            style: "
                min-height: 100vh;
                background-color: #F3F4F6;
                font-family: Roboto, sans-serif;
            ",
            header {
                id: "x-search-page-header",
                style: "
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    background-color: white;
                    box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.1);
                ",
                div {
                    style: "
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 16px 32px;
                        display: flex;
                        flex-direction: row;
                        justify-content: space-between;
                        align-items: center;
                        gap: 16px;
                    ",
                    h1 {
                        style: "font-size: 24px; font-weight: 700; color: #1F2937; white-space: nowrap;",
                        "Product Search"
                    }
                    SearchInputTopBar {}
                    FeatureToggleControls {}
                }
            }

            main {
                style: "
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 24px 32px;
                    display: flex;
                    flex-direction: row;
                    gap: 32px;
                    align-items: flex-start;
                ",
                aside {
                    style: "width: 25%; min-width: 220px;",
                    FacetSidebar {}
                }
                div {
                    style: "flex: 1;",
                    SearchResultGrid {}
                }
            }
        }
    }
}
