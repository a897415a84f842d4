//! Search results area: product grid, skeleton cards, sort control, and
//! the empty and error states.

use dioxus::prelude::*;

use common::search_request::SortOrder;
use common::search_response::Product;

use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::search_components::query_rewrite_panel::QueryRewritePanel;
use crate::pages::search_page::SearchPageState;


const PLACEHOLDER_IMAGE_URL: &'static str = "https://via.placeholder.com/200x150?text=No+Image";
const SKELETON_CARD_COUNT: usize = 9;

const GRID_STYLE: &'static str = "
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 24px;
";

const EMPTY_STATE_STYLE: &'static str = "
    text-align: center;
    padding: 40px 0;
    color: #6B7280;
";


#[component]
pub fn SearchResultGrid() -> Element {
    let page_state = use_context::<SearchPageState>();
    let controller = page_state.controller;
    let controller_ref = controller.read();

    // loading, failed, never-searched, zero-matches, and results are
    // mutually exclusive display states
    if controller_ref.is_loading() {
        return rsx! {
            div {
                id: "x-search-skeleton-grid",
                style: GRID_STYLE,
                for i in 0..SKELETON_CARD_COUNT {
                    SkeletonCard { key: "{i}" }
                }
            }
        };
    }

    if let Some(error_txt) = controller_ref.last_error() {
        return rsx! {
            ComponentErrorDisplay { error_txt: error_txt.to_string() }
        };
    }

    let Some(model) = controller_ref.response() else {
        return rsx! {
            div {
                style: EMPTY_STATE_STYLE,
                "Enter a query to start searching."
            }
        };
    };

    let result_count = model.result_count();
    let timing_suffix = model.search_time_line();
    let results = model.results().to_vec();
    let rewrite_info = model
        .rewrite_info()
        .filter(|rewrite| !rewrite.rewritten.is_empty())
        .cloned();

    rsx! {
        div {
            id: "x-search-results-section",
            div {
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 16px;
                    background-color: white;
                    padding: 12px;
                    border-radius: 8px;
                    box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
                ",
                div {
                    style: "font-size: 14px; color: #374151;",
                    "Found "
                    span { style: "font-weight: 700;", "{result_count}" }
                    " results{timing_suffix}"
                }
                SortDropdown {}
            }

            if let Some(rewrite) = rewrite_info {
                QueryRewritePanel { rewrite }
            }

            if results.is_empty() {
                div {
                    style: EMPTY_STATE_STYLE,
                    "No results found. Try adjusting your search or filters."
                }
            } else {
                div {
                    id: "x-search-results-grid",
                    style: GRID_STYLE,
                    for product in results.iter().cloned() {
                        ProductCard { key: "{product.product_id}", product }
                    }
                }
            }
        }
    }
}

#[component]
fn SortDropdown() -> Element {
    let page_state = use_context::<SearchPageState>();
    let controller = page_state.controller;
    let current_sort = use_memo(move || controller.read().state().sort);

    rsx! {
        select {
            id: "x-search-sort-dropdown",
            style: "
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                padding: 6px 10px;
                font-size: 14px;
                color: #374151;
                background-color: white;
            ",
            value: "{current_sort().as_str()}",
            onchange: move |event: Event<FormData>| {
                page_state.set_sort.call(SortOrder::from_wire(&event.value()));
            },
            for sort in SortOrder::ALL {
                option {
                    value: "{sort.as_str()}",
                    "{sort.display_name()}"
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let image_src = product
        .image_url
        .clone()
        .unwrap_or(PLACEHOLDER_IMAGE_URL.to_string());
    let price_text = format!("${:.2}", product.price);
    let rating_badge = product.rating.map(|rating| format!("⭐ {}", rating));

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1);
                overflow: hidden;
            ",
            img {
                src: "{image_src}",
                alt: "{product.title}",
                style: "
                    width: 100%;
                    height: 192px;
                    object-fit: contain;
                    background-color: #F9FAFB;
                    padding: 8px;
                    box-sizing: border-box;
                ",
            }
            div {
                style: "display: flex; flex-direction: column; flex-grow: 1; padding: 16px;",
                div {
                    style: "flex-grow: 1; margin-bottom: 8px;",
                    div {
                        style: "font-size: 12px; color: #6B7280; margin-bottom: 4px;",
                        "{product.brand}"
                    }
                    h3 {
                        style: "font-size: 14px; font-weight: 600; color: #1F2937; margin: 0;",
                        "{product.title}"
                    }
                }
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; margin-top: 8px;",
                    div {
                        style: "font-size: 20px; font-weight: 700; color: #111827;",
                        "{price_text}"
                    }
                    if let Some(rating_badge) = rating_badge {
                        div {
                            style: "font-size: 14px; color: #4B5563; background-color: #FEF9C3; padding: 4px 8px; border-radius: 9999px;",
                            "{rating_badge}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkeletonCard() -> Element {
    rsx! {
        div {
            style: "
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1);
                overflow: hidden;
            ",
            div { style: "width: 100%; height: 192px; background-color: #E5E7EB;" }
            div {
                style: "padding: 16px;",
                div { style: "height: 12px; width: 25%; background-color: #E5E7EB; border-radius: 4px; margin-bottom: 8px;" }
                div { style: "height: 16px; width: 75%; background-color: #E5E7EB; border-radius: 4px; margin-bottom: 16px;" }
                div {
                    style: "display: flex; align-items: center; justify-content: space-between;",
                    div { style: "height: 24px; width: 33%; background-color: #E5E7EB; border-radius: 4px;" }
                    div { style: "height: 24px; width: 25%; background-color: #E5E7EB; border-radius: 4px;" }
                }
            }
        }
    }
}
