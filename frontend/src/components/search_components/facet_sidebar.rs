//! Facet filter sidebar with value/count checkbox rows.

use dioxus::prelude::*;

use common::search_response::{Bucket, Facet};

use crate::pages::search_page::SearchPageState;


#[component]
pub fn FacetSidebar() -> Element {
    let page_state = use_context::<SearchPageState>();
    let controller = page_state.controller;
    let facets = use_memo(move || {
        controller
            .read()
            .response()
            .map(|model| model.facets().to_vec())
            .unwrap_or_default()
    });

    rsx! {
        div {
            id: "x-search-facet-sidebar",
            style: "
                background-color: white;
                padding: 16px;
                border-radius: 8px;
                box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1);
            ",
            h2 {
                style: "font-size: 18px; font-weight: 700; color: #1F2937; margin-bottom: 8px;",
                "Filters"
            }
            if facets.read().is_empty() {
                p {
                    style: "font-size: 14px; color: #6B7280;",
                    "Perform a search to see available filters."
                }
            }
            for facet in facets.read().iter().cloned() {
                FacetGroup { key: "{facet.name}", facet }
            }
        }
    }
}

#[component]
fn FacetGroup(facet: Facet) -> Element {
    rsx! {
        div {
            style: "padding: 12px 0; border-bottom: 1px solid #E5E7EB;",
            h3 {
                style: "font-weight: 600; color: #1F2937; margin-bottom: 8px;",
                "{facet.name}"
            }
            ul {
                style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 4px;",
                for bucket in facet.buckets.iter().cloned() {
                    FacetValueRow {
                        key: "{bucket.value}",
                        facet_name: facet.name.clone(),
                        bucket,
                    }
                }
            }
        }
    }
}

#[component]
fn FacetValueRow(facet_name: String, bucket: Bucket) -> Element {
    let page_state = use_context::<SearchPageState>();
    let controller = page_state.controller;
    let selected = {
        let facet_name = facet_name.clone();
        let value = bucket.value.clone();
        use_memo(move || controller.read().state().is_filter_selected(&facet_name, &value))
    };
    let toggle = {
        let facet_name = facet_name.clone();
        let value = bucket.value.clone();
        move |_: Event<FormData>| {
            page_state.toggle_filter.call((facet_name.clone(), value.clone()));
        }
    };

    rsx! {
        li {
            label {
                style: "display: flex; align-items: center; gap: 8px; font-size: 14px; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: selected(),
                    onchange: toggle,
                }
                span {
                    style: "color: #374151;",
                    "{bucket.value}"
                }
                span {
                    style: "margin-left: auto; font-size: 12px; color: #6B7280;",
                    "{bucket.count}"
                }
            }
        }
    }
}
