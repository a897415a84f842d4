//! Checkboxes for the per-request backend feature toggles.

use dioxus::prelude::*;

use crate::pages::search_page::SearchPageState;


#[component]
pub fn FeatureToggleControls() -> Element {
    let page_state = use_context::<SearchPageState>();
    let controller = page_state.controller;
    let rewrite_on = use_memo(move || controller.read().state().config.rewrite_on);
    let rerank_on = use_memo(move || controller.read().state().config.rerank_on);

    rsx! {
        div {
            id: "x-search-feature-toggles",
            style: "
                display: flex;
                align-items: center;
                gap: 16px;
                background-color: white;
                padding: 10px 14px;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                white-space: nowrap;
            ",
            label {
                style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: #374151; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: rewrite_on(),
                    onchange: move |_| {
                        page_state.set_config.call((Some(!*rewrite_on.peek()), None));
                    },
                }
                span { "Query Rewrite" }
            }
            label {
                style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: #374151; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: rerank_on(),
                    onchange: move |_| {
                        page_state.set_config.call((None, Some(!*rerank_on.peek())));
                    },
                }
                span { "Neural Rerank" }
            }
        }
    }
}
