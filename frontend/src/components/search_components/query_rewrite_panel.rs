//! Panel showing how the service rewrote the query and which filters
//! it extracted.

use dioxus::prelude::*;

use common::search_response::RewrittenQuery;


#[component]
pub fn QueryRewritePanel(rewrite: RewrittenQuery) -> Element {
    rsx! {
        div {
            id: "x-query-rewrite-panel",
            style: "
                display: flex;
                flex-wrap: wrap;
                gap: 16px 32px;
                background-color: white;
                padding: 16px;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
                margin-bottom: 16px;
            ",
            div {
                div {
                    style: "font-size: 12px; font-weight: 600; color: #6B7280; text-transform: uppercase; letter-spacing: 0.05em;",
                    "Rewritten Query"
                }
                div {
                    style: "font-weight: 500; color: #4338CA;",
                    "{rewrite.rewritten}"
                }
            }
            if !rewrite.filters.is_empty() {
                div {
                    div {
                        style: "font-size: 12px; font-weight: 600; color: #6B7280; text-transform: uppercase; letter-spacing: 0.05em;",
                        "Extracted Filters"
                    }
                    div {
                        style: "display: flex; gap: 8px; margin-top: 4px;",
                        for (name, value) in rewrite.filters.iter() {
                            span {
                                key: "{name}",
                                style: "background-color: #F3F4F6; padding: 4px 8px; border-radius: 6px; font-size: 14px; font-family: monospace;",
                                "{name}: {value}"
                            }
                        }
                    }
                }
            }
        }
    }
}
