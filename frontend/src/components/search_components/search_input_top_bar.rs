use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::pages::search_page::SearchPageState;


#[component]
pub fn SearchInputTopBar() -> Element {
    let page_state = use_context::<SearchPageState>();
    let controller = page_state.controller;
    // the draft text is local until submitted; the controller only sees
    // whole query submissions
    let mut draft_query = use_signal(|| controller.peek().state().query.clone());
    let is_loading = use_memo(move || controller.read().is_loading());

    let submit: Callback<()> = Callback::new(move |_: ()| {
        page_state.submit_query.call(draft_query.peek().clone());
    });
    let search_oninput = move |event: Event<FormData>| {
        draft_query.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            submit(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                flex: 1;
                max-width: 560px;
            ",
            input {
                r#type: "text",
                placeholder: "Search for products...",
                style: "
                    flex: 1;
                    padding: 8px 16px;
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    outline: none;
                    color: #111827;
                    font-size: 16px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{draft_query.read()}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
            button {
                disabled: is_loading(),
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    background-color: #4F46E5;
                    color: white;
                    padding: 8px 20px;
                    border: none;
                    border-radius: 6px;
                    font-weight: 600;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    submit(())
                },
                Icon { icon: MdSearch, style: "width: 18px; height: 18px; color: white;" }
                if is_loading() {
                    "..."
                } else {
                    "Search"
                }
            }
        }
    }
}
