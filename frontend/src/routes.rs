use dioxus::prelude::*;

use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    SearchPage {},
}
