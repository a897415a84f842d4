//! Components for the search page.

pub mod search_input_top_bar;
pub mod feature_toggle_controls;
pub mod facet_sidebar;
pub mod search_result_grid;
pub mod query_rewrite_panel;
