//! Shared constants for the search client.

/// Maximum number of results requested per search call.
pub const TOP_K: u32 = 40;

/// Facet whose selection holds at most one value at a time.
pub const PRICE_FACET_NAME: &'static str = "Price";

/// Query preloaded into the search box at session start.
pub const DEFAULT_SESSION_QUERY: &'static str = "cheap wireless headphones under 100 for gym";
