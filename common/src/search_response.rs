//! Shared search response models returned by the search service.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchResponse {
    pub results: Vec<Product>,
    pub facets: Vec<Facet>,
    pub search_time: Option<f64>,
    pub rewritten_query: Option<RewrittenQuery>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub title: String,
    pub brand: String,
    pub price: f64,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub buckets: Vec<Bucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub value: String,
    pub count: u64,
}

/// How the service rewrote the query and which filters it extracted,
/// reported when query rewriting is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RewrittenQuery {
    pub rewritten: String,
    pub filters: BTreeMap<String, RewriteFilterValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RewriteFilterValue {
    Number(f64),
    Text(String),
    TextList(Vec<String>),
}

impl fmt::Display for RewriteFilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::TextList(values) => write!(f, "{}", values.join(", ")),
        }
    }
}
