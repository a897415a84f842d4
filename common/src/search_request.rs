//! Shared search request models sent to the search service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [Self::Relevance, Self::PriceAsc, Self::PriceDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }

    /// Parses the wire name, falling back to relevance for anything else.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            _ => Self::Relevance,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }
}


// Field order matches the search service contract; together with the
// BTreeMap filters it makes the serialized payload deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub rewrite_on: bool,
    pub rerank_on: bool,
    pub top_k: u32,
    pub filters: BTreeMap<String, Vec<String>>,
    pub sort_by: SortOrder,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_wire_names_round_trip() {
        for sort in SortOrder::ALL {
            assert_eq!(SortOrder::from_wire(sort.as_str()), sort);
        }
        assert_eq!(SortOrder::from_wire("rating"), SortOrder::Relevance);
    }

    #[test]
    fn request_serializes_in_contract_order() {
        let request = SearchRequest {
            query: "foo".to_string(),
            rewrite_on: true,
            rerank_on: false,
            top_k: 40,
            filters: BTreeMap::from([("Brand".to_string(), vec!["Sony".to_string()])]),
            sort_by: SortOrder::PriceAsc,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"query":"foo","rewrite_on":true,"rerank_on":false,"top_k":40,"filters":{"Brand":["Sony"]},"sort_by":"price_asc"}"#
        );
    }

    #[test]
    fn equal_requests_serialize_identically() {
        let request = SearchRequest {
            query: "wireless headphones".to_string(),
            rewrite_on: true,
            rerank_on: true,
            top_k: 40,
            filters: BTreeMap::from([
                ("Brand".to_string(), vec!["Bose".to_string(), "Sony".to_string()]),
                ("Price".to_string(), vec!["50-100".to_string()]),
            ]),
            sort_by: SortOrder::Relevance,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            serde_json::to_string(&request.clone()).unwrap()
        );
    }
}
