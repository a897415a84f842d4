//! Clients for external services.

pub mod search_api_utils;
