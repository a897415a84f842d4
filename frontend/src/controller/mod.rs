//! Controller layer: search state, request building, and response orchestration.

pub mod search_state;
pub mod request_builder;
pub mod response_model;
pub mod orchestrator;
