//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_request;
pub mod search_response;
pub mod search_const;
