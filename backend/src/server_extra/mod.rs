//! Extra axum routes mounted next to the server functions.

pub mod health_check;
