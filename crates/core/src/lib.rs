//! Kemomimi inventory core: record schema, list query pipeline,
//! registration payloads, and form state.
//!
//! This crate performs no I/O so every piece can be tested against plain
//! in-memory fixtures.

pub mod error;
pub mod form;
pub mod models;
pub mod query;
pub mod registration;
pub mod types;
