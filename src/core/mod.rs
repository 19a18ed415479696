// Stocklist - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library plus pure-data crates (chrono, serde).
// Must NOT depend on: app or platform layers, or any I/O beyond the
// Write trait objects handed to export.

pub mod export;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;
pub mod validate;
