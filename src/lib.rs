// Stocklist - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// programmatic use. The catalog store is single-actor: it is not safe for
// concurrent access from multiple threads without external
// synchronisation.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
