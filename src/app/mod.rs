// Stocklist - app/mod.rs
//
// Application layer: session state and the interactive command loop.

pub mod repl;
pub mod state;
