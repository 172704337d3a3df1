// src/app/mod.rs
//! Application module - browser state, history, and key handling.

pub mod state;

// Re-export the App struct
pub use state::{App, KeyOutcome};
