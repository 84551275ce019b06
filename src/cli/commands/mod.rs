//! cli::commands
//!
//! Command handlers.

pub mod open;
