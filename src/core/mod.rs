//! core
//!
//! Configuration loading and schema.

pub mod config;
