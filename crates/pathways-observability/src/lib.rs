//! # pathways-observability
//!
//! Structured logging for the network engine. Library crates only emit
//! `tracing` events; binaries and tests call one of the init functions here.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
