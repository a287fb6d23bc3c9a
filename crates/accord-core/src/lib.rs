//! Core types and trait definitions for the Accord consent platform.
//!
//! This crate is deliberately free of I/O and runtime dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod consent;
pub mod dataset;
pub mod error;
pub mod profile;
pub mod store;

pub use error::{Error, ErrorKind, Result};
