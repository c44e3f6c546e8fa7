//! promline CLI library entry.
//!
//! Wires the strict snapshot loader, logging setup and exposition output
//! around `promline-core`. Consumed by the `promline` binary and by
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod export;
pub mod obs;
pub mod opts;

pub use error::{ConfigError, Result};
