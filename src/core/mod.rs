//! Core components of the `screener-check` crate.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`ScreenerClient`] with its builder and relay list.
//! - The primary [`ScreenerError`] type.
//! - Internal networking helpers.

/// The client (`ScreenerClient`), builder, and relay configuration.
pub mod client;
/// The primary error type (`ScreenerError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::ScreenerClient`
pub use client::{Relay, ScreenerClient, ScreenerClientBuilder};
pub use error::ScreenerError;
