//! Core components of the `jquants-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`JqClient`] and its builder.
//! - The primary [`JqError`] type.
//! - Internal networking: request pacing, retry/backoff, and the
//!   invalidate-and-reauthenticate path for rejected tokens.

/// The main client (`JqClient`), builder, and configuration.
pub mod client;
/// The primary error type (`JqError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::JqClient`
pub use client::{JqClient, JqClientBuilder};
pub use error::JqError;
