//! Chat-completion backend for Almanac.
//!
//! Implements [`almanac_core::respond::TextCompletion`] against any
//! OpenAI-compatible `/chat/completions` endpoint.

mod client;

pub mod error;

pub use client::{ChatClient, ChatConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
