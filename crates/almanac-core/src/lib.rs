//! Core types and the question-answering pipeline for Almanac.
//!
//! This crate is deliberately free of HTTP dependencies. Country data and
//! text completion are reached through the [`source::CountrySource`] and
//! [`respond::TextCompletion`] traits; backend crates implement them.
//!
//! The pipeline runs strictly forward:
//! query → ([`extract`], [`classify`]) → [`resolve`] → [`format`] → answer,
//! composed by [`answer::QueryAnswerer`].

// Trait methods return `impl Future + Send`; impls use plain `async fn`.
#![allow(async_fn_in_trait)]

pub mod answer;
pub mod classify;
pub mod country;
pub mod error;
pub mod extract;
pub mod format;
pub mod intent;
pub mod resolve;
pub mod respond;
pub mod source;


pub use answer::QueryAnswerer;
pub use error::{Error, Result};
