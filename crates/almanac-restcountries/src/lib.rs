//! REST Countries backend for Almanac.
//!
//! Implements [`almanac_core::source::CountrySource`] against the public
//! REST Countries v3.1 API (`https://restcountries.com/v3.1`) using an async
//! [`reqwest`] client.

mod client;
mod wire;

pub mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, RestCountries, RestCountriesConfig};
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
