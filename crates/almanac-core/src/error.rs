//! Error types for `almanac-core`.
//!
//! The `Display` text of each variant is the sentence shown to the person
//! who asked the question; [`crate::QueryAnswerer::answer`] returns it as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(
    "I couldn't identify a country in your question. Try something like \
     'What is the capital of Ghana?'."
  )]
  NoCountryIdentified,

  /// Covers unknown names as well as an unreachable or misbehaving source.
  #[error(
    "No data found for '{0}'. It may not be a recognised country, or the \
     country data service could not be reached."
  )]
  CountryNotFound(String),

  #[error("The {field} of {country} is not available.")]
  FieldNotAvailable {
    country: String,
    field:   &'static str,
  },

  #[error("Only limited data is available for {0}.")]
  LimitedData(String),

  #[error("text completion failed: {0}")]
  Completion(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Whether the record was found but lacked what was asked for.
  pub fn is_missing_data(&self) -> bool {
    matches!(self, Self::FieldNotAvailable { .. } | Self::LimitedData(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
