//! Error type for `almanac-restcountries`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid base URL {url:?}: {reason}")]
  InvalidBaseUrl { url: String, reason: String },

  /// Connection failures and timeouts.
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("unexpected status {0}")]
  Status(reqwest::StatusCode),

  #[error("malformed response: {0}")]
  Malformed(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
