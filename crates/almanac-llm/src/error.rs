//! Error type for `almanac-llm`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("completion API returned {status}: {body}")]
  Status {
    status: reqwest::StatusCode,
    body:   String,
  },

  #[error("completion API returned no choices")]
  NoChoices,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
