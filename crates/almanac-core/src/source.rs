//! The `CountrySource` trait — where country records come from.
//!
//! Implemented by data-source backends (e.g. `almanac-restcountries`). The
//! resolver and the answering facade depend on this abstraction, not on any
//! concrete HTTP client.

use std::future::Future;

use strum::Display;

use crate::country::CountryRecord;

/// How a source should match the requested name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MatchMode {
  /// The name must equal a country's full name (case-insensitive).
  Exact,
  /// The name may appear anywhere in a country's name.
  Partial,
}

/// A lookup-by-name country data service.
///
/// All methods return `Send` futures so a source can be shared across tasks
/// in a multi-threaded runtime (e.g. behind `axum`).
pub trait CountrySource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every country matching `name` under `mode`, in source order.
  ///
  /// "No such country" is an empty vector, not an error. Errors are reserved
  /// for transport failures, timeouts and malformed responses.
  fn lookup<'a>(
    &'a self,
    name: &'a str,
    mode: MatchMode,
  ) -> impl Future<Output = Result<Vec<CountryRecord>, Self::Error>> + Send + 'a;
}

impl<S: CountrySource> CountrySource for std::sync::Arc<S> {
  type Error = S::Error;

  fn lookup<'a>(
    &'a self,
    name: &'a str,
    mode: MatchMode,
  ) -> impl Future<Output = Result<Vec<CountryRecord>, Self::Error>> + Send + 'a
  {
    (**self).lookup(name, mode)
  }
}
