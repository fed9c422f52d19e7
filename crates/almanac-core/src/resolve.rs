//! Country data resolution: candidate name → [`CountryRecord`].
//!
//! Tries an exact-name lookup first and falls back to a partial match. Every
//! failure mode (no match, unreachable source, timeout, malformed response)
//! collapses to [`Resolution::NotFound`]; the distinction survives only in
//! the logs.

use crate::{
  country::CountryRecord,
  source::{CountrySource, MatchMode},
};

/// The outcome of resolving a candidate name.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
  Found(CountryRecord),
  NotFound,
}

impl Resolution {
  pub fn into_record(self) -> Option<CountryRecord> {
    match self {
      Self::Found(record) => Some(record),
      Self::NotFound => None,
    }
  }
}

const STRATEGIES: [MatchMode; 2] = [MatchMode::Exact, MatchMode::Partial];

/// Resolve `candidate` against `source`. At most two lookups are made; none
/// when the candidate is absent or blank.
pub async fn resolve<S>(source: &S, candidate: Option<&str>) -> Resolution
where
  S: CountrySource,
{
  let Some(name) = candidate.map(str::trim).filter(|n| !n.is_empty()) else {
    tracing::debug!("no candidate name; skipping lookup");
    return Resolution::NotFound;
  };

  for mode in STRATEGIES {
    match source.lookup(name, mode).await {
      Ok(records) => {
        if let Some(record) = records.into_iter().next() {
          tracing::debug!(%mode, name, resolved = %record.name, "country resolved");
          return Resolution::Found(record);
        }
        tracing::debug!(%mode, name, "no match");
      }
      Err(e) => {
        tracing::warn!(%mode, name, error = %e, "country lookup failed");
      }
    }
  }

  Resolution::NotFound
}
