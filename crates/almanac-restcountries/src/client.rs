//! [`RestCountries`] — the HTTP implementation of [`CountrySource`].

use std::time::Duration;

use almanac_core::{
  country::CountryRecord,
  source::{CountrySource, MatchMode},
};
use reqwest::{Client, StatusCode, Url};

use crate::{Error, Result, wire::WireCountry};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for the REST Countries API.
#[derive(Debug, Clone)]
pub struct RestCountriesConfig {
  pub base_url: String,
  /// Upper bound on each lookup, connection to last byte.
  pub timeout:  Duration,
}

impl Default for RestCountriesConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout:  DEFAULT_TIMEOUT,
    }
  }
}

/// Async client for `GET /name/{name}`.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct RestCountries {
  client:   Client,
  base_url: Url,
}

impl RestCountries {
  pub fn new(config: RestCountriesConfig) -> Result<Self> {
    let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(
      |e| Error::InvalidBaseUrl {
        url:    config.base_url.clone(),
        reason: e.to_string(),
      },
    )?;
    if base_url.cannot_be_a_base() {
      return Err(Error::InvalidBaseUrl {
        url:    config.base_url,
        reason: "not a hierarchical URL".to_string(),
      });
    }

    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, base_url })
  }

  /// `{base}/name/{name}`, with `name` percent-encoded as one segment.
  fn name_url(&self, name: &str) -> Url {
    let mut url = self.base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
      segments.pop_if_empty().push("name").push(name);
    }
    url
  }

  /// `GET /name/{name}[?fullText=true]`
  pub async fn by_name(
    &self,
    name: &str,
    mode: MatchMode,
  ) -> Result<Vec<CountryRecord>> {
    let mut request = self.client.get(self.name_url(name));
    if mode == MatchMode::Exact {
      request = request.query(&[("fullText", "true")]);
    }

    let resp = request.send().await?;
    let status = resp.status();

    // REST Countries answers an unknown name with 404.
    if status == StatusCode::NOT_FOUND {
      tracing::debug!(name, %mode, "no countries matched");
      return Ok(Vec::new());
    }
    if !status.is_success() {
      return Err(Error::Status(status));
    }

    let body = resp.bytes().await?;
    let countries: Vec<WireCountry> = serde_json::from_slice(&body)?;
    tracing::debug!(name, %mode, count = countries.len(), "countries matched");
    Ok(countries.into_iter().map(CountryRecord::from).collect())
  }
}

impl CountrySource for RestCountries {
  type Error = Error;

  async fn lookup(
    &self,
    name: &str,
    mode: MatchMode,
  ) -> Result<Vec<CountryRecord>> {
    self.by_name(name, mode).await
  }
}
