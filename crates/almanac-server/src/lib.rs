//! HTTP surface for Almanac.
//!
//! Exposes an axum [`Router`] that answers country questions as plain text.
//! Each request runs its own pass through the shared, stateless
//! [`QueryAnswerer`]; no coordination between requests is needed.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/answer?q=<question>` | `text/plain` answer |
//! | `POST` | `/answer` | Body: the question as plain text |
//! | `GET`  | `/health` | `200 ok` |

use std::{sync::Arc, time::Duration};

use almanac_core::{
  QueryAnswerer, respond::TextCompletion, source::CountrySource,
};
use axum::{
  Router,
  extract::{Query, State},
  routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ALMANAC_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  /// REST Countries base URL, e.g. `https://restcountries.com/v3.1`.
  pub countries_url:    String,
  pub timeout_secs:     u64,
  /// Enables the language-model responder when set.
  pub llm_api_key:      Option<String>,
  pub llm_url:          String,
  pub llm_model:        String,
  pub llm_timeout_secs: u64,
}

impl ServerConfig {
  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

  pub fn llm_timeout(&self) -> Duration {
    Duration::from_secs(self.llm_timeout_secs)
  }

  /// The API key, if one is configured and non-blank.
  pub fn llm_api_key(&self) -> Option<&str> {
    self
      .llm_api_key
      .as_deref()
      .map(str::trim)
      .filter(|k| !k.is_empty())
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] around a shared answerer.
pub fn router<S, C>(answerer: Arc<QueryAnswerer<S, C>>) -> Router
where
  S: CountrySource + 'static,
  C: TextCompletion + 'static,
{
  Router::new()
    .route("/answer", get(answer_query::<S, C>).post(answer_body::<S, C>))
    .route("/health", get(health))
    .layer(TraceLayer::new_for_http())
    .with_state(answerer)
}

#[derive(Debug, Deserialize)]
pub struct AnswerParams {
  /// The question, e.g. `What is the capital of Kenya?`.
  pub q: String,
}

/// `GET /answer?q=<question>`
async fn answer_query<S, C>(
  State(answerer): State<Arc<QueryAnswerer<S, C>>>,
  Query(params): Query<AnswerParams>,
) -> String
where
  S: CountrySource + 'static,
  C: TextCompletion + 'static,
{
  answerer.answer(&params.q).await
}

/// `POST /answer` with the question as the body.
async fn answer_body<S, C>(
  State(answerer): State<Arc<QueryAnswerer<S, C>>>,
  body: String,
) -> String
where
  S: CountrySource + 'static,
  C: TextCompletion + 'static,
{
  answerer.answer(&body).await
}

async fn health() -> &'static str { "ok" }

// ─── Integration tests ────────────────────────────────────────────────────────
