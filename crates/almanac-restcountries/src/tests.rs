//! Client tests against an in-process fake of the REST Countries API.

use std::{collections::HashMap, time::Duration};

use almanac_core::{
  QueryAnswerer,
  resolve::{Resolution, resolve},
  source::MatchMode,
};
use axum::{
  Router,
  extract::{Path, Query},
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::get,
};
use tokio::net::TcpListener;

use crate::{Error, RestCountries, RestCountriesConfig};

const KENYA: &str = r#"[{
  "name": { "common": "Kenya", "official": "Republic of Kenya" },
  "capital": ["Nairobi"],
  "population": 53771300,
  "currencies": { "KES": { "name": "Kenyan shilling", "symbol": "Sh" } },
  "region": "Africa"
}]"#;

const UNITED: &str = r#"[
  { "name": { "common": "United Kingdom" }, "capital": ["London"] },
  { "name": { "common": "United States" }, "capital": ["Washington, D.C."] }
]"#;

const NOT_FOUND: &str = r#"{ "status": 404, "message": "Not Found" }"#;

/// `GET /v3.1/name/{name}` with canned answers keyed on name and mode.
async fn by_name(
  Path(name): Path<String>,
  Query(params): Query<HashMap<String, String>>,
) -> Response {
  let exact = params.get("fullText").is_some_and(|v| v == "true");
  match (name.as_str(), exact) {
    ("kenya", true) => (StatusCode::OK, KENYA).into_response(),
    ("united", false) => (StatusCode::OK, UNITED).into_response(),
    ("united kingdom", true) => (StatusCode::OK, UNITED).into_response(),
    ("garbled", _) => (StatusCode::OK, "<html>oops</html>").into_response(),
    ("teapot", _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    ("slow", _) => {
      tokio::time::sleep(Duration::from_secs(2)).await;
      (StatusCode::OK, KENYA).into_response()
    }
    _ => (StatusCode::NOT_FOUND, NOT_FOUND).into_response(),
  }
}

/// Serve the fake API on an ephemeral port and return a client for it.
async fn client_with_timeout(timeout: Duration) -> RestCountries {
  let app = Router::new().route("/v3.1/name/{name}", get(by_name));
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });

  RestCountries::new(RestCountriesConfig {
    base_url: format!("http://{addr}/v3.1/"),
    timeout,
  })
  .expect("client")
}

async fn client() -> RestCountries {
  client_with_timeout(Duration::from_secs(5)).await
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn exact_lookup_sends_full_text() {
  let c = client().await;

  let found = c.by_name("kenya", MatchMode::Exact).await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].name, "Kenya");
  assert_eq!(found[0].capital, vec!["Nairobi".to_string()]);

  // The fake only knows "kenya" in exact mode.
  let partial = c.by_name("kenya", MatchMode::Partial).await.unwrap();
  assert!(partial.is_empty());
}

#[tokio::test]
async fn partial_lookup_returns_all_matches_in_order() {
  let found = client()
    .await
    .by_name("united", MatchMode::Partial)
    .await
    .unwrap();
  let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, vec!["United Kingdom", "United States"]);
}

#[tokio::test]
async fn names_with_spaces_are_encoded() {
  let found = client()
    .await
    .by_name("united kingdom", MatchMode::Exact)
    .await
    .unwrap();
  assert_eq!(found[0].name, "United Kingdom");
}

#[tokio::test]
async fn not_found_is_empty_not_an_error() {
  let found = client()
    .await
    .by_name("wakanda", MatchMode::Exact)
    .await
    .unwrap();
  assert!(found.is_empty());
}

#[tokio::test]
async fn server_error_is_an_error() {
  let err = client()
    .await
    .by_name("teapot", MatchMode::Exact)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn malformed_body_is_an_error() {
  let err = client()
    .await
    .by_name("garbled", MatchMode::Partial)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Malformed(_)));
}

#[tokio::test]
async fn slow_response_times_out() {
  let c = client_with_timeout(Duration::from_millis(100)).await;
  let err = c.by_name("slow", MatchMode::Exact).await.unwrap_err();
  assert!(matches!(err, Error::Http(ref e) if e.is_timeout()), "{err}");
}

#[test]
fn rejects_unusable_base_url() {
  let err = RestCountries::new(RestCountriesConfig {
    base_url: "not a url".into(),
    ..Default::default()
  })
  .unwrap_err();
  assert!(matches!(err, Error::InvalidBaseUrl { .. }));
}

// ─── Through the pipeline ────────────────────────────────────────────────────

#[tokio::test]
async fn resolver_falls_back_to_partial_over_http() {
  let c = client().await;
  match resolve(&c, Some("united")).await {
    Resolution::Found(record) => assert_eq!(record.name, "United Kingdom"),
    Resolution::NotFound => panic!("expected a partial match"),
  }
}

#[tokio::test]
async fn unreachable_source_reads_as_not_found() {
  // Nothing listens on port 9 locally; the connection is refused.
  let c = RestCountries::new(RestCountriesConfig {
    base_url: "http://127.0.0.1:9/v3.1".into(),
    timeout:  Duration::from_secs(1),
  })
  .unwrap();

  let answer = QueryAnswerer::new(c)
    .answer("What is the capital of Kenya?")
    .await;
  assert!(answer.starts_with("No data found for 'Kenya'"), "{answer}");
}

#[tokio::test]
async fn answers_end_to_end() {
  let answer = QueryAnswerer::new(client().await)
    .answer("What is the capital of Kenya?")
    .await;
  assert_eq!(answer, "The capital of Kenya is Nairobi.");
}
