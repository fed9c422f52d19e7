//! The question-answering facade.
//!
//! Plain composition: extract → classify → resolve → format, with an
//! optional hand-off to a [`ContextResponder`].

use crate::{
  Error, Result,
  country::CountryRecord,
  format::render_fact,
  intent::{ExtractedIntent, FactCategory},
  resolve::{Resolution, resolve},
  respond::{ContextResponder, NoCompletion, TextCompletion},
  source::CountrySource,
};

/// Answers free-text questions about countries.
///
/// Holds no per-query state; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct QueryAnswerer<S, C = NoCompletion> {
  source:    S,
  responder: Option<ContextResponder<C>>,
}

impl<S: CountrySource> QueryAnswerer<S> {
  /// An answerer that only uses the fixed fact templates.
  pub fn new(source: S) -> Self {
    Self {
      source,
      responder: None,
    }
  }

  /// Defer open-ended and unanswerable questions to `completion`.
  pub fn with_completion<C: TextCompletion>(
    self,
    completion: C,
  ) -> QueryAnswerer<S, C> {
    QueryAnswerer {
      source:    self.source,
      responder: Some(ContextResponder::new(completion)),
    }
  }
}

impl<S, C> QueryAnswerer<S, C>
where
  S: CountrySource,
  C: TextCompletion,
{
  pub fn source(&self) -> &S { &self.source }

  /// Answer `query`. Always returns a non-empty, human-readable sentence;
  /// failures are reported in the same register as answers.
  pub async fn answer(&self, query: &str) -> String {
    match self.try_answer(query).await {
      Ok(answer) => answer,
      Err(e) => e.to_string(),
    }
  }

  /// Answer `query`, keeping failures typed.
  ///
  /// Errors are [`Error::NoCountryIdentified`], [`Error::CountryNotFound`],
  /// or the formatter's missing-data errors.
  pub async fn try_answer(&self, query: &str) -> Result<String> {
    let intent = ExtractedIntent::from_query(query);
    tracing::debug!(
      candidate = ?intent.country_candidate,
      category = %intent.fact_category,
      "query understood"
    );

    let candidate =
      intent.country_candidate.ok_or(Error::NoCountryIdentified)?;

    let record = match resolve(&self.source, Some(&candidate)).await {
      Resolution::Found(record) => record,
      Resolution::NotFound => {
        return Err(Error::CountryNotFound(title_case(&candidate)));
      }
    };

    let rendered = render_fact(&record, intent.fact_category);
    let defer = intent.fact_category == FactCategory::General
      || rendered.as_ref().is_err_and(Error::is_missing_data);

    match &self.responder {
      Some(responder) if defer => {
        Ok(self.respond_or(responder, query, &record, rendered).await)
      }
      _ => rendered,
    }
  }

  /// Ask the responder, falling back to the formatter's own text.
  async fn respond_or(
    &self,
    responder: &ContextResponder<C>,
    query: &str,
    record: &CountryRecord,
    rendered: Result<String>,
  ) -> String {
    match responder.respond(query, record).await {
      Ok(reply) => reply,
      Err(e) => {
        tracing::warn!(error = %e, country = %record.name, "responder failed; using template answer");
        rendered.unwrap_or_else(|e| e.to_string())
      }
    }
  }
}

/// `"united kingdom"` → `"United Kingdom"`.
fn title_case(name: &str) -> String {
  name
    .split(' ')
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}
