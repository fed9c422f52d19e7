//! Context-augmented answers from a text-completion service.
//!
//! When a question falls outside the fixed fact categories, or asks for a
//! field the record lacks, the question is forwarded to a language model
//! together with everything known about the country.

use std::{convert::Infallible, future::Future, sync::Arc};

use crate::{Error, Result, country::CountryRecord, format::context_summary};

/// A black-box text-completion service: system instruction + user message
/// in, free text out.
pub trait TextCompletion: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn complete<'a>(
    &'a self,
    system: &'a str,
    user: &'a str,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a;
}

impl<C: TextCompletion> TextCompletion for Arc<C> {
  type Error = C::Error;

  fn complete<'a>(
    &'a self,
    system: &'a str,
    user: &'a str,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a {
    (**self).complete(system, user)
  }
}

/// Placeholder completion type for answerers built without a responder.
/// Never constructed.
#[derive(Debug, Clone, Copy)]
pub enum NoCompletion {}

impl TextCompletion for NoCompletion {
  type Error = Infallible;

  async fn complete(&self, _system: &str, _user: &str) -> Result<String, Infallible> {
    match *self {}
  }
}

/// Forwards questions to a [`TextCompletion`] with the country's facts
/// injected into the system instruction.
#[derive(Debug, Clone)]
pub struct ContextResponder<C> {
  completion: C,
}

impl<C: TextCompletion> ContextResponder<C> {
  pub fn new(completion: C) -> Self { Self { completion } }

  /// Ask `question` about `record`. Returns the completion text verbatim
  /// (trimmed); an empty completion is an error.
  pub async fn respond(
    &self,
    question: &str,
    record: &CountryRecord,
  ) -> Result<String> {
    let system = system_instruction(record);
    let text = self
      .completion
      .complete(&system, question)
      .await
      .map_err(|e| Error::Completion(Box::new(e)))?;

    let text = text.trim();
    if text.is_empty() {
      return Err(Error::Completion("empty completion".into()));
    }
    Ok(text.to_string())
  }
}

/// The system instruction sent with every question.
pub fn system_instruction(record: &CountryRecord) -> String {
  format!(
    "You answer questions about countries. Treat the following facts about \
     {name} as ground truth and prefer them over anything you remember. If \
     they do not cover the question, answer from general knowledge and say \
     so. Answer in one or two short paragraphs.\n\n{facts}",
    name = record.name,
    facts = context_summary(record),
  )
}
