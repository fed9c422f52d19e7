//! Async client for OpenAI-compatible chat completions.

use std::time::Duration;

use almanac_core::respond::TextCompletion;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the completion API.
#[derive(Debug, Clone)]
pub struct ChatConfig {
  pub base_url: String,
  pub api_key:  String,
  pub model:    String,
  pub timeout:  Duration,
}

impl ChatConfig {
  /// Defaults for everything but the key.
  pub fn with_api_key(api_key: impl Into<String>) -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      api_key:  api_key.into(),
      model:    DEFAULT_MODEL.to_string(),
      timeout:  DEFAULT_TIMEOUT,
    }
  }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  model:       &'a str,
  messages:    [Message<'a>; 2],
  temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
  role:    &'static str,
  content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  #[serde(default)]
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
  #[serde(default)]
  content: Option<String>,
}

/// Chat-completion client.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ChatClient {
  client: Client,
  config: ChatConfig,
}

// Omits the API key.
impl std::fmt::Debug for ChatClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ChatClient")
      .field("base_url", &self.config.base_url)
      .field("model", &self.config.model)
      .finish_non_exhaustive()
  }
}

impl ChatClient {
  pub fn new(config: ChatConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!(
      "{}/chat/completions",
      self.config.base_url.trim_end_matches('/')
    )
  }

  /// `POST /chat/completions` with one system and one user message.
  pub async fn chat(&self, system: &str, user: &str) -> Result<String> {
    let request = ChatRequest {
      model:       &self.config.model,
      messages:    [
        Message {
          role:    "system",
          content: system,
        },
        Message {
          role:    "user",
          content: user,
        },
      ],
      temperature: 0.2,
    };

    let resp = self
      .client
      .post(self.url())
      .bearer_auth(&self.config.api_key)
      .json(&request)
      .send()
      .await?;

    if !resp.status().is_success() {
      let status = resp.status();
      let body = resp.text().await.unwrap_or_default();
      return Err(Error::Status { status, body });
    }

    let parsed: ChatResponse = resp.json().await?;
    tracing::debug!(model = %self.config.model, choices = parsed.choices.len(), "completion received");
    parsed
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .ok_or(Error::NoChoices)
  }
}

impl TextCompletion for ChatClient {
  type Error = Error;

  async fn complete(&self, system: &str, user: &str) -> Result<String> {
    self.chat(system, user).await
  }
}
