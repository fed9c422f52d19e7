//! Command-line arguments, the optional TOML config file, and the merge of
//! the two into client configurations.

use std::{path::PathBuf, time::Duration};

use almanac_llm::ChatConfig;
use almanac_restcountries::RestCountriesConfig;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug, Default)]
#[command(name = "almanac", about = "Answer factual questions about countries")]
pub struct Args {
  /// Questions to answer. Read from stdin, one per line, when omitted.
  #[arg(value_name = "QUERY")]
  pub queries: Vec<String>,

  /// Answer the built-in sample questions.
  #[arg(long, conflicts_with = "queries")]
  pub demo: bool,

  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Base URL of the REST Countries API.
  #[arg(long, env = "ALMANAC_COUNTRIES_URL")]
  pub countries_url: Option<String>,

  /// Per-lookup timeout in seconds.
  #[arg(long, env = "ALMANAC_TIMEOUT_SECS")]
  pub timeout_secs: Option<u64>,

  /// Base URL of an OpenAI-compatible completion API.
  #[arg(long, env = "ALMANAC_LLM_URL")]
  pub llm_url: Option<String>,

  /// Model name sent with each completion request.
  #[arg(long, env = "ALMANAC_LLM_MODEL")]
  pub llm_model: Option<String>,

  /// API key for the completion service; enables the context responder.
  #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
  pub llm_api_key: Option<String>,

  /// Per-completion timeout in seconds.
  #[arg(long, env = "ALMANAC_LLM_TIMEOUT_SECS")]
  pub llm_timeout_secs: Option<u64>,

  /// Never call the completion service, even if a key is configured.
  #[arg(long)]
  pub no_llm: bool,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
  pub countries_url:    Option<String>,
  pub timeout_secs:     Option<u64>,
  pub llm_url:          Option<String>,
  pub llm_model:        Option<String>,
  pub llm_api_key:      Option<String>,
  pub llm_timeout_secs: Option<u64>,
}

impl ConfigFile {
  pub fn load(path: Option<&PathBuf>) -> Result<Self> {
    let Some(path) = path else {
      return Ok(Self::default());
    };
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

// ─── Merged settings ──────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Settings {
  pub countries: RestCountriesConfig,
  /// `None` when no key is configured or `--no-llm` was given.
  pub chat:      Option<ChatConfig>,
}

impl Settings {
  /// CLI flags override the config file, which overrides defaults.
  pub fn merge(args: &Args, file: ConfigFile) -> Self {
    let defaults = RestCountriesConfig::default();
    let countries = RestCountriesConfig {
      base_url: pick(args.countries_url.clone(), file.countries_url)
        .unwrap_or(defaults.base_url),
      timeout:  args
        .timeout_secs
        .or(file.timeout_secs)
        .map_or(defaults.timeout, Duration::from_secs),
    };

    let chat = pick(args.llm_api_key.clone(), file.llm_api_key)
      .filter(|_| !args.no_llm)
      .map(|key| {
        let defaults = ChatConfig::with_api_key(key);
        ChatConfig {
          base_url: pick(args.llm_url.clone(), file.llm_url)
            .unwrap_or(defaults.base_url.clone()),
          model: pick(args.llm_model.clone(), file.llm_model)
            .unwrap_or(defaults.model.clone()),
          timeout: args
            .llm_timeout_secs
            .or(file.llm_timeout_secs)
            .map_or(defaults.timeout, Duration::from_secs),
          ..defaults
        }
      });

    Self { countries, chat }
  }
}

/// The first non-blank of a flag and a file value.
fn pick(flag: Option<String>, file: Option<String>) -> Option<String> {
  flag
    .filter(|s| !s.trim().is_empty())
    .or_else(|| file.filter(|s| !s.trim().is_empty()))
}
