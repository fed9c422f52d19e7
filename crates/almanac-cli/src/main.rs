//! `almanac`: answer factual questions about countries.
//!
//! # Usage
//!
//! ```
//! almanac "What is the capital of Kenya?"
//! almanac --demo
//! echo "Population of Brazil" | almanac --no-llm
//! almanac --config ~/.config/almanac/config.toml
//! ```

mod settings;

use almanac_core::{QueryAnswerer, respond::TextCompletion, source::CountrySource};
use almanac_llm::ChatClient;
use almanac_restcountries::RestCountries;
use anyhow::{Context, Result};
use clap::Parser;
use settings::{Args, ConfigFile, Settings};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Asked by `--demo`.
const DEMO_QUERIES: &[&str] = &[
  "What is the capital of Kenya?",
  "Tell me the population of Brazil",
  "What currency does Egypt use?",
  "Give me the area of Nigeria",
  "Who are the languages spoken in Peru?",
  "What timezone is Australia in?",
  "What is the flag of France?",
  "Population of Wakanda",
];

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // Logs go to stderr; stdout carries answers only.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let file_cfg = ConfigFile::load(args.config.as_ref())?;
  let settings = Settings::merge(&args, file_cfg);

  let countries = RestCountries::new(settings.countries)
    .context("building REST Countries client")?;
  let answerer = QueryAnswerer::new(countries);

  match settings.chat {
    Some(chat) => {
      let chat = ChatClient::new(chat).context("building completion client")?;
      run(&args, &answerer.with_completion(chat)).await
    }
    None => run(&args, &answerer).await,
  }
}

// ─── Query loop ───────────────────────────────────────────────────────────────

async fn run<S, C>(args: &Args, answerer: &QueryAnswerer<S, C>) -> Result<()>
where
  S: CountrySource,
  C: TextCompletion,
{
  if args.demo {
    for query in DEMO_QUERIES {
      println!("> {query}");
      println!("{}\n", answerer.answer(query).await);
    }
    return Ok(());
  }

  if !args.queries.is_empty() {
    for query in &args.queries {
      println!("{}", answerer.answer(query).await);
    }
    return Ok(());
  }

  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  while let Some(line) = lines.next_line().await.context("reading stdin")? {
    if line.trim().is_empty() {
      continue;
    }
    println!("{}", answerer.answer(&line).await);
  }

  Ok(())
}
