//! almanac-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `ALMANAC_*` environment variables, and serves country answers over HTTP.
//!
//! ```
//! ALMANAC_LLM_API_KEY=sk-... cargo run -p almanac-server
//! curl 'http://127.0.0.1:8080/answer?q=What+is+the+capital+of+Kenya'
//! ```

use std::{path::PathBuf, sync::Arc};

use almanac_core::{QueryAnswerer, respond::TextCompletion};
use almanac_llm::{ChatClient, ChatConfig};
use almanac_restcountries::{RestCountries, RestCountriesConfig};
use almanac_server::ServerConfig;
use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Almanac country Q&A server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080)?
    .set_default("countries_url", almanac_restcountries::DEFAULT_BASE_URL)?
    .set_default(
      "timeout_secs",
      almanac_restcountries::DEFAULT_TIMEOUT.as_secs(),
    )?
    .set_default("llm_url", almanac_llm::DEFAULT_BASE_URL)?
    .set_default("llm_model", almanac_llm::DEFAULT_MODEL)?
    .set_default("llm_timeout_secs", almanac_llm::DEFAULT_TIMEOUT.as_secs())?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ALMANAC"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let countries = RestCountries::new(RestCountriesConfig {
    base_url: server_cfg.countries_url.clone(),
    timeout:  server_cfg.timeout(),
  })
  .context("failed to build REST Countries client")?;
  let answerer = QueryAnswerer::new(countries);

  match server_cfg.llm_api_key() {
    Some(key) => {
      let chat = ChatClient::new(ChatConfig {
        base_url: server_cfg.llm_url.clone(),
        api_key:  key.to_string(),
        model:    server_cfg.llm_model.clone(),
        timeout:  server_cfg.llm_timeout(),
      })
      .context("failed to build completion client")?;
      tracing::info!(model = %server_cfg.llm_model, "context responder enabled");
      serve(&server_cfg, answerer.with_completion(chat)).await
    }
    None => {
      tracing::info!("no llm_api_key configured; answering from templates only");
      serve(&server_cfg, answerer).await
    }
  }
}

async fn serve<C>(
  server_cfg: &ServerConfig,
  answerer: QueryAnswerer<RestCountries, C>,
) -> anyhow::Result<()>
where
  C: TextCompletion + 'static,
{
  let app = almanac_server::router(Arc::new(answerer));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
