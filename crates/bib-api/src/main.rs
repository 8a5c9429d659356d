//! bib-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! configured registration backend, and serves the sign-up and dashboard API
//! over HTTP.
//!
//! # Password hash generation
//!
//! To generate the argon2 PHC string for `auth_password_hash` in config.toml:
//!
//! ```
//! cargo run -p bib-api --bin bib-server -- --hash-password
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use bib_api::{AppState, Backend, ServerConfig, auth::ArgonCheck};
use bib_core::{auth::CredentialCheck, store::RegistrationStore};
use bib_store_docs::DocStore;
use bib_store_sheet::SheetStore;
use clap::Parser;
use phonenumber::country;
use rand_core::OsRng;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Bib race registration server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print the argon2 hash for a password entered on stdin and exit.
  #[arg(long)]
  hash_password: bool,
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

  // Helper mode: hash a password and exit.
  if cli.hash_password {
    let password = read_password()?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| anyhow::anyhow!("argon2 error: {e}"))?
      .to_string();
    println!("{hash}");
    return Ok(());
  }

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("BIB"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let region: country::Id = server_cfg.region.parse().map_err(|_| {
    anyhow::anyhow!("unknown region code: {:?}", server_cfg.region)
  })?;

  let gate: Arc<dyn CredentialCheck> =
    Arc::new(ArgonCheck::new(server_cfg.auth_password_hash.clone()));

  match server_cfg.backend {
    Backend::Sheet => {
      let path = server_cfg
        .sheet_path
        .as_deref()
        .context("backend \"sheet\" requires sheet_path")?;
      let path = expand_tilde(path);
      let store = SheetStore::open(&path)
        .await
        .with_context(|| format!("failed to open sheet at {path:?}"))?;
      serve(store, gate, region, &server_cfg).await
    }
    Backend::Docs => {
      let path = server_cfg
        .docs_path
        .as_deref()
        .context("backend \"docs\" requires docs_path")?;
      let path = expand_tilde(path);
      let store = DocStore::open(&path)
        .await
        .with_context(|| format!("failed to open document store at {path:?}"))?;
      serve(store, gate, region, &server_cfg).await
    }
  }
}

/// Bind and run the server for one concrete backend.
async fn serve<S>(
  store: S,
  gate: Arc<dyn CredentialCheck>,
  region: country::Id,
  cfg: &ServerConfig,
) -> anyhow::Result<()>
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let state = AppState { store: Arc::new(store), gate, region };
  let app = bib_api::router(state);
  let address = format!("{}:{}", cfg.host, cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Read a password from stdin.
fn read_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  let stdin = io::stdin();
  print!("Password: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
