//! PointBuy Engine - Main entry point.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pointbuy_engine::infrastructure::{ClockPort, DraftStore, FileDraftStore, SystemClock};
use pointbuy_engine::{EngineConfig, Reply, Session};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root, falling back to the working directory.
    load_dotenv_from_repo_root();

    // Logs go to stderr so replies on stdout stay readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointbuy_engine=info,pointbuy_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting PointBuy Engine");

    let config = EngineConfig::from_env();
    let store: Arc<dyn DraftStore> = Arc::new(FileDraftStore::new(config.draft_path.clone()));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let mut session = Session::from_config(&config, store, clock)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.render_status())?;
    writeln!(out, "Type 'help' for commands.")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match session.handle_line(&line) {
            Ok(Reply::Text(text)) => writeln!(out, "{text}")?,
            Ok(Reply::Quit) => break,
            Err(err) => {
                tracing::debug!(error = %err, "Command failed");
                writeln!(out, "error: {err}")?;
            }
        }
        out.flush()?;
    }

    tracing::info!("PointBuy Engine stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
