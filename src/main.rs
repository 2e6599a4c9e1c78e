//! Elidune circulation desk - console entry point
//!
//! `elidune-circulation` opens the interactive desk.
//! `elidune-circulation hash-password` reads a password on stdin and prints the
//! argon2 hash to put in `ELIDUNE_ADMIN__PASSWORD_HASH`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elidune_circulation::{
    cli::{self, Console, StdConsole},
    config::{AppConfig, LoggingConfig},
    services::{auth::hash_password, Library},
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    let mut console = StdConsole::new();

    if std::env::args().nth(1).as_deref() == Some("hash-password") {
        let Some(password) = console.read_line("Password to hash: ")? else {
            anyhow::bail!("no password given");
        };
        console.print(&hash_password(&password)?);
        return Ok(());
    }

    tracing::info!("Starting Elidune circulation desk v{}", env!("CARGO_PKG_VERSION"));

    let mut library = Library::new(&config);
    cli::run(&mut library, &mut console)?;

    Ok(())
}

/// Logs go to stderr so they never mix with the menus
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("elidune_circulation={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
