mod config;
mod loader;
mod menu;
mod render;

use std::io;

use clap::Parser;
use eyre::WrapErr;
use sportstock::Catalog;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::loader::LoadError;
use crate::menu::Menu;

fn main() -> eyre::Result<()> {
    let config = Config::parse();
    init_tracing(&config.log_level)?;

    let mut catalog = Catalog::new();
    match loader::load_file(&config.inventory, &mut catalog, config.strict) {
        Ok(report) => println!("Inventory {}: {report}.", config.inventory.display()),
        Err(e @ LoadError::Malformed { .. }) => {
            return Err(e).wrap_err_with(|| {
                format!("failed to load inventory {}", config.inventory.display())
            });
        }
        Err(e) => {
            tracing::warn!(path = %config.inventory.display(), error = %e, "inventory not loaded");
            println!("Inventory {} not loaded: {e}.", config.inventory.display());
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut catalog, stdin.lock(), stdout.lock())
        .run()
        .wrap_err("console i/o failed")?;

    Ok(())
}

fn init_tracing(level: &str) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .wrap_err_with(|| format!("invalid log level `{level}`"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
