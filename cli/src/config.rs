use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INVENTORY: &str = "inventario_ropa_deportiva_30.csv";

/// Sporting-goods inventory catalog.
#[derive(Debug, Parser)]
#[command(name = "sportstock", version, about)]
pub struct Config {
    /// Inventory CSV file loaded on start.
    #[arg(short, long, env = "SPORTSTOCK_INVENTORY", default_value = DEFAULT_INVENTORY)]
    pub inventory: PathBuf,

    /// Abort loading on the first malformed line instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
