use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use storefront::core::Mode;
use storefront::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "storefront", version, about = "Hardware store sale page")]
struct Args {
    /// Item to put on sale at startup
    #[arg(long)]
    sale_item: Option<String>,

    /// Start in edit mode or view mode
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Page heading
    #[arg(long)]
    title: Option<String>,

    /// Read this config file instead of ~/.storefront/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if let Err(e) = &loaded {
        // Still on the plain terminal, so the operator sees this before the TUI starts
        eprintln!("storefront: {e}; using defaults");
    }

    let cli = CliOverrides {
        title: args.title,
        sale_item: args.sale_item,
        mode: args.mode,
        log_level: args.log_level,
    };
    let resolved = config::resolve_loaded(loaded, &cli, |key| std::env::var(key).ok());

    // File logger, the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    // Loading and resolution ran before there was a logger to write to
    for diagnostic in &resolved.diagnostics {
        diagnostic.emit();
    }

    log::info!(
        "Storefront starting: title={:?}, sale_item={:?}, mode={}",
        resolved.title,
        resolved.sale_item,
        resolved.start_mode
    );

    storefront::tui::run(resolved)
}
