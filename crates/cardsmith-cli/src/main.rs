//! Cardsmith CLI - Turn text into question/answer study cards.

use cardsmith_cli::commands;
use cardsmith_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `-v` flags win over `RUST_LOG`, which wins over `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> cardsmith_cli::Result<()> {
    // File, then environment; flags are applied by each command
    let path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&path)?.with_env_overrides();

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter).await?,
        Command::Import(args) => commands::execute_import(args, &config, &formatter).await?,
        Command::Export(args) => commands::execute_export(args, &config, &formatter).await?,
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter).await?,
    }

    Ok(())
}
