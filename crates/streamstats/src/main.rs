//! Main entry point for streamstats.

use anyhow::{bail, Context};
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use streamstats::{Cli, Command, Dashboard, StreamStats};
use streamstats_common::init_logging;
use streamstats_config::{Config, ConfigLoader};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path, force } = &cli.command {
        return init_config(path, *force);
    }

    let mut config = ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid command line override")?;

    init_logging(&config.logging).context("failed to initialize logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting streamstats");

    let app = StreamStats::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::View { view } => app.show(view, cli.format, &mut out)?,
        Command::RenderAll => app.show_all(cli.format, &mut out)?,
        Command::Dashboard => Dashboard::new(&app, cli.format).run(io::stdin().lock(), &mut out)?,
        Command::InitConfig { .. } => {}
    }

    out.flush()?;
    Ok(())
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to replace it", path.display());
    }
    ConfigLoader::save(path, &Config::default())
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
