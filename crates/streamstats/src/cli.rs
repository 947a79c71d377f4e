//! Command line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use streamstats_config::Config;
use streamstats_graphs::View;

/// Listening statistics from Spotify streaming history exports.
#[derive(Debug, Parser)]
#[command(name = "streamstats", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter, overrides the configured level
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Directory charts are written to
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Print tables only, without writing charts
    #[arg(long, global = true)]
    pub no_charts: bool,

    /// How results are printed
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one view, selected by label ("Top Artists") or slug ("top-artists")
    View {
        /// View to show
        #[arg(value_parser = parse_view)]
        view: View,
    },
    /// Read view selections from stdin, one per line
    Dashboard,
    /// Show every view and write every chart
    RenderAll,
    /// Write a configuration file with default values
    InitConfig {
        /// Destination, format picked from the extension
        #[arg(default_value = "streamstats.yaml")]
        path: PathBuf,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Result printing style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Applies command line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(dir) = &self.output {
            config.output.directory.clone_from(dir);
        }
        if self.no_charts {
            config.output.render_charts = false;
        }
    }
}

fn parse_view(value: &str) -> Result<View, String> {
    value.parse().map_err(|_| {
        let known: Vec<_> = View::ALL.iter().map(|view| view.slug()).collect();
        format!("unknown view '{value}', expected one of: {}", known.join(", "))
    })
}
