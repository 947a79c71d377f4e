//! Interactive dashboard session: one view selection per input line.

use crate::app::StreamStats;
use crate::cli::OutputFormat;
use crate::error::AppResult;
use std::io::{BufRead, Write};
use streamstats_graphs::View;
use tracing::{debug, error, info};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardCommand {
    /// Show a view.
    Show(View),
    /// Reload the history files.
    Reload,
    /// Print the menu again.
    Help,
    /// End the session.
    Quit,
}

impl DashboardCommand {
    /// Parses a line. Views are selected by menu number, label or slug.
    ///
    /// Returns `None` for input that names nothing.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => return Some(Self::Quit),
            "reload" => return Some(Self::Reload),
            "help" | "list" | "?" => return Some(Self::Help),
            _ => {}
        }

        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| View::ALL.get(index))
                .map(|view| Self::Show(*view));
        }

        input.parse().ok().map(Self::Show)
    }
}

/// Runs a dashboard session over `app`.
pub struct Dashboard<'a> {
    app: &'a StreamStats,
    format: OutputFormat,
}

impl<'a> Dashboard<'a> {
    /// A session printing results in `format`.
    #[must_use]
    pub const fn new(app: &'a StreamStats, format: OutputFormat) -> Self {
        Self { app, format }
    }

    /// Reads selections from `input` until it ends or a quit command.
    ///
    /// History load errors end the session. Chart errors are logged and the
    /// session continues.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> AppResult<()> {
        self.app.store()?;
        self.print_menu(out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match DashboardCommand::parse(&line) {
                Some(DashboardCommand::Show(view)) => self.show(view, out)?,
                Some(DashboardCommand::Reload) => {
                    let store = self.app.reload()?;
                    writeln!(
                        out,
                        "Reloaded {} music and {} podcast plays",
                        store.music().len(),
                        store.podcasts().len()
                    )?;
                }
                Some(DashboardCommand::Help) => self.print_menu(out)?,
                Some(DashboardCommand::Quit) => break,
                None => {
                    debug!(input = %line.trim(), "Unrecognised dashboard input");
                    writeln!(out, "Unknown selection {:?}, type 'help' for the list", line.trim())?;
                }
            }
            out.flush()?;
        }

        info!("Dashboard session ended");
        Ok(())
    }

    fn show<W: Write>(&self, view: View, out: &mut W) -> AppResult<()> {
        let result = self.app.compute(view)?;
        self.app.print(&result, self.format, out)?;

        match self.app.write_chart(&result) {
            Ok(Some(path)) => writeln!(out, "Chart: {}", path.display())?,
            Ok(None) => {}
            Err(e) if e.is_render_error() => error!(view = %view, error = %e, "Chart rendering failed"),
            Err(e) => return Err(e),
        }
        writeln!(out)?;
        Ok(())
    }

    fn print_menu<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let catalog = self.app.manager().catalog();
        for (number, view) in (1..).zip(View::ALL) {
            writeln!(out, "{number}. {}", catalog.text(view.label_key()))?;
        }
        writeln!(out, "Select a view by number or name, 'reload' or 'quit'.")?;
        out.flush()?;
        Ok(())
    }
}
