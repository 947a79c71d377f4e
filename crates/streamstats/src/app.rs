//! The application: configuration, the session's history and the graph manager.

use crate::cli::OutputFormat;
use crate::display::{format_json, format_table};
use crate::error::AppResult;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use streamstats_config::Config;
use streamstats_graphs::{
    AggregateResult, Aggregator, ChartStyle, GraphManager, HistoryCache, HistoryLoader, HistorySource,
    HistoryStore, View,
};
use streamstats_i18n::Catalog;
use tracing::{info, instrument};

/// A running session over one set of export files.
pub struct StreamStats {
    config: Config,
    source: Box<dyn HistorySource>,
    cache: HistoryCache,
    manager: GraphManager,
}

impl std::fmt::Debug for StreamStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamStats")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("manager", &self.manager)
            .finish_non_exhaustive()
    }
}

impl StreamStats {
    /// Creates a session reading the files named in `config`.
    pub fn new(config: Config) -> AppResult<Self> {
        let source = HistoryLoader::from_config(&config.data);
        Self::with_source(config, Box::new(source))
    }

    /// Creates a session reading history from `source`.
    pub fn with_source(config: Config, source: Box<dyn HistorySource>) -> AppResult<Self> {
        let catalog = Catalog::for_language(&config.views.language)?;
        let manager = GraphManager::new(
            Aggregator::new(&config.views),
            catalog,
            ChartStyle::from_output(&config.output),
        );

        Ok(Self {
            config,
            source,
            cache: HistoryCache::new(),
            manager,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The graph manager.
    #[must_use]
    pub const fn manager(&self) -> &GraphManager {
        &self.manager
    }

    /// The session's history, loaded on first access.
    pub fn store(&self) -> AppResult<Arc<HistoryStore>> {
        Ok(self.cache.get_or_load(self.source.as_ref())?)
    }

    /// Discards the loaded history and reads it again.
    pub fn reload(&self) -> AppResult<Arc<HistoryStore>> {
        info!("Reloading streaming history");
        self.cache.clear();
        self.store()
    }

    /// Computes `view` over the session's history.
    pub fn compute(&self, view: View) -> AppResult<AggregateResult> {
        let store = self.store()?;
        Ok(self.manager.compute(view, &store))
    }

    /// Prints `result` to `out` in `format`.
    pub fn print<W: Write>(&self, result: &AggregateResult, format: OutputFormat, out: &mut W) -> AppResult<()> {
        let text = match format {
            OutputFormat::Table => format_table(
                self.manager.catalog(),
                result,
                self.manager.aggregator().limit(result.view()),
            ),
            OutputFormat::Json => format_json(result)?,
        };
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Writes the chart of `result` when charts are enabled.
    pub fn write_chart(&self, result: &AggregateResult) -> AppResult<Option<PathBuf>> {
        if !self.config.output.render_charts {
            return Ok(None);
        }
        Ok(self.manager.write_chart(result, &self.config.output.directory)?)
    }

    /// Computes, prints and charts one view.
    #[instrument(skip(self, out))]
    pub fn show<W: Write>(&self, view: View, format: OutputFormat, out: &mut W) -> AppResult<()> {
        let result = self.compute(view)?;
        self.print(&result, format, out)?;
        self.write_chart(&result)?;
        Ok(())
    }

    /// Shows every view in selector order.
    pub fn show_all<W: Write>(&self, format: OutputFormat, out: &mut W) -> AppResult<()> {
        for (index, view) in View::ALL.into_iter().enumerate() {
            if index > 0 && format == OutputFormat::Table {
                writeln!(out)?;
            }
            self.show(view, format, out)?;
        }
        Ok(())
    }
}
