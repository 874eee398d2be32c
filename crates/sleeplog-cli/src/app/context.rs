//! Application context for the Sleeplog CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use sleeplog_core::analysis::Thresholds;
use sleeplog_core::SqliteStore;

use crate::cli::Cli;
use crate::config::{load_config, SleeplogConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_store_path};

/// CLI args plus configuration, threaded through every handler.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<SleeplogConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, read on first use. A missing file means defaults.
    pub fn config(&self) -> anyhow::Result<&SleeplogConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path()?))
    }

    /// Recommendation thresholds from `[analysis]`.
    pub fn thresholds(&self) -> anyhow::Result<Thresholds> {
        Ok(self.config()?.analysis)
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Open (creating if needed) the sleep store.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.store_path()?;
        tracing::debug!(path = %path.display(), "opening store");
        let store = SqliteStore::open(&path)?;
        Ok(store)
    }

    /// UI context for a command, honoring `--ascii` or `[ui] ascii`.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        let ascii = self.cli.ascii || self.config()?.ui.ascii;
        Ok(UiContext::from_env(json, format, self.cli.no_color, ascii))
    }
}
