//! Path and id resolution.

use std::path::PathBuf;

use sleeplog_core::{EntryFilter, SleepStore};
use uuid::Uuid;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, SleeplogConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Config file path, checking `SLEEPLOG_CONFIG` first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Store path from `--store`/`SLEEPLOG_PATH`, then `[store] path`, then the
/// XDG data directory.
pub fn resolve_store_path(cli: &Cli, config: &SleeplogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.store.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_store_path()
}

/// Resolve a full UUID or a unique prefix of one to an entry id.
pub fn resolve_entry_id<S: SleepStore + ?Sized>(store: &S, input: &str) -> anyhow::Result<Uuid> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CliError::invalid_input("Entry id must not be empty").into());
    }

    if let Ok(id) = Uuid::parse_str(&needle) {
        if store.get_entry(&id)?.is_some() {
            return Ok(id);
        }
        return Err(not_found(input).into());
    }

    let matches: Vec<Uuid> = store
        .list_entries(&EntryFilter::new())?
        .into_iter()
        .map(|entry| entry.id)
        .filter(|id| {
            id.hyphenated().to_string().starts_with(&needle)
                || id.simple().to_string().starts_with(&needle)
        })
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(not_found(input).into()),
        _ => Err(CliError::invalid_input(format!(
            "Entry id prefix \"{}\" matches {} entries; use more characters",
            input,
            matches.len()
        ))
        .into()),
    }
}

fn not_found(input: &str) -> CliError {
    CliError::not_found(
        format!("Entry not found: {}", input),
        "Hint: Run `sleeplog list` to see entry ids.",
    )
}
