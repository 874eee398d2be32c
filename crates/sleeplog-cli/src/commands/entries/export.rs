use std::path::Path;

use sleeplog_core::export::{render, ExportFormat};
use sleeplog_core::fs::write_atomic;
use sleeplog_core::{EntryFilter, SleepStore};

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::helpers::parse_date;
use crate::ui::receipt;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let format: ExportFormat = args
        .format
        .parse()
        .map_err(|e: sleeplog_core::SleepError| CliError::invalid_input(e.to_string()))?;

    let mut filter = EntryFilter::new();
    if let Some(since) = args.since.as_deref() {
        filter = filter.since(parse_date(since)?);
    }

    let store = ctx.open_store()?;
    let entries = store.list_entries(&filter)?;
    let rendered = render(&entries, format)?;

    let Some(output) = args.output.as_deref() else {
        print!("{}", rendered);
        return Ok(());
    };

    write_atomic(Path::new(output), rendered.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write export to {}: {}", output, e))?;
    tracing::info!(path = output, count = entries.len(), %format, "exported entries");

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None)?;
        let count = entries.len().to_string();
        let format = format.to_string();
        println!(
            "{}",
            receipt(
                &ui,
                "Exported entries",
                &[("Path", output), ("Entries", count.as_str()), ("Format", format.as_str())],
            )
        );
    }
    Ok(())
}
