use sleeplog_core::analysis::format_minutes;
use sleeplog_core::{SleepEntryPatch, SleepStore};

use crate::app::{resolve_entry_id, AppContext};
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{parse_date, parse_quality, parse_time};
use crate::output::{entry_json, print_json};
use crate::ui::{receipt, short_id};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let patch = SleepEntryPatch {
        date: args.date.as_deref().map(parse_date).transpose()?,
        bed_time: args.bed.as_deref().map(parse_time).transpose()?,
        wake_time: args.wake.as_deref().map(parse_time).transpose()?,
        quality: args.quality.map(parse_quality).transpose()?,
        notes: args.notes.as_ref().map(|n| n.trim().to_string()),
    };
    if patch.is_empty() {
        return Err(CliError::invalid_input(
            "Nothing to change; pass at least one of --date, --bed, --wake, --quality, --notes",
        )
        .into());
    }

    let mut store = ctx.open_store()?;
    let id = resolve_entry_id(&store, &args.id)?;
    let entry = store.update_entry(&id, &patch)?;

    if args.json {
        return print_json(&entry_json(&entry));
    }
    if ctx.quiet() {
        return Ok(());
    }

    let ui = ctx.ui_context(false, None)?;
    let short = short_id(&entry.id);
    let duration = format_minutes(f64::from(entry.duration_minutes));
    println!(
        "{}",
        receipt(
            &ui,
            "Updated entry",
            &[("ID", short.as_str()), ("Duration", duration.as_str())],
        )
    );
    Ok(())
}
