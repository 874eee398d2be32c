use chrono::Local;

use sleeplog_core::analysis::format_minutes;
use sleeplog_core::{NewSleepEntry, SleepStore};

use crate::app::AppContext;
use crate::cli::LogArgs;
use crate::helpers::{parse_date, parse_quality, parse_time};
use crate::output::{entry_json, print_json};
use crate::ui::{receipt, short_id};

pub fn handle_log(ctx: &AppContext, args: &LogArgs) -> anyhow::Result<()> {
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };
    let bed_time = parse_time(&args.bed)?;
    let wake_time = parse_time(&args.wake)?;
    let quality = parse_quality(args.quality)?;

    let mut new_entry = NewSleepEntry::new(date, bed_time, wake_time, quality);
    if let Some(notes) = &args.notes {
        new_entry = new_entry.with_notes(notes.trim());
    }

    let mut store = ctx.open_store()?;
    let entry = store.insert_entry(&new_entry)?;

    if args.json {
        return print_json(&entry_json(&entry));
    }
    if ctx.quiet() {
        println!("{}", entry.id);
        return Ok(());
    }

    let ui = ctx.ui_context(false, None)?;
    let id = short_id(&entry.id);
    let date = entry.date.to_string();
    let duration = format_minutes(f64::from(entry.duration_minutes));
    let quality = entry.quality.value().to_string();
    println!(
        "{}",
        receipt(
            &ui,
            "Logged sleep",
            &[
                ("ID", id.as_str()),
                ("Date", date.as_str()),
                ("Duration", duration.as_str()),
                ("Quality", quality.as_str()),
            ],
        )
    );
    Ok(())
}
