use chrono::Local;

use sleeplog_core::analysis::Dashboard;
use sleeplog_core::{EntryFilter, SleepStore};

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::helpers::{parse_window, window_start};
use crate::output::{print_dashboard, print_json};
use crate::ui::{blank_line, header, hint, print};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let mut filter = EntryFilter::new();
    if let Some(window) = args.last.as_deref() {
        let days = parse_window(window)?;
        filter = filter.since(window_start(Local::now().date_naive(), days)?);
    }

    let store = ctx.open_store()?;
    let entries = store.list_entries(&filter)?;
    let dashboard = Dashboard::build(&entries, store.goal()?);
    tracing::debug!(entries = entries.len(), "computed dashboard");

    if args.json {
        return print_json(&dashboard);
    }

    let ui = ctx.ui_context(false, None)?;
    if ui.mode.is_pretty() && !ctx.quiet() {
        let context = args.last.as_deref().map(|w| format!("last {}", w));
        println!("{}", header(&ui, "stats", context.as_deref()));
        blank_line(&ui);
    }
    print_dashboard(&ui, &dashboard);

    if entries.is_empty() && !ctx.quiet() {
        blank_line(&ui);
        print(&ui, &hint(&ui, "No entries yet. Run `sleeplog log` after your next night."));
    }
    Ok(())
}
