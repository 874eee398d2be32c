use sleeplog_core::analysis::{generate_recommendations_with, generate_stats};
use sleeplog_core::{EntryFilter, SleepStore};

use crate::app::AppContext;
use crate::cli::JsonArgs;
use crate::output::{print_json, print_recommendations};
use crate::ui::{blank_line, header};

pub fn handle_recommend(ctx: &AppContext, args: &JsonArgs) -> anyhow::Result<()> {
    let thresholds = ctx.thresholds()?;
    let store = ctx.open_store()?;
    let entries = store.list_entries(&EntryFilter::new())?;
    let stats = generate_stats(&entries);
    let recommendations = generate_recommendations_with(&entries, &stats, &thresholds);

    if args.json {
        let value: Vec<serde_json::Value> = recommendations
            .iter()
            .map(|r| {
                let mut value = serde_json::to_value(r)?;
                value["message"] = serde_json::Value::String(r.to_string());
                Ok(value)
            })
            .collect::<serde_json::Result<_>>()?;
        return print_json(&value);
    }

    let ui = ctx.ui_context(false, None)?;
    if ui.mode.is_pretty() && !ctx.quiet() {
        println!("{}", header(&ui, "recommend", None));
        blank_line(&ui);
    }
    print_recommendations(&ui, &recommendations);
    Ok(())
}
