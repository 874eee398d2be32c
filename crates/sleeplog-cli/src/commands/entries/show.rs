use sleeplog_core::SleepStore;

use crate::app::{resolve_entry_id, AppContext};
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::{entry_json, print_entry, print_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let id = resolve_entry_id(&store, &args.id)?;
    let entry = store.get_entry(&id)?.ok_or_else(|| {
        CliError::not_found(
            format!("Entry not found: {}", args.id),
            "Hint: Run `sleeplog list` to see entry ids.",
        )
    })?;

    if args.json {
        return print_json(&entry_json(&entry));
    }
    let ui = ctx.ui_context(false, None)?;
    print_entry(&ui, &entry);
    Ok(())
}
