use dialoguer::Confirm;

use sleeplog_core::SleepStore;

use crate::app::{resolve_entry_id, AppContext};
use crate::cli::DeleteArgs;
use crate::ui::{badge, short_id, Badge};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_entry_id(&store, &args.id)?;
    let ui = ctx.ui_context(false, None)?;

    if !args.yes && ui.is_interactive() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry {}?", short_id(&id)))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                println!("{}", badge(&ui, Badge::Info, "Cancelled"));
            }
            return Ok(());
        }
    }

    store.delete_entry(&id)?;
    if !ctx.quiet() {
        let message = format!("Deleted entry {}", short_id(&id));
        if ui.mode.is_pretty() {
            println!("{}", badge(&ui, Badge::Ok, &message));
        } else {
            println!("status=ok\nid={}", id);
        }
    }
    Ok(())
}
