use sleeplog_core::tips::sleep_tips;

use crate::app::AppContext;
use crate::cli::JsonArgs;
use crate::output::{print_json, print_tips};

pub fn handle_tips(ctx: &AppContext, args: &JsonArgs) -> anyhow::Result<()> {
    if args.json {
        return print_json(sleep_tips());
    }
    let ui = ctx.ui_context(false, None)?;
    print_tips(&ui, sleep_tips());
    Ok(())
}
