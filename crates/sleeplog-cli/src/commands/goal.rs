use sleeplog_core::{GoalPatch, SleepStore};

use crate::app::AppContext;
use crate::cli::{GoalSetArgs, JsonArgs};
use crate::errors::CliError;
use crate::helpers::parse_time;
use crate::output::{print_goal, print_json};
use crate::ui::{badge, Badge};

pub fn handle_goal_show(ctx: &AppContext, args: &JsonArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let goal = store.goal()?;

    if args.json {
        return print_json(&goal);
    }
    let ui = ctx.ui_context(false, None)?;
    print_goal(&ui, &goal);
    Ok(())
}

/// Update the goal.
///
/// Changing only times recomputes the target duration from the new pair.
/// An explicit `--duration` is stored as given.
pub fn handle_goal_set(ctx: &AppContext, args: &GoalSetArgs) -> anyhow::Result<()> {
    let bed = args.bed.as_deref().map(parse_time).transpose()?;
    let wake = args.wake.as_deref().map(parse_time).transpose()?;
    if bed.is_none() && wake.is_none() && args.duration.is_none() {
        return Err(CliError::invalid_input(
            "Nothing to change; pass --bed, --wake or --duration",
        )
        .into());
    }
    if args.duration == Some(0) {
        return Err(CliError::invalid_input("Target duration must be greater than zero").into());
    }

    let mut store = ctx.open_store()?;
    let patch = match args.duration {
        Some(minutes) => GoalPatch {
            target_bed_time: bed,
            target_wake_time: wake,
            target_duration_minutes: Some(minutes),
        },
        None => {
            let edited = store.goal()?.edit_times(bed, wake);
            GoalPatch {
                target_bed_time: Some(edited.target_bed_time),
                target_wake_time: Some(edited.target_wake_time),
                target_duration_minutes: Some(edited.target_duration_minutes),
            }
        }
    };
    let goal = store.update_goal(&patch)?;

    if args.json {
        return print_json(&goal);
    }
    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None)?;
    if ui.mode.is_pretty() {
        println!("{}", badge(&ui, Badge::Ok, "Goal updated"));
    } else {
        println!("status=ok");
    }
    print_goal(&ui, &goal);
    Ok(())
}
