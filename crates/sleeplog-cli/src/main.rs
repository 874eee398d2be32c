//! Sleeplog CLI - track your sleep, see your patterns, get gentle advice
//!
//! The command-line front end for `sleeplog-core`: logging nights, the stats
//! dashboard, recommendations, the scripted assistant and the breathing
//! exercise.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, GoalSubcommand};
use crate::commands::{breathe, chat, entries, goal, maintenance, misc, recommend, stats, tips};
use crate::errors::exit_code_for;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        // A broken config must not hide the original error.
        let ui_ctx = ctx
            .ui_context(false, None)
            .unwrap_or_else(|_| UiContext::from_env(false, None, cli.no_color, cli.ascii));

        let error_msg = format!("{}", e);
        let hint = extract_error_hint(&error_msg);
        let message = match error_msg.find("\nHint:") {
            Some(idx) => &error_msg[..idx],
            None => error_msg.as_str(),
        };

        tracing::debug!(error = ?e, "command failed");
        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Pull an explicit "Hint:" out of an error message, or supply one for
/// common failures.
fn extract_error_hint(error: &str) -> Option<String> {
    if let Some(idx) = error.find("\nHint:") {
        return Some(error[idx + 1..].trim_start_matches("Hint:").trim().to_string());
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("entry") && error_lower.contains("not found") {
        return Some("Run `sleeplog list` to see entry ids.".to_string());
    }
    if error_lower.contains("invalid time") {
        return Some("Times use 24-hour HH:MM, e.g. 23:15 or 06:45.".to_string());
    }
    if error_lower.contains("invalid date") {
        return Some("Dates use YYYY-MM-DD, e.g. 2024-03-01.".to_string());
    }
    if error_lower.contains("quality") {
        return Some("Rate quality from 1 (poor) to 5 (excellent).".to_string());
    }
    if error_lower.contains("format version") || error_lower.contains("not a database") {
        return Some(
            "The store file is not a sleeplog database. Pass --store or set SLEEPLOG_PATH."
                .to_string(),
        );
    }
    if error_lower.contains("integrity") && error_lower.contains("failed") {
        return Some("Restore the store from a backup or an export.".to_string());
    }
    if error_lower.contains("failed to parse config") {
        return Some("Fix the file or point SLEEPLOG_CONFIG elsewhere.".to_string());
    }

    None
}

fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        Some(Commands::Log(_)) => "log",
        Some(Commands::List(_)) => "list",
        Some(Commands::Show(_)) => "show",
        Some(Commands::Edit(_)) => "edit",
        Some(Commands::Delete(_)) => "delete",
        Some(Commands::Stats(_)) | None => "stats",
        Some(Commands::Recommend(_)) => "recommend",
        Some(Commands::Goal(_)) => "goal",
        Some(Commands::Chat(_)) => "chat",
        Some(Commands::Tips(_)) => "tips",
        Some(Commands::Breathe(_)) => "breathe",
        Some(Commands::Export(_)) => "export",
        Some(Commands::Check) => "check",
        Some(Commands::Completions(_)) => "completions",
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!(command = command_name(cli.command.as_ref()), "dispatching");
    match &cli.command {
        Some(Commands::Log(args)) => {
            entries::handle_log(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            entries::handle_show(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            entries::handle_edit(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            entries::handle_delete(ctx, args)?;
        }
        Some(Commands::Export(args)) => {
            entries::handle_export(ctx, args)?;
        }
        Some(Commands::Stats(args)) => {
            stats::handle_stats(ctx, args)?;
        }
        Some(Commands::Recommend(args)) => {
            recommend::handle_recommend(ctx, args)?;
        }
        Some(Commands::Goal(args)) => match &args.command {
            GoalSubcommand::Show(show_args) => {
                goal::handle_goal_show(ctx, show_args)?;
            }
            GoalSubcommand::Set(set_args) => {
                goal::handle_goal_set(ctx, set_args)?;
            }
        },
        Some(Commands::Chat(args)) => {
            chat::handle_chat(ctx, args)?;
        }
        Some(Commands::Tips(args)) => {
            tips::handle_tips(ctx, args)?;
        }
        Some(Commands::Breathe(args)) => {
            breathe::handle_breathe(ctx, args)?;
        }
        Some(Commands::Check) => {
            maintenance::handle_check(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            // No subcommand: show the dashboard.
            stats::handle_stats(
                ctx,
                &crate::cli::StatsArgs {
                    last: None,
                    json: false,
                },
            )?;
        }
    }
    Ok(())
}
