use dialoguer::Input;

use sleeplog_core::analysis::{generate_stats, Thresholds};
use sleeplog_core::assistant::{exchange, load_conversation, reset_conversation, Snapshot};
use sleeplog_core::{ChatMessage, EntryFilter, SleepEntry, SleepGoal, SleepStore, SqliteStore};

use crate::app::AppContext;
use crate::cli::ChatArgs;
use crate::errors::CliError;
use crate::output::{print_json, print_messages};
use crate::ui::{header, hint, print, UiContext};

/// Words that end an interactive session.
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "bye"];

pub fn handle_chat(ctx: &AppContext, args: &ChatArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let ui = ctx.ui_context(args.json, None)?;

    if args.clear {
        let welcome = reset_conversation(&mut store)?;
        tracing::info!("conversation cleared");
        return emit(&ui, &[welcome]);
    }
    if args.history {
        let messages = load_conversation(&mut store)?;
        return emit(&ui, &messages);
    }

    let thresholds = ctx.thresholds()?;
    let entries = store.list_entries(&EntryFilter::new())?;
    let goal = store.goal()?;

    match args.message.as_deref() {
        Some(text) => {
            load_conversation(&mut store)?;
            let (user, reply) = send(&mut store, text, &entries, &goal, &thresholds)?;
            if ui.mode.is_json() {
                return print_json(&[user, reply]);
            }
            print_messages(&ui, std::slice::from_ref(&reply));
            Ok(())
        }
        None if ui.is_interactive() && !ui.mode.is_json() => {
            interactive(ctx, &ui, &mut store, &entries, &goal, &thresholds)
        }
        None => Err(CliError::invalid_input(
            "No message given; pass a MESSAGE or run `sleeplog chat` in a terminal",
        )
        .into()),
    }
}

fn interactive(
    ctx: &AppContext,
    ui: &UiContext,
    store: &mut SqliteStore,
    entries: &[SleepEntry],
    goal: &SleepGoal,
    thresholds: &Thresholds,
) -> anyhow::Result<()> {
    let history = load_conversation(store)?;
    if !ctx.quiet() {
        println!("{}", header(ui, "chat", None));
        print(ui, &hint(ui, "Type `exit` to leave."));
        println!();
    }
    // Only the latest message; the full history is `chat --history`.
    if let Some(last) = history.last() {
        print_messages(ui, std::slice::from_ref(last));
    }

    loop {
        let text: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
            return Ok(());
        }
        let (_, reply) = send(store, trimmed, entries, goal, thresholds)?;
        println!();
        print_messages(ui, std::slice::from_ref(&reply));
    }
}

/// Answer `text` and persist both sides of the exchange.
fn send(
    store: &mut SqliteStore,
    text: &str,
    entries: &[SleepEntry],
    goal: &SleepGoal,
    thresholds: &Thresholds,
) -> anyhow::Result<(ChatMessage, ChatMessage)> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CliError::invalid_input("Message must not be empty").into());
    }

    let stats = generate_stats(entries);
    let snapshot = Snapshot {
        entries,
        goal,
        stats: &stats,
        thresholds,
    };
    let (user, reply) = exchange(text, &snapshot);
    store.append_message(&user)?;
    store.append_message(&reply)?;
    tracing::debug!(reply_len = reply.text.len(), "assistant replied");
    Ok((user, reply))
}

fn emit(ui: &UiContext, messages: &[ChatMessage]) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(messages);
    }
    print_messages(ui, messages);
    Ok(())
}
