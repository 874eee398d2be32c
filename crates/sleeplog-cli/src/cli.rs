use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use sleeplog_core::VERSION;

/// Sleeplog - track your sleep, see your patterns, get gentle advice
#[derive(Parser)]
#[command(name = "sleeplog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the sleep store (SQLite file)
    #[arg(short, long, global = true, env = "SLEEPLOG_PATH")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `log` command
#[derive(Args)]
pub struct LogArgs {
    /// Night the entry is filed under (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Time you went to bed (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub bed: String,

    /// Time you woke up (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub wake: String,

    /// Sleep quality from 1 (poor) to 5 (excellent)
    #[arg(long, value_name = "1-5")]
    pub quality: u8,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Time window (e.g., "7d", "4w")
    #[arg(long)]
    pub last: Option<String>,

    /// Start date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub since: Option<String>,

    /// End date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub until: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New bed time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub bed: Option<String>,

    /// New wake time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub wake: Option<String>,

    /// New quality (1-5)
    #[arg(long, value_name = "1-5")]
    pub quality: Option<u8>,

    /// Replace the notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Only consider a recent window (e.g., "7d", "4w")
    #[arg(long)]
    pub last: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for commands whose only option is JSON output
#[derive(Args)]
pub struct JsonArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `goal set`
#[derive(Args)]
pub struct GoalSetArgs {
    /// Target bed time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub bed: Option<String>,

    /// Target wake time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub wake: Option<String>,

    /// Target sleep in minutes (otherwise derived from the times)
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum GoalSubcommand {
    /// Show the current goal
    Show(JsonArgs),

    /// Change the goal
    Set(GoalSetArgs),
}

#[derive(Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    pub command: GoalSubcommand,
}

/// Arguments for the `chat` command
#[derive(Args)]
pub struct ChatArgs {
    /// Message to send (omit for an interactive session)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Print the conversation so far
    #[arg(long, conflicts_with_all = ["message", "clear"])]
    pub history: bool,

    /// Start the conversation over
    #[arg(long, conflicts_with = "message")]
    pub clear: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `breathe` command
#[derive(Args)]
pub struct BreatheArgs {
    /// Number of 4-7-8 cycles
    #[arg(long, default_value_t = sleeplog_core::breathing::DEFAULT_CYCLES)]
    pub cycles: u32,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format (json, jsonl)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Start date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub since: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a night of sleep
    Log(LogArgs),

    /// List logged nights, newest first
    List(ListArgs),

    /// Show a single entry
    Show(ShowArgs),

    /// Change fields of an entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Averages, consistency, streak and goal progress
    Stats(StatsArgs),

    /// Personalized recommendations
    Recommend(JsonArgs),

    /// Show or change your sleep goal
    Goal(GoalArgs),

    /// Talk to the sleep assistant
    Chat(ChatArgs),

    /// Sleep hygiene tips
    Tips(JsonArgs),

    /// Guided 4-7-8 breathing exercise
    Breathe(BreatheArgs),

    /// Export entries (portable formats, you own your data)
    Export(ExportArgs),

    /// Check store integrity
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
