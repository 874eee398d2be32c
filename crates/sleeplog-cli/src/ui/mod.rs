//! UI primitives for the Sleeplog CLI.
//!
//! - **Context**: environment detection (TTY, width, color, unicode)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badges, styles, symbols
//! - **Render**: tables, headers, receipts, hints
//! - **Progress**: spinners and the breathing phase bar
//! - **Format**: string helpers (short ids, dates, truncation)
//!
//! ```ignore
//! let ui = ctx.ui_context(args.json, None)?;
//! if ui.mode.is_json() {
//!     return output::print_json(&value);
//! }
//! println!("{}", header(&ui, "stats", None));
//! println!("{}", kv(&ui, "Streak", "3 days"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, bullets, header, hint, kv, print, print_error, quality_meter,
    receipt, simple_table, table, Column,
};

pub use progress::{PhaseBar, Spinner};

pub use format::{format_date, format_timestamp, short_id, single_line, truncate};
