//! Output formatting for the CLI.
//!
//! JSON renderings live in `json`, human renderings (pretty and plain) in
//! `text`.

mod json;
mod text;

pub use json::{entries_json, entry_json, print_json};
pub use text::{
    print_dashboard, print_entry, print_entry_list, print_goal, print_messages,
    print_recommendations, print_tips,
};
