//! Application-level plumbing for the Sleeplog CLI.
//!
//! - Lazily loaded configuration bundled with the parsed arguments
//! - Path resolution for the config file and the store
//! - Entry id resolution from full UUIDs or short prefixes

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_entry_id, resolve_store_path};
