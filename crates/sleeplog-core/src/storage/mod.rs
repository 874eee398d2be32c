//! Storage abstraction and the SQLite backend.

mod sqlite;
mod traits;
mod types;

pub use sqlite::SqliteStore;
pub use traits::SleepStore;
pub use types::EntryFilter;
