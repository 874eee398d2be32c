pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod log;
pub mod show;

pub use delete::handle_delete;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
pub use log::handle_log;
pub use show::handle_show;
