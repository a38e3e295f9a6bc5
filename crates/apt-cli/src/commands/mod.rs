//! Command implementations for apt-cli

pub mod list;
pub mod modify;
pub mod paths;

pub use list::run_list;
pub use modify::{run_add, run_edit, run_remove};
pub use paths::run_paths;
