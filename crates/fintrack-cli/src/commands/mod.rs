//! Command handlers for the fintrack CLI.

mod entries;
mod misc;
mod reports;

pub use entries::{handle_add, handle_delete, handle_edit, handle_list};
pub use misc::handle_completions;
pub use reports::{handle_categories, handle_monthly, handle_summary};
