//! UI primitives for the fintrack CLI.
//!
//! - **context**: environment detection (TTY, color, unicode, width)
//! - **mode**: output mode resolution (json, plain, pretty)
//! - **format**: string utilities (amounts, dates, short ids)
//! - **table**: comfy-table rendering for lists and reports

mod context;
pub mod format;
mod mode;
pub mod table;

pub use context::UiContext;
pub use mode::OutputMode;
pub use table::{bordered_table, simple_table, Column};
