//! Output formatting helpers for the CLI.

mod json;

pub use json::{transaction_json, transactions_json};
