//! Helper functions for the fintrack CLI.

mod parsing;
mod resolver;

pub use parsing::{parse_reference_date, validate_date, validate_amount};
pub use resolver::resolve_transaction_id;
