//! String formatting utilities for UI rendering.

use owo_colors::OwoColorize;
use uuid::Uuid;

use fintrack_core::TransactionKind;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a short ID from a UUID (first 8 characters).
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Format an amount with the currency symbol, e.g. "$1,234.50".
/// Negative values put the sign before the symbol: "-$970.50".
pub fn format_amount(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, currency, group_thousands(amount.abs()))
}

/// Format an amount with its derived sign, e.g. "+$2,500.00" / "-$45.00",
/// colored green/red when color is enabled.
pub fn format_signed_amount(
    amount: f64,
    kind: TransactionKind,
    currency: &str,
    color: bool,
) -> String {
    let text = match kind {
        TransactionKind::Income => format!("+{}", format_amount(amount, currency)),
        TransactionKind::Expense => format!("-{}", format_amount(amount, currency)),
    };
    if !color {
        return text;
    }
    match kind {
        TransactionKind::Income => text.green().to_string(),
        TransactionKind::Expense => text.red().to_string(),
    }
}

/// Two-decimal rendering with thousands separators; expects a non-negative
/// value (callers handle the sign).
fn group_thousands(amount: f64) -> String {
    let formatted = format!("{:.2}", amount);
    let (whole, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}.{}", grouped, fraction)
}
