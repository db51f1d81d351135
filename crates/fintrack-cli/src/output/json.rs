//! JSON output formatting for transactions.

use fintrack_core::Transaction;

/// Convert a transaction to JSON for output.
///
/// Matches the persisted shape (`type` tag, string date) so scripted
/// consumers see one format everywhere.
pub fn transaction_json(transaction: &Transaction) -> serde_json::Value {
    serde_json::json!({
        "id": transaction.id,
        "amount": transaction.amount,
        "description": transaction.description,
        "date": transaction.date,
        "category": transaction.category,
        "type": transaction.kind.as_str(),
    })
}

/// Convert multiple transactions to a JSON array for output.
pub fn transactions_json(transactions: &[Transaction]) -> Vec<serde_json::Value> {
    transactions.iter().map(transaction_json).collect()
}
