//! Transaction id resolution (full UUID or unique prefix).

use uuid::Uuid;

use fintrack_core::Transaction;

/// Resolve a user-supplied id string against the ledger snapshot.
///
/// Accepts a full UUID or a prefix of one; a prefix must match exactly one
/// transaction. Returns `None` when nothing matches — callers treat that as
/// a soft not-found, per the ledger's no-crash contract for stale ids.
pub fn resolve_transaction_id(
    transactions: &[Transaction],
    raw: &str,
) -> anyhow::Result<Option<Uuid>> {
    if let Ok(id) = Uuid::parse_str(raw) {
        return Ok(transactions.iter().find(|t| t.id == id).map(|t| t.id));
    }

    let needle = raw.to_ascii_lowercase();
    let matches: Vec<Uuid> = transactions
        .iter()
        .filter(|t| t.id.to_string().starts_with(&needle))
        .map(|t| t.id)
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        _ => Err(anyhow::anyhow!(
            "Ambiguous id prefix \"{}\" ({} matches); use more characters",
            raw,
            matches.len()
        )),
    }
}
