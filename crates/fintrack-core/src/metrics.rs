//! Derived metrics: pure aggregations over a ledger snapshot.
//!
//! Every function here is deterministic in `(snapshot, reference date)` and
//! touches no hidden state; the reference date is always an explicit
//! parameter so tests can pin it instead of reading the system clock.
//! Records whose date does not parse are excluded from date-bucketed
//! aggregates but still count toward the all-time totals, which never
//! consult the date field.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::transaction::{Transaction, TransactionKind};

/// All-time income/expense sums and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// One category's share of the reference month's expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    /// Rounded share of the month's expense total, 0-100.
    pub percentage: u32,
}

/// Income and expense sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    /// Short human-readable month name ("Jan").
    pub label: String,
    /// Paired year; callers rendering across a year boundary need this to
    /// disambiguate two months sharing a label.
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Sum income and expenses over the whole snapshot.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for t in transactions {
        match t.kind {
            TransactionKind::Income => totals.income += t.amount,
            TransactionKind::Expense => totals.expenses += t.amount,
        }
    }
    totals.balance = totals.income - totals.expenses;
    totals
}

/// Sum of expense amounts dated in the reference month.
pub fn monthly_expenses(transactions: &[Transaction], reference: NaiveDate) -> f64 {
    let bucket = (reference.year(), reference.month());
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && t.month() == Some(bucket))
        .map(|t| t.amount)
        .sum()
}

/// Group the reference month's expenses by category.
///
/// The grouping key is the raw category string, no normalization. Groups
/// appear in insertion order of first occurrence. Percentages are rounded
/// shares of the month's expense total; with no matching expenses the
/// result is empty.
pub fn category_breakdown(
    transactions: &[Transaction],
    reference: NaiveDate,
) -> Vec<CategorySlice> {
    let bucket = (reference.year(), reference.month());
    let mut groups: Vec<(String, f64)> = Vec::new();

    for t in transactions {
        if t.kind != TransactionKind::Expense || t.month() != Some(bucket) {
            continue;
        }
        match groups.iter_mut().find(|(category, _)| *category == t.category) {
            Some((_, amount)) => *amount += t.amount,
            None => groups.push((t.category.clone(), t.amount)),
        }
    }

    let total: f64 = groups.iter().map(|(_, amount)| amount).sum();
    groups
        .into_iter()
        .map(|(category, amount)| {
            let percentage = if total > 0.0 {
                (amount / total * 100.0).round() as u32
            } else {
                0
            };
            CategorySlice {
                category,
                amount,
                percentage,
            }
        })
        .collect()
}

/// Income/expense sums for the `months` calendar months ending at the
/// reference month, oldest first.
pub fn monthly_series(
    transactions: &[Transaction],
    reference: NaiveDate,
    months: u32,
) -> Vec<MonthSummary> {
    (0..months)
        .rev()
        .map(|back| {
            let (year, month) = months_back(reference.year(), reference.month(), back);
            let mut income = 0.0;
            let mut expenses = 0.0;
            for t in transactions {
                if t.month() != Some((year, month)) {
                    continue;
                }
                match t.kind {
                    TransactionKind::Income => income += t.amount,
                    TransactionKind::Expense => expenses += t.amount,
                }
            }
            MonthSummary {
                label: MONTH_LABELS[(month - 1) as usize].to_string(),
                year,
                month,
                income,
                expenses,
            }
        })
        .collect()
}

/// Step `back` calendar months before `(year, month)`.
fn months_back(year: i32, month: u32, back: u32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 - back as i32;
    (index.div_euclid(12), (index.rem_euclid(12) + 1) as u32)
}
