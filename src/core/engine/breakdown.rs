//! Grouped spending totals for breakdown charts.

use std::collections::HashMap;
use std::hash::Hash;

use uuid::Uuid;

use crate::core::engine::balance::sanitized;
use crate::domain::{Mood, Transaction, TransactionKind};

/// Filters the log, groups the survivors by `key_fn`, and sums amounts per
/// group.
///
/// The result is sparse: buckets that would sum to zero are never present,
/// so consumers can render every entry without checking for empties. Map
/// iteration order carries no meaning.
pub fn aggregate_by<K, F, P>(transactions: &[Transaction], filter: P, key_fn: F) -> HashMap<K, f64>
where
    K: Eq + Hash,
    F: Fn(&Transaction) -> Option<K>,
    P: Fn(&Transaction) -> bool,
{
    let mut buckets = HashMap::new();
    for txn in transactions.iter().filter(|txn| filter(txn)) {
        let amount = sanitized(txn.amount);
        if amount <= 0.0 {
            continue;
        }
        if let Some(key) = key_fn(txn) {
            *buckets.entry(key).or_insert(0.0) += amount;
        }
    }
    buckets
}

/// Expense totals keyed by category id. Transactions without a category are
/// excluded rather than surfaced as an error bucket.
pub fn spending_by_category(transactions: &[Transaction]) -> HashMap<Uuid, f64> {
    aggregate_by(
        transactions,
        |txn| txn.kind == TransactionKind::Expense,
        |txn| txn.category_id,
    )
}

/// Expense totals keyed by the mood recorded at entry time.
pub fn spending_by_mood(transactions: &[Transaction]) -> HashMap<Mood, f64> {
    aggregate_by(
        transactions,
        |txn| txn.kind == TransactionKind::Expense,
        |txn| txn.mood,
    )
}
