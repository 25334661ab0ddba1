//! Net-worth aggregation and the day-bucketed trend series.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::engine::balance::{resolve_balance, sanitized};
use crate::domain::{Account, Transaction, TransactionKind};

/// One day bucket of the trend series, holding the cumulative flow at the
/// end of that calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub day: NaiveDate,
    pub total: f64,
}

/// Sums the resolved balances of all accounts.
///
/// Accounts with no transactions still contribute their initial balance;
/// transfers between owned accounts cancel out and leave the total unchanged.
pub fn total_net_worth(accounts: &[Account], transactions: &[Transaction]) -> f64 {
    accounts
        .iter()
        .map(|account| resolve_balance(account, transactions))
        .sum()
}

/// Builds the chronological running-flow series for trend display.
///
/// Transactions are walked in timestamp order, accumulating income minus
/// expense from a zero seed. This tracks flow rather than absolute net worth:
/// initial balances are excluded and transfers are neutral. Entries are
/// keyed by local calendar day, with multiple same-day transactions
/// collapsing to the latest cumulative value, and only the most recent
/// `limit` days are returned.
pub fn net_worth_series(transactions: &[Transaction], limit: usize) -> Vec<TrendPoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|txn| txn.timestamp);

    let mut running = 0.0;
    let mut series: Vec<TrendPoint> = Vec::new();
    for txn in ordered {
        match txn.kind {
            TransactionKind::Income => running += sanitized(txn.amount),
            TransactionKind::Expense => running -= sanitized(txn.amount),
            TransactionKind::Transfer => {}
        }
        let day = txn.timestamp.with_timezone(&Local).date_naive();
        if let Some(point) = series.last_mut() {
            if point.day == day {
                point.total = running;
                continue;
            }
        }
        series.push(TrendPoint {
            day,
            total: running,
        });
    }

    if series.len() > limit {
        series.drain(..series.len() - limit);
    }
    series
}
