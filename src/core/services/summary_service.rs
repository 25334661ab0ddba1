//! Read facade over the derivation engine, consumed by the UI layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::engine::{
    net_worth_series, resolve_balance, spending_by_category, spending_by_mood, total_net_worth,
    TrendPoint,
};
use crate::domain::ledger::Ledger;
use crate::domain::transaction::{Mood, Transaction, TransactionKind};

/// Label shown when a referenced counterpart account no longer exists.
const UNKNOWN_ACCOUNT: &str = "Unknown";

/// Income/expense flow totals with the savings-rate health score shown on
/// the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
    pub score: u8,
}

/// One row of a wallet's activity feed, with transfer descriptions resolved
/// against the counterpart account.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry<'a> {
    pub transaction: &'a Transaction,
    pub label: String,
    pub inflow: bool,
}

pub struct SummaryService;

impl SummaryService {
    /// Resolves the current balance of one account, or `None` for an
    /// unknown id.
    pub fn balance_of(ledger: &Ledger, account_id: Uuid) -> Option<f64> {
        ledger
            .account(account_id)
            .map(|account| resolve_balance(account, &ledger.transactions))
    }

    /// Sum of all resolved account balances.
    pub fn net_worth(ledger: &Ledger) -> f64 {
        total_net_worth(&ledger.accounts, &ledger.transactions)
    }

    /// Day-bucketed cumulative flow series for the trend chart.
    pub fn trend(ledger: &Ledger, limit: usize) -> Vec<TrendPoint> {
        net_worth_series(&ledger.transactions, limit)
    }

    pub fn category_breakdown(ledger: &Ledger) -> HashMap<Uuid, f64> {
        spending_by_category(&ledger.transactions)
    }

    pub fn mood_breakdown(ledger: &Ledger) -> HashMap<Mood, f64> {
        spending_by_mood(&ledger.transactions)
    }

    /// The `count` most recent transactions, newest first.
    pub fn recent_transactions(ledger: &Ledger, count: usize) -> Vec<&Transaction> {
        let mut ordered: Vec<&Transaction> = ledger.transactions.iter().collect();
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        ordered.truncate(count);
        ordered
    }

    /// Whole-log income and expense totals plus the savings-rate score.
    pub fn flow_summary(ledger: &Ledger) -> FlowSummary {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for txn in &ledger.transactions {
            let amount = txn.amount.max(0.0);
            if !amount.is_finite() {
                continue;
            }
            match txn.kind {
                TransactionKind::Income => total_income += amount,
                TransactionKind::Expense => total_expense += amount,
                TransactionKind::Transfer => {}
            }
        }
        FlowSummary {
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
            score: health_score(total_income, total_expense),
        }
    }

    /// Chronologically sorted activity for one wallet, newest first,
    /// including transfers in and out with counterpart-resolved labels.
    pub fn account_activity(ledger: &Ledger, account_id: Uuid) -> Vec<ActivityEntry<'_>> {
        let mut entries: Vec<ActivityEntry<'_>> = ledger
            .transactions
            .iter()
            .filter(|txn| txn.touches_account(account_id))
            .map(|txn| ActivityEntry {
                transaction: txn,
                label: Self::activity_label(ledger, txn, account_id),
                inflow: txn.kind == TransactionKind::Income
                    || (txn.is_transfer() && txn.to_account_id == Some(account_id)),
            })
            .collect();
        entries.sort_by(|a, b| b.transaction.timestamp.cmp(&a.transaction.timestamp));
        entries
    }

    fn activity_label(ledger: &Ledger, txn: &Transaction, account_id: Uuid) -> String {
        if !txn.is_transfer() {
            return txn.description.clone();
        }
        if txn.account_id == account_id {
            let to = txn
                .to_account_id
                .and_then(|id| ledger.account(id))
                .map_or(UNKNOWN_ACCOUNT, |account| account.name.as_str());
            format!("Transfer to {to}")
        } else {
            let from = ledger
                .account(txn.account_id)
                .map_or(UNKNOWN_ACCOUNT, |account| account.name.as_str());
            format!("Transfer from {from}")
        }
    }
}

/// Maps the savings rate onto the dashboard's coarse health score bands.
fn health_score(income: f64, expense: f64) -> u8 {
    let savings_rate = if income > 0.0 {
        (income - expense) / income * 100.0
    } else {
        0.0
    };
    if savings_rate > 20.0 {
        90
    } else if savings_rate > 10.0 {
        75
    } else if savings_rate > 0.0 {
        60
    } else {
        40
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Account, AccountKind};
    use chrono::{Duration, Utc};

    fn ledger_with_transfer() -> (Ledger, Uuid, Uuid) {
        let mut ledger = Ledger::new("Summary");
        let a = ledger.add_account(Account::new("Checking", AccountKind::Bank));
        let b = ledger.add_account(Account::new("Savings", AccountKind::Bank));
        ledger.add_transaction(Transaction::transfer("Move", 30.0, a, b));
        (ledger, a, b)
    }

    #[test]
    fn balance_of_unknown_account_is_none() {
        let (ledger, _, _) = ledger_with_transfer();
        assert!(SummaryService::balance_of(&ledger, Uuid::new_v4()).is_none());
    }

    #[test]
    fn transfer_labels_resolve_counterpart_names() {
        let (ledger, a, b) = ledger_with_transfer();
        let from_side = SummaryService::account_activity(&ledger, a);
        assert_eq!(from_side[0].label, "Transfer to Savings");
        assert!(!from_side[0].inflow);

        let to_side = SummaryService::account_activity(&ledger, b);
        assert_eq!(to_side[0].label, "Transfer from Checking");
        assert!(to_side[0].inflow);
    }

    #[test]
    fn transfer_label_falls_back_for_deleted_counterpart() {
        let (mut ledger, a, b) = ledger_with_transfer();
        ledger.accounts.retain(|account| account.id != b);
        let activity = SummaryService::account_activity(&ledger, a);
        assert_eq!(activity[0].label, "Transfer to Unknown");
    }

    #[test]
    fn recent_transactions_are_newest_first() {
        let mut ledger = Ledger::new("Recent");
        let account = ledger.add_account(Account::new("Checking", AccountKind::Bank));
        let base = Utc::now();
        for i in 0..7 {
            ledger.add_transaction(
                Transaction::new(format!("tx{i}"), 1.0, TransactionKind::Expense, account)
                    .with_timestamp(base + Duration::minutes(i)),
            );
        }
        let recent = SummaryService::recent_transactions(&ledger, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].description, "tx6");
        assert!(recent
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn flow_summary_scores_savings_rate() {
        let mut ledger = Ledger::new("Flow");
        let account = ledger.add_account(Account::new("Checking", AccountKind::Bank));
        ledger.add_transaction(Transaction::new(
            "Pay",
            1000.0,
            TransactionKind::Income,
            account,
        ));
        ledger.add_transaction(Transaction::new(
            "Rent",
            700.0,
            TransactionKind::Expense,
            account,
        ));
        let summary = SummaryService::flow_summary(&ledger);
        assert_eq!(summary.net_balance, 300.0);
        assert_eq!(summary.score, 90);

        let empty = SummaryService::flow_summary(&Ledger::new("Empty"));
        assert_eq!(empty.score, 40);
    }
}
