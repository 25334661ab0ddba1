//! Balance resolution from the transaction log.

use crate::domain::{Account, Transaction, TransactionKind};

/// Reconstructs an account's current balance from its initial balance plus
/// the signed effect of every transaction referencing it.
///
/// Income credits the account; expenses and the source side of a transfer
/// debit it; the destination side of a transfer credits it. The fold is a
/// pure sum, so processing order never affects the result, and transactions
/// referencing other accounts (including accounts that no longer exist)
/// simply never match.
pub fn resolve_balance(account: &Account, transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .fold(account.initial_balance, |acc, txn| {
            acc + effect_on(account, txn)
        })
}

/// Signed contribution of a single transaction to the given account.
///
/// A malformed self-transfer applies both the debit and the credit, which
/// nets to zero instead of faulting. Negative amounts are corrupted input
/// and contribute nothing.
fn effect_on(account: &Account, txn: &Transaction) -> f64 {
    let amount = sanitized(txn.amount);
    let mut effect = 0.0;
    if txn.account_id == account.id {
        effect += match txn.kind {
            TransactionKind::Income => amount,
            TransactionKind::Expense | TransactionKind::Transfer => -amount,
        };
    }
    if txn.to_account_id == Some(account.id) && txn.kind == TransactionKind::Transfer {
        effect += amount;
    }
    effect
}

pub(crate) fn sanitized(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}
