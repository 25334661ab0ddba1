//! Validated write boundary for the transaction log.
//!
//! All structural invariants are enforced here, before a transaction enters
//! the log; the derivation engine assumes well-formed input and only
//! degrades gracefully when something slips through.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::category::TRANSFER_CATEGORY_ID;
use crate::domain::ledger::Ledger;
use crate::domain::transaction::{Transaction, TransactionKind};

pub struct TransactionService;

impl TransactionService {
    /// Validates and appends a new transaction, returning its identifier.
    /// Transfers are stamped with the reserved transfer category.
    pub fn add(ledger: &mut Ledger, mut transaction: Transaction) -> ServiceResult<Uuid> {
        Self::validate(ledger, &transaction)?;
        if transaction.is_transfer() {
            transaction.category_id = Some(TRANSFER_CATEGORY_ID);
            transaction.mood = None;
        }
        Ok(ledger.add_transaction(transaction))
    }

    /// Updates the transaction identified by `id` via the provided mutator.
    /// Every field except the id may change; the result is re-validated.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let mut candidate = ledger
            .transaction(id)
            .cloned()
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        mutator(&mut candidate);
        candidate.id = id;
        Self::validate(ledger, &candidate)?;
        if candidate.is_transfer() {
            candidate.category_id = Some(TRANSFER_CATEGORY_ID);
            candidate.mood = None;
        }
        if let Some(txn) = ledger.transaction_mut(id) {
            *txn = candidate;
        }
        ledger.touch();
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))
    }

    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }

    fn validate(ledger: &Ledger, transaction: &Transaction) -> ServiceResult<()> {
        if !transaction.amount.is_finite() {
            return Err(ServiceError::Invalid("Amount must be finite".into()));
        }
        if transaction.amount < 0.0 {
            return Err(ServiceError::Invalid(
                "Amount must be a non-negative magnitude".into(),
            ));
        }
        if ledger.account(transaction.account_id).is_none() {
            return Err(ServiceError::Invalid("Source account not found".into()));
        }
        match (transaction.kind, transaction.to_account_id) {
            (TransactionKind::Transfer, None) => Err(ServiceError::Invalid(
                "Transfer requires a destination account".into(),
            )),
            (TransactionKind::Transfer, Some(to)) if to == transaction.account_id => Err(
                ServiceError::Invalid("Transfer destination must differ from source".into()),
            ),
            (TransactionKind::Transfer, Some(to)) => {
                if ledger.account(to).is_none() {
                    Err(ServiceError::Invalid(
                        "Transfer destination account not found".into(),
                    ))
                } else {
                    Ok(())
                }
            }
            (_, Some(_)) => Err(ServiceError::Invalid(
                "Only transfers may carry a destination account".into(),
            )),
            (_, None) => Ok(()),
        }
    }
}
