use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::ledger::Ledger;

use super::{ServiceError, ServiceResult};

pub struct AccountService;

impl AccountService {
    pub fn add(ledger: &mut Ledger, account: Account) -> ServiceResult<Uuid> {
        Self::validate_name(ledger, None, &account.name)?;
        Self::validate_initial_balance(account.initial_balance)?;
        Ok(ledger.add_account(account))
    }

    /// Replaces the account's own fields. The id is immutable; transaction
    /// activity never flows back into the stored account.
    pub fn edit(ledger: &mut Ledger, id: Uuid, changes: Account) -> ServiceResult<()> {
        Self::validate_name(ledger, Some(id), &changes.name)?;
        Self::validate_initial_balance(changes.initial_balance)?;
        let account = ledger
            .account_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?;
        account.name = changes.name;
        account.kind = changes.kind;
        account.color = changes.color;
        account.currency = changes.currency;
        account.initial_balance = changes.initial_balance;
        ledger.touch();
        Ok(())
    }

    /// Removes the account without touching transactions that reference it.
    /// Orphaned references resolve to a placeholder downstream.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        let before = ledger.accounts.len();
        ledger.accounts.retain(|account| account.id != id);
        if ledger.accounts.len() == before {
            return Err(ServiceError::Invalid("Account not found".into()));
        }
        let orphaned = ledger
            .transactions
            .iter()
            .filter(|txn| txn.touches_account(id))
            .count();
        if orphaned > 0 {
            tracing::info!(
                account_id = %id,
                orphaned,
                "removed account leaving orphaned transaction references"
            );
        }
        ledger.touch();
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&Account> {
        ledger.accounts.iter().collect()
    }

    fn validate_name(ledger: &Ledger, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid("Account name cannot be empty".into()));
        }
        let duplicate = ledger.accounts.iter().any(|account| {
            let name = account.name.trim().to_ascii_lowercase();
            name == normalized && exclude.map_or(true, |id| account.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Account `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }

    fn validate_initial_balance(balance: f64) -> ServiceResult<()> {
        if balance.is_finite() {
            Ok(())
        } else {
            Err(ServiceError::Invalid(
                "Initial balance must be a finite number".into(),
            ))
        }
    }
}
