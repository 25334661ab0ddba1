use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    account::Account,
    category::{default_categories, Category},
    transaction::Transaction,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The in-memory snapshot the engine derives everything from.
///
/// The ledger owns the source-of-truth collections; balances and aggregates
/// are recomputed from them on every read and never stored back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    /// Creates an empty ledger seeded with the reserved transfer category.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            accounts: Vec::new(),
            categories: vec![Category::transfer()],
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Creates a ledger pre-populated with the standard category set.
    pub fn with_default_categories(name: impl Into<String>) -> Self {
        let mut ledger = Self::new(name);
        ledger.categories.extend(default_categories());
        ledger
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let position = self.transactions.iter().position(|txn| txn.id == id)?;
        let removed = self.transactions.remove(position);
        self.touch();
        Some(removed)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Re-seeds the reserved transfer category if a loaded snapshot lacks it.
    pub fn ensure_reserved_category(&mut self) {
        if !self.categories.iter().any(Category::is_reserved) {
            self.categories.insert(0, Category::transfer());
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountKind;

    #[test]
    fn new_ledger_contains_reserved_category() {
        let ledger = Ledger::new("Fresh");
        assert!(ledger.categories.iter().any(Category::is_reserved));
    }

    #[test]
    fn ensure_reserved_category_restores_missing_entry() {
        let mut ledger = Ledger::new("Stripped");
        ledger.categories.clear();
        ledger.ensure_reserved_category();
        assert_eq!(ledger.categories.len(), 1);
        assert!(ledger.categories[0].is_reserved());
    }

    #[test]
    fn account_lookup_finds_added_account() {
        let mut ledger = Ledger::new("Lookup");
        let id = ledger.add_account(Account::new("Checking", AccountKind::Bank));
        assert_eq!(ledger.account(id).map(|a| a.name.as_str()), Some("Checking"));
        assert!(ledger.account(Uuid::new_v4()).is_none());
    }
}
