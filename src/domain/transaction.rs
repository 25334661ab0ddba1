use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// A single recorded financial event: income, expense, or transfer.
///
/// `amount` is a non-negative magnitude; direction comes from `kind`. For
/// transfers, `account_id` is the debited source and `to_account_id` the
/// credited destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_recurring: bool,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<Uuid>,
}

impl Transaction {
    /// Creates an income or expense entry against a single account,
    /// stamping it with a fresh id and the current instant.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        account_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            kind,
            category_id: None,
            mood: None,
            timestamp: Utc::now(),
            is_recurring: false,
            account_id,
            to_account_id: None,
        }
    }

    /// Creates a transfer moving `amount` from `account_id` to `to_account_id`.
    pub fn transfer(
        description: impl Into<String>,
        amount: f64,
        account_id: Uuid,
        to_account_id: Uuid,
    ) -> Self {
        let mut txn = Self::new(description, amount, TransactionKind::Transfer, account_id);
        txn.to_account_id = Some(to_account_id);
        txn
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self.kind, TransactionKind::Transfer)
    }

    /// True when the transaction debits or credits the given account.
    pub fn touches_account(&self, account_id: Uuid) -> bool {
        self.account_id == account_id || self.to_account_id == Some(account_id)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} ({})", self.description, self.kind)
    }
}

/// Direction of a transaction's effect on its source account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Transfer => "transfer",
        };
        f.write_str(label)
    }
}

/// Self-reported mood attached to an expense at entry time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Stressed,
    Impulsive,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Stressed => "stressed",
            Mood::Impulsive => "impulsive",
        };
        f.write_str(label)
    }
}
