//! Domain types for classifying ledger activity.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Stable identifier of the reserved transfer category.
///
/// Transfers between owned accounts always carry this category. It is seeded
/// into every ledger and cannot be removed.
pub const TRANSFER_CATEGORY_ID: Uuid = Uuid::from_u128(0x7472_616e_7366_6572_0000_0000_0000_0001);

/// Categorises transactions for breakdown reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(label: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            icon: "Receipt".into(),
            color: "#ffffff".into(),
            kind,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// The reserved category implicitly assigned to transfer transactions.
    pub fn transfer() -> Self {
        Self {
            id: TRANSFER_CATEGORY_ID,
            label: "Transfer".into(),
            icon: "ArrowLeftRight".into(),
            color: "#888888".into(),
            kind: CategoryKind::Both,
        }
    }

    pub fn is_reserved(&self) -> bool {
        self.id == TRANSFER_CATEGORY_ID
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.label
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.label, self.kind)
    }
}

/// Supported category types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
    Both,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Expense => "Expense",
            CategoryKind::Income => "Income",
            CategoryKind::Both => "Both",
        };
        f.write_str(label)
    }
}

/// The standard category set a fresh ledger is seeded with.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Food & Dining", CategoryKind::Expense)
            .with_icon("Utensils")
            .with_color("#ffcc00"),
        Category::new("Transport", CategoryKind::Expense)
            .with_icon("Car")
            .with_color("#3a86ff"),
        Category::new("Bills & Utils", CategoryKind::Expense)
            .with_icon("Receipt")
            .with_color("#ff0055"),
        Category::new("Entertainment", CategoryKind::Expense)
            .with_icon("Gamepad2")
            .with_color("#7000ff"),
        Category::new("Shopping", CategoryKind::Expense)
            .with_icon("ShoppingBag")
            .with_color("#00d2ff"),
        Category::new("Health", CategoryKind::Expense)
            .with_icon("HeartPulse")
            .with_color("#00ff9d"),
        Category::new("Business", CategoryKind::Income)
            .with_icon("Briefcase")
            .with_color("#ffffff"),
        Category::new("Education", CategoryKind::Expense)
            .with_icon("GraduationCap")
            .with_color("#f97316"),
        Category::new("Investment", CategoryKind::Both)
            .with_icon("TrendingUp")
            .with_color("#10b981"),
    ]
}
