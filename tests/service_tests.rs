use uuid::Uuid;
use wallet_core::{
    core::services::{AccountService, CategoryService, SummaryService, TransactionService},
    domain::{
        account::{Account, AccountKind},
        category::{Category, CategoryKind, TRANSFER_CATEGORY_ID},
        ledger::Ledger,
        transaction::{Transaction, TransactionKind},
    },
};

fn prepared_ledger() -> (Ledger, Uuid, Uuid) {
    let mut ledger = Ledger::with_default_categories("Services");
    let checking = AccountService::add(
        &mut ledger,
        Account::new("Checking", AccountKind::Bank).with_initial_balance(100.0),
    )
    .unwrap();
    let savings = AccountService::add(
        &mut ledger,
        Account::new("Savings", AccountKind::Bank).with_initial_balance(0.0),
    )
    .unwrap();
    (ledger, checking, savings)
}

#[test]
fn income_raises_the_resolved_balance() {
    let (mut ledger, checking, _) = prepared_ledger();
    TransactionService::add(
        &mut ledger,
        Transaction::new("Salary", 50.0, TransactionKind::Income, checking),
    )
    .unwrap();
    assert_eq!(SummaryService::balance_of(&ledger, checking), Some(150.0));
}

#[test]
fn transfer_moves_funds_without_changing_net_worth() {
    let (mut ledger, checking, savings) = prepared_ledger();
    ledger.account_mut(checking).unwrap().initial_balance = 200.0;

    let before = SummaryService::net_worth(&ledger);
    TransactionService::add(
        &mut ledger,
        Transaction::transfer("To savings", 75.0, checking, savings),
    )
    .unwrap();

    assert_eq!(SummaryService::balance_of(&ledger, checking), Some(125.0));
    assert_eq!(SummaryService::balance_of(&ledger, savings), Some(75.0));
    assert_eq!(SummaryService::net_worth(&ledger), before);
    assert_eq!(before, 200.0);
}

#[test]
fn deleting_an_account_orphans_but_never_faults() {
    let (mut ledger, checking, savings) = prepared_ledger();
    TransactionService::add(
        &mut ledger,
        Transaction::transfer("To savings", 30.0, checking, savings),
    )
    .unwrap();
    AccountService::remove(&mut ledger, savings).unwrap();

    // The orphaned credit side contributes to no remaining account.
    assert_eq!(SummaryService::balance_of(&ledger, checking), Some(70.0));
    assert_eq!(SummaryService::net_worth(&ledger), 70.0);
    assert_eq!(SummaryService::balance_of(&ledger, savings), None);
    // The activity feed still renders the transfer with a placeholder name.
    let activity = SummaryService::account_activity(&ledger, checking);
    assert_eq!(activity[0].label, "Transfer to Unknown");
}

#[test]
fn default_categories_include_the_reserved_transfer_entry() {
    let (ledger, _, _) = prepared_ledger();
    let categories = CategoryService::list(&ledger);
    assert!(categories.iter().any(|c| c.id == TRANSFER_CATEGORY_ID));
    // Nine seeded defaults plus the reserved entry.
    assert_eq!(categories.len(), 10);
}

#[test]
fn reserved_category_survives_removal_attempts() {
    let (mut ledger, _, _) = prepared_ledger();
    assert!(CategoryService::remove(&mut ledger, TRANSFER_CATEGORY_ID).is_err());
    let food = CategoryService::add(
        &mut ledger,
        Category::new("Takeaway", CategoryKind::Expense),
    )
    .unwrap();
    CategoryService::remove(&mut ledger, food).unwrap();
    assert!(ledger.category(TRANSFER_CATEGORY_ID).is_some());
}

#[test]
fn edits_never_bleed_into_the_log_on_failure() {
    let (mut ledger, checking, savings) = prepared_ledger();
    let id = TransactionService::add(
        &mut ledger,
        Transaction::new("Lunch", 8.0, TransactionKind::Expense, checking),
    )
    .unwrap();

    // Turning an expense into a self-transfer must be rejected atomically.
    let err = TransactionService::update(&mut ledger, id, |txn| {
        txn.kind = TransactionKind::Transfer;
        txn.to_account_id = Some(checking);
    })
    .expect_err("self-transfer must be rejected");
    assert!(format!("{err}").contains("differ"));
    let stored = ledger.transaction(id).unwrap();
    assert_eq!(stored.kind, TransactionKind::Expense);
    assert_eq!(stored.to_account_id, None);

    // A valid retarget succeeds and picks up the reserved category.
    TransactionService::update(&mut ledger, id, |txn| {
        txn.kind = TransactionKind::Transfer;
        txn.to_account_id = Some(savings);
    })
    .unwrap();
    assert_eq!(
        ledger.transaction(id).unwrap().category_id,
        Some(TRANSFER_CATEGORY_ID)
    );
}
