use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;
use wallet_core::core::engine::{net_worth_series, spending_by_category, total_net_worth};
use wallet_core::domain::{
    account::{Account, AccountKind},
    ledger::Ledger,
    transaction::{Transaction, TransactionKind},
};
use wallet_core::storage::json_backend::{load_ledger_from_path, save_ledger_to_path};

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::with_default_categories("Benchmark");
    let checking = ledger.add_account(
        Account::new("Checking", AccountKind::Bank).with_initial_balance(1_000.0),
    );
    let savings = ledger.add_account(Account::new("Savings", AccountKind::Bank));
    let food = ledger.categories[1].id;

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    for idx in 0..txn_count {
        let timestamp = start + Duration::days((idx % 365) as i64);
        let txn = match idx % 3 {
            0 => Transaction::new("Pay", 120.0, TransactionKind::Income, checking),
            1 => Transaction::new("Groceries", 35.0, TransactionKind::Expense, checking)
                .with_category(food),
            _ => Transaction::transfer("Stash", 20.0, checking, savings),
        };
        ledger.add_transaction(txn.with_timestamp(timestamp));
    }
    ledger
}

fn bench_derivations(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("net_worth_10k", |b| {
        b.iter(|| black_box(total_net_worth(&ledger.accounts, &ledger.transactions)))
    });

    c.bench_function("trend_series_10k", |b| {
        b.iter(|| black_box(net_worth_series(&ledger.transactions, 10)))
    });

    c.bench_function("category_breakdown_10k", |b| {
        b.iter(|| black_box(spending_by_category(&ledger.transactions)))
    });
}

fn bench_ledger_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("ledger.json");

    c.bench_function("ledger_save_10k", |b| {
        b.iter(|| {
            save_ledger_to_path(&ledger, &file_path).expect("save ledger");
        })
    });

    save_ledger_to_path(&ledger, &file_path).expect("seed");

    c.bench_function("ledger_load_10k", |b| {
        b.iter(|| {
            let loaded = load_ledger_from_path(&file_path).expect("load ledger");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_derivations, bench_ledger_io);
criterion_main!(benches);
