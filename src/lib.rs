#![doc(test(attr(deny(warnings))))]

//! Wallet Core derives balances, net worth, and spending breakdowns from an
//! append-mostly transaction log, powering the dashboard and analytics views
//! of the surrounding tracker UI.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Wallet Core tracing initialized.");
    });
}
