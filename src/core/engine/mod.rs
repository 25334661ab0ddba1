//! Pure derivation functions over the transaction log.
//!
//! Every function here is synchronous, side-effect free, and recomputes its
//! result in full from the snapshot it is handed; no derived state survives
//! between calls.

pub mod balance;
pub mod breakdown;
pub mod net_worth;

pub use balance::resolve_balance;
pub use breakdown::{aggregate_by, spending_by_category, spending_by_mood};
pub use net_worth::{net_worth_series, total_net_worth, TrendPoint};
