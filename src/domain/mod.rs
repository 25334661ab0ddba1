pub mod account;
pub mod category;
pub mod common;
pub mod ledger;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use category::{default_categories, Category, CategoryKind, TRANSFER_CATEGORY_ID};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use ledger::Ledger;
pub use transaction::{Mood, Transaction, TransactionKind};
