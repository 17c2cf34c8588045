//! APIs and models related to prepaid credit wallets and their transactions.

mod api;
mod model;

pub use api::{WalletTransactionsApi, WalletsApi};
pub use model::*;
