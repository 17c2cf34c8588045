//! APIs and models related to payments recorded against invoices.

mod api;
mod model;

pub use api::PaymentsApi;
pub use model::*;
