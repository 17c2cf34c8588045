//! APIs and models related to payment requests, asking a customer to settle overdue invoices.

mod api;
mod model;

pub use api::PaymentRequestsApi;
pub use model::*;
