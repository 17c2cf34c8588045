//! APIs and models related to subscription usage alerts.

mod api;
mod model;

pub use api::AlertsApi;
pub use model::*;
