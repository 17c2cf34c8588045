//! APIs and models related to billable metrics.

mod api;
mod model;

pub use api::BillableMetricsApi;
pub use model::*;
