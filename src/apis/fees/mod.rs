//! APIs and models related to fees.

mod api;
mod model;

pub use api::FeesApi;
pub use model::*;
