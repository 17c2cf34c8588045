//! APIs and models related to plans and their charges.

mod api;
mod model;

pub use api::PlansApi;
pub use model::*;
