//! APIs and models related to coupons and their application to customers.

mod api;
mod model;

pub use api::{AppliedCouponsApi, CouponsApi};
pub use model::*;
