//! APIs and models related to the entitlements a plan grants on features.

mod api;
mod model;

pub use api::EntitlementsApi;
pub use model::*;
