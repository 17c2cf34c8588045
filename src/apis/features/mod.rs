//! APIs and models related to features and their privileges.

mod api;
mod model;

pub use api::FeaturesApi;
pub use model::*;
