//! APIs and models related to usage events.

mod api;
mod model;

pub use api::EventsApi;
pub use model::*;
