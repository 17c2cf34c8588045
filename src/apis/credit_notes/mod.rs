//! APIs and models related to credit notes.

mod api;
mod model;

pub use api::CreditNotesApi;
pub use model::*;
