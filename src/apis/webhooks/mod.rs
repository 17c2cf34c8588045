//! Verification and parsing of the webhooks sent by Lago.
//!
//! Lago signs every webhook with a JWT carried in the `X-Lago-Signature` header.
//! The token is signed with the organization's RSA key and embeds the raw body in its `data` claim.
//! A receiver should check the token with [`WebhooksApi::validate_body`](crate::apis::webhooks::WebhooksApi::validate_body)
//! before trusting the body, then decode it with [`parse_webhook`](crate::apis::webhooks::parse_webhook).

mod api;
mod model;

pub use api::WebhooksApi;
pub use model::*;

/// Header carrying the signature of a webhook.
pub const SIGNATURE_HEADER: &str = "X-Lago-Signature";
