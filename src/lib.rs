//! Rust client for the [Lago](https://www.getlago.com) billing and metering API.
//!
//! Check out also the official Lago [API documentation](https://doc.getlago.com/api-reference/intro).
//!
//! # Usage
//!
//! ## Initialize a new `LagoClient`
//!
//! Create a new [`LagoClient`](crate::client::LagoClient) and provide your API key,
//! available in the Developers section of the Lago application.
//!
//! ```rust,no_run
//! # use lago_rust::LagoClient;
//! let lago = LagoClient::builder()
//!     .with_api_key("your-api-key")
//!     .build();
//! ```
//!
//! By default, a `LagoClient` connects to Lago Cloud.
//! To connect to a self-hosted instance, use [`with_base_url`](crate::client::LagoClientBuilder::with_base_url).
//!
//! Every call takes a [`Context`](crate::context::Context), which carries its deadline and cancellation signal.
//!
//! ## Create a customer
//!
//! ```rust,no_run
//! # use lago_rust::{LagoClient, Context, Error, apis::customers::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let lago: LagoClient = unreachable!();
//! #
//! let input = CustomerInputBuilder::default()
//!     .external_id("customer-1234")
//!     .name("Gavin Belson")
//!     .email("gavin@hooli.com")
//!     .currency("USD")
//!     .build()
//!     .unwrap();
//!
//! let customer = lago.customers.create(&Context::background(), &input).await?;
//!
//! println!("Created customer: {}", customer.lago_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Send usage events
//!
//! ```rust,no_run
//! # use lago_rust::{LagoClient, Context, Error, apis::events::*};
//! # use std::time::Duration;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let lago: LagoClient = unreachable!();
//! #
//! let ctx = Context::background().with_timeout(Duration::from_secs(5));
//!
//! let event = EventInputBuilder::default()
//!     .transaction_id("txn-0001")
//!     .code("api_calls")
//!     .external_subscription_id("sub-1234")
//!     .build()
//!     .unwrap();
//!
//! lago.events.create(&ctx, &event).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Handle errors
//!
//! Every call fails with the same [`Error`](crate::error::Error). Errors returned by Lago
//! keep their HTTP status, message, code and details:
//!
//! ```rust,no_run
//! # use lago_rust::{LagoClient, Context};
//! #
//! # #[tokio::main]
//! # async fn main() {
//! # let lago: LagoClient = unreachable!();
//! #
//! match lago.customers.get(&Context::background(), "unknown").await {
//!     Ok(customer) => println!("Found {}", customer.external_id),
//!     Err(e) if e.http_status_code == 404 => println!("Not found: {}", e.error_code),
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! # }
//! ```
//!
//! ## Verify and parse webhooks
//!
//! ```rust,no_run
//! # use lago_rust::{LagoClient, Context, Error, apis::webhooks::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let lago: LagoClient = unreachable!();
//! # let (signature, body) = ("", "");
//! #
//! let ctx = Context::background();
//! if lago.webhooks.validate_body(&ctx, signature, body).await? {
//!     let message = parse_webhook(body)?;
//!     if let WebhookObject::Invoice(invoice) = message.object {
//!         println!("{}: invoice {}", message.webhook_type, invoice.number);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run an example, use `cargo run` like this:
//!
//! ```shell
//! LAGO_API_KEY=... cargo run --example create_customer
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod context;
pub mod engine;
pub mod envelope;
pub mod error;
mod middlewares;
pub mod query;

pub use client::LagoClient;
pub use context::Context;
pub use error::Error;
