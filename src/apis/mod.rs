//! Clients for the various Lago APIs.
//!
//! Each module exposes an API client, held by [`LagoClient`](crate::client::LagoClient),
//! together with the models it sends and receives.

pub mod alerts;
pub mod billable_metrics;
pub mod coupons;
pub mod credit_notes;
pub mod customers;
pub mod entitlements;
pub mod events;
pub mod features;
pub mod fees;
pub mod invoices;
pub mod payment_requests;
pub mod payments;
pub mod plans;
pub mod subscriptions;
pub mod wallets;
pub mod webhooks;
