mod customers;
mod errors;
mod events;
mod helpers;
mod subscriptions;
#[cfg(not(feature = "acceptance-tests"))]
mod webhooks;
