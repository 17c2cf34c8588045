use crate::common::test_context::TestContext;
use lago_rust::{
    apis::{
        customers::{Customer, CustomerInputBuilder},
        subscriptions::{Subscription, SubscriptionInputBuilder},
    },
    Context,
};
use uuid::Uuid;

/// Returns a unique external id, so that tests can share the same organization.
pub fn external_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

pub async fn create_customer(ctx: &TestContext) -> anyhow::Result<Customer> {
    let input = CustomerInputBuilder::default()
        .external_id(external_id("customer"))
        .name("Gavin Belson")
        .email("gavin@hooli.com")
        .currency("EUR")
        .build()?;

    let customer = ctx
        .client
        .customers
        .create(&Context::background(), &input)
        .await?;
    Ok(customer)
}

pub async fn create_subscription(
    ctx: &TestContext,
    customer: &Customer,
) -> anyhow::Result<Subscription> {
    let input = SubscriptionInputBuilder::default()
        .external_customer_id(customer.external_id.clone())
        .external_id(external_id("subscription"))
        .plan_code(ctx.plan_code.clone())
        .build()?;

    let subscription = ctx
        .client
        .subscriptions
        .create(&Context::background(), &input)
        .await?;
    Ok(subscription)
}
