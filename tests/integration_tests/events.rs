use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::{create_customer, create_subscription, external_id},
};
use chrono::{TimeZone, Utc};
use lago_rust::{apis::events::EventInputBuilder, Context};
use serde_json::{json, Map, Value};

#[tokio::test]
async fn create_and_get_event() {
    let ctx = TestContext::start().await;
    let customer = create_customer(&ctx).await.unwrap();
    let subscription = create_subscription(&ctx, &customer).await.unwrap();

    let timestamp = Utc.timestamp_opt(1_651_240_791, 0).unwrap();
    let mut properties = Map::new();
    properties.insert("region".into(), json!("eu-west-1"));

    let input = EventInputBuilder::default()
        .transaction_id(external_id("txn"))
        .code("api_calls")
        .external_subscription_id(subscription.external_id.clone())
        .timestamp(timestamp)
        .properties(properties)
        .build()
        .unwrap();
    ctx.client
        .events
        .create(&Context::background(), &input)
        .await
        .unwrap();

    let event = ctx
        .client
        .events
        .get(&Context::background(), &input.transaction_id)
        .await
        .unwrap();

    assert_eq!(event.code, "api_calls");
    assert_eq!(event.timestamp, timestamp);
    assert_eq!(event.properties["region"], Value::from("eu-west-1"));
}

#[tokio::test]
async fn batch_events_are_all_recorded() {
    let ctx = TestContext::start().await;
    let customer = create_customer(&ctx).await.unwrap();
    let subscription = create_subscription(&ctx, &customer).await.unwrap();

    let inputs: Vec<_> = (0..3)
        .map(|_| {
            EventInputBuilder::default()
                .transaction_id(external_id("txn"))
                .code("api_calls")
                .external_subscription_id(subscription.external_id.clone())
                .build()
                .unwrap()
        })
        .collect();

    ctx.client
        .events
        .batch(&Context::background(), &inputs)
        .await
        .unwrap();

    for input in &inputs {
        let event = ctx
            .client
            .events
            .get(&Context::background(), &input.transaction_id)
            .await
            .unwrap();
        assert_eq!(event.transaction_id, input.transaction_id);
    }
}
