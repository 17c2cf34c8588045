use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::{create_customer, create_subscription, external_id},
};
use chrono::{Duration, Utc};
use lago_rust::{
    apis::subscriptions::{
        SubscriptionInputBuilder, SubscriptionListInput, SubscriptionStatus,
        SubscriptionTerminateInput,
    },
    Context,
};

#[tokio::test]
async fn create_and_terminate_subscription() {
    let ctx = TestContext::start().await;
    let customer = create_customer(&ctx).await.unwrap();

    let subscription = create_subscription(&ctx, &customer).await.unwrap();
    assert_eq!(subscription.status, SubscriptionStatus::Active);
    assert_eq!(subscription.lago_customer_id, customer.lago_id);
    assert_eq!(subscription.plan_code, ctx.plan_code);

    let terminated = ctx
        .client
        .subscriptions
        .terminate(
            &Context::background(),
            &subscription.external_id,
            &SubscriptionTerminateInput::default(),
        )
        .await
        .unwrap();

    assert_eq!(terminated.status, SubscriptionStatus::Terminated);
    assert!(terminated.terminated_at.is_some());
}

#[tokio::test]
async fn terminating_a_pending_subscription_cancels_it() {
    let ctx = TestContext::start().await;
    let customer = create_customer(&ctx).await.unwrap();

    let input = SubscriptionInputBuilder::default()
        .external_customer_id(customer.external_id.clone())
        .external_id(external_id("subscription"))
        .plan_code(ctx.plan_code.clone())
        .subscription_at(Utc::now() + Duration::days(30))
        .build()
        .unwrap();
    let subscription = ctx
        .client
        .subscriptions
        .create(&Context::background(), &input)
        .await
        .unwrap();
    assert_eq!(subscription.status, SubscriptionStatus::Pending);

    let canceled = ctx
        .client
        .subscriptions
        .terminate(
            &Context::background(),
            &subscription.external_id,
            &SubscriptionTerminateInput {
                status: Some(SubscriptionStatus::Pending),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(canceled.status, SubscriptionStatus::Canceled);
}

#[tokio::test]
async fn list_subscriptions_filters_by_status() {
    let ctx = TestContext::start().await;
    let customer = create_customer(&ctx).await.unwrap();
    let active = create_subscription(&ctx, &customer).await.unwrap();
    let terminated = create_subscription(&ctx, &customer).await.unwrap();
    ctx.client
        .subscriptions
        .terminate(
            &Context::background(),
            &terminated.external_id,
            &SubscriptionTerminateInput::default(),
        )
        .await
        .unwrap();

    let page = ctx
        .client
        .subscriptions
        .list(
            &Context::background(),
            &SubscriptionListInput {
                external_customer_id: Some(customer.external_id.clone()),
                status: vec![SubscriptionStatus::Active, SubscriptionStatus::Pending],
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        page.items
            .iter()
            .map(|s| s.external_id.as_str())
            .collect::<Vec<_>>(),
        vec![active.external_id.as_str()]
    );
}

#[tokio::test]
async fn subscription_for_unknown_customer_is_not_found() {
    let ctx = TestContext::start().await;

    let input = SubscriptionInputBuilder::default()
        .external_customer_id(external_id("unknown"))
        .external_id(external_id("subscription"))
        .plan_code(ctx.plan_code.clone())
        .build()
        .unwrap();
    let err = ctx
        .client
        .subscriptions
        .create(&Context::background(), &input)
        .await
        .unwrap_err();

    assert_eq!(err.http_status_code, 404);
    assert_eq!(err.error_code, "customer_not_found");
}
