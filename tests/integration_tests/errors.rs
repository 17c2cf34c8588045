use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::create_customer,
};
use lago_rust::{
    apis::customers::CustomerInputBuilder, error::Cause, Context, LagoClient,
};
use std::time::Duration;

#[tokio::test]
async fn invalid_api_key_is_unauthorized() {
    let ctx = TestContext::start().await;
    let client = LagoClient::builder()
        .with_base_url(ctx.base_url())
        .with_api_key("invalid-api-key")
        .build();

    let err = client
        .customers
        .get(&Context::background(), "any")
        .await
        .unwrap_err();

    assert_eq!(err.http_status_code, 401);
    assert_eq!(err.message, "Unauthorized");
    assert!(err.err.is_none());
}

#[tokio::test]
async fn validation_errors_carry_their_details() {
    let ctx = TestContext::start().await;

    let input = CustomerInputBuilder::default()
        .external_id("")
        .build()
        .unwrap();
    let err = ctx
        .client
        .customers
        .create(&Context::background(), &input)
        .await
        .unwrap_err();

    assert_eq!(err.http_status_code, 422);
    assert_eq!(err.error_code, "validation_errors");
    let details = err.error_details.unwrap();
    assert!(details.as_map().unwrap().contains_key("external_id"));
}

#[tokio::test]
async fn cancelled_context_fails_without_a_response() {
    let ctx = TestContext::start().await;
    let (call_ctx, cancel) = Context::background().with_cancel();
    cancel.cancel();

    let err = create_customer_with(&ctx, &call_ctx).await;

    assert_eq!(err.http_status_code, 0);
    assert!(matches!(err.err, Some(Cause::Cancelled)));
    assert_eq!(
        err.to_string(),
        r#"{"status":0,"error":"","code":"","err":"context canceled"}"#
    );
}

#[tokio::test]
async fn expired_deadline_fails_without_a_response() {
    let ctx = TestContext::start().await;
    let call_ctx = Context::background().with_timeout(Duration::ZERO);

    let err = create_customer_with(&ctx, &call_ctx).await;

    assert!(err.is_transport());
    assert!(matches!(err.err, Some(Cause::DeadlineExceeded)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = LagoClient::builder()
        .with_base_url("http://127.0.0.1:1")
        .with_api_key("any")
        .build();

    let err = client
        .customers
        .get(&Context::background(), "any")
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err.err, Some(Cause::Http(_))));
}

#[tokio::test]
async fn clients_are_shared_across_tasks() {
    let ctx = TestContext::start().await;
    let customer = create_customer(&ctx).await.unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = ctx.client.clone();
            let external_id = customer.external_id.clone();
            tokio::spawn(async move {
                client
                    .customers
                    .get(&Context::background(), &external_id)
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().lago_id, customer.lago_id);
    }
}

async fn create_customer_with(ctx: &TestContext, call_ctx: &Context) -> lago_rust::Error {
    let input = CustomerInputBuilder::default()
        .external_id("never-created")
        .build()
        .unwrap();

    ctx.client
        .customers
        .create(call_ctx, &input)
        .await
        .unwrap_err()
}
