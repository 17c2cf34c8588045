use crate::{common::test_context::TestContext, integration_tests::helpers::create_customer};
use lago_rust::{
    apis::webhooks::{parse_webhook, WebhookObject},
    Context,
};
use serde_json::json;

async fn customer_created_webhook(ctx: &TestContext) -> String {
    let customer = create_customer(ctx).await.unwrap();

    json!({
        "webhook_type": "customer.created",
        "object_type": "customer",
        "organization_id": "1a901a90-1a90-1a90-1a90-1a901a901a90",
        "customer": customer,
    })
    .to_string()
}

#[tokio::test]
async fn signed_webhook_is_verified_and_parsed() {
    let ctx = TestContext::start().await;
    let body = customer_created_webhook(&ctx).await;
    let signature = ctx.sign_webhook(&body);

    assert!(ctx
        .client
        .webhooks
        .validate_body(&Context::background(), &signature, &body)
        .await
        .unwrap());

    let message = parse_webhook(&body).unwrap();
    assert_eq!(message.webhook_type, "customer.created");
    match message.object {
        WebhookObject::Customer(customer) => {
            assert_eq!(customer.name.as_deref(), Some("Gavin Belson"))
        }
        other => panic!("Unexpected webhook object: {:?}", other),
    }
}

#[tokio::test]
async fn tampered_webhook_is_rejected() {
    let ctx = TestContext::start().await;
    let body = customer_created_webhook(&ctx).await;
    let signature = ctx.sign_webhook(&body);

    let tampered = body.replace("Gavin Belson", "Gavin Be1son");

    assert!(!ctx
        .client
        .webhooks
        .validate_body(&Context::background(), &signature, &tampered)
        .await
        .unwrap());
}

#[tokio::test]
async fn webhook_signed_for_another_body_is_rejected() {
    let ctx = TestContext::start().await;
    let body = customer_created_webhook(&ctx).await;
    let other = customer_created_webhook(&ctx).await;

    let signature = ctx.sign_webhook(&other);

    assert!(ctx
        .client
        .webhooks
        .validate_signature(&Context::background(), &signature)
        .await
        .unwrap());
    assert!(!ctx
        .client
        .webhooks
        .validate_body(&Context::background(), &signature, &body)
        .await
        .unwrap());
}
