use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::{create_customer, external_id},
};
use lago_rust::{
    apis::customers::{CustomerInputBuilder, CustomerListInput},
    query::ListInput,
    Context,
};

#[tokio::test]
async fn create_and_get_customer() {
    let ctx = TestContext::start().await;

    let created = create_customer(&ctx).await.unwrap();
    let fetched = ctx
        .client
        .customers
        .get(&Context::background(), &created.external_id)
        .await
        .unwrap();

    assert_eq!(fetched.lago_id, created.lago_id);
    assert_eq!(fetched.name.as_deref(), Some("Gavin Belson"));
    assert_eq!(fetched.currency.as_deref(), Some("EUR"));
}

#[tokio::test]
async fn create_is_an_upsert_on_external_id() {
    let ctx = TestContext::start().await;
    let created = create_customer(&ctx).await.unwrap();

    let input = CustomerInputBuilder::default()
        .external_id(created.external_id.clone())
        .name("Richard Hendricks")
        .build()
        .unwrap();
    let updated = ctx
        .client
        .customers
        .create(&Context::background(), &input)
        .await
        .unwrap();

    assert_eq!(updated.lago_id, created.lago_id);
    assert_eq!(updated.name.as_deref(), Some("Richard Hendricks"));
}

#[tokio::test]
async fn get_unknown_customer_is_not_found() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .customers
        .get(&Context::background(), &external_id("unknown"))
        .await
        .unwrap_err();

    assert_eq!(err.http_status_code, 404);
    assert_eq!(err.error_code, "customer_not_found");
    assert_eq!(
        err.to_string(),
        r#"{"status":404,"error":"Not Found","code":"customer_not_found","err":""}"#
    );
}

#[tokio::test]
async fn delete_customer() {
    let ctx = TestContext::start().await;
    let created = create_customer(&ctx).await.unwrap();

    let deleted = ctx
        .client
        .customers
        .delete(&Context::background(), &created.external_id)
        .await
        .unwrap();
    assert_eq!(deleted.lago_id, created.lago_id);

    let err = ctx
        .client
        .customers
        .get(&Context::background(), &created.external_id)
        .await
        .unwrap_err();
    assert_eq!(err.http_status_code, 404);
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn list_customers_walks_every_page() {
    let ctx = TestContext::start().await;
    for _ in 0..3 {
        create_customer(&ctx).await.unwrap();
    }

    let mut seen = Vec::new();
    let mut page = 1;
    loop {
        let res = ctx
            .client
            .customers
            .list(
                &Context::background(),
                &CustomerListInput {
                    pagination: ListInput {
                        page: Some(page),
                        per_page: Some(2),
                    },
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(res.meta.current_page, page);
        assert_eq!(res.meta.total_count, 3);
        assert_eq!(res.meta.total_pages, 2);
        seen.extend(res.items.into_iter().map(|c| c.lago_id));

        if !res.meta.has_next_page() {
            break;
        }
        page = res.meta.next_page;
    }

    assert_eq!(page, 2);
    assert_eq!(seen.len(), 3);
}
