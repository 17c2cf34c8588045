use crate::{
    apis::fees::{Fee, FeeListInput, FeeUpdateInput},
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Fees APIs client.
#[derive(Clone, Debug)]
pub struct FeesApi {
    engine: Arc<Engine>,
}

impl FeesApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Gets a fee by its Lago id.
    #[tracing::instrument(name = "Get Fee", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, lago_id: &str) -> Result<Fee, Error> {
        let res: Single<_> = self
            .engine
            .get(ctx, ClientRequest::new(format!("fees/{}", encode(lago_id))))
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the payment status of a fee.
    #[tracing::instrument(name = "Update Fee", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        lago_id: &str,
        input: &FeeUpdateInput,
    ) -> Result<Fee, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("fees/{}", encode(lago_id)))
                    .with_body(&Wrapped::new("fee", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Deletes a fee which is not attached to an invoice yet, returning its last state.
    #[tracing::instrument(name = "Delete Fee", skip(self, ctx))]
    pub async fn delete(&self, ctx: &Context, lago_id: &str) -> Result<Fee, Error> {
        let res: Single<_> = self
            .engine
            .delete(ctx, ClientRequest::new(format!("fees/{}", encode(lago_id))))
            .await?;

        Ok(res.into_inner())
    }

    /// Lists fees.
    #[tracing::instrument(name = "List Fees", skip(self, ctx, input))]
    pub async fn list(&self, ctx: &Context, input: &FeeListInput) -> Result<Page<Fee>, Error> {
        self.engine
            .get(ctx, ClientRequest::new("fees").with_query(input.to_query()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::{
        fees::{FeePaymentStatus, FeeType},
        test_support::{ctx, fee_json, mock_engine_and_server},
    };
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, ResponseTemplate,
    };

    #[tokio::test]
    async fn get() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = FeesApi::new(engine);

        Mock::given(method("GET"))
            .and(path("/api/v1/fees/1a901a90-1a90-1a90-1a90-1a901a901a90"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fee": fee_json() })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fee = api
            .get(&ctx(), "1a901a90-1a90-1a90-1a90-1a901a901a90")
            .await
            .unwrap();

        assert_eq!(fee.item.r#type, FeeType::Charge);
        assert_eq!(fee.total_amount_cents, 120);
        assert!(fee.lago_invoice_id.is_none());
    }

    #[tokio::test]
    async fn update_payment_status() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = FeesApi::new(engine);

        Mock::given(method("PUT"))
            .and(path("/api/v1/fees/fee-1"))
            .and(body_json(json!({ "fee": { "payment_status": "succeeded" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fee": fee_json() })))
            .expect(1)
            .mount(&mock_server)
            .await;

        api.update(
            &ctx(),
            "fee-1",
            &FeeUpdateInput {
                payment_status: Some(FeePaymentStatus::Succeeded),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn list_with_filters() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = FeesApi::new(engine);

        Mock::given(method("GET"))
            .and(path("/api/v1/fees"))
            .and(query_param("fee_type", "charge"))
            .and(query_param("payment_status", "pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fees": [fee_json()],
                "meta": { "current_page": 1, "total_pages": 1, "total_count": 1 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let page = api
            .list(
                &ctx(),
                &FeeListInput {
                    fee_type: Some(FeeType::Charge),
                    payment_status: Some(FeePaymentStatus::Pending),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(page.items[0].payment_status, Some(FeePaymentStatus::Pending));
    }

    #[tokio::test]
    async fn delete() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = FeesApi::new(engine);

        Mock::given(method("DELETE"))
            .and(path("/api/v1/fees/fee-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fee": fee_json() })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fee = api.delete(&ctx(), "fee-1").await.unwrap();

        assert_eq!(fee.units, "0.32");
    }
}
