use crate::{
    apis::payments::{Payment, PaymentInput, PaymentListInput},
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use uuid::Uuid;

/// Lago Payments APIs client.
#[derive(Clone, Debug)]
pub struct PaymentsApi {
    engine: Arc<Engine>,
}

impl PaymentsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Records a manual payment against an invoice.
    #[tracing::instrument(
        name = "Create Payment",
        skip(self, ctx, input),
        fields(invoice_id = %input.invoice_id)
    )]
    pub async fn create(&self, ctx: &Context, input: &PaymentInput) -> Result<Payment, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("payments").with_body(&Wrapped::new("payment", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a payment by its Lago id.
    #[tracing::instrument(name = "Get Payment", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, lago_id: &Uuid) -> Result<Payment, Error> {
        let res: Single<_> = self
            .engine
            .get(ctx, ClientRequest::new(format!("payments/{}", lago_id)))
            .await?;

        Ok(res.into_inner())
    }

    /// Lists payments.
    #[tracing::instrument(name = "List Payments", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &PaymentListInput,
    ) -> Result<Page<Payment>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("payments").with_query(input.to_query()),
            )
            .await
    }
}
