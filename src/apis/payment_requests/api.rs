use crate::{
    apis::payment_requests::{PaymentRequest, PaymentRequestInput, PaymentRequestListInput},
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;

/// Lago Payment Requests APIs client.
#[derive(Clone, Debug)]
pub struct PaymentRequestsApi {
    engine: Arc<Engine>,
}

impl PaymentRequestsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Requests the payment of a set of overdue invoices of a customer.
    #[tracing::instrument(
        name = "Create Payment Request",
        skip(self, ctx, input),
        fields(external_customer_id = %input.external_customer_id)
    )]
    pub async fn create(
        &self,
        ctx: &Context,
        input: &PaymentRequestInput,
    ) -> Result<PaymentRequest, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("payment_requests")
                    .with_body(&Wrapped::new("payment_request", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists payment requests.
    #[tracing::instrument(name = "List Payment Requests", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &PaymentRequestListInput,
    ) -> Result<Page<PaymentRequest>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("payment_requests").with_query(input.to_query()),
            )
            .await
    }
}
