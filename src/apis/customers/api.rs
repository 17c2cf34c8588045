use crate::{
    apis::customers::{
        Customer, CustomerCheckoutUrl, CustomerInput, CustomerListInput, CustomerPortalUrl,
        CustomerUsage, CustomerUsageInput,
    },
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Customers APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    engine: Arc<Engine>,
}

impl CustomersApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Creates a customer, or updates the existing customer with the same `external_id`.
    #[tracing::instrument(
        name = "Create Customer",
        skip(self, ctx, input),
        fields(external_id = %input.external_id)
    )]
    pub async fn create(&self, ctx: &Context, input: &CustomerInput) -> Result<Customer, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("customers").with_body(&Wrapped::new("customer", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a customer by its external id.
    #[tracing::instrument(name = "Get Customer", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, external_id: &str) -> Result<Customer, Error> {
        let res: Single<_> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(format!("customers/{}", encode(external_id))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Deletes a customer, returning its last state.
    #[tracing::instrument(name = "Delete Customer", skip(self, ctx))]
    pub async fn delete(&self, ctx: &Context, external_id: &str) -> Result<Customer, Error> {
        let res: Single<_> = self
            .engine
            .delete(
                ctx,
                ClientRequest::new(format!("customers/{}", encode(external_id))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists customers.
    #[tracing::instrument(name = "List Customers", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &CustomerListInput,
    ) -> Result<Page<Customer>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("customers").with_query(input.to_query()),
            )
            .await
    }

    /// Gets the usage of the current billing period of one of the customer's subscriptions.
    #[tracing::instrument(
        name = "Get Customer Current Usage",
        skip(self, ctx, input),
        fields(external_subscription_id = %input.external_subscription_id)
    )]
    pub async fn current_usage(
        &self,
        ctx: &Context,
        external_customer_id: &str,
        input: &CustomerUsageInput,
    ) -> Result<CustomerUsage, Error> {
        let res: Single<_> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(format!(
                    "customers/{}/current_usage",
                    encode(external_customer_id)
                ))
                .with_query(input.to_query()),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a link to the customer portal.
    #[tracing::instrument(name = "Get Customer Portal URL", skip(self, ctx))]
    pub async fn portal_url(&self, ctx: &Context, external_id: &str) -> Result<String, Error> {
        let res: Single<CustomerPortalUrl> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(format!("customers/{}/portal_url", encode(external_id))),
            )
            .await?;

        Ok(res.into_inner().portal_url)
    }

    /// Generates a checkout link to register a payment method with the customer's payment provider.
    #[tracing::instrument(name = "Get Customer Checkout URL", skip(self, ctx))]
    pub async fn checkout_url(
        &self,
        ctx: &Context,
        external_id: &str,
    ) -> Result<CustomerCheckoutUrl, Error> {
        let res: Single<_> = self
            .engine
            .post_without_body(
                ctx,
                ClientRequest::new(format!("customers/{}/checkout_url", encode(external_id))),
            )
            .await?;

        Ok(res.into_inner())
    }
}
