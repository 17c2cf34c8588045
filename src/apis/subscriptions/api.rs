use crate::{
    apis::subscriptions::{
        Subscription, SubscriptionInput, SubscriptionListInput, SubscriptionTerminateInput,
    },
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Subscriptions APIs client.
#[derive(Clone, Debug)]
pub struct SubscriptionsApi {
    engine: Arc<Engine>,
}

impl SubscriptionsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Assigns a plan to a customer.
    #[tracing::instrument(name = "Create Subscription", skip(self, ctx, input))]
    pub async fn create(
        &self,
        ctx: &Context,
        input: &SubscriptionInput,
    ) -> Result<Subscription, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("subscriptions")
                    .with_body(&Wrapped::new("subscription", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a subscription by its external id.
    #[tracing::instrument(name = "Get Subscription", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, external_id: &str) -> Result<Subscription, Error> {
        let res: Single<_> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(format!("subscriptions/{}", encode(external_id))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the subscription identified by `external_id`.
    #[tracing::instrument(name = "Update Subscription", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        external_id: &str,
        input: &SubscriptionInput,
    ) -> Result<Subscription, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("subscriptions/{}", encode(external_id)))
                    .with_body(&Wrapped::new("subscription", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Terminates a subscription, or cancels it if it is still pending.
    #[tracing::instrument(name = "Terminate Subscription", skip(self, ctx, input))]
    pub async fn terminate(
        &self,
        ctx: &Context,
        external_id: &str,
        input: &SubscriptionTerminateInput,
    ) -> Result<Subscription, Error> {
        let res: Single<_> = self
            .engine
            .delete(
                ctx,
                ClientRequest::new(format!("subscriptions/{}", encode(external_id)))
                    .with_query(input.to_query()),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists subscriptions.
    #[tracing::instrument(name = "List Subscriptions", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &SubscriptionListInput,
    ) -> Result<Page<Subscription>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("subscriptions").with_query(input.to_query()),
            )
            .await
    }
}
