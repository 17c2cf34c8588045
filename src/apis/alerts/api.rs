use crate::{
    apis::alerts::{Alert, AlertInput},
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::{ListInput, ToQuery},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Subscription Alerts APIs client.
#[derive(Clone, Debug)]
pub struct AlertsApi {
    engine: Arc<Engine>,
}

impl AlertsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Creates an alert on a subscription.
    #[tracing::instrument(name = "Create Alert", skip(self, ctx, input))]
    pub async fn create(
        &self,
        ctx: &Context,
        external_subscription_id: &str,
        input: &AlertInput,
    ) -> Result<Alert, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new(alerts_path(external_subscription_id))
                    .with_body(&Wrapped::new("alert", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets an alert of a subscription by its code.
    #[tracing::instrument(name = "Get Alert", skip(self, ctx))]
    pub async fn get(
        &self,
        ctx: &Context,
        external_subscription_id: &str,
        code: &str,
    ) -> Result<Alert, Error> {
        let res: Single<_> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(alert_path(external_subscription_id, code)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Updates an alert of a subscription.
    #[tracing::instrument(name = "Update Alert", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        external_subscription_id: &str,
        code: &str,
        input: &AlertInput,
    ) -> Result<Alert, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(alert_path(external_subscription_id, code))
                    .with_body(&Wrapped::new("alert", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Deletes an alert of a subscription, returning its last state.
    #[tracing::instrument(name = "Delete Alert", skip(self, ctx))]
    pub async fn delete(
        &self,
        ctx: &Context,
        external_subscription_id: &str,
        code: &str,
    ) -> Result<Alert, Error> {
        let res: Single<_> = self
            .engine
            .delete(
                ctx,
                ClientRequest::new(alert_path(external_subscription_id, code)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists the alerts of a subscription.
    #[tracing::instrument(name = "List Alerts", skip(self, ctx))]
    pub async fn list(
        &self,
        ctx: &Context,
        external_subscription_id: &str,
        input: &ListInput,
    ) -> Result<Page<Alert>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new(alerts_path(external_subscription_id))
                    .with_query(input.to_query()),
            )
            .await
    }
}

fn alerts_path(external_subscription_id: &str) -> String {
    format!("subscriptions/{}/alerts", encode(external_subscription_id))
}

fn alert_path(external_subscription_id: &str, code: &str) -> String {
    format!("{}/{}", alerts_path(external_subscription_id), encode(code))
}
