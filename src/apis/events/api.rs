use crate::{
    apis::{
        events::{Event, EventInput},
        fees::Fee,
    },
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{List, Single, Wrapped},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Events APIs client.
#[derive(Clone, Debug)]
pub struct EventsApi {
    engine: Arc<Engine>,
}

impl EventsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Sends a usage event.
    #[tracing::instrument(
        name = "Create Event",
        skip(self, ctx, input),
        fields(transaction_id = %input.transaction_id, code = %input.code)
    )]
    pub async fn create(&self, ctx: &Context, input: &EventInput) -> Result<Event, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("events").with_body(&Wrapped::new("event", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Sends a batch of usage events.
    #[tracing::instrument(name = "Create Events Batch", skip(self, ctx, inputs), fields(count = inputs.len()))]
    pub async fn batch(&self, ctx: &Context, inputs: &[EventInput]) -> Result<(), Error> {
        self.engine
            .post_without_result(
                ctx,
                ClientRequest::new("events/batch").with_body(&Wrapped::new("events", inputs)),
            )
            .await
    }

    /// Gets an event by its transaction id.
    #[tracing::instrument(name = "Get Event", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, transaction_id: &str) -> Result<Event, Error> {
        let res: Single<_> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(format!("events/{}", encode(transaction_id))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Estimates the fees a pay in advance event would generate, without ingesting it.
    #[tracing::instrument(name = "Estimate Event Fees", skip(self, ctx, input))]
    pub async fn estimate_fees(&self, ctx: &Context, input: &EventInput) -> Result<Vec<Fee>, Error> {
        let res: List<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("events/estimate_fees")
                    .with_body(&Wrapped::new("event", input)),
            )
            .await?;

        Ok(res.into_inner())
    }
}
