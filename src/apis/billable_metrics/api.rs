use crate::{
    apis::billable_metrics::{BillableMetric, BillableMetricInput, BillableMetricListInput},
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Billable Metrics APIs client.
#[derive(Clone, Debug)]
pub struct BillableMetricsApi {
    engine: Arc<Engine>,
}

impl BillableMetricsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Creates a new billable metric.
    #[tracing::instrument(name = "Create Billable Metric", skip(self, ctx, input))]
    pub async fn create(
        &self,
        ctx: &Context,
        input: &BillableMetricInput,
    ) -> Result<BillableMetric, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("billable_metrics")
                    .with_body(&Wrapped::new("billable_metric", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a billable metric by its code.
    #[tracing::instrument(name = "Get Billable Metric", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, code: &str) -> Result<BillableMetric, Error> {
        let res: Single<_> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(format!("billable_metrics/{}", encode(code))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the billable metric identified by `code`.
    #[tracing::instrument(name = "Update Billable Metric", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        code: &str,
        input: &BillableMetricInput,
    ) -> Result<BillableMetric, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("billable_metrics/{}", encode(code)))
                    .with_body(&Wrapped::new("billable_metric", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Deletes the billable metric identified by `code`, returning its last state.
    #[tracing::instrument(name = "Delete Billable Metric", skip(self, ctx))]
    pub async fn delete(&self, ctx: &Context, code: &str) -> Result<BillableMetric, Error> {
        let res: Single<_> = self
            .engine
            .delete(
                ctx,
                ClientRequest::new(format!("billable_metrics/{}", encode(code))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists billable metrics.
    #[tracing::instrument(name = "List Billable Metrics", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &BillableMetricListInput,
    ) -> Result<Page<BillableMetric>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("billable_metrics").with_query(input.to_query()),
            )
            .await
    }
}
