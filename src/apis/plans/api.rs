use crate::{
    apis::plans::{Plan, PlanInput},
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::{ListInput, ToQuery},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Plans APIs client.
#[derive(Clone, Debug)]
pub struct PlansApi {
    engine: Arc<Engine>,
}

impl PlansApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Creates a new plan.
    #[tracing::instrument(name = "Create Plan", skip(self, ctx, input))]
    pub async fn create(&self, ctx: &Context, input: &PlanInput) -> Result<Plan, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("plans").with_body(&Wrapped::new("plan", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a plan by its code.
    #[tracing::instrument(name = "Get Plan", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, code: &str) -> Result<Plan, Error> {
        let res: Single<_> = self
            .engine
            .get(ctx, ClientRequest::new(format!("plans/{}", encode(code))))
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the plan identified by `code`.
    #[tracing::instrument(name = "Update Plan", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        code: &str,
        input: &PlanInput,
    ) -> Result<Plan, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("plans/{}", encode(code)))
                    .with_body(&Wrapped::new("plan", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Deletes the plan identified by `code`, returning its last state.
    #[tracing::instrument(name = "Delete Plan", skip(self, ctx))]
    pub async fn delete(&self, ctx: &Context, code: &str) -> Result<Plan, Error> {
        let res: Single<_> = self
            .engine
            .delete(ctx, ClientRequest::new(format!("plans/{}", encode(code))))
            .await?;

        Ok(res.into_inner())
    }

    /// Lists plans.
    #[tracing::instrument(name = "List Plans", skip(self, ctx))]
    pub async fn list(&self, ctx: &Context, input: &ListInput) -> Result<Page<Plan>, Error> {
        self.engine
            .get(ctx, ClientRequest::new("plans").with_query(input.to_query()))
            .await
    }
}
