use crate::{
    apis::features::{Feature, FeatureInput, FeatureListInput},
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Features APIs client.
#[derive(Clone, Debug)]
pub struct FeaturesApi {
    engine: Arc<Engine>,
}

impl FeaturesApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Creates a new feature.
    #[tracing::instrument(name = "Create Feature", skip(self, ctx, input))]
    pub async fn create(&self, ctx: &Context, input: &FeatureInput) -> Result<Feature, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("features").with_body(&Wrapped::new("feature", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a feature by its code.
    #[tracing::instrument(name = "Get Feature", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, code: &str) -> Result<Feature, Error> {
        let res: Single<_> = self
            .engine
            .get(ctx, ClientRequest::new(format!("features/{}", encode(code))))
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the feature identified by `code`.
    #[tracing::instrument(name = "Update Feature", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        code: &str,
        input: &FeatureInput,
    ) -> Result<Feature, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("features/{}", encode(code)))
                    .with_body(&Wrapped::new("feature", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Deletes the feature identified by `code`, returning its last state.
    #[tracing::instrument(name = "Delete Feature", skip(self, ctx))]
    pub async fn delete(&self, ctx: &Context, code: &str) -> Result<Feature, Error> {
        let res: Single<_> = self
            .engine
            .delete(ctx, ClientRequest::new(format!("features/{}", encode(code))))
            .await?;

        Ok(res.into_inner())
    }

    /// Lists features.
    #[tracing::instrument(name = "List Features", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &FeatureListInput,
    ) -> Result<Page<Feature>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("features").with_query(input.to_query()),
            )
            .await
    }
}
