use crate::{
    apis::entitlements::{Entitlement, EntitlementsInput},
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{List, Single, Wrapped},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Plan Entitlements APIs client.
#[derive(Clone, Debug)]
pub struct EntitlementsApi {
    engine: Arc<Engine>,
}

impl EntitlementsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Lists the entitlements of a plan.
    #[tracing::instrument(name = "List Plan Entitlements", skip(self, ctx))]
    pub async fn list(&self, ctx: &Context, plan_code: &str) -> Result<Vec<Entitlement>, Error> {
        let res: List<_> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(format!("plans/{}/entitlements", encode(plan_code))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Replaces all the entitlements of a plan.
    #[tracing::instrument(name = "Update Plan Entitlements", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        plan_code: &str,
        input: &EntitlementsInput,
    ) -> Result<Vec<Entitlement>, Error> {
        let res: List<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new(format!("plans/{}/entitlements", encode(plan_code)))
                    .with_body(&Wrapped::new("entitlements", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Merges `input` into the entitlements of a plan. Features not mentioned are left untouched.
    #[tracing::instrument(name = "Patch Plan Entitlements", skip(self, ctx, input))]
    pub async fn patch(
        &self,
        ctx: &Context,
        plan_code: &str,
        input: &EntitlementsInput,
    ) -> Result<Vec<Entitlement>, Error> {
        let res: List<_> = self
            .engine
            .patch(
                ctx,
                ClientRequest::new(format!("plans/{}/entitlements", encode(plan_code)))
                    .with_body(&Wrapped::new("entitlements", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Removes a feature from the entitlements of a plan, returning the removed entitlement.
    #[tracing::instrument(name = "Delete Plan Entitlement", skip(self, ctx))]
    pub async fn delete_feature(
        &self,
        ctx: &Context,
        plan_code: &str,
        feature_code: &str,
    ) -> Result<Entitlement, Error> {
        let res: Single<_> = self
            .engine
            .delete(
                ctx,
                ClientRequest::new(format!(
                    "plans/{}/entitlements/{}",
                    encode(plan_code),
                    encode(feature_code)
                )),
            )
            .await?;

        Ok(res.into_inner())
    }
}
