use crate::{
    apis::coupons::{
        AppliedCoupon, AppliedCouponInput, AppliedCouponListInput, Coupon, CouponInput,
    },
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::{ListInput, ToQuery},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Coupons APIs client.
#[derive(Clone, Debug)]
pub struct CouponsApi {
    engine: Arc<Engine>,
}

impl CouponsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Creates a new coupon.
    #[tracing::instrument(name = "Create Coupon", skip(self, ctx, input))]
    pub async fn create(&self, ctx: &Context, input: &CouponInput) -> Result<Coupon, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("coupons").with_body(&Wrapped::new("coupon", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a coupon by its code.
    #[tracing::instrument(name = "Get Coupon", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, code: &str) -> Result<Coupon, Error> {
        let res: Single<_> = self
            .engine
            .get(ctx, ClientRequest::new(format!("coupons/{}", encode(code))))
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the coupon identified by `code`.
    #[tracing::instrument(name = "Update Coupon", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        code: &str,
        input: &CouponInput,
    ) -> Result<Coupon, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("coupons/{}", encode(code)))
                    .with_body(&Wrapped::new("coupon", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Terminates the coupon identified by `code`, returning its last state.
    #[tracing::instrument(name = "Delete Coupon", skip(self, ctx))]
    pub async fn delete(&self, ctx: &Context, code: &str) -> Result<Coupon, Error> {
        let res: Single<_> = self
            .engine
            .delete(ctx, ClientRequest::new(format!("coupons/{}", encode(code))))
            .await?;

        Ok(res.into_inner())
    }

    /// Lists coupons.
    #[tracing::instrument(name = "List Coupons", skip(self, ctx))]
    pub async fn list(&self, ctx: &Context, input: &ListInput) -> Result<Page<Coupon>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("coupons").with_query(input.to_query()),
            )
            .await
    }
}

/// Lago Applied Coupons APIs client.
#[derive(Clone, Debug)]
pub struct AppliedCouponsApi {
    engine: Arc<Engine>,
}

impl AppliedCouponsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Applies a coupon to a customer.
    #[tracing::instrument(
        name = "Apply Coupon",
        skip(self, ctx, input),
        fields(coupon_code = %input.coupon_code, external_customer_id = %input.external_customer_id)
    )]
    pub async fn create(
        &self,
        ctx: &Context,
        input: &AppliedCouponInput,
    ) -> Result<AppliedCoupon, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("applied_coupons")
                    .with_body(&Wrapped::new("applied_coupon", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists applied coupons.
    #[tracing::instrument(name = "List Applied Coupons", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &AppliedCouponListInput,
    ) -> Result<Page<AppliedCoupon>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("applied_coupons").with_query(input.to_query()),
            )
            .await
    }
}
