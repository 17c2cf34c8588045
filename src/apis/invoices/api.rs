use crate::{
    apis::invoices::{
        Invoice, InvoiceListInput, InvoicePaymentDetails, InvoiceUpdateInput, OneOffInvoiceInput,
    },
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Invoices APIs client.
#[derive(Clone, Debug)]
pub struct InvoicesApi {
    engine: Arc<Engine>,
}

impl InvoicesApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Creates a one-off invoice.
    #[tracing::instrument(
        name = "Create One-off Invoice",
        skip(self, ctx, input),
        fields(external_customer_id = %input.external_customer_id)
    )]
    pub async fn create(
        &self,
        ctx: &Context,
        input: &OneOffInvoiceInput,
    ) -> Result<Invoice, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("invoices").with_body(&Wrapped::new("invoice", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets an invoice by its Lago id.
    #[tracing::instrument(name = "Get Invoice", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, lago_id: &str) -> Result<Invoice, Error> {
        let res: Single<_> = self
            .engine
            .get(ctx, ClientRequest::new(invoice_path(lago_id, "")))
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the payment status or the metadata of an invoice.
    #[tracing::instrument(name = "Update Invoice", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        lago_id: &str,
        input: &InvoiceUpdateInput,
    ) -> Result<Invoice, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(invoice_path(lago_id, ""))
                    .with_body(&Wrapped::new("invoice", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists invoices.
    #[tracing::instrument(name = "List Invoices", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &InvoiceListInput,
    ) -> Result<Page<Invoice>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("invoices").with_query(input.to_query()),
            )
            .await
    }

    /// Requests the PDF of an invoice.
    ///
    /// Returns `None` while the PDF is being generated: its link is then delivered
    /// through the `invoice.generated` webhook.
    #[tracing::instrument(name = "Download Invoice", skip(self, ctx))]
    pub async fn download(&self, ctx: &Context, lago_id: &str) -> Result<Option<Invoice>, Error> {
        let res: Option<Single<_>> = self
            .engine
            .post_without_body(ctx, ClientRequest::new(invoice_path(lago_id, "/download")))
            .await?;

        Ok(res.map(Single::into_inner))
    }

    /// Finalizes a draft invoice.
    #[tracing::instrument(name = "Finalize Invoice", skip(self, ctx))]
    pub async fn finalize(&self, ctx: &Context, lago_id: &str) -> Result<Invoice, Error> {
        let res: Single<_> = self
            .engine
            .put(ctx, ClientRequest::new(invoice_path(lago_id, "/finalize")))
            .await?;

        Ok(res.into_inner())
    }

    /// Voids a finalized invoice.
    #[tracing::instrument(name = "Void Invoice", skip(self, ctx))]
    pub async fn void(&self, ctx: &Context, lago_id: &str) -> Result<Invoice, Error> {
        let res: Single<_> = self
            .engine
            .post_without_body(ctx, ClientRequest::new(invoice_path(lago_id, "/void")))
            .await?;

        Ok(res.into_inner())
    }

    /// Recomputes a draft invoice with the latest usage.
    #[tracing::instrument(name = "Refresh Invoice", skip(self, ctx))]
    pub async fn refresh(&self, ctx: &Context, lago_id: &str) -> Result<Invoice, Error> {
        let res: Single<_> = self
            .engine
            .put(ctx, ClientRequest::new(invoice_path(lago_id, "/refresh")))
            .await?;

        Ok(res.into_inner())
    }

    /// Asks the payment provider to collect a failed invoice again.
    #[tracing::instrument(name = "Retry Invoice Payment", skip(self, ctx))]
    pub async fn retry_payment(&self, ctx: &Context, lago_id: &str) -> Result<(), Error> {
        self.engine
            .post_without_result(
                ctx,
                ClientRequest::new(invoice_path(lago_id, "/retry_payment")),
            )
            .await
    }

    /// Generates a payment link for an invoice.
    #[tracing::instrument(name = "Get Invoice Payment URL", skip(self, ctx))]
    pub async fn payment_url(
        &self,
        ctx: &Context,
        lago_id: &str,
    ) -> Result<InvoicePaymentDetails, Error> {
        let res: Single<_> = self
            .engine
            .post_without_body(
                ctx,
                ClientRequest::new(invoice_path(lago_id, "/payment_url")),
            )
            .await?;

        Ok(res.into_inner())
    }
}

fn invoice_path(lago_id: &str, action: &str) -> String {
    format!("invoices/{}{}", encode(lago_id), action)
}
