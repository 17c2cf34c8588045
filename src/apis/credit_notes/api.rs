use crate::{
    apis::credit_notes::{
        CreditNote, CreditNoteEstimateInput, CreditNoteInput, CreditNoteListInput,
        CreditNoteUpdateInput, EstimatedCreditNote,
    },
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Lago Credit Notes APIs client.
#[derive(Clone, Debug)]
pub struct CreditNotesApi {
    engine: Arc<Engine>,
}

impl CreditNotesApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Issues a credit note on an invoice.
    #[tracing::instrument(name = "Create Credit Note", skip(self, ctx, input), fields(invoice_id = %input.invoice_id))]
    pub async fn create(
        &self,
        ctx: &Context,
        input: &CreditNoteInput,
    ) -> Result<CreditNote, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("credit_notes").with_body(&Wrapped::new("credit_note", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a credit note by its Lago id.
    #[tracing::instrument(name = "Get Credit Note", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, lago_id: &str) -> Result<CreditNote, Error> {
        let res: Single<_> = self
            .engine
            .get(
                ctx,
                ClientRequest::new(format!("credit_notes/{}", encode(lago_id))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the refund status of a credit note.
    #[tracing::instrument(name = "Update Credit Note", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        lago_id: &str,
        input: &CreditNoteUpdateInput,
    ) -> Result<CreditNote, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("credit_notes/{}", encode(lago_id)))
                    .with_body(&Wrapped::new("credit_note", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists credit notes.
    #[tracing::instrument(name = "List Credit Notes", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        input: &CreditNoteListInput,
    ) -> Result<Page<CreditNote>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("credit_notes").with_query(input.to_query()),
            )
            .await
    }

    /// Requests the PDF of a credit note.
    ///
    /// Returns `None` while the PDF is being generated: its link is then delivered
    /// through the `credit_note.generated` webhook.
    #[tracing::instrument(name = "Download Credit Note", skip(self, ctx))]
    pub async fn download(
        &self,
        ctx: &Context,
        lago_id: &str,
    ) -> Result<Option<CreditNote>, Error> {
        let res: Option<Single<_>> = self
            .engine
            .post_without_body(
                ctx,
                ClientRequest::new(format!("credit_notes/{}/download", encode(lago_id))),
            )
            .await?;

        Ok(res.map(Single::into_inner))
    }

    /// Voids the remaining credit of a credit note.
    #[tracing::instrument(name = "Void Credit Note", skip(self, ctx))]
    pub async fn void(&self, ctx: &Context, lago_id: &str) -> Result<CreditNote, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("credit_notes/{}/void", encode(lago_id))),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Estimates the amounts of a credit note before issuing it.
    #[tracing::instrument(name = "Estimate Credit Note", skip(self, ctx, input), fields(invoice_id = %input.invoice_id))]
    pub async fn estimate(
        &self,
        ctx: &Context,
        input: &CreditNoteEstimateInput,
    ) -> Result<EstimatedCreditNote, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("credit_notes/estimate")
                    .with_body(&Wrapped::new("credit_note", input)),
            )
            .await?;

        Ok(res.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::{
        credit_notes::{
            CreditNoteCreditStatus, CreditNoteItemInput, CreditNoteReason, CreditNoteRefundStatus,
        },
        test_support::{ctx, fee_json, mock_engine_and_server},
    };
    use serde_json::json;
    use uuid::Uuid;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, ResponseTemplate,
    };

    const CREDIT_NOTE_ID: &str = "1a901a90-1a90-1a90-1a90-1a901a901a95";
    const INVOICE_ID: &str = "1a901a90-1a90-1a90-1a90-1a901a901a96";
    const FEE_ID: &str = "1a901a90-1a90-1a90-1a90-1a901a901a90";

    fn credit_note_json() -> serde_json::Value {
        json!({
            "lago_id": CREDIT_NOTE_ID,
            "sequential_id": 1,
            "number": "LAG-1234-CN0001",
            "lago_invoice_id": INVOICE_ID,
            "invoice_number": "LAG-1234",
            "issuing_date": "2022-12-06",
            "credit_status": "available",
            "refund_status": "pending",
            "reason": "other",
            "description": null,
            "currency": "EUR",
            "total_amount_cents": 120,
            "taxes_amount_cents": 20,
            "sub_total_excluding_taxes_amount_cents": 100,
            "balance_amount_cents": 120,
            "credit_amount_cents": 120,
            "refund_amount_cents": 0,
            "file_url": null,
            "items": [{
                "lago_id": "1a901a90-1a90-1a90-1a90-1a901a901a97",
                "amount_cents": 100,
                "amount_currency": "EUR",
                "fee": fee_json()
            }],
            "created_at": "2022-12-06T12:00:00Z",
            "updated_at": "2022-12-06T12:00:00Z"
        })
    }

    fn items() -> Vec<CreditNoteItemInput> {
        vec![CreditNoteItemInput {
            fee_id: Uuid::parse_str(FEE_ID).unwrap(),
            amount_cents: 100,
        }]
    }

    #[tokio::test]
    async fn create() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = CreditNotesApi::new(engine);

        Mock::given(method("POST"))
            .and(path("/api/v1/credit_notes"))
            .and(body_json(json!({
                "credit_note": {
                    "invoice_id": INVOICE_ID,
                    "reason": "other",
                    "credit_amount_cents": 120,
                    "items": [{ "fee_id": FEE_ID, "amount_cents": 100 }]
                }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "credit_note": credit_note_json() })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let credit_note = api
            .create(
                &ctx(),
                &CreditNoteInput {
                    invoice_id: Uuid::parse_str(INVOICE_ID).unwrap(),
                    reason: CreditNoteReason::Other,
                    description: None,
                    credit_amount_cents: Some(120),
                    refund_amount_cents: None,
                    items: items(),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            credit_note.credit_status,
            Some(CreditNoteCreditStatus::Available)
        );
        assert_eq!(credit_note.items[0].amount_cents, 100);
    }

    #[tokio::test]
    async fn update_refund_status() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = CreditNotesApi::new(engine);

        Mock::given(method("PUT"))
            .and(path(format!("/api/v1/credit_notes/{}", CREDIT_NOTE_ID)))
            .and(body_json(json!({ "credit_note": { "refund_status": "succeeded" } })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "credit_note": credit_note_json() })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        api.update(
            &ctx(),
            CREDIT_NOTE_ID,
            &CreditNoteUpdateInput {
                refund_status: Some(CreditNoteRefundStatus::Succeeded),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn download_returns_none_while_generating() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = CreditNotesApi::new(engine);

        Mock::given(method("POST"))
            .and(path(format!("/api/v1/credit_notes/{}/download", CREDIT_NOTE_ID)))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(api.download(&ctx(), CREDIT_NOTE_ID).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn void() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = CreditNotesApi::new(engine);

        Mock::given(method("PUT"))
            .and(path(format!("/api/v1/credit_notes/{}/void", CREDIT_NOTE_ID)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "credit_note": credit_note_json() })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let credit_note = api.void(&ctx(), CREDIT_NOTE_ID).await.unwrap();

        assert_eq!(credit_note.number, "LAG-1234-CN0001");
    }

    #[tokio::test]
    async fn estimate() {
        let (engine, mock_server) = mock_engine_and_server().await;
        let api = CreditNotesApi::new(engine);

        Mock::given(method("POST"))
            .and(path("/api/v1/credit_notes/estimate"))
            .and(body_json(json!({
                "credit_note": {
                    "invoice_id": INVOICE_ID,
                    "items": [{ "fee_id": FEE_ID, "amount_cents": 100 }]
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "estimated_credit_note": {
                    "lago_invoice_id": INVOICE_ID,
                    "invoice_number": "LAG-1234",
                    "currency": "EUR",
                    "taxes_amount_cents": 20,
                    "sub_total_excluding_taxes_amount_cents": 100,
                    "max_creditable_amount_cents": 120,
                    "max_refundable_amount_cents": 120,
                    "coupons_adjustment_amount_cents": 0,
                    "items": [{ "lago_fee_id": FEE_ID, "amount_cents": 100 }]
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let estimate = api
            .estimate(
                &ctx(),
                &CreditNoteEstimateInput {
                    invoice_id: Uuid::parse_str(INVOICE_ID).unwrap(),
                    items: items(),
                },
            )
            .await
            .unwrap();

        assert_eq!(estimate.max_creditable_amount_cents, 120);
    }
}
