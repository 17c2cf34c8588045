use crate::{
    apis::fees::Fee,
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreditNote {
    pub lago_id: Uuid,
    pub sequential_id: Option<i64>,
    pub number: String,
    pub lago_invoice_id: Uuid,
    pub invoice_number: String,
    pub issuing_date: NaiveDate,
    pub credit_status: Option<CreditNoteCreditStatus>,
    pub refund_status: Option<CreditNoteRefundStatus>,
    pub reason: CreditNoteReason,
    pub description: Option<String>,
    pub currency: String,
    pub total_amount_cents: i64,
    #[serde(default)]
    pub taxes_amount_cents: i64,
    #[serde(default)]
    pub sub_total_excluding_taxes_amount_cents: i64,
    #[serde(default)]
    pub balance_amount_cents: i64,
    #[serde(default)]
    pub credit_amount_cents: i64,
    #[serde(default)]
    pub refund_amount_cents: i64,
    #[serde(default)]
    pub coupons_adjustment_amount_cents: i64,
    pub file_url: Option<String>,
    #[serde(default)]
    pub items: Vec<CreditNoteItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

resource!(CreditNote, "credit_note", "credit_notes");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CreditNoteCreditStatus {
    Available,
    Consumed,
    Voided,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CreditNoteRefundStatus {
    Pending,
    Succeeded,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CreditNoteReason {
    DuplicatedCharge,
    ProductUnsatisfactory,
    OrderChange,
    OrderCancellation,
    FraudulentCharge,
    Other,
}

impl CreditNoteReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditNoteReason::DuplicatedCharge => "duplicated_charge",
            CreditNoteReason::ProductUnsatisfactory => "product_unsatisfactory",
            CreditNoteReason::OrderChange => "order_change",
            CreditNoteReason::OrderCancellation => "order_cancellation",
            CreditNoteReason::FraudulentCharge => "fraudulent_charge",
            CreditNoteReason::Other => "other",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreditNoteItem {
    pub lago_id: Uuid,
    pub amount_cents: i64,
    pub amount_currency: String,
    pub fee: Option<Fee>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreditNoteInput {
    pub invoice_id: Uuid,
    pub reason: CreditNoteReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount_cents: Option<i64>,
    pub items: Vec<CreditNoteItemInput>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreditNoteItemInput {
    pub fee_id: Uuid,
    pub amount_cents: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CreditNoteUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_status: Option<CreditNoteRefundStatus>,
}

/// Invoice and items to estimate a credit note for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreditNoteEstimateInput {
    pub invoice_id: Uuid,
    pub items: Vec<CreditNoteItemInput>,
}

/// Amounts a credit note would carry, computed without issuing it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EstimatedCreditNote {
    pub lago_invoice_id: Uuid,
    pub invoice_number: String,
    pub currency: String,
    #[serde(default)]
    pub taxes_amount_cents: i64,
    #[serde(default)]
    pub sub_total_excluding_taxes_amount_cents: i64,
    #[serde(default)]
    pub max_creditable_amount_cents: i64,
    #[serde(default)]
    pub max_refundable_amount_cents: i64,
    #[serde(default)]
    pub coupons_adjustment_amount_cents: i64,
    #[serde(default)]
    pub items: Vec<EstimatedCreditNoteItem>,
}

resource!(
    EstimatedCreditNote,
    "estimated_credit_note",
    "estimated_credit_notes"
);

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct EstimatedCreditNoteItem {
    pub lago_fee_id: Uuid,
    pub amount_cents: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditNoteListInput {
    pub pagination: ListInput,
    pub external_customer_id: Option<String>,
    pub issuing_date_from: Option<NaiveDate>,
    pub issuing_date_to: Option<NaiveDate>,
    pub reason: Option<CreditNoteReason>,
    pub currency: Option<String>,
    pub search_term: Option<String>,
}

impl ToQuery for CreditNoteListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("external_customer_id", self.external_customer_id.as_deref());
        query.push_opt("issuing_date_from", self.issuing_date_from);
        query.push_opt("issuing_date_to", self.issuing_date_to);
        query.push_opt("reason", self.reason.map(|r| r.as_str()));
        query.push_opt("currency", self.currency.as_deref());
        query.push_opt("search_term", self.search_term.as_deref());
        query
    }
}
