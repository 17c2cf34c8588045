use crate::{
    apis::{customers::Customer, fees::Fee},
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Invoice {
    pub lago_id: Uuid,
    pub sequential_id: Option<i64>,
    pub number: String,
    pub issuing_date: NaiveDate,
    pub payment_due_date: Option<NaiveDate>,
    pub net_payment_term: Option<i32>,
    pub invoice_type: InvoiceType,
    pub status: InvoiceStatus,
    pub payment_status: InvoicePaymentStatus,
    #[serde(default)]
    pub payment_overdue: bool,
    pub currency: String,
    #[serde(default)]
    pub fees_amount_cents: i64,
    #[serde(default)]
    pub taxes_amount_cents: i64,
    #[serde(default)]
    pub coupons_amount_cents: i64,
    #[serde(default)]
    pub credit_notes_amount_cents: i64,
    #[serde(default)]
    pub prepaid_credit_amount_cents: i64,
    #[serde(default)]
    pub sub_total_excluding_taxes_amount_cents: i64,
    #[serde(default)]
    pub sub_total_including_taxes_amount_cents: i64,
    pub total_amount_cents: i64,
    pub version_number: Option<i32>,
    /// Link to the PDF, once generated.
    pub file_url: Option<String>,
    pub customer: Option<Customer>,
    #[serde(default)]
    pub fees: Vec<Fee>,
    #[serde(default)]
    pub metadata: Vec<InvoiceMetadata>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

resource!(Invoice, "invoice", "invoices");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    Subscription,
    AddOn,
    Credit,
    OneOff,
    AdvanceCharges,
    ProgressiveBilling,
}

impl InvoiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceType::Subscription => "subscription",
            InvoiceType::AddOn => "add_on",
            InvoiceType::Credit => "credit",
            InvoiceType::OneOff => "one_off",
            InvoiceType::AdvanceCharges => "advance_charges",
            InvoiceType::ProgressiveBilling => "progressive_billing",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Finalized,
    Voided,
    Failed,
    Pending,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Finalized => "finalized",
            InvoiceStatus::Voided => "voided",
            InvoiceStatus::Failed => "failed",
            InvoiceStatus::Pending => "pending",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvoicePaymentStatus {
    Pending,
    Succeeded,
    Failed,
}

impl InvoicePaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoicePaymentStatus::Pending => "pending",
            InvoicePaymentStatus::Succeeded => "succeeded",
            InvoicePaymentStatus::Failed => "failed",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct InvoiceMetadata {
    pub lago_id: Uuid,
    pub key: String,
    pub value: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// One-off invoice made of add-on fees.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OneOffInvoiceInput {
    pub external_customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub fees: Vec<OneOffFeeInput>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OneOffFeeInput {
    pub add_on_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_codes: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InvoiceUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<InvoicePaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<InvoiceMetadataInput>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvoiceMetadataInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceListInput {
    pub pagination: ListInput,
    pub external_customer_id: Option<String>,
    pub issuing_date_from: Option<NaiveDate>,
    pub issuing_date_to: Option<NaiveDate>,
    pub status: Option<InvoiceStatus>,
    pub payment_status: Option<InvoicePaymentStatus>,
    pub payment_overdue: Option<bool>,
    pub invoice_type: Option<InvoiceType>,
    pub currency: Option<String>,
    pub search_term: Option<String>,
}

impl ToQuery for InvoiceListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("external_customer_id", self.external_customer_id.as_deref());
        query.push_opt("issuing_date_from", self.issuing_date_from);
        query.push_opt("issuing_date_to", self.issuing_date_to);
        query.push_opt("status", self.status.map(|s| s.as_str()));
        query.push_opt("payment_status", self.payment_status.map(|s| s.as_str()));
        query.push_opt("payment_overdue", self.payment_overdue);
        query.push_opt("invoice_type", self.invoice_type.map(|t| t.as_str()));
        query.push_opt("currency", self.currency.as_deref());
        query.push_opt("search_term", self.search_term.as_deref());
        query
    }
}

/// Payment link generated by the customer's payment provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvoicePaymentDetails {
    pub lago_customer_id: Uuid,
    pub lago_invoice_id: Uuid,
    pub external_customer_id: String,
    pub payment_provider: Option<String>,
    pub payment_url: String,
}

resource!(
    InvoicePaymentDetails,
    "invoice_payment_details",
    "invoice_payment_details"
);
