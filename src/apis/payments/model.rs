use crate::{
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Payment {
    pub lago_id: Uuid,
    #[serde(default)]
    pub invoice_ids: Vec<Uuid>,
    pub lago_customer_id: Option<Uuid>,
    pub external_customer_id: Option<String>,
    pub amount_cents: i64,
    pub amount_currency: String,
    pub payment_status: PaymentStatus,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub reference: Option<String>,
    pub external_payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

resource!(Payment, "payment", "payments");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Succeeded,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Manual,
    Provider,
}

/// A payment received outside of Lago, to record against an invoice.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentInput {
    pub invoice_id: Uuid,
    pub amount_cents: i64,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentListInput {
    pub pagination: ListInput,
    pub external_customer_id: Option<String>,
    pub invoice_id: Option<Uuid>,
}

impl ToQuery for PaymentListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("external_customer_id", self.external_customer_id.as_deref());
        query.push_opt("invoice_id", self.invoice_id);
        query
    }
}
