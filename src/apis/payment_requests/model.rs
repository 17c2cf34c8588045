use crate::{
    apis::{customers::Customer, invoices::Invoice},
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub lago_id: Uuid,
    pub email: Option<String>,
    pub amount_cents: i64,
    pub amount_currency: String,
    pub payment_status: PaymentRequestStatus,
    pub created_at: DateTime<Utc>,
    pub customer: Option<Customer>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

resource!(PaymentRequest, "payment_request", "payment_requests");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentRequestStatus {
    Pending,
    Succeeded,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRequestInput {
    pub external_customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub lago_invoice_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRequestListInput {
    pub pagination: ListInput,
    pub external_customer_id: Option<String>,
}

impl ToQuery for PaymentRequestListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("external_customer_id", self.external_customer_id.as_deref());
        query
    }
}
