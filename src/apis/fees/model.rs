use crate::{
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fee {
    pub lago_id: Option<Uuid>,
    pub lago_charge_id: Option<Uuid>,
    pub lago_charge_filter_id: Option<Uuid>,
    pub lago_invoice_id: Option<Uuid>,
    pub lago_true_up_fee_id: Option<Uuid>,
    pub lago_true_up_parent_fee_id: Option<Uuid>,
    pub lago_subscription_id: Option<Uuid>,
    pub lago_customer_id: Option<Uuid>,
    pub external_customer_id: Option<String>,
    pub external_subscription_id: Option<String>,
    pub invoice_display_name: Option<String>,
    pub amount_cents: i64,
    pub precise_amount: Option<String>,
    pub amount_currency: String,
    #[serde(default)]
    pub taxes_amount_cents: i64,
    pub taxes_rate: Option<f64>,
    #[serde(default)]
    pub total_amount_cents: i64,
    pub units: String,
    pub description: Option<String>,
    pub unit_amount_cents: Option<i64>,
    pub events_count: Option<i64>,
    #[serde(default)]
    pub pay_in_advance: bool,
    #[serde(default)]
    pub invoiceable: bool,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
    pub payment_status: Option<FeePaymentStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub succeeded_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub item: FeeItem,
}

resource!(Fee, "fee", "fees");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeePaymentStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

impl FeePaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeePaymentStatus::Pending => "pending",
            FeePaymentStatus::Succeeded => "succeeded",
            FeePaymentStatus::Failed => "failed",
            FeePaymentStatus::Refunded => "refunded",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    Charge,
    AddOn,
    Subscription,
    Credit,
    Commitment,
}

impl FeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeType::Charge => "charge",
            FeeType::AddOn => "add_on",
            FeeType::Subscription => "subscription",
            FeeType::Credit => "credit",
            FeeType::Commitment => "commitment",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeeItem {
    pub r#type: FeeType,
    pub code: String,
    pub name: String,
    pub invoice_display_name: Option<String>,
    pub lago_item_id: Option<Uuid>,
    pub item_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FeeUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<FeePaymentStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeListInput {
    pub pagination: ListInput,
    pub external_customer_id: Option<String>,
    pub external_subscription_id: Option<String>,
    pub currency: Option<String>,
    pub fee_type: Option<FeeType>,
    pub payment_status: Option<FeePaymentStatus>,
    pub created_at_from: Option<DateTime<Utc>>,
    pub created_at_to: Option<DateTime<Utc>>,
}

impl ToQuery for FeeListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("external_customer_id", self.external_customer_id.as_deref());
        query.push_opt(
            "external_subscription_id",
            self.external_subscription_id.as_deref(),
        );
        query.push_opt("currency", self.currency.as_deref());
        query.push_opt("fee_type", self.fee_type.map(|t| t.as_str()));
        query.push_opt("payment_status", self.payment_status.map(|s| s.as_str()));
        query.push_opt("created_at_from", self.created_at_from.map(|d| d.to_rfc3339()));
        query.push_opt("created_at_to", self.created_at_to.map(|d| d.to_rfc3339()));
        query
    }
}
