use crate::{
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, NaiveDate, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subscription {
    pub lago_id: Uuid,
    pub external_id: String,
    pub lago_customer_id: Uuid,
    pub external_customer_id: String,
    pub name: Option<String>,
    pub plan_code: String,
    pub status: SubscriptionStatus,
    pub billing_time: BillingTime,
    pub subscription_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub ending_at: Option<DateTime<Utc>>,
    pub trial_ended_at: Option<DateTime<Utc>>,
    pub terminated_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub previous_plan_code: Option<String>,
    pub next_plan_code: Option<String>,
    pub downgrade_plan_date: Option<NaiveDate>,
    pub current_billing_period_started_at: Option<DateTime<Utc>>,
    pub current_billing_period_ending_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

resource!(Subscription, "subscription", "subscriptions");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Pending,
    Terminated,
    Canceled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Pending => "pending",
            SubscriptionStatus::Terminated => "terminated",
            SubscriptionStatus::Canceled => "canceled",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BillingTime {
    Calendar,
    Anniversary,
}

/// Attributes of a subscription to create or update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct SubscriptionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_time: Option<BillingTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_at: Option<DateTime<Utc>>,
    /// Overrides of the plan attributes for this subscription only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_overrides: Option<Value>,
}

/// Options of a subscription termination, sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionTerminateInput {
    /// Status of the subscription to terminate. Set to `Pending` to cancel a subscription not started yet.
    pub status: Option<SubscriptionStatus>,
    /// What to do with the unused amount of a paid in advance plan: `credit`, `refund` or `skip`.
    pub on_termination_credit_note: Option<String>,
    /// Whether to issue the closing invoice: `generate` or `skip`.
    pub on_termination_invoice: Option<String>,
}

impl ToQuery for SubscriptionTerminateInput {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("status", self.status.map(|s| s.as_str()))
            .with_opt(
                "on_termination_credit_note",
                self.on_termination_credit_note.as_deref(),
            )
            .with_opt(
                "on_termination_invoice",
                self.on_termination_invoice.as_deref(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionListInput {
    pub pagination: ListInput,
    pub external_customer_id: Option<String>,
    pub plan_code: Option<String>,
    pub status: Vec<SubscriptionStatus>,
}

impl ToQuery for SubscriptionListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("external_customer_id", self.external_customer_id.as_deref());
        query.push_opt("plan_code", self.plan_code.as_deref());
        query.push_list("status", self.status.iter().map(|s| s.as_str()));
        query
    }
}
