use crate::envelope::resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Plan {
    pub lago_id: Uuid,
    pub name: String,
    pub invoice_display_name: Option<String>,
    pub code: String,
    pub interval: PlanInterval,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub amount_currency: String,
    pub trial_period: Option<f64>,
    #[serde(default)]
    pub pay_in_advance: bool,
    pub bill_charges_monthly: Option<bool>,
    #[serde(default)]
    pub active_subscriptions_count: u64,
    #[serde(default)]
    pub draft_invoices_count: u64,
    #[serde(default)]
    pub charges: Vec<Charge>,
    pub minimum_commitment: Option<MinimumCommitment>,
    pub created_at: DateTime<Utc>,
}

resource!(Plan, "plan", "plans");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Weekly,
    Monthly,
    Quarterly,
    Semiannual,
    Yearly,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChargeModel {
    Standard,
    Graduated,
    GraduatedPercentage,
    Package,
    Percentage,
    Volume,
    Dynamic,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Charge {
    pub lago_id: Uuid,
    pub lago_billable_metric_id: Uuid,
    pub billable_metric_code: String,
    pub invoice_display_name: Option<String>,
    pub charge_model: ChargeModel,
    #[serde(default)]
    pub pay_in_advance: bool,
    #[serde(default)]
    pub invoiceable: bool,
    #[serde(default)]
    pub prorated: bool,
    pub min_amount_cents: Option<i64>,
    /// Pricing properties. Their shape depends on `charge_model`.
    #[serde(default)]
    pub properties: Value,
    #[serde(default)]
    pub filters: Vec<ChargeFilter>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChargeFilter {
    pub invoice_display_name: Option<String>,
    #[serde(default)]
    pub properties: Value,
    /// Filter key mapped to the accepted values.
    pub values: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MinimumCommitment {
    pub lago_id: Option<Uuid>,
    pub plan_code: Option<String>,
    pub amount_cents: i64,
    pub invoice_display_name: Option<String>,
    pub interval: Option<PlanInterval>,
}

/// Attributes of a plan to create or update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlanInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<PlanInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_in_advance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_charges_monthly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<Vec<ChargeInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_codes: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChargeInput {
    /// Id of an existing charge, to update it rather than create a new one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub billable_metric_id: Uuid,
    pub charge_model: ChargeModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_in_advance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoiceable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Value::is_null", default)]
    pub properties: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<ChargeFilter>>,
}
