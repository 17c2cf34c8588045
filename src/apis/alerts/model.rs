use crate::envelope::resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Alert {
    pub lago_id: Uuid,
    pub lago_organization_id: Option<Uuid>,
    pub external_subscription_id: String,
    pub alert_type: AlertType,
    pub code: String,
    pub name: Option<String>,
    pub billable_metric: Option<AlertBillableMetric>,
    pub previous_value: Option<String>,
    pub last_processed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thresholds: Vec<AlertThreshold>,
    pub created_at: DateTime<Utc>,
}

resource!(Alert, "alert", "alerts");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    CurrentUsageAmount,
    BillableMetricCurrentUsageAmount,
    BillableMetricCurrentUsageUnits,
    LifetimeUsageAmount,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AlertBillableMetric {
    pub lago_id: Uuid,
    pub name: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AlertThreshold {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Threshold value, as a decimal string.
    pub value: String,
    #[serde(default)]
    pub recurring: bool,
}

/// Attributes of an alert to create or update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AlertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<AlertType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_metric_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<AlertThreshold>>,
}

/// Alert whose thresholds were crossed, delivered through the `alert.triggered` webhook.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TriggeredAlert {
    pub lago_id: Uuid,
    pub lago_alert_id: Uuid,
    pub lago_organization_id: Option<Uuid>,
    pub external_subscription_id: String,
    pub external_customer_id: Option<String>,
    pub billable_metric_code: Option<String>,
    pub alert_name: Option<String>,
    pub alert_code: String,
    pub alert_type: AlertType,
    pub current_value: String,
    pub previous_value: Option<String>,
    #[serde(default)]
    pub crossed_thresholds: Vec<AlertThreshold>,
    pub triggered_at: DateTime<Utc>,
}
