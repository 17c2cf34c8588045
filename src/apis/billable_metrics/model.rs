use crate::{envelope::resource, query::{ListInput, QueryParams, ToQuery}};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BillableMetric {
    pub lago_id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    #[serde(default)]
    pub recurring: bool,
    pub aggregation_type: AggregationType,
    pub field_name: Option<String>,
    pub expression: Option<String>,
    pub weighted_interval: Option<WeightedInterval>,
    pub rounding_function: Option<RoundingFunction>,
    pub rounding_precision: Option<i32>,
    #[serde(default)]
    pub filters: Vec<BillableMetricFilter>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub active_subscriptions_count: u64,
    #[serde(default)]
    pub draft_invoices_count: u64,
    #[serde(default)]
    pub plans_count: u64,
}

resource!(BillableMetric, "billable_metric", "billable_metrics");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AggregationType {
    CountAgg,
    SumAgg,
    MaxAgg,
    UniqueCountAgg,
    WeightedSumAgg,
    LatestAgg,
    CustomAgg,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightedInterval {
    Seconds,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoundingFunction {
    Ceil,
    Floor,
    Round,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BillableMetricFilter {
    pub key: String,
    pub values: Vec<String>,
}

/// Attributes of a billable metric to create or update.
///
/// On update, `None` fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct BillableMetricInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<AggregationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_interval: Option<WeightedInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_function: Option<RoundingFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_precision: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<BillableMetricFilter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillableMetricListInput {
    pub pagination: ListInput,
    pub recurring: Option<bool>,
    pub aggregation_types: Vec<AggregationType>,
}

impl ToQuery for BillableMetricListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("recurring", self.recurring);
        query.push_list(
            "aggregation_types",
            self.aggregation_types.iter().map(|t| t.as_str()),
        );
        query
    }
}

impl AggregationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationType::CountAgg => "count_agg",
            AggregationType::SumAgg => "sum_agg",
            AggregationType::MaxAgg => "max_agg",
            AggregationType::UniqueCountAgg => "unique_count_agg",
            AggregationType::WeightedSumAgg => "weighted_sum_agg",
            AggregationType::LatestAgg => "latest_agg",
            AggregationType::CustomAgg => "custom_agg",
        }
    }
}
