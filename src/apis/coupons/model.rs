use crate::{
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Coupon {
    pub lago_id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub coupon_type: CouponType,
    pub amount_cents: Option<i64>,
    pub amount_currency: Option<String>,
    /// Discount rate, as a decimal string.
    pub percentage_rate: Option<String>,
    pub frequency: CouponFrequency,
    pub frequency_duration: Option<i32>,
    #[serde(default)]
    pub reusable: bool,
    #[serde(default)]
    pub limited_plans: bool,
    #[serde(default)]
    pub plan_codes: Vec<String>,
    #[serde(default)]
    pub limited_billable_metrics: bool,
    #[serde(default)]
    pub billable_metric_codes: Vec<String>,
    pub expiration: CouponExpiration,
    pub expiration_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub terminated_at: Option<DateTime<Utc>>,
}

resource!(Coupon, "coupon", "coupons");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CouponType {
    FixedAmount,
    Percentage,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CouponFrequency {
    Once,
    Recurring,
    Forever,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CouponExpiration {
    NoExpiration,
    TimeLimit,
}

/// Attributes of a coupon to create or update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CouponInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_type: Option<CouponType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<CouponFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reusable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<CouponExpiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<CouponLimitations>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponLimitations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_metric_codes: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppliedCoupon {
    pub lago_id: Uuid,
    pub lago_coupon_id: Uuid,
    pub coupon_code: String,
    pub coupon_name: Option<String>,
    pub lago_customer_id: Uuid,
    pub external_customer_id: String,
    pub status: AppliedCouponStatus,
    pub amount_cents: Option<i64>,
    pub amount_cents_remaining: Option<i64>,
    pub amount_currency: Option<String>,
    pub percentage_rate: Option<String>,
    pub frequency: CouponFrequency,
    pub frequency_duration: Option<i32>,
    pub frequency_duration_remaining: Option<i32>,
    pub expiration_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub terminated_at: Option<DateTime<Utc>>,
}

resource!(AppliedCoupon, "applied_coupon", "applied_coupons");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppliedCouponStatus {
    Active,
    Terminated,
}

impl AppliedCouponStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppliedCouponStatus::Active => "active",
            AppliedCouponStatus::Terminated => "terminated",
        }
    }
}

/// Coupon to apply to a customer, optionally overriding the coupon's amounts.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppliedCouponInput {
    pub external_customer_id: String,
    pub coupon_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<CouponFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_duration: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedCouponListInput {
    pub pagination: ListInput,
    pub external_customer_id: Option<String>,
    pub status: Option<AppliedCouponStatus>,
    pub coupon_codes: Vec<String>,
}

impl ToQuery for AppliedCouponListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("external_customer_id", self.external_customer_id.as_deref());
        query.push_opt("status", self.status.map(|s| s.as_str()));
        query.push_list("coupon_code", &self.coupon_codes);
        query
    }
}
