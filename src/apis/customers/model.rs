use crate::{
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, NaiveDate, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub lago_id: Uuid,
    pub sequential_id: Option<i64>,
    pub slug: Option<String>,
    pub external_id: String,
    pub name: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub customer_type: Option<CustomerType>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub legal_name: Option<String>,
    pub legal_number: Option<String>,
    pub tax_identification_number: Option<String>,
    pub timezone: Option<String>,
    pub applicable_timezone: Option<String>,
    pub net_payment_term: Option<i32>,
    pub billing_configuration: Option<BillingConfiguration>,
    #[serde(default)]
    pub metadata: Vec<CustomerMetadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

resource!(Customer, "customer", "customers");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    Company,
    Individual,
}

impl CustomerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Company => "company",
            CustomerType::Individual => "individual",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProvider {
    Stripe,
    Adyen,
    Gocardless,
    Cashfree,
    Moneyhash,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BillingConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_grace_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_provider: Option<PaymentProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_provider_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_with_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_payment_methods: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerMetadata {
    pub lago_id: Option<Uuid>,
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub display_in_invoice: bool,
}

/// Attributes of a customer to create or update.
///
/// Customers are upserted on `external_id`: creating a customer with an existing
/// `external_id` updates it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct CustomerInput {
    pub external_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_identification_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_payment_term: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_configuration: Option<BillingConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<CustomerMetadataInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_codes: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerMetadataInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub key: String,
    pub value: String,
    pub display_in_invoice: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListInput {
    pub pagination: ListInput,
    pub search_term: Option<String>,
    pub customer_type: Option<CustomerType>,
    pub currencies: Vec<String>,
    pub countries: Vec<String>,
    /// Filters on metadata, rendered as `metadata[key]=value`.
    pub metadata: BTreeMap<String, String>,
}

impl ToQuery for CustomerListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("search_term", self.search_term.as_deref());
        query.push_opt("customer_type", self.customer_type.map(|t| t.as_str()));
        query.push_list("currencies", &self.currencies);
        query.push_list("countries", &self.countries);
        query.push_map("metadata", &self.metadata);
        query
    }
}

/// Usage of the current billing period of a subscription.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomerUsage {
    pub from_datetime: DateTime<Utc>,
    pub to_datetime: DateTime<Utc>,
    pub issuing_date: NaiveDate,
    pub currency: String,
    pub amount_cents: i64,
    pub taxes_amount_cents: i64,
    pub total_amount_cents: i64,
    #[serde(default)]
    pub charges_usage: Vec<ChargeUsage>,
}

resource!(CustomerUsage, "customer_usage", "customer_usages");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChargeUsage {
    pub units: String,
    pub events_count: Option<i64>,
    pub amount_cents: i64,
    pub amount_currency: String,
    pub charge: ChargeUsageCharge,
    pub billable_metric: ChargeUsageBillableMetric,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChargeUsageCharge {
    pub lago_id: Uuid,
    pub charge_model: String,
    pub invoice_display_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChargeUsageBillableMetric {
    pub lago_id: Uuid,
    pub name: String,
    pub code: String,
    pub aggregation_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUsageInput {
    pub external_subscription_id: String,
    pub apply_taxes: Option<bool>,
}

impl ToQuery for CustomerUsageInput {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("external_subscription_id", &self.external_subscription_id)
            .with_opt("apply_taxes", self.apply_taxes)
    }
}

/// Link to the customer portal.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerPortalUrl {
    pub portal_url: String,
}

resource!(CustomerPortalUrl, "customer", "customers");

/// Checkout link generated by the customer's payment provider.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerCheckoutUrl {
    pub lago_customer_id: Uuid,
    pub external_customer_id: String,
    pub payment_provider: Option<PaymentProvider>,
    pub checkout_url: String,
}

resource!(CustomerCheckoutUrl, "customer", "customers");
