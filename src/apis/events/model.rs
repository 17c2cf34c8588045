use crate::envelope::resource;
use chrono::{DateTime, Timelike, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub lago_id: Uuid,
    pub transaction_id: String,
    pub lago_customer_id: Option<Uuid>,
    pub code: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    pub lago_subscription_id: Option<Uuid>,
    pub external_subscription_id: Option<String>,
    pub precise_total_amount_cents: Option<String>,
    pub created_at: DateTime<Utc>,
}

resource!(Event, "event", "events");

/// Usage event to ingest.
///
/// `transaction_id` makes ingestion idempotent: sending twice the same id records a single event.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct EventInput {
    pub transaction_id: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_subscription_id: Option<String>,
    #[serde(
        serialize_with = "serialize_unix_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Map::is_empty", default)]
    pub properties: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precise_total_amount_cents: Option<String>,
}

fn serialize_unix_timestamp<S>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(ts) if ts.nanosecond() == 0 => serializer.serialize_i64(ts.timestamp()),
        Some(ts) => serializer.serialize_f64(ts.timestamp_millis() as f64 / 1000.0),
        None => serializer.serialize_none(),
    }
}
