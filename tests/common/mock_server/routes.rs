use crate::common::mock_server::{
    ApiError, Authenticated, MockServerConfiguration, MockServerStorage,
};
use actix_web::{web, HttpRequest, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, TimeZone, Utc};
use lago_rust::apis::{customers::CustomerInput, subscriptions::SubscriptionInput};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

const DEFAULT_PER_PAGE: usize = 20;

#[derive(Deserialize)]
pub(super) struct CustomerBody {
    customer: CustomerInput,
}

#[derive(Deserialize)]
pub(super) struct SubscriptionBody {
    subscription: SubscriptionInput,
}

#[derive(Deserialize)]
pub(super) struct EventBody {
    event: Value,
}

#[derive(Deserialize)]
pub(super) struct BatchEventsBody {
    events: Vec<Value>,
}

#[derive(Deserialize)]
pub(super) struct TerminateQuery {
    status: Option<String>,
}

/// POST /customers
pub(super) async fn upsert_customer(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    body: web::Json<CustomerBody>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().customer;
    if input.external_id.is_empty() {
        return Err(ApiError::validation("external_id", "value_is_mandatory"));
    }

    let mut storage = storage.write().unwrap();
    let (lago_id, created_at) = match storage.customers.get(&input.external_id) {
        Some(existing) => (existing["lago_id"].clone(), existing["created_at"].clone()),
        None => (json!(Uuid::new_v4()), json!(Utc::now())),
    };

    let customer = json!({
        "lago_id": lago_id,
        "external_id": input.external_id,
        "name": input.name,
        "email": input.email,
        "customer_type": input.customer_type,
        "country": input.country,
        "currency": input.currency,
        "timezone": input.timezone,
        "metadata": [],
        "created_at": created_at,
        "updated_at": Utc::now(),
    });
    storage
        .customers
        .insert(input.external_id.clone(), customer.clone());

    Ok(HttpResponse::Ok().json(json!({ "customer": customer })))
}

/// GET /customers/{external_id}
pub(super) async fn get_customer(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    external_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    storage
        .read()
        .unwrap()
        .customers
        .get(external_id.as_str())
        .map(|customer| HttpResponse::Ok().json(json!({ "customer": customer })))
        .ok_or_else(|| ApiError::not_found("customer_not_found"))
}

/// DELETE /customers/{external_id}
pub(super) async fn delete_customer(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    external_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    storage
        .write()
        .unwrap()
        .customers
        .remove(external_id.as_str())
        .map(|customer| HttpResponse::Ok().json(json!({ "customer": customer })))
        .ok_or_else(|| ApiError::not_found("customer_not_found"))
}

/// GET /customers
pub(super) async fn list_customers(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
) -> HttpResponse {
    let query = query_pairs(&req);
    let customers: Vec<Value> = storage
        .read()
        .unwrap()
        .customers
        .values()
        .cloned()
        .collect();

    HttpResponse::Ok().json(paginate("customers", customers, &query))
}

/// POST /subscriptions
pub(super) async fn create_subscription(
    _: Authenticated,
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    body: web::Json<SubscriptionBody>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().subscription;

    let external_id = input
        .external_id
        .clone()
        .ok_or_else(|| ApiError::validation("external_id", "value_is_mandatory"))?;
    let plan_code = input
        .plan_code
        .clone()
        .filter(|code| configuration.plan_codes.contains(code))
        .ok_or_else(|| ApiError::not_found("plan_not_found"))?;

    let mut storage = storage.write().unwrap();
    let customer = input
        .external_customer_id
        .as_ref()
        .and_then(|id| storage.customers.get(id))
        .cloned()
        .ok_or_else(|| ApiError::not_found("customer_not_found"))?;
    if storage.subscriptions.contains_key(&external_id) {
        return Err(ApiError::validation("external_id", "value_already_exist"));
    }

    let now = Utc::now();
    let subscription_at = input.subscription_at.unwrap_or(now);
    let pending = subscription_at > now;

    let subscription = json!({
        "lago_id": Uuid::new_v4(),
        "external_id": external_id,
        "lago_customer_id": customer["lago_id"],
        "external_customer_id": customer["external_id"],
        "name": input.name,
        "plan_code": plan_code,
        "status": if pending { "pending" } else { "active" },
        "billing_time": input.billing_time.map(|b| json!(b)).unwrap_or_else(|| json!("calendar")),
        "subscription_at": subscription_at,
        "started_at": if pending { None } else { Some(now) },
        "ending_at": input.ending_at,
        "created_at": now,
    });
    storage
        .subscriptions
        .insert(external_id, subscription.clone());

    Ok(HttpResponse::Ok().json(json!({ "subscription": subscription })))
}

/// GET /subscriptions/{external_id}
pub(super) async fn get_subscription(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    external_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    storage
        .read()
        .unwrap()
        .subscriptions
        .get(external_id.as_str())
        .map(|subscription| HttpResponse::Ok().json(json!({ "subscription": subscription })))
        .ok_or_else(|| ApiError::not_found("subscription_not_found"))
}

/// DELETE /subscriptions/{external_id}
///
/// Only subscriptions in the requested `status` (default: `active`) can be terminated.
/// Terminating a pending subscription cancels it.
pub(super) async fn terminate_subscription(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    external_id: web::Path<String>,
    query: web::Query<TerminateQuery>,
) -> Result<HttpResponse, ApiError> {
    let expected_status = query.status.as_deref().unwrap_or("active");

    let mut storage = storage.write().unwrap();
    let subscription = storage
        .subscriptions
        .get_mut(external_id.as_str())
        .filter(|s| s["status"] == expected_status)
        .ok_or_else(|| ApiError::not_found("subscription_not_found"))?;

    if expected_status == "pending" {
        subscription["status"] = json!("canceled");
        subscription["canceled_at"] = json!(Utc::now());
    } else {
        subscription["status"] = json!("terminated");
        subscription["terminated_at"] = json!(Utc::now());
    }

    Ok(HttpResponse::Ok().json(json!({ "subscription": subscription })))
}

/// GET /subscriptions
pub(super) async fn list_subscriptions(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
) -> HttpResponse {
    let query = query_pairs(&req);
    let external_customer_id = query
        .iter()
        .find(|(k, _)| k == "external_customer_id")
        .map(|(_, v)| v.clone());
    let statuses: Vec<&String> = query
        .iter()
        .filter(|(k, _)| k == "status[]")
        .map(|(_, v)| v)
        .collect();

    let subscriptions: Vec<Value> = storage
        .read()
        .unwrap()
        .subscriptions
        .values()
        .filter(|s| {
            external_customer_id
                .as_ref()
                .map(|id| s["external_customer_id"] == id.as_str())
                .unwrap_or(true)
        })
        .filter(|s| statuses.is_empty() || statuses.iter().any(|st| s["status"] == st.as_str()))
        .cloned()
        .collect();

    HttpResponse::Ok().json(paginate("subscriptions", subscriptions, &query))
}

/// POST /events
pub(super) async fn create_event(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    body: web::Json<EventBody>,
) -> Result<HttpResponse, ApiError> {
    let event = store_event(&storage, body.into_inner().event)?;

    Ok(HttpResponse::Ok().json(json!({ "event": event })))
}

/// POST /events/batch
pub(super) async fn create_batch_events(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    body: web::Json<BatchEventsBody>,
) -> Result<HttpResponse, ApiError> {
    for event in body.into_inner().events {
        store_event(&storage, event)?;
    }

    Ok(HttpResponse::Ok().finish())
}

/// GET /events/{transaction_id}
pub(super) async fn get_event(
    _: Authenticated,
    storage: web::Data<MockServerStorage>,
    transaction_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    storage
        .read()
        .unwrap()
        .events
        .get(transaction_id.as_str())
        .map(|event| HttpResponse::Ok().json(json!({ "event": event })))
        .ok_or_else(|| ApiError::not_found("event_not_found"))
}

/// GET /webhooks/public_key
pub(super) async fn webhooks_public_key(
    _: Authenticated,
    configuration: web::Data<MockServerConfiguration>,
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(STANDARD.encode(&configuration.signing_public_key))
}

/// Stores an event, keeping the first one received for each `transaction_id`.
fn store_event(storage: &MockServerStorage, input: Value) -> Result<Value, ApiError> {
    let transaction_id = input["transaction_id"]
        .as_str()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::validation("transaction_id", "value_is_mandatory"))?
        .to_string();
    let code = input["code"]
        .as_str()
        .ok_or_else(|| ApiError::validation("code", "value_is_mandatory"))?;

    let timestamp = match &input["timestamp"] {
        Value::Null => Utc::now(),
        value => value
            .as_f64()
            .and_then(from_unix_timestamp)
            .ok_or_else(|| ApiError::validation("timestamp", "invalid_format"))?,
    };

    let event = json!({
        "lago_id": Uuid::new_v4(),
        "transaction_id": transaction_id,
        "code": code,
        "timestamp": timestamp,
        "external_subscription_id": input["external_subscription_id"],
        "properties": input.get("properties").cloned().unwrap_or_else(|| json!({})),
        "precise_total_amount_cents": input["precise_total_amount_cents"],
        "created_at": Utc::now(),
    });

    Ok(storage
        .write()
        .unwrap()
        .events
        .entry(transaction_id)
        .or_insert(event)
        .clone())
}

fn from_unix_timestamp(timestamp: f64) -> Option<DateTime<Utc>> {
    let secs = timestamp.trunc() as i64;
    let nanos = ((timestamp.fract() * 1000.0).round() as u32) * 1_000_000;
    Utc.timestamp_opt(secs, nanos).single()
}

fn query_pairs(req: &HttpRequest) -> Vec<(String, String)> {
    url::form_urlencoded::parse(req.query_string().as_bytes())
        .into_owned()
        .collect()
}

/// Wraps a page of `items` under `key`, along with its pagination metadata.
fn paginate(key: &str, items: Vec<Value>, query: &[(String, String)]) -> Value {
    let param = |name: &str| {
        query
            .iter()
            .find(|(k, _)| k == name)
            .and_then(|(_, v)| v.parse::<usize>().ok())
    };
    let page = param("page").unwrap_or(1).max(1);
    let per_page = param("per_page").unwrap_or(DEFAULT_PER_PAGE).max(1);

    let total_count = items.len();
    let total_pages = (total_count + per_page - 1) / per_page;
    let page_items: Vec<Value> = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    json!({
        key: page_items,
        "meta": {
            "current_page": page,
            "next_page": if page < total_pages { Some(page + 1) } else { None },
            "prev_page": if page > 1 { Some(page - 1) } else { None },
            "total_pages": total_pages,
            "total_count": total_count,
        }
    })
}
