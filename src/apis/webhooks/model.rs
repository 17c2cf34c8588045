use crate::{
    apis::{
        alerts::TriggeredAlert,
        credit_notes::CreditNote,
        customers::{Customer, CustomerCheckoutUrl},
        features::Feature,
        fees::Fee,
        invoices::Invoice,
        payment_requests::PaymentRequest,
        payments::Payment,
        plans::Plan,
        subscriptions::Subscription,
        wallets::{Wallet, WalletTransaction},
    },
    error::Cause,
    Error,
};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A webhook sent by Lago.
///
/// `object_type` names both the variant of `object` and the key carrying it in the body:
///
/// ```json
/// {
///   "webhook_type": "invoice.created",
///   "object_type": "invoice",
///   "organization_id": "...",
///   "invoice": { ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookMessage {
    /// Event which triggered the webhook, e.g. `invoice.created`.
    pub webhook_type: String,
    pub object_type: String,
    pub organization_id: Uuid,
    pub object: WebhookObject,
}

/// Payload of a webhook, one variant per `object_type`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WebhookObject {
    CreditNote(CreditNote),
    Customer(Customer),
    Feature(Feature),
    Fee(Fee),
    Invoice(Invoice),
    Payment(Payment),
    PaymentProviderCustomerCheckoutUrl(CustomerCheckoutUrl),
    PaymentRequest(PaymentRequest),
    Plan(Plan),
    Subscription(Subscription),
    TriggeredAlert(TriggeredAlert),
    Wallet(Wallet),
    WalletTransaction(WalletTransaction),
}

impl WebhookObject {
    /// Returns the `object_type` this payload is sent under.
    pub fn object_type(&self) -> &'static str {
        match self {
            WebhookObject::CreditNote(_) => "credit_note",
            WebhookObject::Customer(_) => "customer",
            WebhookObject::Feature(_) => "feature",
            WebhookObject::Fee(_) => "fee",
            WebhookObject::Invoice(_) => "invoice",
            WebhookObject::Payment(_) => "payment",
            WebhookObject::PaymentProviderCustomerCheckoutUrl(_) => {
                "payment_provider_customer_checkout_url"
            }
            WebhookObject::PaymentRequest(_) => "payment_request",
            WebhookObject::Plan(_) => "plan",
            WebhookObject::Subscription(_) => "subscription",
            WebhookObject::TriggeredAlert(_) => "triggered_alert",
            WebhookObject::Wallet(_) => "wallet",
            WebhookObject::WalletTransaction(_) => "wallet_transaction",
        }
    }

    fn decoder(object_type: &str) -> Option<fn(Value) -> serde_json::Result<WebhookObject>> {
        let decoder: fn(Value) -> serde_json::Result<WebhookObject> = match object_type {
            "credit_note" => |v| serde_json::from_value(v).map(WebhookObject::CreditNote),
            "customer" => |v| serde_json::from_value(v).map(WebhookObject::Customer),
            "feature" => |v| serde_json::from_value(v).map(WebhookObject::Feature),
            "fee" => |v| serde_json::from_value(v).map(WebhookObject::Fee),
            "invoice" => |v| serde_json::from_value(v).map(WebhookObject::Invoice),
            "payment" => |v| serde_json::from_value(v).map(WebhookObject::Payment),
            "payment_provider_customer_checkout_url" => |v| {
                serde_json::from_value(v).map(WebhookObject::PaymentProviderCustomerCheckoutUrl)
            },
            "payment_request" => |v| serde_json::from_value(v).map(WebhookObject::PaymentRequest),
            "plan" => |v| serde_json::from_value(v).map(WebhookObject::Plan),
            "subscription" => |v| serde_json::from_value(v).map(WebhookObject::Subscription),
            "triggered_alert" => |v| serde_json::from_value(v).map(WebhookObject::TriggeredAlert),
            "wallet" => |v| serde_json::from_value(v).map(WebhookObject::Wallet),
            "wallet_transaction" => {
                |v| serde_json::from_value(v).map(WebhookObject::WalletTransaction)
            }
            _ => return None,
        };

        Some(decoder)
    }
}

impl Serialize for WebhookMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("webhook_type", &self.webhook_type)?;
        map.serialize_entry("object_type", &self.object_type)?;
        map.serialize_entry("organization_id", &self.organization_id)?;
        map.serialize_entry(self.object.object_type(), &self.object)?;
        map.end()
    }
}

#[derive(Deserialize)]
struct WebhookHeader {
    webhook_type: String,
    object_type: String,
    organization_id: Uuid,
}

/// Parses the body of a webhook.
///
/// The body should be verified first, see [`WebhooksApi::validate_body`](crate::apis::webhooks::WebhooksApi::validate_body).
///
/// Fails with `unknown object_type: <type>` if `object_type` is not supported,
/// and with `missing <type> attribute` if the body does not carry its payload.
pub fn parse_webhook(body: &str) -> Result<WebhookMessage, Error> {
    let header: WebhookHeader =
        serde_json::from_str(body).map_err(|e| Error::local(Cause::Payload(e)))?;

    let decode = WebhookObject::decoder(&header.object_type)
        .ok_or_else(|| Error::local(Cause::UnknownObjectType(header.object_type.clone())))?;

    let mut fields: Map<String, Value> =
        serde_json::from_str(body).map_err(|e| Error::local(Cause::Payload(e)))?;
    let payload = fields
        .remove(&header.object_type)
        .ok_or_else(|| Error::local(Cause::MissingAttribute(header.object_type.clone())))?;

    let object = decode(payload).map_err(|e| Error::local(Cause::Payload(e)))?;

    Ok(WebhookMessage {
        webhook_type: header.webhook_type,
        object_type: header.object_type,
        organization_id: header.organization_id,
        object,
    })
}
