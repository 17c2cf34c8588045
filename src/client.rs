//! Module containing the main Lago API client.

use crate::{
    apis::{
        alerts::AlertsApi,
        billable_metrics::BillableMetricsApi,
        coupons::{AppliedCouponsApi, CouponsApi},
        credit_notes::CreditNotesApi,
        customers::CustomersApi,
        entitlements::EntitlementsApi,
        events::EventsApi,
        features::FeaturesApi,
        fees::FeesApi,
        invoices::InvoicesApi,
        payment_requests::PaymentRequestsApi,
        payments::PaymentsApi,
        plans::PlansApi,
        subscriptions::SubscriptionsApi,
        wallets::{WalletTransactionsApi, WalletsApi},
        webhooks::WebhooksApi,
    },
    common::{API_PATH, DEFAULT_BASE_URL},
    engine::Engine,
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
    },
};
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use secrecy::Secret;
use std::{sync::Arc, time::Duration};

/// Client for the Lago API.
///
/// Every resource is exposed as a public field holding its own API client.
/// Cloning a `LagoClient` is cheap: clones share the same connection pool and webhook key cache.
#[derive(Debug, Clone)]
pub struct LagoClient {
    /// Billable metrics APIs client.
    pub billable_metrics: BillableMetricsApi,
    /// Customers APIs client.
    pub customers: CustomersApi,
    /// Plans APIs client.
    pub plans: PlansApi,
    /// Plan entitlements APIs client.
    pub entitlements: EntitlementsApi,
    /// Features APIs client.
    pub features: FeaturesApi,
    /// Subscriptions APIs client.
    pub subscriptions: SubscriptionsApi,
    /// Subscription alerts APIs client.
    pub alerts: AlertsApi,
    /// Events APIs client.
    pub events: EventsApi,
    /// Fees APIs client.
    pub fees: FeesApi,
    /// Invoices APIs client.
    pub invoices: InvoicesApi,
    /// Credit notes APIs client.
    pub credit_notes: CreditNotesApi,
    /// Coupons APIs client.
    pub coupons: CouponsApi,
    /// Applied coupons APIs client.
    pub applied_coupons: AppliedCouponsApi,
    /// Wallets APIs client.
    pub wallets: WalletsApi,
    /// Wallet transactions APIs client.
    pub wallet_transactions: WalletTransactionsApi,
    /// Payment requests APIs client.
    pub payment_requests: PaymentRequestsApi,
    /// Payments APIs client.
    pub payments: PaymentsApi,
    /// Webhook verification and parsing.
    pub webhooks: WebhooksApi,
    engine: Arc<Engine>,
}

impl LagoClient {
    /// Builds a new [`LagoClient`](crate::client::LagoClient) with the default configuration.
    ///
    /// The resulting client has no API key and can only reach unauthenticated endpoints.
    pub fn new() -> LagoClient {
        LagoClientBuilder::new().build()
    }

    /// Returns a new builder to configure a new [`LagoClient`](crate::client::LagoClient).
    pub fn builder() -> LagoClientBuilder {
        LagoClientBuilder::new()
    }

    /// Returns the request engine, to reach endpoints not covered by the resource clients.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Default for LagoClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`LagoClient`](crate::client::LagoClient).
#[derive(Debug)]
pub struct LagoClientBuilder {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<Secret<String>>,
    debug: bool,
    timeout: Option<Duration>,
}

impl LagoClientBuilder {
    /// Creates a new builder to configure a [`LagoClient`](crate::client::LagoClient).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            debug: false,
            timeout: None,
        }
    }

    /// Consumes the builder and builds a new [`LagoClient`](crate::client::LagoClient).
    ///
    /// The base URL is not validated here: an invalid URL surfaces as a transport error on the first call.
    pub fn build(self) -> LagoClient {
        let auth_middleware = self
            .api_key
            .map(|api_key| AuthenticationMiddleware { api_key });

        let engine = Arc::new(Engine {
            client: build_client_with_middleware(self.client, auth_middleware),
            base_url: format!("{}{}", self.base_url.trim_end_matches('/'), API_PATH),
            debug: self.debug,
            timeout: self.timeout,
        });

        LagoClient {
            billable_metrics: BillableMetricsApi::new(engine.clone()),
            customers: CustomersApi::new(engine.clone()),
            plans: PlansApi::new(engine.clone()),
            entitlements: EntitlementsApi::new(engine.clone()),
            features: FeaturesApi::new(engine.clone()),
            subscriptions: SubscriptionsApi::new(engine.clone()),
            alerts: AlertsApi::new(engine.clone()),
            events: EventsApi::new(engine.clone()),
            fees: FeesApi::new(engine.clone()),
            invoices: InvoicesApi::new(engine.clone()),
            credit_notes: CreditNotesApi::new(engine.clone()),
            coupons: CouponsApi::new(engine.clone()),
            applied_coupons: AppliedCouponsApi::new(engine.clone()),
            wallets: WalletsApi::new(engine.clone()),
            wallet_transactions: WalletTransactionsApi::new(engine.clone()),
            payment_requests: PaymentRequestsApi::new(engine.clone()),
            payments: PaymentsApi::new(engine.clone()),
            webhooks: WebhooksApi::new(engine.clone()),
            engine,
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the base URL of the Lago instance, without the `/api/v1` suffix.
    ///
    /// Defaults to: `https://api.getlago.com`
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API key sent as a bearer token with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Enables logging of every request and response at `DEBUG` level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets a timeout applied to every call whose [`Context`](crate::context::Context) has no deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for LagoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: Option<AuthenticationMiddleware>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(InjectUserAgentMiddleware::new())
        .with(ErrorHandlingMiddleware);

    if let Some(auth_middleware) = auth_middleware {
        builder = builder.with(auth_middleware);
    }

    builder.build()
}
