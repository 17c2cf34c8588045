mod routes;

use actix_web::{
    dev::Payload,
    http::{
        header::{AUTHORIZATION, USER_AGENT},
        StatusCode,
    },
    web, App, FromRequest, HttpRequest, HttpResponse, HttpServer, ResponseError,
};
use futures::future::{ready, Ready};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Url;
use serde_json::{json, Value};
use std::{
    collections::{BTreeMap, HashSet},
    fmt,
    sync::{Arc, RwLock},
};
use tokio::sync::oneshot;

#[derive(Clone)]
struct MockServerConfiguration {
    api_key: String,
    signing_private_key: Vec<u8>,
    signing_public_key: Vec<u8>,
    plan_codes: HashSet<String>,
}

#[derive(Clone, Default)]
struct MockServerStorageInner {
    customers: BTreeMap<String, Value>,
    subscriptions: BTreeMap<String, Value>,
    events: BTreeMap<String, Value>,
}

/// In-memory storage for the entities created on the mock server, keyed by external id.
type MockServerStorage = Arc<RwLock<MockServerStorageInner>>;

/// Simple mock server for the Lago API used in local integration tests.
pub struct LagoMockServer {
    url: Url,
    shutdown: Option<oneshot::Sender<()>>,
    configuration: MockServerConfiguration,
}

impl LagoMockServer {
    pub async fn start(
        api_key: &str,
        plan_code: &str,
        signing_private_key: Vec<u8>,
        signing_public_key: Vec<u8>,
    ) -> Self {
        let configuration = MockServerConfiguration {
            api_key: api_key.to_string(),
            signing_private_key,
            signing_public_key,
            plan_codes: [plan_code.to_string()].into_iter().collect(),
        };
        let configuration_clone = configuration.clone();

        let storage = MockServerStorage::default();

        // Setup the mock HTTP server and bind it to a random port
        let http_server_factory = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(configuration.clone()))
                .app_data(web::Data::new(storage.clone()))
                .service(
                    web::scope("/api/v1")
                        .service(
                            web::resource("/customers")
                                .route(web::post().to(routes::upsert_customer))
                                .route(web::get().to(routes::list_customers)),
                        )
                        .service(
                            web::resource("/customers/{external_id}")
                                .route(web::get().to(routes::get_customer))
                                .route(web::delete().to(routes::delete_customer)),
                        )
                        .service(
                            web::resource("/subscriptions")
                                .route(web::post().to(routes::create_subscription))
                                .route(web::get().to(routes::list_subscriptions)),
                        )
                        .service(
                            web::resource("/subscriptions/{external_id}")
                                .route(web::get().to(routes::get_subscription))
                                .route(web::delete().to(routes::terminate_subscription)),
                        )
                        .service(
                            web::resource("/events").route(web::post().to(routes::create_event)),
                        )
                        .service(
                            web::resource("/events/batch")
                                .route(web::post().to(routes::create_batch_events)),
                        )
                        .service(
                            web::resource("/events/{transaction_id}")
                                .route(web::get().to(routes::get_event)),
                        )
                        .service(
                            web::resource("/webhooks/public_key")
                                .route(web::get().to(routes::webhooks_public_key)),
                        ),
                )
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();

        // Retrieve the address and port the server was bound to
        let addr = http_server_factory.addrs().first().cloned().unwrap();

        // Prepare a oneshot channel to kill the HTTP server when this struct is dropped
        let (shutdown_sender, shutdown_recv) = oneshot::channel();

        // Start the server in another task
        let http_server = http_server_factory.run();
        tokio::spawn(async move {
            tokio::select! {
                _ = http_server => panic!("HTTP server crashed"),
                _ = shutdown_recv => { /* Intentional shutdown */ }
            }
        });

        Self {
            url: Url::parse(&format!("http://{}", addr)).unwrap(),
            shutdown: Some(shutdown_sender),
            configuration: configuration_clone,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Signs `body` the way Lago signs outgoing webhooks.
    pub fn sign_webhook(&self, body: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &json!({ "data": body, "iss": self.url.as_str() }),
            &EncodingKey::from_rsa_pem(&self.configuration.signing_private_key).unwrap(),
        )
        .unwrap()
    }
}

impl Drop for LagoMockServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

/// Error returned by the mock server, rendered as a Lago error envelope.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    code: &'static str,
    details: Option<Value>,
}

impl ApiError {
    fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code: "",
            details: None,
        }
    }

    fn not_found(code: &'static str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code,
            details: None,
        }
    }

    fn validation(field: &str, reason: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "validation_errors",
            details: Some(json!({ field: [reason] })),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.code)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "status": self.status.as_u16(),
            "error": self.status.canonical_reason().unwrap_or_default(),
        });
        if !self.code.is_empty() {
            body["code"] = json!(self.code);
        }
        if let Some(details) = &self.details {
            body["error_details"] = details.clone();
        }

        HttpResponse::build(self.status).json(body)
    }
}

/// Extractor which rejects requests without the expected API key or user agent.
struct Authenticated;

impl FromRequest for Authenticated {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let configuration = req.app_data::<web::Data<MockServerConfiguration>>();

        let authorized = match (configuration, req.headers().get(AUTHORIZATION)) {
            (Some(configuration), Some(header)) => {
                header.to_str().ok() == Some(format!("Bearer {}", configuration.api_key).as_str())
            }
            _ => false,
        };
        let user_agent_valid = req
            .headers()
            .get(USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .map(|ua| ua.starts_with("lago-rust/"))
            .unwrap_or(false);

        ready(if authorized && user_agent_valid {
            Ok(Authenticated)
        } else {
            Err(ApiError::unauthorized())
        })
    }
}
