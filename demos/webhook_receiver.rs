use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use anyhow::Context as _;
use lago_rust::{
    apis::webhooks::{WebhookObject, SIGNATURE_HEADER},
    Context, LagoClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    api_key: String,
    api_url: Option<String>,
    listen_address: Option<String>,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("LAGO"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

/// POST /webhooks
async fn receive_webhook(
    lago: web::Data<LagoClient>,
    req: HttpRequest,
    body: String,
) -> HttpResponse {
    let signature = match req
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok())
    {
        Some(signature) => signature,
        None => return HttpResponse::BadRequest().finish(),
    };

    match lago
        .webhooks
        .validate_body(&Context::background(), signature, &body)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!("Webhook signature does not match its body");
            return HttpResponse::Unauthorized().finish();
        }
        Err(e) => {
            tracing::warn!("Cannot verify webhook: {}", e);
            return HttpResponse::Unauthorized().finish();
        }
    }

    let message = match lago.webhooks.parse(&body) {
        Ok(message) => message,
        Err(e) => {
            tracing::error!("Cannot parse webhook: {}", e);
            return HttpResponse::BadRequest().finish();
        }
    };

    match &message.object {
        WebhookObject::Invoice(invoice) => tracing::info!(
            "{}: invoice {} for {} {}",
            message.webhook_type,
            invoice.number,
            invoice.total_amount_cents,
            invoice.currency
        ),
        WebhookObject::TriggeredAlert(alert) => tracing::info!(
            "{}: alert {} crossed on subscription {}",
            message.webhook_type,
            alert.alert_code,
            alert.external_subscription_id
        ),
        other => tracing::info!(
            "{}: received {}",
            message.webhook_type,
            other.object_type()
        ),
    }

    HttpResponse::Ok().finish()
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    let mut builder = LagoClient::builder().with_api_key(config.api_key);
    if let Some(api_url) = config.api_url {
        builder = builder.with_base_url(api_url);
    }
    let lago = web::Data::new(builder.build());

    let listen_address = config
        .listen_address
        .unwrap_or_else(|| "127.0.0.1:3000".to_string());
    tracing::info!("Listening for webhooks on http://{}/webhooks", listen_address);

    HttpServer::new(move || {
        App::new()
            .app_data(lago.clone())
            .route("/webhooks", web::post().to(receive_webhook))
    })
    .bind(listen_address)?
    .run()
    .await?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
