use anyhow::Context as _;
use lago_rust::{
    apis::{
        customers::CustomerInputBuilder,
        events::EventInputBuilder,
        subscriptions::{SubscriptionInputBuilder, SubscriptionListInput, SubscriptionStatus},
    },
    Context, LagoClient,
};
use std::time::Duration;
use uuid::Uuid;

#[derive(serde::Deserialize, Debug)]
struct Config {
    api_key: String,
    api_url: Option<String>,
    plan_code: String,
    billable_metric_code: String,
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

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Lago client
    let mut builder = LagoClient::builder()
        .with_api_key(config.api_key)
        .with_timeout(Duration::from_secs(10));
    if let Some(api_url) = config.api_url {
        builder = builder.with_base_url(api_url);
    }
    let lago = builder.build();

    let ctx = Context::background();

    // Create a new customer
    let customer = lago
        .customers
        .create(
            &ctx,
            &CustomerInputBuilder::default()
                .external_id(format!("demo-{}", Uuid::new_v4()))
                .name("Demo Customer")
                .currency("EUR")
                .build()?,
        )
        .await?;
    tracing::info!("Created new customer: {}", customer.lago_id);

    // Subscribe it to the plan
    let subscription = lago
        .subscriptions
        .create(
            &ctx,
            &SubscriptionInputBuilder::default()
                .external_customer_id(customer.external_id.clone())
                .external_id(format!("demo-sub-{}", Uuid::new_v4()))
                .plan_code(config.plan_code)
                .build()?,
        )
        .await?;
    tracing::info!(
        "Subscription {} is {:?}",
        subscription.external_id,
        subscription.status
    );

    // Send some usage
    let events: Vec<_> = (0..10)
        .map(|_| {
            EventInputBuilder::default()
                .transaction_id(Uuid::new_v4().to_string())
                .code(config.billable_metric_code.clone())
                .external_subscription_id(subscription.external_id.clone())
                .build()
        })
        .collect::<Result<_, _>>()?;
    lago.events.batch(&ctx, &events).await?;
    tracing::info!("Sent {} events", events.len());

    // List the active subscriptions of the customer
    let subscriptions = lago
        .subscriptions
        .list(
            &ctx,
            &SubscriptionListInput {
                external_customer_id: Some(customer.external_id.clone()),
                status: vec![SubscriptionStatus::Active],
                ..Default::default()
            },
        )
        .await?;
    for subscription in &subscriptions.items {
        tracing::info!("{:#?}", subscription);
    }

    Ok(())
}

#[tokio::main]
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
