use demo_api::{config::ServerConfig, run_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = ServerConfig::from_env();

    tracing::info!(
        content = %config.providers.content_base_url,
        identity = %config.providers.identity_base_url,
        timeout_secs = config.providers.timeout_secs,
        "Using upstream providers"
    );

    run_server(config).await
}
