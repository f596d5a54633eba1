use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use reminder_relay::config::AppConfig;
use reminder_relay::services::hubspot::HubSpotClient;
use reminder_relay::services::messaging::line::LinePushClient;
use reminder_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.hubspot_access_token.is_empty() {
        tracing::warn!("HUBSPOT_ACCESS_TOKEN is not set, HubSpot calls will be rejected");
    }
    if config.line_channel_access_token.is_empty() {
        tracing::warn!("LINE_CHANNEL_ACCESS_TOKEN is not set, push routes will return 500");
    }
    tracing::info!(
        hubspot = %config.hubspot_api_url,
        line = %config.line_api_url,
        object_type = %config.crm_object_type,
        "using remote APIs"
    );

    let state = Arc::new(AppState {
        crm: Box::new(HubSpotClient::new(&config.hubspot_api_url)),
        content: Box::new(HubSpotClient::new(&config.hubspot_api_url)),
        messaging: Box::new(LinePushClient::new(&config.line_api_url)),
        config: config.clone(),
    });

    let app = reminder_relay::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
