use anyhow::Context;
use pulse_server::{api, config::Settings, state::AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new().context("Failed to load settings")?;
    settings.validate().context("Invalid settings")?;

    // Generated once; handlers only read it
    let dataset = settings
        .dataset
        .build_dataset()
        .context("Failed to generate metrics dataset")?;
    tracing::info!(
        noise = ?settings.dataset.noise,
        days = dataset.follower_history().len(),
        posts = dataset.recent_posts().len(),
        "Metrics dataset generated"
    );

    let app = api::router(AppState::new(dataset));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Failed to parse server address")?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
