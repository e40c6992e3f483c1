use mrt_server::config::AppConfig;
use mrt_server::stations::StationService;
use mrt_server::upstream::{FixtureSource, MrtClient, TransitSource};
use mrt_server::web::{AppState, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration");
    tracing::info!(timezone = %config.timezone, "Loaded configuration");

    match &config.fixture_dir {
        Some(dir) => {
            let source = FixtureSource::load(dir).expect("Failed to load fixture snapshot");
            tracing::warn!(dir = %dir.display(), "Serving a local snapshot, not the live feed");
            serve(&config, source).await;
        }
        None => {
            let client =
                MrtClient::new(config.upstream.clone()).expect("Failed to create MRT client");
            tracing::info!(
                url = %config.upstream.stations_url,
                timeout_secs = config.upstream.timeout_secs,
                "Using live MRT feed"
            );
            serve(&config, client).await;
        }
    }
}

async fn serve<S: TransitSource + 'static>(config: &AppConfig, source: S) {
    let state = AppState::new(StationService::new(source, config.timezone));
    let app = create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {addr}: {e}"));

    tracing::info!("MRT gateway listening on http://{addr}");
    tracing::info!("API Endpoints:");
    tracing::info!("  GET /health");
    tracing::info!("  GET /v1/api/stations?name=");
    tracing::info!("  GET /v1/api/stations/fare?from=&to=");
    tracing::info!("  GET /v1/api/stations/:id");
    tracing::info!("  GET /v1/api/stations/:id/next-train?destination=LB|HI");
    tracing::info!("  GET /v1/api/stations/:id/next-trains?destination=LB|HI");
    tracing::info!("  GET /v1/api/stations/:id/details");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
