use fuel_server::config::ServerConfig;
use fuel_server::stations::StationClient;
use fuel_server::web::{AppState, RAW_STATIONS_PATH, STATIONS_PATH, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;

    let stations = StationClient::new(config.upstream.clone())?;
    info!(
        upstream = stations.url(),
        timeout_secs = config.upstream.timeout_secs,
        "upstream configured"
    );

    let state = AppState::new(stations);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Fuel station proxy listening");
    info!("  GET  /health");
    info!("  GET  {STATIONS_PATH}?lat=&lon=&radiusKm=&maxResults=&includeBrands=&excludeBrands=");
    info!("  GET  {RAW_STATIONS_PATH}");

    axum::serve(listener, app).await?;
    Ok(())
}
