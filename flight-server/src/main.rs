use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use flight_server::amadeus::{AmadeusClient, AmadeusConfig};
use flight_server::cache::{CacheConfig, OfferCache};
use flight_server::reference::ReferenceData;
use flight_server::service::FlightService;
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("AMADEUS_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("AMADEUS_API_KEY not set, provider calls will fail");
        String::new()
    });
    let api_secret = std::env::var("AMADEUS_API_SECRET").unwrap_or_else(|_| {
        tracing::warn!("AMADEUS_API_SECRET not set, provider calls will fail");
        String::new()
    });

    let mut config = AmadeusConfig::new(api_key, api_secret);
    if let Ok(base_url) = std::env::var("AMADEUS_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let client = AmadeusClient::new(config).expect("Failed to create Amadeus client");

    let cache = OfferCache::new(&CacheConfig::default());
    let service = FlightService::new(Arc::new(client), cache, ReferenceData::bundled());

    let state = AppState::new(service);
    let app = create_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "flight search server listening");
    tracing::info!("  GET /health                         - Health check");
    tracing::info!("  GET /api/airports                   - Airport keyword search");
    tracing::info!("  GET /api/flights                    - Flight offer search");
    tracing::info!("  GET /api/flights/:offer_id/details  - Offer details");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
