use std::net::SocketAddr;
use std::sync::Arc;

use hotelier_api::{app, AppState};
use hotelier_core::manager::BookingManager;
use hotelier_store::{app_config::Config, seed, InMemoryRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotelier_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Hotelier API on port {}", config.server.port);

    let rooms = Arc::new(InMemoryRepository::new());
    let bookings = Arc::new(InMemoryRepository::new());

    if config.seed.enabled {
        seed::seed(&rooms, &bookings, &config.seed)
            .await
            .expect("Failed to seed demo data");
    }

    let manager = Arc::new(BookingManager::new(rooms.clone(), bookings.clone()));

    let app_state = AppState {
        manager,
        rooms,
        bookings,
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
