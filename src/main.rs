use axum::http::{header, Method};
use books_api::config::Config;
use books_api::database::Database;
use books_api::services::image_storage::ImageStorage;
use books_api::{routes, AppStateInner};
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_thread_names(true),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting application...");

    let config = Config::from_env().expect("Failed to load env");

    let port = config.port;

    tracing::info!("Connecting to database...");
    let db = Database::new(&config.database_url)
        .await
        .expect("Failed to connect to database");

    if let Err(e) = db.test_connection().await {
        tracing::error!("Database test failed: {}", e);
        tracing::warn!("Please check your DATABASE_URL and ensure the database is reachable");
    } else {
        tracing::info!("Database connection successful");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    std::fs::create_dir_all(&config.upload_dir).expect("Failed to create upload directory");

    let storage = ImageStorage::new(&config.upload_dir);
    let state = Arc::new(AppStateInner {
        db,
        config,
        storage,
    });

    let app = routes::create_routes(state, cors);

    tracing::info!("Binding to port {}...", port);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server running on port {}", port);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
