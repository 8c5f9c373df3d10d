//! Photography Studio Backend
//!
//! Serves the studio website's page view models and collection data from a
//! document store, and accepts booking requests.

mod access;
mod api;
mod config;
mod errors;
mod models;
mod store;
mod views;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use access::DataAccess;
use config::Config;
use errors::AppError;
use store::{DocumentStore, SqliteDocumentStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub data: DataAccess,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Studio Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize document store
    let pool = store::init_database(&config.db_path).await?;
    let store: Arc<dyn DocumentStore> = Arc::new(SqliteDocumentStore::new(pool));

    if let Some(seed_path) = &config.seed_path {
        tracing::info!("Seeding empty collections from {:?}", seed_path);
        let inserted = store::seed_from_file(store.as_ref(), seed_path).await?;
        tracing::info!("Seed inserted {} documents", inserted);
    }

    // Create application state
    let state = AppState {
        data: DataAccess::new(store),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The site frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Collections
        .route("/gallery", get(api::list_gallery))
        .route("/gallery/latest", get(api::latest_gallery))
        .route("/hero", get(api::list_hero_images))
        .route("/services", get(api::list_services))
        // Bookings
        .route("/bookings", post(api::create_booking))
        // Pages
        .route("/pages/home", get(api::home_page))
        .route("/pages/services", get(api::services_page))
        .route("/pages/gallery", get(api::gallery_page))
        .route(
            "/pages/contact",
            get(api::contact_page).post(api::submit_contact_form),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
