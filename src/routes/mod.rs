// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs: Main router assembly and middleware
// - health.rs: Root status endpoint
// - keys.rs: Keypair generation and key exchange endpoints
// - encryption.rs: Mock encrypt/decrypt endpoints
// - comparison.rs: Static security comparison endpoint
//
// ============================================================================

mod comparison;
mod encryption;
mod health;
mod keys;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes
pub fn create_router() -> Router {
    // Every origin, method and header is allowed so the demo UI can be
    // served from anywhere. Not suitable for production.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/api/generate-keypair", post(keys::generate_keypair))
        .route("/api/exchange-key", post(keys::exchange_key))
        .route("/api/encrypt", post(encryption::encrypt_message))
        .route("/api/decrypt", post(encryption::decrypt_message))
        .route(
            "/api/security-comparison",
            get(comparison::security_comparison),
        )
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .into_inner(),
        )
}
