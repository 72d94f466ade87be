// ============================================================================
// Root Status Route
// ============================================================================
//
// Endpoints:
// - GET / - Static confirmation that the API is up
//
// ============================================================================

use axum::{Json, response::IntoResponse};
use serde_json::json;

/// GET /
/// Static health confirmation payload
pub async fn root() -> impl IntoResponse {
    Json(json!({"message": "Quantum-Safe Vault API is running"}))
}
