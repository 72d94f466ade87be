// ============================================================================
// Encryption Routes
// ============================================================================
//
// Endpoints:
// - POST /api/encrypt - Wrap the message in a fixed marker
// - POST /api/decrypt - Strip the marker, or report the failure sentinel
//
// No real transformation happens; the algorithm and key fields are
// accepted but never influence the result. Malformed decrypt input is a
// normal response carrying a sentinel string, not an HTTP error.
//
// ============================================================================

use std::time::Instant;

use axum::{Json, response::IntoResponse};

use crate::error::AppError;
use crate::mock::{unwrap_message, wrap_message, DECRYPTION_FAILED};
use crate::types::{
    DecryptMetrics, DecryptResponse, EncryptMetrics, EncryptResponse, EncryptionRequest,
};

/// POST /api/encrypt
pub async fn encrypt_message(
    Json(request): Json<EncryptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let start = Instant::now();
    let encrypted_message = wrap_message(&request.message);
    let encryption_time = start.elapsed().as_secs_f64();

    tracing::debug!(
        algorithm = %request.algorithm,
        message_size = request.message.len(),
        "Mock-encrypted message"
    );

    Ok(Json(EncryptResponse {
        algorithm: request.algorithm,
        metrics: EncryptMetrics {
            encryption_time,
            message_size: request.message.len(),
            encrypted_size: encrypted_message.len(),
        },
        encrypted_message,
    }))
}

/// POST /api/decrypt
pub async fn decrypt_message(
    Json(request): Json<EncryptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let start = Instant::now();
    let decrypted_message = match unwrap_message(&request.message) {
        Some(plaintext) => plaintext.to_string(),
        None => {
            tracing::debug!(
                algorithm = %request.algorithm,
                "Decrypt input did not match the wrapper format"
            );
            DECRYPTION_FAILED.to_string()
        }
    };
    let decryption_time = start.elapsed().as_secs_f64();

    Ok(Json(DecryptResponse {
        algorithm: request.algorithm,
        decrypted_message,
        metrics: DecryptMetrics { decryption_time },
    }))
}
