// ============================================================================
// Key Routes
// ============================================================================
//
// Endpoints:
// - POST /api/generate-keypair - Simulated keypair generation
// - POST /api/exchange-key - Simulated key encapsulation / exchange
//
// Both branch on the algorithm profile and sleep for the profile's
// configured delay so the UI can display relative cost. The key material
// is placeholder hex with realistic byte lengths.
//
// ============================================================================

use std::time::Instant;

use axum::{Json, response::IntoResponse};
use tokio::time::{Duration, sleep};

use crate::error::AppError;
use crate::mock::random_hex;
use crate::types::{
    ExchangeKeyResponse, ExchangeMetrics, GenerateKeypairResponse, KeyExchangeRequest, Keypair,
    KeypairMetrics,
};
use crate::Algorithm;

/// POST /api/generate-keypair
/// Generates a placeholder keypair sized like the real scheme
pub async fn generate_keypair(
    Json(request): Json<KeyExchangeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let algorithm: Algorithm = request.algorithm.parse()?;
    let profile = algorithm.profile();

    let start = Instant::now();
    sleep(Duration::from_millis(profile.keygen_delay_ms)).await;

    let keypair = Keypair {
        public_key: random_hex(profile.public_key_size),
        private_key: random_hex(profile.private_key_size),
    };
    let generation_time = start.elapsed().as_secs_f64();

    tracing::info!(
        algorithm = %algorithm,
        key_size = profile.public_key_size,
        generation_time = generation_time,
        "Generated mock keypair"
    );

    Ok(Json(GenerateKeypairResponse {
        algorithm: algorithm.to_string(),
        keypair,
        metrics: KeypairMetrics {
            generation_time,
            key_size: algorithm.key_size(),
        },
    }))
}

/// POST /api/exchange-key
/// Simulates key encapsulation against the supplied public key
pub async fn exchange_key(
    Json(request): Json<KeyExchangeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.public_key.as_deref().unwrap_or("").is_empty() {
        return Err(AppError::validation("Public key is required"));
    }

    let algorithm: Algorithm = request.algorithm.parse()?;
    let profile = algorithm.profile();

    let start = Instant::now();
    sleep(Duration::from_millis(profile.exchange_delay_ms)).await;

    let shared_key = random_hex(profile.shared_key_size);
    let ciphertext = random_hex(profile.ciphertext_size);
    let exchange_time = start.elapsed().as_secs_f64();

    tracing::info!(
        algorithm = %algorithm,
        ciphertext_size = profile.ciphertext_size,
        exchange_time = exchange_time,
        "Completed mock key exchange"
    );

    Ok(Json(ExchangeKeyResponse {
        algorithm: algorithm.to_string(),
        shared_key,
        ciphertext,
        metrics: ExchangeMetrics {
            exchange_time,
            ciphertext_size: profile.ciphertext_size,
        },
    }))
}
