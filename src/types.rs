//! Transient request/response value objects. Nothing here outlives a
//! single request/response cycle.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MESSAGE_SIZE;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct KeyExchangeRequest {
    pub algorithm: String,
    pub public_key: Option<String>,
    #[serde(default = "default_message_size")]
    pub message_size: u64,
}

fn default_message_size() -> u64 {
    DEFAULT_MESSAGE_SIZE
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncryptionRequest {
    pub algorithm: String,
    pub message: String,
    pub key: String,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Keypair {
    pub public_key: String,
    pub private_key: String,
}

#[derive(Debug, Serialize)]
pub struct KeypairMetrics {
    /// Wall-clock seconds spent in the (simulated) key generation
    pub generation_time: f64,
    /// Public key size in bytes
    pub key_size: usize,
}

#[derive(Debug, Serialize)]
pub struct GenerateKeypairResponse {
    pub algorithm: String,
    pub keypair: Keypair,
    pub metrics: KeypairMetrics,
}

#[derive(Debug, Serialize)]
pub struct ExchangeMetrics {
    pub exchange_time: f64,
    /// Ciphertext size in bytes
    pub ciphertext_size: usize,
}

#[derive(Debug, Serialize)]
pub struct ExchangeKeyResponse {
    pub algorithm: String,
    pub shared_key: String,
    pub ciphertext: String,
    pub metrics: ExchangeMetrics,
}

#[derive(Debug, Serialize)]
pub struct EncryptMetrics {
    pub encryption_time: f64,
    pub message_size: usize,
    pub encrypted_size: usize,
}

#[derive(Debug, Serialize)]
pub struct EncryptResponse {
    pub algorithm: String,
    pub encrypted_message: String,
    pub metrics: EncryptMetrics,
}

#[derive(Debug, Serialize)]
pub struct DecryptMetrics {
    pub decryption_time: f64,
}

#[derive(Debug, Serialize)]
pub struct DecryptResponse {
    pub algorithm: String,
    pub decrypted_message: String,
    pub metrics: DecryptMetrics,
}

/// One row of the static security-comparison table. The values are
/// illustrative, not authoritative.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonProfile {
    pub security_level: &'static str,
    pub quantum_resistance: &'static str,
    pub key_size: usize,
    pub ciphertext_size: usize,
    pub performance_factor: f64,
    pub nist_status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SecurityComparisonResponse {
    pub kyber: ComparisonProfile,
    pub rsa: ComparisonProfile,
}
