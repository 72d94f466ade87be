// ============================================================================
// Security Comparison Route
// ============================================================================
//
// Endpoints:
// - GET /api/security-comparison - Static table of illustrative attributes
//
// The numbers are sample values for UI display, not an authoritative
// security assessment.
//
// ============================================================================

use axum::{Json, response::IntoResponse};

use crate::types::{ComparisonProfile, SecurityComparisonResponse};

const KYBER_COMPARISON: ComparisonProfile = ComparisonProfile {
    security_level: "Level 3 (AES-192 equivalent)",
    quantum_resistance: "High",
    key_size: 1184,
    ciphertext_size: 1088,
    performance_factor: 5.2,
    nist_status: "Standardized",
};

const RSA_COMPARISON: ComparisonProfile = ComparisonProfile {
    security_level: "128-bit",
    quantum_resistance: "None",
    key_size: 256,
    ciphertext_size: 256,
    performance_factor: 1.0,
    nist_status: "Legacy",
};

/// GET /api/security-comparison
pub async fn security_comparison() -> impl IntoResponse {
    Json(SecurityComparisonResponse {
        kyber: KYBER_COMPARISON,
        rsa: RSA_COMPARISON,
    })
}
