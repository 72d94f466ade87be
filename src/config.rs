use anyhow::Result;

// ============================================================================
// Configuration Constants
// ============================================================================

// Default port value (the demo UI expects the backend here)
const DEFAULT_PORT: u16 = 8000;

// Simulated operation delays (in milliseconds)
// ============================================================================
// These stand in for real algorithmic cost so the UI can show relative
// performance. When genuine implementations are integrated, replace the
// sleeps with actual key generation / encapsulation timing.
// ============================================================================
pub const KYBER_KEYGEN_DELAY_MS: u64 = 100;
pub const RSA_KEYGEN_DELAY_MS: u64 = 500;
pub const KYBER_EXCHANGE_DELAY_MS: u64 = 50;
pub const RSA_EXCHANGE_DELAY_MS: u64 = 300;

// Default message size accepted on key-exchange requests. The mock never
// reads it, but the field is part of the request shape.
pub const DEFAULT_MESSAGE_SIZE: u64 = 1024;

// ============================================================================
// Configuration Structure
// ============================================================================

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP listener binds on (all interfaces)
    pub port: u16,
    /// Log filter passed to tracing-subscriber
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value '{}': {}", value, e))?,
            Err(_) => DEFAULT_PORT,
        };

        let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config { port, rust_log })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kyber_delays_are_shorter_than_rsa() {
        assert!(KYBER_KEYGEN_DELAY_MS < RSA_KEYGEN_DELAY_MS);
        assert!(KYBER_EXCHANGE_DELAY_MS < RSA_EXCHANGE_DELAY_MS);
    }
}
