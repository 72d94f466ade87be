use std::fmt;
use std::str::FromStr;

use crate::config::{
    KYBER_EXCHANGE_DELAY_MS, KYBER_KEYGEN_DELAY_MS, RSA_EXCHANGE_DELAY_MS, RSA_KEYGEN_DELAY_MS,
};
use crate::error::AppError;

/// Supported algorithm profiles
///
/// A closed set: anything outside it is rejected with a validation error
/// before any handler logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Kyber,
    Rsa,
}

/// Per-algorithm size and timing table. All sizes are in bytes and match
/// the real schemes (Kyber-768, RSA-2048) even though the generated
/// material is placeholder data.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmProfile {
    pub public_key_size: usize,
    pub private_key_size: usize,
    pub shared_key_size: usize,
    pub ciphertext_size: usize,
    pub keygen_delay_ms: u64,
    pub exchange_delay_ms: u64,
}

const KYBER_PROFILE: AlgorithmProfile = AlgorithmProfile {
    public_key_size: 1184, // Kyber-768 public key
    private_key_size: 592,
    shared_key_size: 32, // 256-bit shared key
    ciphertext_size: 1088, // Kyber-768 ciphertext
    keygen_delay_ms: KYBER_KEYGEN_DELAY_MS,
    exchange_delay_ms: KYBER_EXCHANGE_DELAY_MS,
};

const RSA_PROFILE: AlgorithmProfile = AlgorithmProfile {
    public_key_size: 256, // RSA-2048 modulus
    private_key_size: 256,
    shared_key_size: 32,
    ciphertext_size: 256,
    keygen_delay_ms: RSA_KEYGEN_DELAY_MS,
    exchange_delay_ms: RSA_EXCHANGE_DELAY_MS,
};

impl Algorithm {
    pub fn profile(self) -> &'static AlgorithmProfile {
        match self {
            Algorithm::Kyber => &KYBER_PROFILE,
            Algorithm::Rsa => &RSA_PROFILE,
        }
    }

    /// Reported `key_size` metric: the public key length in bytes.
    pub fn key_size(self) -> usize {
        self.profile().public_key_size
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Kyber => "kyber",
            Algorithm::Rsa => "rsa",
        }
    }
}

impl FromStr for Algorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kyber" => Ok(Algorithm::Kyber),
            "rsa" => Ok(Algorithm::Rsa),
            other => {
                tracing::debug!(algorithm = %other, "Rejected unsupported algorithm");
                Err(AppError::validation("Unsupported algorithm"))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_algorithms() {
        assert_eq!("kyber".parse::<Algorithm>().unwrap(), Algorithm::Kyber);
        assert_eq!("rsa".parse::<Algorithm>().unwrap(), Algorithm::Rsa);
    }

    #[test]
    fn rejects_unknown_algorithms() {
        assert!("ecdsa".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
        assert!("Kyber".parse::<Algorithm>().is_err());
    }

    #[test]
    fn profile_sizes_match_real_schemes() {
        let kyber = Algorithm::Kyber.profile();
        assert_eq!(kyber.public_key_size, 1184);
        assert_eq!(kyber.private_key_size, 592);
        assert_eq!(kyber.ciphertext_size, 1088);

        let rsa = Algorithm::Rsa.profile();
        assert_eq!(rsa.public_key_size, 256);
        assert_eq!(rsa.private_key_size, 256);
        assert_eq!(rsa.ciphertext_size, 256);
    }
}
