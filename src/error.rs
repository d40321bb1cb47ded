//! Module: Error
//! But: Error taxonomy shared by the dispatcher and the chain encoders.
//!
//! *Signed: kryon.kas*

use thiserror::Error;

use crate::chain::Chain;

pub type KeyResult<T> = std::result::Result<T, KeyError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Checksum or wordlist validation failed. Same message for every chain.
    #[error("Invalid mnemonic phrase")]
    InvalidMnemonic,

    #[error("Unsupported chain: {chain}. Supported chains: {}", Chain::supported_names())]
    UnsupportedChain { chain: String },

    /// Unexpected failure inside derivation or encoding.
    #[error("Key encoding fault: {0}")]
    EncodingFault(String),

    #[error("Invalid {chain} private key: {reason}")]
    InvalidPrivateKey { chain: Chain, reason: String },

    /// Caller-supplied public key that does not decode to a curve point.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),
}

impl KeyError {
    pub(crate) fn fault(err: impl std::fmt::Display) -> Self {
        KeyError::EncodingFault(err.to_string())
    }

    pub(crate) fn invalid_key(chain: Chain, reason: impl Into<String>) -> Self {
        KeyError::InvalidPrivateKey {
            chain,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(KeyError::InvalidMnemonic.to_string(), "Invalid mnemonic phrase");

        let err = KeyError::UnsupportedChain { chain: "doge".into() };
        assert_eq!(
            err.to_string(),
            "Unsupported chain: doge. Supported chains: evm, stellar, bitcoin, sui, solana, tron"
        );

        let err = KeyError::invalid_key(Chain::Bitcoin, "bad checksum");
        assert_eq!(err.to_string(), "Invalid bitcoin private key: bad checksum");

        let err = KeyError::InvalidPublicKey("not a valid secp256k1 point".into());
        assert_eq!(err.to_string(), "Invalid public key: not a valid secp256k1 point");
    }
}
