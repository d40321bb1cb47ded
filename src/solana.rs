//! Module: Solana
//! But: Solana ed25519 keypairs, Base58 addresses and 64-byte keypair secrets.
//!
//! *Signed: kryon.kas*

use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

use crate::DerivationResult;
use crate::chain::Chain;
use crate::error::{KeyError, KeyResult};
use crate::hd::ExtendedKey;

pub fn encode(key: &ExtendedKey) -> KeyResult<DerivationResult> {
    Ok(from_signing_key(&SigningKey::from_bytes(key.secret())))
}

/// Accepts the Base58 64-byte `secret || public` keypair (Phantom / solana-keygen export).
pub fn import(private_key: &str) -> KeyResult<DerivationResult> {
    let decoded = Zeroizing::new(
        bs58::decode(private_key)
            .into_vec()
            .map_err(|e| KeyError::invalid_key(Chain::Solana, e.to_string()))?,
    );

    let keypair: &[u8; 64] = decoded.as_slice().try_into().map_err(|_| {
        KeyError::invalid_key(
            Chain::Solana,
            format!("expected 64 bytes, got {}", decoded.len()),
        )
    })?;

    // Rejects keypairs whose public half does not match the secret half.
    let signing_key = SigningKey::from_keypair_bytes(keypair)
        .map_err(|e| KeyError::invalid_key(Chain::Solana, e.to_string()))?;

    Ok(from_signing_key(&signing_key))
}

fn from_signing_key(signing_key: &SigningKey) -> DerivationResult {
    let public_key = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();
    let keypair = Zeroizing::new(signing_key.to_keypair_bytes());

    DerivationResult::new(
        public_key.clone(),
        public_key,
        bs58::encode(keypair.as_slice()).into_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // abandon x11 about, m/44'/501'/0'/0' (Phantom / Solflare default account)
    const ADDRESS: &str = "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk";
    const KEYPAIR: &str = "27npWoNE4HfmLeQo1TyWcW7NEA28qnsnDK7kcttDQEWrCWnro83HMJ97rMmpvYYZRwDAvG4KRuB7hTBacvwD7bgi";

    #[test]
    fn test_import_reference_keypair() {
        let keys = import(KEYPAIR).unwrap();
        assert_eq!(keys.address, ADDRESS);
        assert_eq!(keys.public_key, ADDRESS);
        assert_eq!(keys.private_key, KEYPAIR);
    }

    #[test]
    fn test_keypair_layout() {
        let raw = bs58::decode(KEYPAIR).into_vec().unwrap();
        assert_eq!(raw.len(), 64);
        assert_eq!(bs58::decode(ADDRESS).into_vec().unwrap(), raw[32..]);
    }

    #[test]
    fn test_import_rejects_mismatched_halves() {
        let mut raw = bs58::decode(KEYPAIR).into_vec().unwrap();
        raw[63] ^= 0x01;
        assert!(matches!(
            import(&bs58::encode(raw).into_string()),
            Err(KeyError::InvalidPrivateKey { chain: Chain::Solana, .. })
        ));
    }

    #[test]
    fn test_import_rejects_bad_input() {
        assert!(import(ADDRESS).is_err()); // only 32 bytes
        assert!(import("0OIl").is_err()); // not Base58
    }
}
