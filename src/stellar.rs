//! Module: Stellar
//! But: Stellar ed25519 keypairs rendered as `G...` / `S...` strkeys.
//!
//! The BIP-32 scalar at m/44'/148'/0' is used as the raw ed25519 seed, with no
//! further ed25519 derivation on top of it.
//!
//! *Signed: kryon.kas*

use ed25519_dalek::SigningKey;
use stellar_strkey::ed25519::{PrivateKey, PublicKey};

use crate::DerivationResult;
use crate::chain::Chain;
use crate::error::{KeyError, KeyResult};
use crate::hd::ExtendedKey;

pub fn encode(key: &ExtendedKey) -> KeyResult<DerivationResult> {
    Ok(from_seed(key.secret()))
}

/// Accepts an `S...` secret seed strkey.
pub fn import(private_key: &str) -> KeyResult<DerivationResult> {
    let seed = PrivateKey::from_string(private_key)
        .map_err(|_| KeyError::invalid_key(Chain::Stellar, "not an ed25519 secret seed strkey"))?;
    Ok(from_seed(&seed.0))
}

fn from_seed(seed: &[u8; 32]) -> DerivationResult {
    let signing_key = SigningKey::from_bytes(seed);
    let account = PublicKey(signing_key.verifying_key().to_bytes()).to_string();

    DerivationResult::new(account.clone(), account, PrivateKey(*seed).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SEP-0005 test 1, account 0
    const SEP5_SECRET: &str = "SBGWSG6BTNCKCOB3DIFBGCVMUPQFYPA2G4O34RMTB343OYPXU5DJDVMN";
    const SEP5_ACCOUNT: &str = "GDRXE2BQUC3AZNPVFSCEZ76NJ3WWL25FYFK6RGZGIEKWE4SOOHSUJUJ6";

    #[test]
    fn test_import_sep5_vector() {
        let keys = import(SEP5_SECRET).unwrap();
        assert_eq!(keys.address, SEP5_ACCOUNT);
        assert_eq!(keys.public_key, SEP5_ACCOUNT);
        assert_eq!(keys.private_key, SEP5_SECRET);
    }

    #[test]
    fn test_strkey_prefixes() {
        let keys = from_seed(&[7u8; 32]);
        assert!(keys.address.starts_with('G'));
        assert!(keys.private_key.starts_with('S'));
        assert_eq!(keys.address.len(), 56);
        assert_eq!(keys.private_key.len(), 56);
    }

    #[test]
    fn test_import_rejects_bad_input() {
        // A public key is not a secret seed.
        assert!(matches!(
            import(SEP5_ACCOUNT),
            Err(KeyError::InvalidPrivateKey { chain: Chain::Stellar, .. })
        ));
        // Corrupted checksum
        assert!(import("SBGWSG6BTNCKCOB3DIFBGCVMUPQFYPA2G4O34RMTB343OYPXU5DJDVMA").is_err());
        assert!(import("").is_err());
    }
}
