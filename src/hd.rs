//! Module: HD
//! But: Hierarchical key derivation (BIP-32 over secp256k1, SLIP-0010 over ed25519).
//!
//! *Signed: kryon.kas*

use std::str::FromStr;

use bip32::{ChildNumber, DerivationPath, XPrv};
use hmac::{Hmac, Mac};
use k256::{FieldBytes, SecretKey};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::error::{KeyError, KeyResult};
use crate::seed::Seed;

type HmacSha512 = Hmac<Sha512>;

const SLIP10_ED25519_KEY: &[u8] = b"ed25519 seed";

/// Derivation profile applied to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// BIP-32 over secp256k1, hardened and normal segments.
    Bip32,
    /// SLIP-0010 over ed25519, hardened segments only.
    Slip10,
}

/// Private scalar and chain code at the end of a path.
pub struct ExtendedKey {
    secret: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl ExtendedKey {
    pub fn secret(&self) -> &[u8; 32] {
        &self.secret
    }
}

impl std::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("secret", &"[REDACTED]")
            .field("chain_code", &hex::encode(*self.chain_code))
            .finish()
    }
}

// --- Dérivation ---

/// Walks `path` from `seed` left to right.
pub fn derive_path(seed: &Seed, path: &str, scheme: Scheme) -> KeyResult<ExtendedKey> {
    let derivation_path = DerivationPath::from_str(path)
        .map_err(|e| KeyError::fault(format!("invalid path '{path}': {e}")))?;

    match scheme {
        Scheme::Bip32 => derive_bip32(seed.as_bytes(), derivation_path),
        Scheme::Slip10 => derive_slip10(seed.as_bytes(), derivation_path),
    }
}

fn derive_bip32(seed: &[u8], path: DerivationPath) -> KeyResult<ExtendedKey> {
    // Master extended private key
    let mut xprv = XPrv::new(seed).map_err(KeyError::fault)?;

    for child in path {
        xprv = xprv.derive_child(child).map_err(KeyError::fault)?;
    }

    Ok(ExtendedKey {
        secret: Zeroizing::new(xprv.private_key().to_bytes().into()),
        chain_code: Zeroizing::new(xprv.attrs().chain_code),
    })
}

fn derive_slip10(seed: &[u8], path: DerivationPath) -> KeyResult<ExtendedKey> {
    // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    let mut key = hmac_split(SLIP10_ED25519_KEY, &[seed])?;

    for child in path {
        if !child.is_hardened() {
            return Err(KeyError::fault(format!(
                "ed25519 derivation requires hardened segments, got {}",
                child.index()
            )));
        }

        // Data = 0x00 || parent_key || ser32(index | 2^31)
        let index = (child.index() | ChildNumber::HARDENED_FLAG).to_be_bytes();
        key = hmac_split(&key.chain_code[..], &[&[0x00], &key.secret[..], &index])?;
    }

    Ok(key)
}

/// HMAC-SHA512 split into (IL, IR).
fn hmac_split(hmac_key: &[u8], parts: &[&[u8]]) -> KeyResult<ExtendedKey> {
    let mut mac = HmacSha512::new_from_slice(hmac_key).map_err(KeyError::fault)?;
    for part in parts {
        mac.update(part);
    }
    let mut output = Zeroizing::new([0u8; 64]);
    output.copy_from_slice(&mac.finalize().into_bytes());

    let mut secret = Zeroizing::new([0u8; 32]);
    let mut chain_code = Zeroizing::new([0u8; 32]);
    secret.copy_from_slice(&output[..32]);
    chain_code.copy_from_slice(&output[32..]);

    Ok(ExtendedKey { secret, chain_code })
}

// --- Helpers ---

/// Parses a 32-byte secp256k1 scalar, rejecting zero and out-of-range values.
pub(crate) fn secp256k1_secret(bytes: &[u8]) -> KeyResult<SecretKey> {
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|_| KeyError::fault(format!("expected 32-byte secret, got {}", bytes.len())))?;
    SecretKey::from_bytes(&FieldBytes::from(bytes))
        .map_err(|_| KeyError::fault("secret is not a valid secp256k1 scalar"))
}
