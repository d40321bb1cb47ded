//! Module: Sui
//! But: Sui secp256k1 keys, Base64 flagged secrets and BLAKE2b-256 addresses.
//!
//! *Signed: kryon.kas*

use base64::{Engine as _, engine::general_purpose::STANDARD};
use blake2::{Blake2b, Digest, digest::consts::U32};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use zeroize::Zeroizing;

use crate::DerivationResult;
use crate::chain::Chain;
use crate::error::{KeyError, KeyResult};
use crate::hd::{self, ExtendedKey};

/// Signature scheme flag for secp256k1 keys.
pub const SECP256K1_FLAG: u8 = 0x01;

type Blake2b256 = Blake2b<U32>;

pub fn encode(key: &ExtendedKey) -> KeyResult<DerivationResult> {
    from_secret(key.secret())
}

/// Accepts the Base64 `flag || secret` form the Sui CLI keystore uses.
pub fn import(private_key: &str) -> KeyResult<DerivationResult> {
    let decoded = Zeroizing::new(
        STANDARD
            .decode(private_key)
            .map_err(|e| KeyError::invalid_key(Chain::Sui, e.to_string()))?,
    );

    match decoded.split_first() {
        Some((&SECP256K1_FLAG, secret)) if secret.len() == 32 => {
            hd::secp256k1_secret(secret)
                .map_err(|_| KeyError::invalid_key(Chain::Sui, "scalar out of range"))?;
            from_secret(secret)
        }
        Some((&flag, _)) if flag != SECP256K1_FLAG => Err(KeyError::invalid_key(
            Chain::Sui,
            format!("unsupported scheme flag {flag:#04x}"),
        )),
        _ => Err(KeyError::invalid_key(
            Chain::Sui,
            "expected 33 bytes (flag and 32-byte secret)",
        )),
    }
}

fn from_secret(secret: &[u8]) -> KeyResult<DerivationResult> {
    let public_key = hd::secp256k1_secret(secret)?.public_key();
    let compressed = public_key.to_encoded_point(true);

    let mut flagged = Zeroizing::new(Vec::with_capacity(1 + secret.len()));
    flagged.push(SECP256K1_FLAG);
    flagged.extend_from_slice(secret);

    Ok(DerivationResult::new(
        address(compressed.as_bytes()),
        STANDARD.encode(compressed.as_bytes()),
        STANDARD.encode(flagged.as_slice()),
    ))
}

/// `0x` + hex(BLAKE2b-256(flag || compressed public key))
pub fn address(compressed_public_key: &[u8]) -> String {
    let mut hasher = Blake2b256::new();
    hasher.update([SECP256K1_FLAG]);
    hasher.update(compressed_public_key);
    format!("0x{}", hex::encode(hasher.finalize()))
}
