//! Module: EVM
//! But: Ethereum-style addresses (Keccak-256 over the uncompressed point, EIP-55 casing).
//!
//! *Signed: kryon.kas*

use alloy_primitives::Address;
use k256::PublicKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::DerivationResult;
use crate::chain::Chain;
use crate::error::{KeyError, KeyResult};
use crate::hd::{self, ExtendedKey};

// --- Encodage ---

pub fn encode(key: &ExtendedKey) -> KeyResult<DerivationResult> {
    from_secret(key.secret())
}

/// Accepts the 32-byte hex key, with or without `0x`.
pub fn import(private_key: &str) -> KeyResult<DerivationResult> {
    let secret = decode_hex_secret(Chain::Evm, private_key)?;
    from_secret(&secret)
}

fn from_secret(secret: &[u8]) -> KeyResult<DerivationResult> {
    let public_key = hd::secp256k1_secret(secret)?.public_key();

    Ok(DerivationResult::new(
        checksum_address(&address_bytes(&public_key)),
        format!("0x{}", hex::encode(public_key.to_encoded_point(true).as_bytes())),
        secret_hex("0x", secret)?,
    ))
}

/// Last 20 bytes of Keccak-256 over the 64-byte uncompressed point (0x04 prefix dropped).
pub fn address_bytes(public_key: &PublicKey) -> [u8; 20] {
    let encoded = public_key.to_encoded_point(false);
    let hash = Keccak256::digest(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// EIP-55 mixed-case rendering of a 20-byte address.
pub fn checksum_address(address: &[u8; 20]) -> String {
    Address::from_slice(address).to_checksum(None)
}

/// Address of a bare public key.
///
/// Takes a 64-byte raw point (`X || Y`, as found in ASN.1 exports) or a 33/65-byte
/// SEC1 encoding.
pub fn address_from_public_key(public_key: &[u8]) -> KeyResult<String> {
    let parsed = match public_key.len() {
        64 => {
            let mut sec1 = [0u8; 65];
            sec1[0] = 0x04;
            sec1[1..].copy_from_slice(public_key);
            PublicKey::from_sec1_bytes(&sec1)
        }
        _ => PublicKey::from_sec1_bytes(public_key),
    }
    .map_err(|_| KeyError::InvalidPublicKey("not a valid secp256k1 point".into()))?;

    Ok(checksum_address(&address_bytes(&parsed)))
}

// --- Helpers ---

/// Decodes a 32-byte hex secret, `0x` optional. Shared with Tron.
pub(crate) fn decode_hex_secret(chain: Chain, private_key: &str) -> KeyResult<Zeroizing<Vec<u8>>> {
    let digits = private_key.strip_prefix("0x").unwrap_or(private_key);
    let secret = Zeroizing::new(
        hex::decode(digits).map_err(|e| KeyError::invalid_key(chain, e.to_string()))?,
    );

    if secret.len() != 32 {
        return Err(KeyError::invalid_key(
            chain,
            format!("expected 32 bytes, got {}", secret.len()),
        ));
    }
    hd::secp256k1_secret(&secret).map_err(|_| KeyError::invalid_key(chain, "scalar out of range"))?;

    Ok(secret)
}

/// `prefix` followed by the lowercase hex of `secret`, in one exact allocation.
pub(crate) fn secret_hex(prefix: &str, secret: &[u8]) -> KeyResult<String> {
    let mut digits = Zeroizing::new(vec![0u8; secret.len() * 2]);
    hex::encode_to_slice(secret, &mut digits).map_err(KeyError::fault)?;
    let digits = std::str::from_utf8(&digits).map_err(KeyError::fault)?;

    let mut out = String::with_capacity(prefix.len() + digits.len());
    out.push_str(prefix);
    out.push_str(digits);
    Ok(out)
}
