//! Module: Tron
//! But: Tron addresses, the EVM 20-byte hash behind a 0x41 prefix in Base58Check.
//!
//! *Signed: kryon.kas*

use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::DerivationResult;
use crate::chain::Chain;
use crate::error::KeyResult;
use crate::evm;
use crate::hd::{self, ExtendedKey};

/// Mainnet address version byte, renders as a leading `T`.
pub const ADDRESS_PREFIX: u8 = 0x41;

pub fn encode(key: &ExtendedKey) -> KeyResult<DerivationResult> {
    from_secret(key.secret())
}

/// Accepts the 32-byte hex key, with or without `0x`.
pub fn import(private_key: &str) -> KeyResult<DerivationResult> {
    let secret = evm::decode_hex_secret(Chain::Tron, private_key)?;
    from_secret(&secret)
}

fn from_secret(secret: &[u8]) -> KeyResult<DerivationResult> {
    let public_key = hd::secp256k1_secret(secret)?.public_key();

    let mut payload = [0u8; 21];
    payload[0] = ADDRESS_PREFIX;
    payload[1..].copy_from_slice(&evm::address_bytes(&public_key));

    Ok(DerivationResult::new(
        bs58::encode(payload).with_check().into_string(),
        hex::encode(public_key.to_encoded_point(false).as_bytes()),
        evm::secret_hex("", secret)?,
    ))
}
