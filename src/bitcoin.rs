//! Module: Bitcoin
//! But: Native SegWit (P2WPKH) addresses and WIF private keys.
//!
//! *Signed: kryon.kas*

use bech32::{hrp, segwit};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::DerivationResult;
use crate::chain::Chain;
use crate::error::{KeyError, KeyResult};
use crate::hd::{self, ExtendedKey};

const WIF_MAINNET: u8 = 0x80;
const WIF_COMPRESSED: u8 = 0x01;

pub fn encode(key: &ExtendedKey) -> KeyResult<DerivationResult> {
    from_secret(key.secret())
}

/// Accepts a mainnet compressed WIF (`K...` / `L...`).
pub fn import(private_key: &str) -> KeyResult<DerivationResult> {
    let payload = Zeroizing::new(
        bs58::decode(private_key)
            .with_check(None)
            .into_vec()
            .map_err(|e| KeyError::invalid_key(Chain::Bitcoin, e.to_string()))?,
    );

    match payload.as_slice() {
        [WIF_MAINNET, secret @ .., WIF_COMPRESSED] if secret.len() == 32 => {
            hd::secp256k1_secret(secret)
                .map_err(|_| KeyError::invalid_key(Chain::Bitcoin, "scalar out of range"))?;
            from_secret(secret)
        }
        _ => Err(KeyError::invalid_key(
            Chain::Bitcoin,
            "expected a mainnet compressed WIF",
        )),
    }
}

fn from_secret(secret: &[u8]) -> KeyResult<DerivationResult> {
    let public_key = hd::secp256k1_secret(secret)?.public_key();
    let compressed = public_key.to_encoded_point(true);

    let address = segwit::encode_v0(hrp::BC, &hash160(compressed.as_bytes()))
        .map_err(KeyError::fault)?;

    Ok(DerivationResult::new(
        address,
        hex::encode(compressed.as_bytes()),
        wif(secret),
    ))
}

/// RIPEMD-160(SHA-256(data))
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// Mainnet compressed Wallet Import Format.
fn wif(secret: &[u8]) -> String {
    let mut payload = Zeroizing::new(Vec::with_capacity(34));
    payload.push(WIF_MAINNET);
    payload.extend_from_slice(secret);
    payload.push(WIF_COMPRESSED);

    bs58::encode(payload.as_slice()).with_check().into_string()
}
