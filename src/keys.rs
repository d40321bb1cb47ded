//! Module: Keys
//! But: Deterministic multi-chain key derivation from BIP-39 mnemonics.
//!
//! A mnemonic is validated once, turned into a 64-byte seed, walked down the
//! chain's fixed derivation path and finally encoded into the chain's own
//! `{address, publicKey, privateKey}` representation.
//!
//! | Chain   | Path               | Scheme    |
//! |---------|--------------------|-----------|
//! | evm     | m/44'/60'/0'/0/0   | BIP-32    |
//! | stellar | m/44'/148'/0'      | BIP-32    |
//! | bitcoin | m/84'/0'/0'/0/0    | BIP-32    |
//! | sui     | m/54'/784'/0'/0/0  | BIP-32    |
//! | solana  | m/44'/501'/0'/0'   | SLIP-0010 |
//! | tron    | m/44'/195'/0'/0/0  | BIP-32    |
//!
//! *Signed: kryon.kas*

pub mod bitcoin;
pub mod chain;
pub mod error;
pub mod evm;
pub mod hd;
pub mod seed;
pub mod solana;
pub mod stellar;
pub mod sui;
pub mod tron;

use rayon::prelude::*;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use chain::Chain;
pub use error::{KeyError, KeyResult};
pub use hd::{ExtendedKey, Scheme};
pub use seed::Seed;

// --- Résultat ---

/// Keys for one chain, each field in that chain's canonical encoding.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct DerivationResult {
    pub address: String,
    pub public_key: String,
    pub private_key: String,
}

impl DerivationResult {
    pub(crate) fn new(address: String, public_key: String, private_key: String) -> Self {
        Self {
            address,
            public_key,
            private_key,
        }
    }
}

// Never print the private key.
impl std::fmt::Debug for DerivationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivationResult")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

// --- Dispatch ---

/// Derives the keys of `chain` from `mnemonic`.
///
/// The mnemonic is checked before the chain name is looked at, so a bad phrase
/// fails with [`KeyError::InvalidMnemonic`] whatever the chain.
pub fn derive_keys(mnemonic: &str, chain: &str) -> KeyResult<DerivationResult> {
    let mnemonic = seed::parse_mnemonic(mnemonic)?;
    let chain: Chain = chain.parse()?;

    let seed = seed::seed_from_mnemonic(&mnemonic);
    chain.derive(&seed)
}

/// Derives every supported chain from one seed, in [`Chain::ALL`] order.
pub fn derive_all(mnemonic: &str) -> KeyResult<Vec<(Chain, DerivationResult)>> {
    let mnemonic = seed::parse_mnemonic(mnemonic)?;
    let seed = seed::seed_from_mnemonic(&mnemonic);

    Chain::ALL
        .par_iter()
        .map(|&chain| chain.derive(&seed).map(|result| (chain, result)))
        .collect()
}

/// Rebuilds the keys of `chain` from a private key in that chain's export format.
pub fn import_private_key(private_key: &str, chain: &str) -> KeyResult<DerivationResult> {
    let chain: Chain = chain.parse()?;
    chain.import(private_key.trim())
}
