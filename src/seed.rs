//! Module: Seed
//! But: BIP-39 mnemonic validation and seed computation.
//!
//! *Signed: kryon.kas*

use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use crate::error::{KeyError, KeyResult};

/// 64-byte BIP-39 seed, wiped on drop.
pub struct Seed(Zeroizing<[u8; 64]>);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

// --- Validation ---

/// Parses an English mnemonic and checks its checksum.
///
/// Any run of whitespace separates words and case is ignored. Every failure
/// collapses to [`KeyError::InvalidMnemonic`] so callers never see
/// chain-specific errors for a bad phrase.
pub fn parse_mnemonic(phrase: &str) -> KeyResult<Mnemonic> {
    let mut normalized = Zeroizing::new(phrase.split_whitespace().collect::<Vec<_>>().join(" "));
    // English wordlist is ASCII lower case.
    normalized.make_ascii_lowercase();

    Mnemonic::parse_in_normalized(Language::English, &normalized).map_err(|err| {
        tracing::debug!(%err, "mnemonic rejected");
        KeyError::InvalidMnemonic
    })
}

// --- Seed ---

/// Seed generation (no passphrase)
pub fn seed_from_mnemonic(mnemonic: &Mnemonic) -> Seed {
    Seed(Zeroizing::new(mnemonic.to_seed_normalized("")))
}
