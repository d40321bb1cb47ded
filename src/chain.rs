//! Module: Chain
//! But: Static registry of supported chains, their aliases and derivation paths.
//!
//! *Signed: kryon.kas*

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{KeyError, KeyResult};
use crate::hd::{self, Scheme};
use crate::seed::Seed;
use crate::{DerivationResult, bitcoin, evm, solana, stellar, sui, tron};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Evm,
    Stellar,
    Bitcoin,
    Sui,
    Solana,
    Tron,
}

struct Profile {
    name: &'static str,
    aliases: &'static [&'static str],
    path: &'static str,
    scheme: Scheme,
}

// --- Registre ---

// Indexed by `Chain as usize`. Never mutated.
static PROFILES: [Profile; 6] = [
    Profile {
        name: "evm",
        aliases: &["evm", "ethereum", "eth"],
        path: "m/44'/60'/0'/0/0",
        scheme: Scheme::Bip32,
    },
    Profile {
        name: "stellar",
        aliases: &["stellar", "xlm"],
        path: "m/44'/148'/0'",
        scheme: Scheme::Bip32,
    },
    Profile {
        name: "bitcoin",
        aliases: &["bitcoin", "btc"],
        // BIP-84 native SegWit
        path: "m/84'/0'/0'/0/0",
        scheme: Scheme::Bip32,
    },
    Profile {
        name: "sui",
        aliases: &["sui"],
        // BIP-54 purpose, secp256k1 flavour
        path: "m/54'/784'/0'/0/0",
        scheme: Scheme::Bip32,
    },
    Profile {
        name: "solana",
        aliases: &["solana", "sol"],
        path: "m/44'/501'/0'/0'",
        scheme: Scheme::Slip10,
    },
    Profile {
        name: "tron",
        aliases: &["tron", "trx"],
        // Tron's own coin type, so the key differs from the EVM one.
        path: "m/44'/195'/0'/0/0",
        scheme: Scheme::Bip32,
    },
];

impl Chain {
    /// All chains in canonical order.
    pub const ALL: [Chain; 6] = [
        Chain::Evm,
        Chain::Stellar,
        Chain::Bitcoin,
        Chain::Sui,
        Chain::Solana,
        Chain::Tron,
    ];

    fn profile(self) -> &'static Profile {
        &PROFILES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    pub fn aliases(self) -> &'static [&'static str] {
        self.profile().aliases
    }

    pub fn path(self) -> &'static str {
        self.profile().path
    }

    pub fn scheme(self) -> Scheme {
        self.profile().scheme
    }

    /// Canonical names joined for error messages: "evm, stellar, ...".
    pub fn supported_names() -> String {
        Chain::ALL.map(Chain::name).join(", ")
    }

    /// Resolves a case-insensitive name or alias.
    pub fn from_alias(alias: &str) -> Option<Chain> {
        let wanted = alias.trim().to_ascii_lowercase();
        Chain::ALL
            .into_iter()
            .find(|chain| chain.aliases().contains(&wanted.as_str()))
    }

    // --- Dérivation ---

    /// Walks this chain's path from `seed` and encodes the result.
    pub fn derive(self, seed: &Seed) -> KeyResult<DerivationResult> {
        tracing::debug!(chain = %self, path = self.path(), "deriving chain keys");
        let key = hd::derive_path(seed, self.path(), self.scheme())?;

        match self {
            Chain::Evm => evm::encode(&key),
            Chain::Stellar => stellar::encode(&key),
            Chain::Bitcoin => bitcoin::encode(&key),
            Chain::Sui => sui::encode(&key),
            Chain::Solana => solana::encode(&key),
            Chain::Tron => tron::encode(&key),
        }
    }

    /// Rebuilds the full triple from a private key in this chain's export format.
    pub fn import(self, private_key: &str) -> KeyResult<DerivationResult> {
        tracing::debug!(chain = %self, "importing private key");
        match self {
            Chain::Evm => evm::import(private_key),
            Chain::Stellar => stellar::import(private_key),
            Chain::Bitcoin => bitcoin::import(private_key),
            Chain::Sui => sui::import(private_key),
            Chain::Solana => solana::import(private_key),
            Chain::Tron => tron::import(private_key),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::from_alias(s).ok_or_else(|| KeyError::UnsupportedChain {
            chain: s.to_string(),
        })
    }
}
