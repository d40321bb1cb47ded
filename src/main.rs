//! Module: Main
//! But: Command-line entry point for multi-chain key derivation.
//!
//! *Signed: kryon.kas*

use std::collections::BTreeMap;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chain_keys::{Chain, DerivationResult};
use clap::Parser;
use tracing_subscriber::EnvFilter;

// --- Configuration ---

/// Derive a chain's address, public key and private key from a BIP-39 mnemonic.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// BIP-39 mnemonic phrase (quote it).
    mnemonic: String,

    /// Target chain: evm (eth, ethereum), stellar (xlm), bitcoin (btc),
    /// sui, solana (sol), tron (trx), or "all".
    chain: String,

    /// Print JSON instead of `key value` lines.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log verbosity on stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// --- Utilitaires ---

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(keys: &DerivationResult) {
    println!("address {}", keys.address);
    println!("publicKey {}", keys.public_key);
    println!("privateKey {}", keys.private_key);
}

// --- Exécution ---

fn run(args: &Args) -> Result<()> {
    if args.chain.trim().eq_ignore_ascii_case("all") {
        let results = chain_keys::derive_all(&args.mnemonic)?;

        if args.json {
            let by_chain: BTreeMap<Chain, &DerivationResult> =
                results.iter().map(|(chain, keys)| (*chain, keys)).collect();
            let json = serde_json::to_string_pretty(&by_chain).context("Failed to render JSON")?;
            println!("{json}");
        } else {
            for (i, (chain, keys)) in results.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("[{chain}]");
                print_lines(keys);
            }
        }
        return Ok(());
    }

    let keys = chain_keys::derive_keys(&args.mnemonic, &args.chain)?;

    if args.json {
        let json = serde_json::to_string_pretty(&keys).context("Failed to render JSON")?;
        println!("{json}");
    } else {
        print_lines(&keys);
    }
    Ok(())
}

fn main() -> ExitCode {
    // Missing arguments: clap prints usage and exits non-zero.
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
