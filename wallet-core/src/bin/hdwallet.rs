//! hdwallet - create or restore an EVM address from a BIP-39 mnemonic.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hdwallet_core::logging::{init_logging, LogFormat};
use hdwallet_core::{create_address, restore_address, AddressBundle, Language, OsRandom, WalletConfig, WordlistRegistry};

#[derive(Parser)]
#[command(name = "hdwallet", about = "BIP-39 / BIP-32 EVM address tool")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "HDWALLET_CONFIG")]
    config: Option<PathBuf>,

    /// Wordlist language: english, japanese, chinese_simplified, ...
    #[arg(long, env = "HDWALLET_LANGUAGE")]
    language: Option<Language>,

    /// Derivation path, e.g. "m/44'/60'/0'/0/0".
    #[arg(long, env = "HDWALLET_PATH")]
    path: Option<String>,

    /// BIP-39 passphrase.
    #[arg(long, env = "HDWALLET_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "HDWALLET_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "HDWALLET_LOG_LEVEL")]
    log_level: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate a new mnemonic and derive its address.
    Create {
        /// Entropy strength in bits (128, 160, 192, 224, 256).
        #[arg(long)]
        strength: Option<usize>,
    },
    /// Derive the address of an existing mnemonic (read from stdin when omitted).
    Restore {
        #[arg(long, env = "HDWALLET_MNEMONIC", hide_env_values = true)]
        mnemonic: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = match cli.config.as_ref() {
        Some(path) => WalletConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WalletConfig::default(),
    };

    let strength = match &cli.command {
        Command::Create { strength } => *strength,
        Command::Restore { .. } => None,
    };

    let config = WalletConfig {
        language: cli.language.unwrap_or(base.language),
        strength_bits: strength.unwrap_or(base.strength_bits),
        derivation_path: cli.path.unwrap_or_else(|| base.derivation_path.clone()),
        passphrase: cli.passphrase.unwrap_or_else(|| base.passphrase.clone()),
        log_format: cli.log_format.unwrap_or(base.log_format),
        log_level: cli.log_level.unwrap_or_else(|| base.log_level.clone()),
    };

    init_logging(config.log_format, &config.log_level);
    tracing::debug!(?config, "configuration resolved");

    let registry = WordlistRegistry::new();

    let bundle = match cli.command {
        Command::Create { .. } => create_address(&config, &registry, &OsRandom).await?,
        Command::Restore { mnemonic } => {
            let phrase = match mnemonic {
                Some(phrase) => phrase,
                None => {
                    let mut input = String::new();
                    std::io::stdin()
                        .read_to_string(&mut input)
                        .context("reading mnemonic from stdin")?;
                    input
                }
            };
            let phrase = zeroize::Zeroizing::new(phrase);
            restore_address(&phrase, &config, &registry)?
        }
    };

    print_bundle(&bundle, cli.json)
}

fn print_bundle(bundle: &AddressBundle, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(bundle)?);
    } else {
        println!("mnemonic:         {}", bundle.mnemonic);
        println!("seed:             {}", bundle.seed_hex);
        println!("derivation path:  {}", bundle.path);
        println!("checksum address: {}", bundle.checksum_address);
    }
    Ok(())
}
