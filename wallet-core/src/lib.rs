// wallet-core/src/lib.rs

//! HD wallet core: BIP-39 mnemonic → PBKDF2 seed → BIP-32 key tree →
//! Keccak-256 address → EIP-55 checksum.
//!
//! ```text
//! RandomSource ──▶ MnemonicCodec ──▶ mnemonic_to_seed ──▶ HdWallet (Bip32Node)
//!                                                           │ set_derive_path
//!                                                           ▼
//!                                                      EvmAddress (EIP-55)
//! ```
//!
//! Everything except the RNG request is synchronous.

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod wallet;

pub use api::{create_address, restore_address, AddressBundle};
pub use chains::evm::EvmAddress;
pub use config::WalletConfig;
pub use crypto::{
    mnemonic_to_seed, mnemonic_to_seed_hex, Bip32Node, DerivationPaths, KeyTreeNode, Language,
    MnemonicCodec, OsRandom, RandomSource, Secp256k1, WalletMnemonic, WordCount, Wordlist,
    WordlistRegistry,
};
pub use error::{CryptoError, EncodingError, MnemonicError, WalletError, WalletResult};
pub use wallet::HdWallet;
