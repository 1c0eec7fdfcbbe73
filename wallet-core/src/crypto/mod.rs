// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! Pipeline primitives cho HD wallet:
//!
//! - **Mnemonic**: BIP-39 codec (entropy ⇄ words) over 8 wordlists via [`MnemonicCodec`] and [`WalletMnemonic`].
//! - **Seed**: PBKDF2-HMAC-SHA512 stretching via [`mnemonic_to_seed`].
//! - **Key Derivation**: BIP-32 secp256k1 tree via [`Bip32Node`] behind the [`KeyTreeNode`] seam.
//! - **Derivation Paths**: BIP-44 / EVM path builders via [`DerivationPaths`].
//! - **Bytes**: input coercion and hex helpers via [`to_buffer`].

pub mod bytes;
pub mod hash;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;
pub mod rng;
pub mod seed;
pub mod wordlist;

// Re-exports for cleaner API access
pub use bytes::{buffer_to_hex, int_to_hex, is_hex_string, pad_to_even, strip_hex_prefix, to_buffer, ByteInput};
pub use hash::{keccak256, sha256};
pub use key_deriver::{Bip32Node, KeyTreeNode, PublicKeyBytes, Secp256k1};
pub use mnemonic::{MnemonicCodec, WalletMnemonic, WordCount};
pub use paths::DerivationPaths;
pub use rng::{OsRandom, RandomSource};
pub use seed::{mnemonic_to_seed, mnemonic_to_seed_hex, Seed, SEED_LEN};
pub use wordlist::{Language, Wordlist, WordlistRegistry};
