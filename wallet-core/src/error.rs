// wallet-core/src/error.rs
//
// Error taxonomy for the derivation pipeline.
// Messages carry at most the offending word, never a full phrase, seed or key.

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Encoding Error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Config Error: {0}")]
    Config(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Random source failed: {0}")]
    RngFailure(String),

    #[error("Invalid entropy length: {0} bytes. Expected 16..=32 and a multiple of 4.")]
    InvalidEntropyLength(usize),

    #[error("Invalid word count: {0}. Expected a multiple of 3.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumMismatch,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Private key does not satisfy the curve requirements")]
    InvalidPrivateKey,

    #[error("Public key is not a valid curve point")]
    InvalidPublicKey,

    #[error("Cannot supply both a private and a public key")]
    BothKeysSupplied,

    #[error("A key tree node exposing key material is required")]
    NoKeyTreeSupplied,

    #[error("This is a public key only wallet")]
    PrivateKeyUnavailable,

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid extended key: {0}")]
    InvalidExtendedKey(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid input type: {0}")]
    InvalidInputType(String),

    #[error("Invalid hex string: {0}")]
    InvalidHexString(String),
}
