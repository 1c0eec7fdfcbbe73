// wallet-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! Address derivation cho Ethereum và các EVM-compatible chains (BSC, Polygon, Base, ...).
//!
//! # Key Features
//! - **Address Derivation**: public key → 20-byte address via [`EvmAddress`].
//! - **Checksum**: EIP-55 mixed-case encoding and verification.

pub mod address;

// Re-exports for cleaner API access
pub use address::{EvmAddress, ADDRESS_LEN};
