// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - provider boundary
//
// Kiến trúc:
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │                    ▼                            │
// │   KeyTreeNode (BIP-32, Bip32Node)               │
// │     ├─ derive_path("m/44'/60'/0'/0/0")          │
// │     └─ derive_child(index)                      │
// │                    │                            │
// │                    ▼                            │
// │   Secp256k1 (scalar/point checks, pubkey)       │
// └─────────────────────────────────────────────────┘

pub mod secp256k1;

// Re-exports
pub use secp256k1::{Bip32Node, PublicKeyBytes, Secp256k1, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN};

use crate::error::WalletResult;
use zeroize::Zeroizing;

/// One node of a hierarchical deterministic key tree.
///
/// The wallet only derives new nodes and reads raw key material; the
/// node's internals (chain code, depth, fingerprint) stay with the provider.
pub trait KeyTreeNode: Sized {
    /// Derive a descendant along a path string such as `m/44'/60'/0'/0/0`.
    fn derive_path(&self, path: &str) -> WalletResult<Self>;

    /// Derive one child. Indices >= 2^31 are hardened.
    fn derive_child(&self, index: u32) -> WalletResult<Self>;

    /// Raw 32-byte private scalar, if this node holds one.
    fn private_key(&self) -> Option<Zeroizing<[u8; PRIVATE_KEY_LEN]>>;

    /// SEC1-encoded public point, if the node exposes one.
    fn public_key(&self) -> Option<Vec<u8>>;
}
