// wallet-core/src/crypto/hash.rs
//
// Hash primitives: SHA-256 (mnemonic checksum) + Keccak-256 (EVM address, EIP-55)

use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

/// SHA-256 of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Keccak-256 (pre-standard SHA-3 padding, như Ethereum dùng).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}
