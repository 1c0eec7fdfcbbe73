// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module - public key → address, EIP-55 checksum
// Keccak-256, secp256k1

use crate::crypto::hash::keccak256;
use crate::crypto::key_deriver::{Secp256k1, PUBLIC_KEY_LEN};
use crate::error::WalletResult;
use zeroize::Zeroize;

/// Address length in bytes
pub const ADDRESS_LEN: usize = 20;

const ADDRESS_HEX_LEN: usize = ADDRESS_LEN * 2;

/// EVM Address Codec
///
/// # Flow:  Public Key (64B) → Keccak256 → Address (20B) → EIP-55 string
///
/// Module này KHÔNG lưu key material.
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // CORE: Public Key → Address Bytes (20 bytes)
    // Tất cả hàm khác compose từ đây.
    // =========================================================================

    /// Address bytes from a public key.
    ///
    /// With `sanitize` set, SEC1 encodings (33 or 65 bytes) are converted to
    /// the 64-byte body first. Without it the key must already be the body.
    ///
    /// # Algorithm
    /// 1. `pub_key_raw` (64B, x ‖ y)
    /// 2. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 3. `hash[12..32]` → `address` (20B)
    ///
    /// # Panics
    /// If the key is not 64 bytes after conversion.
    pub fn public_to_address(public_key: &[u8], sanitize: bool) -> WalletResult<[u8; ADDRESS_LEN]> {
        let converted;
        let body: &[u8] = if sanitize && public_key.len() != PUBLIC_KEY_LEN {
            converted = Secp256k1::import_public(public_key)?;
            &converted
        } else {
            public_key
        };
        assert_eq!(body.len(), PUBLIC_KEY_LEN, "public key body must be 64 bytes");

        let mut hash = keccak256(body);
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&hash[32 - ADDRESS_LEN..]);
        hash.zeroize();

        Ok(address)
    }

    /// Private key (32B) → address bytes
    pub fn private_to_address(private_key: &[u8]) -> WalletResult<[u8; ADDRESS_LEN]> {
        let public = Secp256k1::private_to_public(private_key)?;
        Self::public_to_address(&public, false)
    }

    // =========================================================================
    // EIP-55
    // =========================================================================

    /// EIP-55 mixed-case encoding.
    ///
    /// Nibble thứ `i` của keccak(lowercase hex) ≥ 8 → uppercase ký tự thứ `i`.
    /// Input không được validate: prefix `0x` optional, case bất kỳ.
    pub fn to_checksum_address(address: &str) -> String {
        let lower = address
            .strip_prefix("0x")
            .unwrap_or(address)
            .to_ascii_lowercase();
        let digest = hex::encode(keccak256(lower.as_bytes()));

        let mut out = String::with_capacity(lower.len() + 2);
        out.push_str("0x");
        // Digest chỉ có 64 nibble; ký tự sau đó giữ lowercase
        for (i, ch) in lower.chars().enumerate() {
            let upper = digest.as_bytes().get(i).map_or(false, |&nibble| nibble >= b'8');
            if upper {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// `"0x"` + lowercase hex
    #[inline]
    pub fn to_address_string(address: &[u8; ADDRESS_LEN]) -> String {
        format!("0x{}", hex::encode(address))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// `0x` + 40 hex chars, case không quan trọng
    pub fn is_valid(address: &str) -> bool {
        address
            .strip_prefix("0x")
            .map(|digits| {
                digits.len() == ADDRESS_HEX_LEN && digits.bytes().all(|b| b.is_ascii_hexdigit())
            })
            .unwrap_or(false)
    }

    /// Well-formed and its casing matches the EIP-55 encoding exactly.
    pub fn is_valid_checksum_address(address: &str) -> bool {
        Self::is_valid(address) && Self::to_checksum_address(address) == address
    }

    /// So sánh 2 address (case-insensitive, không allocate)
    #[inline]
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        Self::is_valid(addr1) && Self::is_valid(addr2) && addr1.eq_ignore_ascii_case(addr2)
    }
}

// =============================================================================
// TESTS
// =============================================================================
