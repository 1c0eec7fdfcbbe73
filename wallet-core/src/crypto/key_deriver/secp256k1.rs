// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 provider: BIP-32 key tree + curve checks
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use super::KeyTreeNode;
use crate::error::{CryptoError, WalletResult};
use bip32::{ChildNumber, DerivationPath, Prefix, XPrv, XPub};
use k256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey, SecretKey};
use std::str::FromStr;
use zeroize::Zeroizing;

/// Private scalar length
pub const PRIVATE_KEY_LEN: usize = 32;
/// Uncompressed public key body, không có prefix 0x04
pub const PUBLIC_KEY_LEN: usize = 64;

const HARDENED_FLAG: u32 = 1 << 31;
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// 64-byte uncompressed public key (x ‖ y)
pub type PublicKeyBytes = [u8; PUBLIC_KEY_LEN];

// =============================================================================
// CURVE PROVIDER
// =============================================================================

/// secp256k1 scalar / point operations
pub struct Secp256k1;

impl Secp256k1 {
    /// 32 bytes, 0 < k < n
    pub fn is_valid_private(key: &[u8]) -> bool {
        key.len() == PRIVATE_KEY_LEN && SecretKey::from_slice(key).is_ok()
    }

    /// 64-byte raw keys are always checked. SEC1 encodings (33/65 bytes)
    /// are only accepted when `sanitize` is set.
    pub fn is_valid_public(key: &[u8], sanitize: bool) -> bool {
        if key.len() == PUBLIC_KEY_LEN {
            return Self::parse_point(key).is_ok();
        }
        sanitize && PublicKey::from_sec1_bytes(key).is_ok()
    }

    /// Point multiplication: private scalar → SEC1 public key.
    pub fn derive_public_key(private_key: &[u8], compressed: bool) -> WalletResult<Vec<u8>> {
        let secret = Self::parse_scalar(private_key)?;
        let encoded = secret.public_key().to_encoded_point(compressed);
        Ok(encoded.as_bytes().to_vec())
    }

    /// Private scalar → 64-byte public key body.
    pub fn private_to_public(private_key: &[u8]) -> WalletResult<PublicKeyBytes> {
        let secret = Self::parse_scalar(private_key)?;
        Ok(Self::raw_body(&secret.public_key()))
    }

    /// Re-encode a point (raw 64, SEC1 33 or 65 bytes) as compressed or uncompressed SEC1.
    pub fn convert_point(point: &[u8], compressed: bool) -> WalletResult<Vec<u8>> {
        let public = Self::parse_point(point)?;
        Ok(public.to_encoded_point(compressed).as_bytes().to_vec())
    }

    /// Any supported encoding → 64-byte body
    pub fn import_public(key: &[u8]) -> WalletResult<PublicKeyBytes> {
        let public = Self::parse_point(key)?;
        Ok(Self::raw_body(&public))
    }

    fn parse_scalar(private_key: &[u8]) -> WalletResult<SecretKey> {
        if private_key.len() != PRIVATE_KEY_LEN {
            return Err(CryptoError::InvalidPrivateKey.into());
        }
        SecretKey::from_slice(private_key).map_err(|_| CryptoError::InvalidPrivateKey.into())
    }

    fn parse_point(key: &[u8]) -> WalletResult<PublicKey> {
        let parsed = if key.len() == PUBLIC_KEY_LEN {
            let mut sec1 = [0u8; PUBLIC_KEY_LEN + 1];
            sec1[0] = SEC1_UNCOMPRESSED_TAG;
            sec1[1..].copy_from_slice(key);
            PublicKey::from_sec1_bytes(&sec1)
        } else {
            PublicKey::from_sec1_bytes(key)
        };
        parsed.map_err(|_| CryptoError::InvalidPublicKey.into())
    }

    fn raw_body(public: &PublicKey) -> PublicKeyBytes {
        let encoded = public.to_encoded_point(false);
        let mut body = [0u8; PUBLIC_KEY_LEN];
        body.copy_from_slice(&encoded.as_bytes()[1..]); // Bỏ 0x04 prefix
        body
    }
}

// =============================================================================
// BIP-32 KEY TREE
// =============================================================================

/// BIP-32 node: extended private key, or public-only extended key.
#[derive(Clone)]
pub enum Bip32Node {
    Private(XPrv),
    Public(XPub),
}

// Custom Debug - không in chain code / private key
impl std::fmt::Debug for Bip32Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Bip32Node::Private(_) => "private",
            Bip32Node::Public(_) => "public",
        };
        f.debug_struct("Bip32Node")
            .field("kind", &kind)
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

impl Bip32Node {
    /// Master node from a BIP-39 seed
    pub fn from_seed(seed: &[u8]) -> WalletResult<Self> {
        let root = XPrv::new(seed).map_err(|e| {
            CryptoError::DerivationFailed(format!("Failed to create master key: {}", e))
        })?;
        Ok(Bip32Node::Private(root))
    }

    /// Parse a base58 `xprv…` / `xpub…` string.
    pub fn from_extended_key(key: &str) -> WalletResult<Self> {
        if let Ok(xprv) = XPrv::from_str(key) {
            return Ok(Bip32Node::Private(xprv));
        }
        XPub::from_str(key)
            .map(Bip32Node::Public)
            .map_err(|e| CryptoError::InvalidExtendedKey(e.to_string()).into())
    }

    pub fn private_extended_key(&self) -> WalletResult<Zeroizing<String>> {
        match self {
            Bip32Node::Private(xprv) => Ok(xprv.to_string(Prefix::XPRV)),
            Bip32Node::Public(_) => Err(CryptoError::PrivateKeyUnavailable.into()),
        }
    }

    pub fn public_extended_key(&self) -> String {
        self.xpub().to_string(Prefix::XPUB)
    }

    /// Public-only copy of this node
    pub fn neutered(&self) -> Self {
        Bip32Node::Public(self.xpub())
    }

    pub fn depth(&self) -> u8 {
        match self {
            Bip32Node::Private(xprv) => xprv.attrs().depth,
            Bip32Node::Public(xpub) => xpub.attrs().depth,
        }
    }

    fn xpub(&self) -> XPub {
        match self {
            Bip32Node::Private(xprv) => xprv.public_key(),
            Bip32Node::Public(xpub) => xpub.clone(),
        }
    }

    fn derive_step(&self, child: ChildNumber) -> WalletResult<Self> {
        let derived = match self {
            Bip32Node::Private(xprv) => xprv.derive_child(child).map(Bip32Node::Private),
            Bip32Node::Public(xpub) => xpub.derive_child(child).map(Bip32Node::Public),
        };
        derived.map_err(|e| {
            CryptoError::DerivationFailed(format!("Child derivation failed: {}", e)).into()
        })
    }
}

impl KeyTreeNode for Bip32Node {
    fn derive_path(&self, path: &str) -> WalletResult<Self> {
        let derivation_path = DerivationPath::from_str(path).map_err(|e| {
            CryptoError::DerivationFailed(format!("Invalid path '{}': {}", path, e))
        })?;

        let mut node = self.clone();
        for child_num in derivation_path {
            node = node.derive_step(child_num)?;
        }
        Ok(node)
    }

    fn derive_child(&self, index: u32) -> WalletResult<Self> {
        let child = ChildNumber::new(index & !HARDENED_FLAG, index & HARDENED_FLAG != 0)
            .map_err(|e| {
                CryptoError::DerivationFailed(format!("Invalid index {}: {}", index, e))
            })?;
        self.derive_step(child)
    }

    fn private_key(&self) -> Option<Zeroizing<[u8; PRIVATE_KEY_LEN]>> {
        match self {
            Bip32Node::Private(xprv) => {
                let key_bytes: [u8; PRIVATE_KEY_LEN] = xprv.private_key().to_bytes().into();
                Some(Zeroizing::new(key_bytes))
            }
            Bip32Node::Public(_) => None,
        }
    }

    fn public_key(&self) -> Option<Vec<u8>> {
        let xpub = self.xpub();
        Some(PublicKey::from(xpub.public_key()).to_encoded_point(true).as_bytes().to_vec())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;
    use crate::error::WalletError;

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    // BIP-32 test vector 1
    const BIP32_SEED_1: &str = "000102030405060708090a0b0c0d0e0f";
    const BIP32_XPRV_1: &str = "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi";
    const BIP32_XPUB_1: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn root() -> Bip32Node {
        Bip32Node::from_seed(&hex::decode(TEST_SEED).unwrap()).unwrap()
    }

    #[test]
    fn test_bip32_vector_1_master() {
        let node = Bip32Node::from_seed(&hex::decode(BIP32_SEED_1).unwrap()).unwrap();
        assert_eq!(&*node.private_extended_key().unwrap(), BIP32_XPRV_1);
        assert_eq!(node.public_extended_key(), BIP32_XPUB_1);
    }

    #[test]
    fn test_extended_key_roundtrip() {
        let private = Bip32Node::from_extended_key(BIP32_XPRV_1).unwrap();
        assert!(matches!(private, Bip32Node::Private(_)));
        let public = Bip32Node::from_extended_key(BIP32_XPUB_1).unwrap();
        assert!(matches!(public, Bip32Node::Public(_)));
        assert_eq!(public.public_extended_key(), BIP32_XPUB_1);
        assert!(public.private_key().is_none());
        assert!(Bip32Node::from_extended_key("xprvgarbage").is_err());
    }

    #[test]
    fn test_derive_evm_key() {
        let node = root().derive_path(DerivationPaths::EVM_0).unwrap();
        assert_eq!(node.depth(), 5);
        assert_eq!(node.private_key().unwrap().len(), PRIVATE_KEY_LEN);
    }

    #[test]
    fn test_path_matches_child_steps() {
        let by_path = root().derive_path("m/44'/60'/0'/0/7").unwrap();
        let by_steps = root()
            .derive_child(44 | HARDENED_FLAG)
            .and_then(|n| n.derive_child(60 | HARDENED_FLAG))
            .and_then(|n| n.derive_child(HARDENED_FLAG))
            .and_then(|n| n.derive_child(0))
            .and_then(|n| n.derive_child(7))
            .unwrap();
        assert_eq!(*by_path.private_key().unwrap(), *by_steps.private_key().unwrap());
    }

    #[test]
    fn test_public_node_derives_non_hardened_only() {
        let account = root().derive_path("m/44'/60'/0'/0").unwrap();
        let public = account.neutered();

        let from_private = account.derive_child(3).unwrap();
        let from_public = public.derive_child(3).unwrap();
        assert_eq!(from_private.public_key(), from_public.public_key());

        assert!(public.derive_child(HARDENED_FLAG).is_err());
        assert!(public.derive_path("m/0'").is_err());
    }

    #[test]
    fn test_invalid_path() {
        assert!(matches!(
            root().derive_path("invalid"),
            Err(WalletError::Crypto(CryptoError::DerivationFailed(_)))
        ));
    }

    #[test]
    fn test_scalar_validation() {
        let key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        assert!(Secp256k1::is_valid_private(&key));
        assert!(!Secp256k1::is_valid_private(&[0u8; 32]));
        assert!(!Secp256k1::is_valid_private(&[0xFFu8; 32])); // >= n
        assert!(!Secp256k1::is_valid_private(&key[..31]));
    }

    #[test]
    fn test_point_encodings() {
        let key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let raw = Secp256k1::private_to_public(&key).unwrap();
        let compressed = Secp256k1::derive_public_key(&key, true).unwrap();
        let uncompressed = Secp256k1::derive_public_key(&key, false).unwrap();

        assert_eq!(compressed.len(), 33);
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(&uncompressed[1..], &raw[..]);

        assert_eq!(Secp256k1::convert_point(&compressed, false).unwrap(), uncompressed);
        assert_eq!(Secp256k1::convert_point(&raw, true).unwrap(), compressed);
        assert_eq!(Secp256k1::import_public(&compressed).unwrap(), raw);
        assert_eq!(Secp256k1::import_public(&raw).unwrap(), raw);
    }

    #[test]
    fn test_public_validation() {
        let key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let raw = Secp256k1::private_to_public(&key).unwrap();
        let compressed = Secp256k1::derive_public_key(&key, true).unwrap();

        assert!(Secp256k1::is_valid_public(&raw, false));
        assert!(!Secp256k1::is_valid_public(&compressed, false));
        assert!(Secp256k1::is_valid_public(&compressed, true));
        assert!(!Secp256k1::is_valid_public(&[0x11u8; 64], true));
        assert_eq!(
            Secp256k1::import_public(&[0x11u8; 64]),
            Err(WalletError::Crypto(CryptoError::InvalidPublicKey))
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let output = format!("{:?}", root());
        assert!(output.contains("private"));
        assert!(!output.contains("xprv"));
    }
}
