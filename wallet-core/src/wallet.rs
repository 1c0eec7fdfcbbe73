// wallet-core/src/wallet.rs
//
// HD Wallet - key material + key tree node
//
// Flow:
//   Seed → Bip32Node (root) → set_derive_path(...) → private/public key → address
//
// Wallet giữ tối đa MỘT loại key trực tiếp (private HOẶC public).
// Public key được tính lazy từ private key và cache cho tới lần derive tiếp theo.

use crate::chains::evm::{EvmAddress, ADDRESS_LEN};
use crate::crypto::bytes::buffer_to_hex;
use crate::crypto::key_deriver::{
    Bip32Node, KeyTreeNode, PublicKeyBytes, Secp256k1, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN,
};
use crate::error::{CryptoError, WalletResult};
use once_cell::unsync::OnceCell;
use tracing::debug;
use zeroize::Zeroizing;

/// Key material held directly by a wallet.
enum KeyMaterial {
    Private(Zeroizing<[u8; PRIVATE_KEY_LEN]>),
    Public(PublicKeyBytes),
}

impl KeyMaterial {
    /// Read raw material off a node: private scalar first, else the public point.
    fn from_node<N: KeyTreeNode>(node: &N) -> WalletResult<Self> {
        if let Some(private_key) = node.private_key() {
            return Ok(KeyMaterial::Private(private_key));
        }
        match node.public_key() {
            Some(point) => Ok(KeyMaterial::Public(Secp256k1::import_public(&point)?)),
            // Node không có scalar lẫn point → provider contract bị vi phạm
            None => Err(CryptoError::NoKeyTreeSupplied.into()),
        }
    }
}

/// Hierarchical deterministic wallet over one key tree node.
///
/// Not `Sync`: a wallet is single-owner, derivation mutates it in place.
pub struct HdWallet<N: KeyTreeNode = Bip32Node> {
    material: KeyMaterial,
    public_cache: OnceCell<PublicKeyBytes>,
    node: N,
}

// Custom Debug - không in private key
impl<N: KeyTreeNode + std::fmt::Debug> std::fmt::Debug for HdWallet<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.material {
            KeyMaterial::Private(_) => "private",
            KeyMaterial::Public(_) => "public-only",
        };
        f.debug_struct("HdWallet")
            .field("kind", &kind)
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

impl<N: KeyTreeNode> HdWallet<N> {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Build a wallet from explicit key material and a key tree node.
    ///
    /// Checks run in order: both keys supplied, private key validity,
    /// public key validity (64-byte body), node presence. With neither key
    /// given, material is read from the node.
    pub fn new(
        private_key: Option<&[u8]>,
        public_key: Option<&[u8]>,
        node: Option<N>,
    ) -> WalletResult<Self> {
        if private_key.is_some() && public_key.is_some() {
            return Err(CryptoError::BothKeysSupplied.into());
        }
        if let Some(key) = private_key {
            if !Secp256k1::is_valid_private(key) {
                return Err(CryptoError::InvalidPrivateKey.into());
            }
        }
        if let Some(key) = public_key {
            if !Secp256k1::is_valid_public(key, false) {
                return Err(CryptoError::InvalidPublicKey.into());
            }
        }
        let node = node.ok_or(CryptoError::NoKeyTreeSupplied)?;

        let material = match (private_key, public_key) {
            (Some(key), _) => {
                let mut scalar = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
                scalar.copy_from_slice(key);
                KeyMaterial::Private(scalar)
            }
            (None, Some(key)) => {
                let mut body = [0u8; PUBLIC_KEY_LEN];
                body.copy_from_slice(key);
                KeyMaterial::Public(body)
            }
            (None, None) => KeyMaterial::from_node(&node)?,
        };

        Ok(Self {
            material,
            public_cache: OnceCell::new(),
            node,
        })
    }

    /// Wallet over `node`, key material taken from the node itself.
    pub fn from_node(node: N) -> WalletResult<Self> {
        Self::new(None, None, Some(node))
    }

    // =========================================================================
    // DERIVATION
    // =========================================================================

    /// Replace the node with its descendant along `path`.
    ///
    /// On failure the wallet is left untouched.
    pub fn set_derive_path(&mut self, path: &str) -> WalletResult<()> {
        let node = self.node.derive_path(path)?;
        self.replace_node(node)?;
        debug!(path, "wallet node derived");
        Ok(())
    }

    /// Replace the node with one child. Indices >= 2^31 are hardened.
    pub fn set_derive_child(&mut self, index: u32) -> WalletResult<()> {
        let node = self.node.derive_child(index)?;
        self.replace_node(node)?;
        debug!(index, "wallet child derived");
        Ok(())
    }

    fn replace_node(&mut self, node: N) -> WalletResult<()> {
        let material = KeyMaterial::from_node(&node)?;
        self.node = node;
        self.material = material;
        self.public_cache = OnceCell::new();
        Ok(())
    }

    // =========================================================================
    // KEY ACCESS
    // =========================================================================

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn is_public_only(&self) -> bool {
        matches!(self.material, KeyMaterial::Public(_))
    }

    /// Raw 32-byte private key
    pub fn get_private_key(&self) -> WalletResult<&[u8; PRIVATE_KEY_LEN]> {
        match &self.material {
            KeyMaterial::Private(key) => Ok(&**key),
            KeyMaterial::Public(_) => Err(CryptoError::PrivateKeyUnavailable.into()),
        }
    }

    /// `0x`-prefixed hex of the private key
    pub fn get_private_key_string(&self) -> WalletResult<Zeroizing<String>> {
        let key = self.get_private_key()?;
        Ok(Zeroizing::new(buffer_to_hex(key)?))
    }

    /// 64-byte public key body (x ‖ y).
    ///
    /// Tính từ private key lần đầu, sau đó dùng cache.
    pub fn get_public_key(&self) -> WalletResult<&PublicKeyBytes> {
        match &self.material {
            KeyMaterial::Public(key) => Ok(key),
            KeyMaterial::Private(key) => self
                .public_cache
                .get_or_try_init(|| Secp256k1::private_to_public(&key[..])),
        }
    }

    pub fn get_public_key_string(&self) -> WalletResult<String> {
        buffer_to_hex(self.get_public_key()?)
    }

    // =========================================================================
    // ADDRESS
    // =========================================================================

    pub fn get_address(&self) -> WalletResult<[u8; ADDRESS_LEN]> {
        EvmAddress::public_to_address(self.get_public_key()?, true)
    }

    /// `0x` + lowercase hex
    pub fn get_address_string(&self) -> WalletResult<String> {
        buffer_to_hex(&self.get_address()?)
    }

    /// EIP-55 checksummed address
    pub fn get_checksum_address_string(&self) -> WalletResult<String> {
        Ok(EvmAddress::to_checksum_address(&self.get_address_string()?))
    }
}

// =============================================================================
// BIP-32 SPECIFIC
// =============================================================================

impl HdWallet<Bip32Node> {
    /// Root wallet from a 64-byte BIP-39 seed
    pub fn from_master_seed(seed: &[u8]) -> WalletResult<Self> {
        let wallet = Self::from_node(Bip32Node::from_seed(seed)?)?;
        debug!(public_only = wallet.is_public_only(), "wallet built from master seed");
        Ok(wallet)
    }

    /// Root wallet from a base58 `xprv…` / `xpub…` string
    pub fn from_extended_key(key: &str) -> WalletResult<Self> {
        Self::from_node(Bip32Node::from_extended_key(key)?)
    }

    /// Fails with `PrivateKeyUnavailable` on a public-only wallet.
    pub fn private_extended_key(&self) -> WalletResult<Zeroizing<String>> {
        self.node.private_extended_key()
    }

    pub fn public_extended_key(&self) -> String {
        self.node.public_extended_key()
    }
}

// =============================================================================
// TESTS
// =============================================================================
