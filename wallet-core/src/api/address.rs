// wallet-core/src/api/address.rs
//
// Create / restore flow:
//   generate (hoặc validate) → seed → wallet-from-seed → derive path → checksum address

use serde::Serialize;
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::config::WalletConfig;
use crate::crypto::mnemonic::MnemonicCodec;
use crate::crypto::rng::RandomSource;
use crate::crypto::seed::mnemonic_to_seed;
use crate::crypto::wordlist::WordlistRegistry;
use crate::error::WalletResult;
use crate::wallet::HdWallet;

/// The four read-only fields shown after a create / restore.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct AddressBundle {
    pub mnemonic: String,
    pub seed_hex: String,
    pub path: String,
    pub checksum_address: String,
}

// Custom Debug - không in mnemonic / seed
impl std::fmt::Debug for AddressBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressBundle")
            .field("mnemonic", &"[REDACTED]")
            .field("seed_hex", &"[REDACTED]")
            .field("path", &self.path)
            .field("checksum_address", &self.checksum_address)
            .finish()
    }
}

/// Generate a new mnemonic and derive the address at `config.derivation_path`.
///
/// The RNG request is the only await point.
pub async fn create_address<R>(
    config: &WalletConfig,
    registry: &WordlistRegistry,
    rng: &R,
) -> WalletResult<AddressBundle>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;
    let wordlist = registry.get(config.language);
    let phrase = Zeroizing::new(MnemonicCodec::generate(config.strength_bits, rng, wordlist).await?);
    derive_bundle(&phrase, config)
}

/// Derive the address for an existing phrase.
///
/// The phrase is checked against `config.language` first; a phrase that
/// fails validation never reaches seed derivation.
pub fn restore_address(
    phrase: &str,
    config: &WalletConfig,
    registry: &WordlistRegistry,
) -> WalletResult<AddressBundle> {
    config.validate()?;
    let wordlist = registry.get(config.language);
    MnemonicCodec::mnemonic_to_entropy(phrase, wordlist)?;

    // Chuẩn hoá whitespace + separator theo ngôn ngữ
    let words = phrase.split_whitespace().collect::<Vec<_>>();
    let normalized = Zeroizing::new(words.join(wordlist.language().separator()));
    derive_bundle(&normalized, config)
}

fn derive_bundle(phrase: &str, config: &WalletConfig) -> WalletResult<AddressBundle> {
    let seed = mnemonic_to_seed(phrase, config.passphrase());
    debug!("seed derived");

    let mut wallet = HdWallet::from_master_seed(&seed[..])?;
    wallet.set_derive_path(&config.derivation_path)?;
    let checksum_address = wallet.get_checksum_address_string()?;

    info!(
        path = %config.derivation_path,
        address = %checksum_address,
        language = %config.language,
        "address derived"
    );

    Ok(AddressBundle {
        mnemonic: phrase.to_string(),
        seed_hex: hex::encode(&seed[..]),
        path: config.derivation_path.clone(),
        checksum_address,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::wordlist::Language;
    use crate::error::{MnemonicError, WalletError};
    use async_trait::async_trait;

    const ABANDON_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ABANDON_ADDRESS: &str = "0x9858EfFD232B4033E47d90003D41EC34EcaEda94";
    const ABANDON_SEED_PREFIX: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1";

    struct ZeroRandom;

    #[async_trait]
    impl RandomSource for ZeroRandom {
        async fn request(&self, len: usize) -> Result<Zeroizing<Vec<u8>>, rand::Error> {
            Ok(Zeroizing::new(vec![0u8; len]))
        }
    }

    struct BrokenRandom;

    #[async_trait]
    impl RandomSource for BrokenRandom {
        async fn request(&self, _len: usize) -> Result<Zeroizing<Vec<u8>>, rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "entropy pool unavailable",
            )))
        }
    }

    #[tokio::test]
    async fn test_create_address_deterministic_rng() {
        let registry = WordlistRegistry::new();
        let bundle = create_address(&WalletConfig::default(), &registry, &ZeroRandom)
            .await
            .unwrap();

        // 16 bytes 0x00 → "abandon ×11 about"
        assert_eq!(bundle.mnemonic, ABANDON_MNEMONIC);
        assert!(bundle.seed_hex.starts_with(ABANDON_SEED_PREFIX));
        assert_eq!(bundle.seed_hex.len(), 128);
        assert_eq!(bundle.path, "m/44'/60'/0'/0/0");
        assert_eq!(bundle.checksum_address, ABANDON_ADDRESS);
    }

    #[tokio::test]
    async fn test_create_address_os_rng() {
        let registry = WordlistRegistry::new();
        let config = WalletConfig {
            strength_bits: 256,
            ..Default::default()
        };
        let bundle = create_address(&config, &registry, &crate::crypto::rng::OsRandom)
            .await
            .unwrap();
        assert_eq!(bundle.mnemonic.split_whitespace().count(), 24);

        let restored = restore_address(&bundle.mnemonic, &config, &registry).unwrap();
        assert_eq!(restored, bundle);
    }

    #[tokio::test]
    async fn test_create_address_rng_failure() {
        let registry = WordlistRegistry::new();
        let result = create_address(&WalletConfig::default(), &registry, &BrokenRandom).await;
        assert!(matches!(
            result,
            Err(WalletError::Mnemonic(MnemonicError::RngFailure(_)))
        ));
    }

    #[tokio::test]
    async fn test_create_address_rejects_bad_config() {
        let registry = WordlistRegistry::new();
        let config = WalletConfig {
            strength_bits: 100,
            ..Default::default()
        };
        let result = create_address(&config, &registry, &ZeroRandom).await;
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_restore_address() {
        let registry = WordlistRegistry::new();
        let messy = format!("  {}  ", ABANDON_MNEMONIC.replace(' ', "   "));
        let bundle = restore_address(&messy, &WalletConfig::default(), &registry).unwrap();
        assert_eq!(bundle.mnemonic, ABANDON_MNEMONIC);
        assert_eq!(bundle.checksum_address, ABANDON_ADDRESS);
    }

    #[test]
    fn test_restore_address_with_passphrase_differs() {
        let registry = WordlistRegistry::new();
        let config = WalletConfig {
            passphrase: "TREZOR".to_string(),
            ..Default::default()
        };
        let bundle = restore_address(ABANDON_MNEMONIC, &config, &registry).unwrap();
        assert!(bundle.seed_hex.starts_with("c55257c360c07c72029aebc1b53c05ed0362ada3"));
        assert_ne!(bundle.checksum_address, ABANDON_ADDRESS);
    }

    #[test]
    fn test_restore_address_rejects_invalid_phrase() {
        let registry = WordlistRegistry::new();
        let config = WalletConfig::default();

        let bad_checksum = ABANDON_MNEMONIC.replace("about", "abandon");
        assert_eq!(
            restore_address(&bad_checksum, &config, &registry).unwrap_err(),
            WalletError::Mnemonic(MnemonicError::ChecksumMismatch)
        );

        // Phrase tiếng Anh với config tiếng Nhật
        let japanese = WalletConfig {
            language: Language::Japanese,
            ..Default::default()
        };
        assert!(matches!(
            restore_address(ABANDON_MNEMONIC, &japanese, &registry),
            Err(WalletError::Mnemonic(MnemonicError::UnknownWord(_)))
        ));
    }

    #[test]
    fn test_bundle_debug_redacts_secrets() {
        let registry = WordlistRegistry::new();
        let bundle =
            restore_address(ABANDON_MNEMONIC, &WalletConfig::default(), &registry).unwrap();
        let debug = format!("{:?}", bundle);
        assert!(!debug.contains("abandon"));
        assert!(!debug.contains(ABANDON_SEED_PREFIX));
        assert!(debug.contains(ABANDON_ADDRESS));
    }
}
