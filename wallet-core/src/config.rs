// wallet-core/src/config.rs

//! Wallet configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::crypto::paths::DerivationPaths;
use crate::crypto::wordlist::Language;
use crate::error::{WalletError, WalletResult};
use crate::logging::LogFormat;

const MIN_STRENGTH_BITS: usize = 128;
const MAX_STRENGTH_BITS: usize = 256;

/// Settings for the create / restore flows.
///
/// Loaded from TOML via [`WalletConfig::from_toml_file`] or built
/// programmatically. Every field has a default, so an empty file is valid.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Wordlist language for new mnemonics.
    #[serde(default)]
    pub language: Language,

    /// Entropy strength: 128, 160, 192, 224 or 256.
    #[serde(default = "default_strength_bits")]
    pub strength_bits: usize,

    /// Path derived from the master node.
    #[serde(default = "default_derivation_path")]
    pub derivation_path: String,

    /// Optional BIP-39 passphrase ("25th word").
    #[serde(default)]
    pub passphrase: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Custom Debug - không in passphrase
impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field("language", &self.language)
            .field("strength_bits", &self.strength_bits)
            .field("derivation_path", &self.derivation_path)
            .field("passphrase", &"[REDACTED]")
            .field("log_format", &self.log_format)
            .field("log_level", &self.log_level)
            .finish()
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_strength_bits() -> usize {
    MIN_STRENGTH_BITS
}

fn default_derivation_path() -> String {
    DerivationPaths::EVM_0.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> WalletResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| WalletError::Config(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> WalletResult<Self> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> WalletResult<String> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// `None` when the passphrase is empty.
    pub fn passphrase(&self) -> Option<&str> {
        (!self.passphrase.is_empty()).then_some(self.passphrase.as_str())
    }

    /// Reject values the create / restore flows cannot use.
    pub fn validate(&self) -> WalletResult<()> {
        if !(MIN_STRENGTH_BITS..=MAX_STRENGTH_BITS).contains(&self.strength_bits)
            || self.strength_bits % 32 != 0
        {
            return Err(WalletError::Config(format!(
                "strength_bits must be a multiple of 32 in {}..={}, got {}",
                MIN_STRENGTH_BITS, MAX_STRENGTH_BITS, self.strength_bits
            )));
        }
        if !DerivationPaths::is_well_formed(&self.derivation_path) {
            return Err(WalletError::Config(format!(
                "malformed derivation_path '{}'",
                self.derivation_path
            )));
        }
        Ok(())
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            strength_bits: default_strength_bits(),
            derivation_path: default_derivation_path(),
            passphrase: String::new(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
