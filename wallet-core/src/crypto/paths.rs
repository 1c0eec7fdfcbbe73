// wallet-core/src/crypto/paths.rs
//
// Derivation Paths - BIP-44 path builder cho EVM accounts
// m / purpose' / coin_type' / account' / change / address_index

/// SLIP-44 coin type cho Ethereum (mọi EVM chain dùng chung)
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub const ETHEREUM_COIN_TYPE: u32 = 60;

/// BIP-44 purpose
pub const BIP44_PURPOSE: u32 = 44;

/// Pre-built Derivation Paths
pub struct DerivationPaths;

impl DerivationPaths {
    /// First external address of account 0
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";

    /// EVM path with custom address index
    #[inline]
    pub fn evm(index: u32) -> String {
        Self::bip44(BIP44_PURPOSE, ETHEREUM_COIN_TYPE, 0, 0, index)
    }

    /// EVM path with custom account & index (multi-account)
    #[inline]
    pub fn evm_account(account: u32, index: u32) -> String {
        Self::bip44(BIP44_PURPOSE, ETHEREUM_COIN_TYPE, account, 0, index)
    }

    /// Tạo BIP-44 path tùy chỉnh
    ///
    /// # Arguments
    /// * `purpose` - 44 (BIP-44)
    /// * `coin_type` - SLIP-44 coin type
    /// * `account` - Account index (thường 0)
    /// * `change` - 0 = external, 1 = internal
    /// * `index` - Address index
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }

    /// Cheap shape check (lowercase `m` root, `/`-separated indices, optional `'` or `h`).
    /// The key-tree provider still has the final word.
    pub fn is_well_formed(path: &str) -> bool {
        let mut segments = path.split('/');
        if !matches!(segments.next(), Some("m")) {
            return false;
        }
        segments.all(|segment| {
            let digits = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .unwrap_or(segment);
            !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit())
                && digits.parse::<u32>().map_or(false, |i| i < 1 << 31)
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evm_paths() {
        assert_eq!(DerivationPaths::EVM_0, "m/44'/60'/0'/0/0");
        assert_eq!(DerivationPaths::evm(0), "m/44'/60'/0'/0/0");
        assert_eq!(DerivationPaths::evm(5), "m/44'/60'/0'/0/5");
        assert_eq!(DerivationPaths::evm_account(1, 3), "m/44'/60'/1'/0/3");
    }

    #[test]
    fn test_custom_builder() {
        assert_eq!(DerivationPaths::bip44(44, 60, 0, 0, 0), "m/44'/60'/0'/0/0");
        assert_eq!(DerivationPaths::bip44(44, 0, 2, 1, 9), "m/44'/0'/2'/1/9");
    }

    #[test]
    fn test_is_well_formed() {
        assert!(DerivationPaths::is_well_formed("m"));
        assert!(DerivationPaths::is_well_formed(DerivationPaths::EVM_0));
        assert!(DerivationPaths::is_well_formed("m/44h/60h/0h/0/0"));
        assert!(!DerivationPaths::is_well_formed("44'/60'"));
        assert!(!DerivationPaths::is_well_formed("m/"));
        assert!(!DerivationPaths::is_well_formed("m/abc"));
        assert!(!DerivationPaths::is_well_formed("m/2147483648"));
        assert!(!DerivationPaths::is_well_formed("invalid"));
        // Key tree chỉ nhận root `m`
        assert!(!DerivationPaths::is_well_formed("M"));
        assert!(!DerivationPaths::is_well_formed("M/0"));
        assert!(!DerivationPaths::is_well_formed("M/44'/60'/0'/0/0"));
    }
}
