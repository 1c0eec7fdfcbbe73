// wallet-core/src/crypto/seed.rs
//
// Seed derivation - PBKDF2-HMAC-SHA512, 2048 rounds, 64-byte output
// salt = "mnemonic" + NFKD(passphrase)

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

const PBKDF2_ROUNDS: u32 = 2048;
const SALT_PREFIX: &str = "mnemonic";

/// 64-byte seed, zeroed on drop
pub type Seed = Zeroizing<[u8; SEED_LEN]>;

/// Stretch a mnemonic (+ optional passphrase) into a 64-byte seed.
///
/// The phrase is not validated here; an empty or non-BIP-39 phrase still
/// yields a seed. Validate with [`MnemonicCodec::validate`] first.
///
/// [`MnemonicCodec::validate`]: crate::crypto::MnemonicCodec::validate
#[tracing::instrument(level = "trace", skip_all)]
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: Option<&str>) -> Seed {
    let password = Zeroizing::new(mnemonic.nfkd().collect::<String>());
    let mut salt = Zeroizing::new(String::from(SALT_PREFIX));
    salt.extend(passphrase.unwrap_or("").nfkd());

    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed[..],
    );
    seed
}

/// Lowercase hex of [`mnemonic_to_seed`], no `0x` prefix.
pub fn mnemonic_to_seed_hex(mnemonic: &str, passphrase: Option<&str>) -> String {
    hex::encode(&mnemonic_to_seed(mnemonic, passphrase)[..])
}
