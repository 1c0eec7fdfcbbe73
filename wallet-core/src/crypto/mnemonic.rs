// wallet-core\src\crypto\mnemonic.rs
//
// Mnemonic Module - BIP-39 codec
// Entropy (16..=32 bytes) ‖ SHA-256 checksum → 11-bit groups → words

use crate::crypto::hash::sha256;
use crate::crypto::rng::RandomSource;
use crate::crypto::seed::{mnemonic_to_seed, mnemonic_to_seed_hex, Seed};
use crate::crypto::wordlist::{Language, Wordlist};
use crate::error::{MnemonicError, WalletResult};
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const BITS_PER_WORD: u32 = 11;
const WORD_MASK: u32 = (1 << BITS_PER_WORD) - 1;
const MIN_ENTROPY_BYTES: usize = 16;
const MAX_ENTROPY_BYTES: usize = 32;

/// Số lượng words hỗ trợ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Lấy số bytes entropy cần thiết
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    #[inline]
    pub const fn strength_bits(self) -> usize {
        self.entropy_bytes() * 8
    }

    pub const fn from_strength_bits(bits: usize) -> Option<Self> {
        match bits {
            128 => Some(WordCount::Twelve),
            160 => Some(WordCount::Fifteen),
            192 => Some(WordCount::Eighteen),
            224 => Some(WordCount::TwentyOne),
            256 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// BIP-39 entropy ↔ phrase codec.
///
/// Stateless; the wordlist is always passed in explicitly.
pub struct MnemonicCodec;

impl MnemonicCodec {
    // =========================================================================
    // GENERATION
    // =========================================================================

    /// Request `strength_bits / 8` bytes from `rng` and encode them.
    ///
    /// `strength_bits` must be a positive multiple of 32. The RNG call is the
    /// only await point; an RNG failure surfaces as
    /// [`MnemonicError::RngFailure`].
    pub async fn generate<R>(
        strength_bits: usize,
        rng: &R,
        wordlist: &Wordlist,
    ) -> WalletResult<String>
    where
        R: RandomSource + ?Sized,
    {
        if strength_bits == 0 || strength_bits % 32 != 0 {
            return Err(MnemonicError::InvalidEntropyLength(strength_bits / 8).into());
        }

        let entropy = rng
            .request(strength_bits / 8)
            .await
            .map_err(|e| MnemonicError::RngFailure(e.to_string()))?;

        let phrase = Self::entropy_to_mnemonic(&entropy, wordlist)?;
        tracing::debug!(
            strength_bits,
            language = %wordlist.language(),
            "mnemonic generated"
        );
        Ok(phrase)
    }

    // =========================================================================
    // ENCODE / DECODE
    // =========================================================================

    /// Encode entropy as a phrase from `wordlist`.
    ///
    /// Words are joined with ASCII space, except Japanese which uses U+3000.
    pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: &Wordlist) -> WalletResult<String> {
        check_entropy_len(entropy.len())?;

        let checksum_len = checksum_bits(entropy.len());
        let checksum = derive_checksum(entropy, checksum_len);

        let word_count = (entropy.len() * 8 + checksum_len as usize) / BITS_PER_WORD as usize;
        let mut words = Vec::with_capacity(word_count);

        // Bit stream: từng byte entropy (8 bits) rồi checksum (CS bits)
        let stream = entropy
            .iter()
            .map(|&byte| (u32::from(byte), 8))
            .chain(std::iter::once((u32::from(checksum), checksum_len)));

        let mut acc: u32 = 0;
        let mut acc_bits: u32 = 0;
        for (value, width) in stream {
            acc = (acc << width) | value;
            acc_bits += width;
            while acc_bits >= BITS_PER_WORD {
                acc_bits -= BITS_PER_WORD;
                let index = (acc >> acc_bits) & WORD_MASK;
                words.push(wordlist.words()[index as usize]);
            }
            acc &= (1 << acc_bits) - 1;
        }
        acc.zeroize();

        Ok(words.join(wordlist.language().separator()))
    }

    /// Decode a phrase back to its entropy, verifying the checksum.
    ///
    /// The phrase is NFKD-normalized and split on whitespace (so the Japanese
    /// ideographic space is accepted).
    pub fn mnemonic_to_entropy(
        mnemonic: &str,
        wordlist: &Wordlist,
    ) -> WalletResult<Zeroizing<Vec<u8>>> {
        let normalized = Zeroizing::new(mnemonic.nfkd().collect::<String>());
        let words: Vec<&str> = normalized.split_whitespace().collect();

        if words.len() % 3 != 0 {
            return Err(MnemonicError::InvalidWordCount(words.len()).into());
        }

        let total_bits = words.len() * BITS_PER_WORD as usize;
        let checksum_len = total_bits / 33;
        let entropy_len = (total_bits - checksum_len) / 8;

        // Pack 11-bit indices MSB-first; bits lẻ cuối cùng được pad 0 bên phải
        let mut packed = Zeroizing::new(Vec::with_capacity(total_bits.div_ceil(8)));
        let mut acc: u32 = 0;
        let mut acc_bits: u32 = 0;
        for word in &words {
            let index = wordlist.index_of(word)?;
            acc = (acc << BITS_PER_WORD) | u32::from(index);
            acc_bits += BITS_PER_WORD;
            while acc_bits >= 8 {
                acc_bits -= 8;
                packed.push((acc >> acc_bits) as u8);
            }
            acc &= (1 << acc_bits) - 1;
        }
        if acc_bits > 0 {
            packed.push((acc << (8 - acc_bits)) as u8);
        }
        acc.zeroize();

        check_entropy_len(entropy_len)?;

        let entropy = Zeroizing::new(packed[..entropy_len].to_vec());
        let checksum_len = checksum_len as u32;
        let extracted = packed[entropy_len] >> (8 - checksum_len);

        if extracted != derive_checksum(&entropy, checksum_len) {
            return Err(MnemonicError::ChecksumMismatch.into());
        }

        Ok(entropy)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// `true` nếu phrase decode được với checksum hợp lệ.
    ///
    /// The only place where a codec failure is turned into a boolean.
    pub fn validate(mnemonic: &str, wordlist: &Wordlist) -> bool {
        match Self::mnemonic_to_entropy(mnemonic, wordlist) {
            Ok(_) => true,
            Err(_) => {
                tracing::debug!(language = %wordlist.language(), "mnemonic rejected");
                false
            }
        }
    }
}

#[inline]
fn check_entropy_len(len: usize) -> WalletResult<()> {
    if !(MIN_ENTROPY_BYTES..=MAX_ENTROPY_BYTES).contains(&len) || len % 4 != 0 {
        return Err(MnemonicError::InvalidEntropyLength(len).into());
    }
    Ok(())
}

/// CS = ENT / 32
#[inline]
fn checksum_bits(entropy_len: usize) -> u32 {
    (entropy_len * 8 / 32) as u32
}

/// Leading `len` bits (1..=8) of SHA-256(entropy), right-aligned.
#[inline]
fn derive_checksum(entropy: &[u8], len: u32) -> u8 {
    sha256(entropy)[0] >> (8 - len)
}

/// Wallet Mnemonic - owned, validated phrase
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: Phrase được tự động ghi đè bằng 0 khi struct bị drop
/// - **No Debug Leak**: Custom Debug impl không hiển thị phrase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    #[zeroize(skip)]
    language: Language,
    word_count: usize,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị mnemonic phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("language", &self.language)
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Tạo mnemonic mới với số lượng words tùy chỉnh
    pub async fn generate<R>(
        word_count: WordCount,
        rng: &R,
        wordlist: &Wordlist,
    ) -> WalletResult<Self>
    where
        R: RandomSource + ?Sized,
    {
        let phrase = MnemonicCodec::generate(word_count.strength_bits(), rng, wordlist).await?;
        Ok(Self {
            phrase,
            language: wordlist.language(),
            word_count: word_count as usize,
        })
    }

    pub fn from_entropy(entropy: &[u8], wordlist: &Wordlist) -> WalletResult<Self> {
        let phrase = MnemonicCodec::entropy_to_mnemonic(entropy, wordlist)?;
        let word_count = phrase.split_whitespace().count();
        Ok(Self {
            phrase,
            language: wordlist.language(),
            word_count,
        })
    }

    /// Khôi phục mnemonic từ phrase có sẵn
    ///
    /// Word count, wordlist membership và checksum đều được kiểm tra.
    /// Whitespace thừa bị loại bỏ.
    pub fn from_phrase(phrase: &str, wordlist: &Wordlist) -> WalletResult<Self> {
        MnemonicCodec::mnemonic_to_entropy(phrase, wordlist)?;

        let words = phrase.split_whitespace().collect::<Vec<_>>();
        Ok(Self {
            phrase: words.join(wordlist.language().separator()),
            language: wordlist.language(),
            word_count: words.len(),
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Lấy mnemonic phrase
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    /// Lấy strength (bit) của mnemonic
    #[inline]
    pub fn strength_bits(&self) -> usize {
        self.word_count * 32 / 3
    }

    /// Recover the entropy. `wordlist` must be the list the phrase came from.
    pub fn to_entropy(&self, wordlist: &Wordlist) -> WalletResult<Zeroizing<Vec<u8>>> {
        MnemonicCodec::mnemonic_to_entropy(&self.phrase, wordlist)
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Tạo seed từ mnemonic (PBKDF2-HMAC-SHA512)
    ///
    /// # Security Note
    /// Passphrase khác với password. Nếu mất passphrase, không thể khôi phục ví
    /// ngay cả khi có mnemonic phrase.
    #[inline]
    pub fn to_seed(&self, passphrase: Option<&str>) -> Seed {
        mnemonic_to_seed(&self.phrase, passphrase)
    }

    #[inline]
    pub fn to_seed_hex(&self, passphrase: Option<&str>) -> String {
        mnemonic_to_seed_hex(&self.phrase, passphrase)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
