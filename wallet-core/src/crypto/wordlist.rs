// wallet-core/src/crypto/wordlist.rs
//
// Wordlist Registry - 8 BIP-39 wordlists, immutable sau khi load
//
// Registry được tạo một lần và truyền bằng reference, không có global state.
// Index được key theo dạng NFKD nên lookup khớp với phrase đã normalize.

use crate::error::{MnemonicError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::{is_nfkd_quick, IsNormalized, UnicodeNormalization};

/// Số từ trong mỗi wordlist (2^11)
pub const WORDLIST_SIZE: usize = 2048;

/// Supported wordlist languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    ChineseSimplified,
    ChineseTraditional,
    #[default]
    English,
    French,
    Italian,
    Japanese,
    Korean,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::English,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Spanish,
    ];

    /// Tag dùng trong config / CLI
    pub const fn tag(self) -> &'static str {
        match self {
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
            Language::English => "english",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Spanish => "spanish",
        }
    }

    /// Separator khi join words. Japanese dùng ideographic space (U+3000).
    pub const fn separator(self) -> &'static str {
        match self {
            Language::Japanese => "\u{3000}",
            _ => " ",
        }
    }

    const fn position(self) -> usize {
        match self {
            Language::ChineseSimplified => 0,
            Language::ChineseTraditional => 1,
            Language::English => 2,
            Language::French => 3,
            Language::Italian => 4,
            Language::Japanese => 5,
            Language::Korean => 6,
            Language::Spanish => 7,
        }
    }

    fn source(self) -> bip39::Language {
        match self {
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
            Language::English => bip39::Language::English,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
            Language::Spanish => bip39::Language::Spanish,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| WalletError::Config(format!("Unsupported wordlist language '{}'", s)))
    }
}

/// One immutable 2048-word list.
pub struct Wordlist {
    language: Language,
    words: &'static [&'static str; WORDLIST_SIZE],
    index: HashMap<String, u16>,
}

// Không in 2048 words ra Debug output
impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("language", &self.language)
            .field("len", &self.words.len())
            .finish()
    }
}

impl Wordlist {
    fn load(language: Language) -> Self {
        let words = language.source().word_list();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.nfkd().collect::<String>(), i as u16))
            .collect();

        Self {
            language,
            words,
            index,
        }
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    #[inline]
    pub fn words(&self) -> &'static [&'static str; WORDLIST_SIZE] {
        self.words
    }

    /// Word tại `index`, `None` nếu index >= 2048
    #[inline]
    pub fn word_at(&self, index: u16) -> Option<&'static str> {
        self.words.get(usize::from(index)).copied()
    }

    /// Index của `word` trong list. Input được NFKD-normalize trước khi lookup.
    pub fn index_of(&self, word: &str) -> WalletResult<u16> {
        let normalized: Cow<'_, str> = match is_nfkd_quick(word.chars()) {
            IsNormalized::Yes => Cow::Borrowed(word),
            _ => Cow::Owned(word.nfkd().collect()),
        };

        self.index
            .get(normalized.as_ref())
            .copied()
            .ok_or_else(|| MnemonicError::UnknownWord(word.to_string()).into())
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_ok()
    }
}

/// Registry giữ cả 8 wordlists. English là default.
#[derive(Debug)]
pub struct WordlistRegistry {
    lists: Vec<Wordlist>,
}

impl WordlistRegistry {
    pub fn new() -> Self {
        let lists = Language::ALL.into_iter().map(Wordlist::load).collect();
        tracing::debug!(languages = Language::ALL.len(), "wordlist registry loaded");
        Self { lists }
    }

    #[inline]
    pub fn get(&self, language: Language) -> &Wordlist {
        &self.lists[language.position()]
    }

    /// Default wordlist (English)
    #[inline]
    pub fn default_wordlist(&self) -> &Wordlist {
        self.get(Language::default())
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.lists.iter().map(Wordlist::language)
    }
}

impl Default for WordlistRegistry {
    fn default() -> Self {
        Self::new()
    }
}
