//! # BIP-39 Mnemonics
//!
//! Entropy ↔ word sequence conversion and seed stretching.
//!
//! ```text
//! entropy (128..256 bits) ‖ first ENT/32 bits of SHA-256(entropy)
//!   → split into 11-bit groups → word list lookups
//! ```
//!
//! | Words | Entropy bits | Checksum bits |
//! |-------|--------------|---------------|
//! | 12    | 128          | 4             |
//! | 15    | 160          | 5             |
//! | 18    | 192          | 6             |
//! | 21    | 224          | 7             |
//! | 24    | 256          | 8             |
//!
//! The seed fed to HD derivation is PBKDF2-HMAC-SHA512 over the words, not
//! the entropy, so a passphrase yields an entirely different wallet.
//!
//! Phrases are matched against the word list case-insensitively and stored
//! in the list's canonical spelling. No Unicode normalisation is applied.

use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use std::sync::Arc;

use crate::config::{
    BITS_PER_WORD, PBKDF2_ROUNDS, PBKDF2_SALT_PREFIX, SUPPORTED_ENTROPY_LENGTHS,
    SUPPORTED_WORD_COUNTS,
};
use crate::crypto::hash::{pbkdf2_sha512, sha256};
use crate::error::{KeyError, Result};

use super::wordlist::WordList;

/// A validated mnemonic sentence together with the entropy it encodes.
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<String>,
    entropy: Vec<u8>,
    language: Arc<WordList>,
}

impl Mnemonic {
    /// Encode `entropy` as a mnemonic in `language`.
    ///
    /// # Errors
    ///
    /// [`KeyError::InvalidEntropyLength`] unless the entropy is 16, 20, 24,
    /// 28 or 32 bytes.
    pub fn from_entropy(entropy: &[u8], language: &str) -> Result<Self> {
        if !SUPPORTED_ENTROPY_LENGTHS.contains(&entropy.len()) {
            return Err(KeyError::InvalidEntropyLength(entropy.len()));
        }
        let list = WordList::for_language(language)?;

        let entropy_bits = entropy.len() * 8;
        let checksum_bits = entropy_bits / 32;
        let hash = sha256(entropy);
        let bit = |i: usize| {
            if i < entropy_bits {
                bit_at(entropy, i)
            } else {
                bit_at(&hash, i - entropy_bits)
            }
        };

        let word_count = (entropy_bits + checksum_bits) / BITS_PER_WORD;
        let mut words = Vec::with_capacity(word_count);
        for w in 0..word_count {
            let index = (0..BITS_PER_WORD)
                .fold(0usize, |acc, j| (acc << 1) | bit(w * BITS_PER_WORD + j) as usize);
            let word = list.word_at(index).ok_or_else(|| KeyError::CorruptWordList {
                language: list.language().to_string(),
                count: list.len(),
            })?;
            words.push(word.to_string());
        }

        Ok(Self {
            words,
            entropy: entropy.to_vec(),
            language: list,
        })
    }

    /// Generate a fresh mnemonic of `word_count` words from the OS RNG.
    ///
    /// # Errors
    ///
    /// [`KeyError::InvalidWordCount`] unless the count is 12, 15, 18, 21 or
    /// 24.
    pub fn generate(word_count: usize, language: &str) -> Result<Self> {
        if !SUPPORTED_WORD_COUNTS.contains(&word_count) {
            return Err(KeyError::InvalidWordCount(word_count));
        }
        let entropy_bits = word_count * BITS_PER_WORD * 32 / 33;
        let mut entropy = vec![0u8; entropy_bits / 8];
        OsRng.fill_bytes(&mut entropy);
        Self::from_entropy(&entropy, language)
    }

    /// Rebuild a mnemonic from its words.
    ///
    /// Words are looked up case-insensitively. With `verify_checksum` off,
    /// a sentence with bad checksum bits is accepted and its entropy is
    /// taken as-is.
    ///
    /// # Errors
    ///
    /// - [`KeyError::InvalidWordCount`] for an unsupported number of words.
    /// - [`KeyError::UnknownWord`] with the 1-based position of the first
    ///   word missing from the list.
    /// - [`KeyError::ChecksumMismatch`] if verification is on and fails.
    pub fn from_words<S: AsRef<str>>(
        words: &[S],
        language: &str,
        verify_checksum: bool,
    ) -> Result<Self> {
        if !SUPPORTED_WORD_COUNTS.contains(&words.len()) {
            return Err(KeyError::InvalidWordCount(words.len()));
        }
        let list = WordList::for_language(language)?;

        let mut indices = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let index = list
                .index_of(word, true)
                .ok_or_else(|| KeyError::UnknownWord {
                    position: i + 1,
                    word: word.to_string(),
                })?;
            indices.push(index);
        }

        let total_bits = indices.len() * BITS_PER_WORD;
        let checksum_bits = total_bits / 33;
        let entropy_bits = total_bits - checksum_bits;
        let bit = |i: usize| {
            let shift = BITS_PER_WORD - 1 - i % BITS_PER_WORD;
            (indices[i / BITS_PER_WORD] >> shift) & 1 == 1
        };

        let mut entropy = vec![0u8; entropy_bits / 8];
        for i in 0..entropy_bits {
            if bit(i) {
                entropy[i / 8] |= 0x80 >> (i % 8);
            }
        }

        if verify_checksum {
            let hash = sha256(&entropy);
            let matches = (0..checksum_bits).all(|i| bit(entropy_bits + i) == bit_at(&hash, i));
            if !matches {
                return Err(KeyError::ChecksumMismatch);
            }
        }

        let words = indices
            .iter()
            .filter_map(|&i| list.word_at(i).map(str::to_string))
            .collect();

        Ok(Self {
            words,
            entropy,
            language: list,
        })
    }

    /// Parse a whitespace-separated sentence, verifying its checksum.
    pub fn from_phrase(phrase: &str, language: &str) -> Result<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        Self::from_words(&words, language, true)
    }

    /// Stretch the mnemonic into a 64-byte BIP-39 seed.
    ///
    /// An empty passphrase is the usual choice; any other value selects a
    /// different, equally valid wallet.
    pub fn to_seed(&self, passphrase: &str) -> [u8; 64] {
        let salt = format!("{}{}", PBKDF2_SALT_PREFIX, passphrase);
        pbkdf2_sha512(self.phrase().as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS)
    }

    /// [`to_seed`](Self::to_seed) as lowercase hex.
    pub fn to_seed_hex(&self, passphrase: &str) -> String {
        hex::encode(self.to_seed(passphrase))
    }

    /// The words in order, spelled as in the word list.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words joined by single spaces.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    /// The 16 to 32 bytes of entropy the words encode.
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// Entropy as lowercase hex.
    pub fn entropy_hex(&self) -> String {
        hex::encode(&self.entropy)
    }

    /// Word-list indices of each word, in order.
    pub fn word_indices(&self) -> Vec<usize> {
        self.words
            .iter()
            .filter_map(|w| self.language.index_of(w, false))
            .collect()
    }

    /// 12, 15, 18, 21 or 24.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Language code of the word list this mnemonic was built from.
    pub fn language(&self) -> &str {
        self.language.language()
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mnemonic({} words, {})",
            self.words.len(),
            self.language()
        )
    }
}

fn bit_at(bytes: &[u8], i: usize) -> bool {
    (bytes[i / 8] >> (7 - i % 8)) & 1 == 1
}
