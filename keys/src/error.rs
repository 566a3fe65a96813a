//! Error types for the key layer.
//!
//! Every fallible operation in this crate returns a [`KeyError`]. The enum is
//! flat on purpose: callers match on the variant they care about and treat
//! the rest as "bad input". Messages never include key material.

use std::path::PathBuf;

use thiserror::Error;

/// Shorthand result type used across the crate.
pub type Result<T> = std::result::Result<T, KeyError>;

/// Errors raised while encoding, decoding, deriving or loading key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key, payload or seed bytes have the wrong size.
    #[error("invalid {field} length: got {got} bytes")]
    InvalidLength {
        /// What was being measured.
        field: &'static str,
        /// The length that was actually supplied.
        got: usize,
    },

    /// The string is not canonical unpadded base32.
    #[error("invalid strkey encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded version byte is not the one the caller asked for.
    #[error("invalid version byte: expected {expected:#04x}, got {got:#04x}")]
    InvalidVersionByte {
        /// Version byte the caller expected.
        expected: u8,
        /// Version byte found in the decoded data.
        got: u8,
    },

    /// The CRC16 checksum of a StrKey does not match its contents.
    #[error("invalid strkey checksum")]
    InvalidChecksum,

    /// The leading character does not belong to any known StrKey kind.
    #[error("unknown strkey prefix: {0:?}")]
    UnknownVersionPrefix(char),

    /// Mnemonic entropy must be 16, 20, 24, 28 or 32 bytes.
    #[error("invalid entropy length: {0} bytes (must be 16, 20, 24, 28 or 32)")]
    InvalidEntropyLength(usize),

    /// Mnemonics have 12, 15, 18, 21 or 24 words.
    #[error("invalid word count: {0} (must be 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),

    /// The checksum bits embedded in a mnemonic do not match its entropy.
    #[error("mnemonic checksum mismatch")]
    ChecksumMismatch,

    /// A mnemonic word is not in the word list. Positions are 1-based.
    #[error("unknown word at position {position}: {word:?}")]
    UnknownWord {
        /// 1-based position of the offending word.
        position: usize,
        /// The word as supplied.
        word: String,
    },

    /// The derivation path is malformed or contains a non-hardened segment.
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    /// Child indices must be below 2^31 before hardening.
    #[error("index {0} is already in the hardened range")]
    NonHardenedIndex(u32),

    /// No word list exists for the requested language.
    #[error("unsupported word list language: {0}")]
    UnsupportedLanguage(String),

    /// A word list dataset does not hold exactly 2048 distinct words.
    #[error("corrupt word list for {language}: expected 2048 distinct words, found {count}")]
    CorruptWordList {
        /// Language code of the dataset.
        language: String,
        /// Number of words actually found.
        count: usize,
    },

    /// A different list is already registered for this language.
    #[error("word list for {0} is already installed")]
    WordListInstalled(String),

    /// A word list file could not be read.
    #[error("failed to read word list {}: {source}", .path.display())]
    WordListIo {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Hex input could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The Ed25519 primitive rejected its input.
    #[error("ed25519 failure: {0}")]
    CryptoFailure(String),
}

impl KeyError {
    pub(crate) fn length(field: &'static str, got: usize) -> Self {
        KeyError::InvalidLength { field, got }
    }
}
