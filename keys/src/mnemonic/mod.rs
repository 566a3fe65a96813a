//! # Mnemonics
//!
//! BIP-39 recovery phrases and the word lists behind them.

pub mod bip39;
pub mod wordlist;

pub use bip39::Mnemonic;
pub use wordlist::WordList;
