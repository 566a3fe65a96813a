// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Stellar Keys
//!
//! The cryptographic identity layer of a Stellar client: everything needed to
//! turn randomness or a recovery phrase into signing keys, and to move those
//! keys around as human-copyable strings.
//!
//! ## Architecture
//!
//! - **config**: Protocol constants: version tags, lengths, BIP-39 and
//!   SLIP-0010 parameters.
//! - **error**: The single `KeyError` enum every fallible call returns.
//! - **crypto**: CRC16, SHA-2 constructions, Ed25519 key pairs and signature
//!   hints.
//! - **strkey**: Typed, checksummed base32 identifiers (`G...`, `S...`,
//!   `M...`, `P...` and friends).
//! - **mnemonic**: Word lists and BIP-39 phrases.
//! - **derivation**: SLIP-0010 hardened derivation along `m/44'/148'/N'`.
//!
//! ## Example
//!
//! ```
//! use stellar_keys::{KeyPair, Mnemonic};
//!
//! let mnemonic = Mnemonic::from_phrase(
//!     "illness spike retreat truth genius clock brain pass fit cave bargain toe",
//!     "english",
//! )
//! .unwrap();
//! let kp = KeyPair::from_mnemonic(&mnemonic, "", 0).unwrap();
//! assert_eq!(
//!     kp.account_id(),
//!     "GDRXE2BQUC3AZNPVFSCEZ76NJ3WWL25FYFK6RGZGIEKWE4SOOHSUJUJ6"
//! );
//! ```
//!
//! Everything is synchronous and deterministic except key and mnemonic
//! generation, which draw from the OS RNG.

pub mod config;
pub mod crypto;
pub mod derivation;
pub mod error;
pub mod mnemonic;
pub mod strkey;

pub use crypto::{DecoratedSignature, KeyPair, Signature};
pub use derivation::{DerivationPath, HdNode};
pub use error::{KeyError, Result};
pub use mnemonic::{Mnemonic, WordList};
pub use strkey::{MuxedAccount, SignedPayloadSigner, VersionByte};
