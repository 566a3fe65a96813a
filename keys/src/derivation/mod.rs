//! # Hierarchical Derivation
//!
//! SLIP-0010 derivation over Ed25519, as used by SEP-0005 wallets.
//!
//! A 64-byte BIP-39 seed becomes a master node; every account lives at
//! `m/44'/148'/N'`, where 44 is the BIP-44 purpose and 148 is Stellar's
//! registered coin type. All levels are hardened.
//!
//! ```
//! use stellar_keys::derivation::{DerivationPath, HdNode};
//!
//! let master = HdNode::master(&[0x42; 64]).unwrap();
//! let account = master
//!     .derive_path(&DerivationPath::for_account(0).unwrap())
//!     .unwrap();
//! assert!(account.key_pair().account_id().starts_with('G'));
//! ```

pub mod node;
pub mod path;

pub use node::HdNode;
pub use path::DerivationPath;
