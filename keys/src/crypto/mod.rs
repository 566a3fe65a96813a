//! # Cryptographic Primitives
//!
//! Everything below the StrKey and mnemonic layers: the CRC16 used by StrKey
//! checksums, the SHA-2 family constructions used by BIP-39 and SLIP-0010, and
//! Ed25519 key pairs and signatures.
//!
//! Nothing here implements a primitive from scratch except CRC16, which is
//! not a cryptographic hash. Ed25519 comes from `ed25519-dalek`, the hashes
//! from the RustCrypto `sha2`/`hmac`/`pbkdf2` crates.

pub mod checksum;
pub mod hash;
pub mod keys;
pub mod signatures;

pub use checksum::crc16;
pub use hash::{hmac_sha512, pbkdf2_sha512, sha256};
pub use keys::{KeyPair, Signature};
pub use signatures::{
    batch_verify, payload_signer_hint, signature_hint, verify, verify_raw, DecoratedSignature,
};
