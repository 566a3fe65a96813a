//! # Hashing Utilities
//!
//! The three hash constructions the key layer needs, and no more:
//!
//! - **SHA-256** for the BIP-39 mnemonic checksum.
//! - **HMAC-SHA512** for SLIP-0010 node derivation.
//! - **PBKDF2-HMAC-SHA512** for stretching a mnemonic into a 64-byte seed.
//!
//! All three are thin wrappers around the RustCrypto crates. The wrappers
//! exist so the rest of the crate deals in fixed-size arrays rather than
//! `GenericArray` plumbing.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

type HmacSha512 = Hmac<Sha512>;

/// Compute SHA-256 and return a fixed-size array.
///
/// # Example
///
/// ```
/// use stellar_keys::crypto::sha256;
///
/// let hash = sha256(b"stellar");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

/// Compute HMAC-SHA512 of `data` keyed with `key`.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> [u8; 64] {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(data);
    let mut output = [0u8; 64];
    output.copy_from_slice(&mac.finalize().into_bytes());
    output
}

/// HMAC-SHA512 over several message parts without concatenating them first.
///
/// SLIP-0010 child derivation feeds `0x00 ‖ key ‖ index` into the MAC; this
/// keeps the private key out of a temporary buffer.
pub fn hmac_sha512_parts(key: &[u8], parts: &[&[u8]]) -> [u8; 64] {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts any key length");
    for part in parts {
        mac.update(part);
    }
    let mut output = [0u8; 64];
    output.copy_from_slice(&mac.finalize().into_bytes());
    output
}

/// PBKDF2 with HMAC-SHA512, producing a 64-byte key.
pub fn pbkdf2_sha512(password: &[u8], salt: &[u8], rounds: u32) -> [u8; 64] {
    let mut output = [0u8; 64];
    pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut output);
    output
}
