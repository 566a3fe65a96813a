//! # Signatures and Hints
//!
//! Free-standing verification helpers and the decorated-signature shape
//! Stellar transactions carry.
//!
//! A transaction envelope does not say which signer produced which signature.
//! Instead each signature is "decorated" with a four-byte hint, the last four
//! bytes of the signer's public key, so validators can match signatures to
//! signers without trying every combination.
//!
//! Verification here uses `ed25519-dalek`'s default checks. Any failure is
//! reported as a plain `false` or [`KeyError::CryptoFailure`]; callers get no
//! detail on *why* a signature was rejected.

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{SIGNATURE_HINT_LENGTH, SIGNATURE_LENGTH};
use crate::error::{KeyError, Result};

use super::keys::Signature;

/// A signature paired with the hint identifying its signer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedSignature {
    hint: [u8; SIGNATURE_HINT_LENGTH],
    signature: Signature,
}

impl DecoratedSignature {
    /// Pair a signature with the hint of the key that made it.
    pub fn new(hint: [u8; SIGNATURE_HINT_LENGTH], signature: Signature) -> Self {
        Self { hint, signature }
    }

    /// Last four bytes of the signer key (XORed with the payload tail for
    /// signed-payload signers).
    pub fn hint(&self) -> &[u8; SIGNATURE_HINT_LENGTH] {
        &self.hint
    }

    /// The 64-byte Ed25519 signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl fmt::Debug for DecoratedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecoratedSignature(hint={}, {:?})",
            hex::encode(self.hint),
            self.signature
        )
    }
}

/// The last four bytes of an Ed25519 public key.
pub fn signature_hint(public_key: &[u8; 32]) -> [u8; SIGNATURE_HINT_LENGTH] {
    let mut hint = [0u8; SIGNATURE_HINT_LENGTH];
    hint.copy_from_slice(&public_key[32 - SIGNATURE_HINT_LENGTH..]);
    hint
}

/// Hint for a signed-payload signer.
///
/// The key hint XORed with the last four bytes of the payload. Payloads
/// shorter than four bytes are right-aligned against the hint, leaving the
/// leading hint bytes untouched.
pub fn payload_signer_hint(public_key: &[u8; 32], payload: &[u8]) -> [u8; SIGNATURE_HINT_LENGTH] {
    let mut hint = signature_hint(public_key);
    let tail = &payload[payload.len().saturating_sub(SIGNATURE_HINT_LENGTH)..];
    let offset = SIGNATURE_HINT_LENGTH - tail.len();
    for (h, p) in hint[offset..].iter_mut().zip(tail) {
        *h ^= p;
    }
    hint
}

/// Verify `signature` over `message` with a raw public key.
///
/// Returns `false` for malformed keys or signatures as well as for a bad
/// signature. Never panics.
pub fn verify(public_key: &[u8; 32], message: &[u8], signature: &[u8]) -> bool {
    let Ok(signature) = <&[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
        return false;
    };
    verify_raw(public_key, message, signature).is_ok()
}

/// Verify a signature from raw wire bytes, with an error on failure.
pub fn verify_raw(
    public_key: &[u8; 32],
    message: &[u8],
    signature: &[u8; SIGNATURE_LENGTH],
) -> Result<()> {
    let verifying_key = VerifyingKey::from_bytes(public_key)
        .map_err(|_| KeyError::CryptoFailure("invalid public key".to_string()))?;
    let signature = DalekSignature::from_bytes(signature);
    verifying_key
        .verify(message, &signature)
        .map_err(|_| KeyError::CryptoFailure("signature verification failed".to_string()))
}

/// Verify many `(public key, message, signature)` triples.
///
/// All must be valid. The error does not say which one failed; verify
/// individually if you need to know. An empty batch is valid.
pub fn batch_verify(items: &[([u8; 32], Vec<u8>, Signature)]) -> Result<()> {
    for (public_key, message, signature) in items {
        if !verify(public_key, message, signature.as_bytes()) {
            return Err(KeyError::CryptoFailure(
                "signature verification failed".to_string(),
            ));
        }
    }
    Ok(())
}
