//! # Key Pairs
//!
//! Ed25519 key pairs rendered as Stellar StrKeys.
//!
//! A [`KeyPair`] always knows its public key and may or may not know the
//! matching secret. Verify-only pairs come from account ids (`G...`) or raw
//! public keys; signing pairs come from seeds (`S...`), raw secret bytes,
//! mnemonics or the OS RNG.
//!
//! ## Security considerations
//!
//! - Secret keys are zeroized on drop (ed25519-dalek does this for
//!   `SigningKey`).
//! - Key generation uses `OsRng`. Nothing else in this module is random:
//!   Ed25519 signatures are deterministic.
//! - `Debug` output shows the account id only. Never log secret seeds.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

use crate::config::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::derivation::{DerivationPath, HdNode};
use crate::error::{KeyError, Result};
use crate::mnemonic::Mnemonic;
use crate::strkey::{self, MuxedAccount};

use super::signatures::{payload_signer_hint, signature_hint, DecoratedSignature};

/// An Ed25519 key pair, possibly without its secret half.
///
/// # Examples
///
/// ```
/// use stellar_keys::KeyPair;
///
/// let kp = KeyPair::random();
/// let msg = b"payment of 100 XLM";
/// let sig = kp.sign(msg).expect("random key pairs can sign");
/// assert!(kp.verify(msg, sig.as_bytes()));
///
/// let watcher = KeyPair::from_account_id(&kp.account_id()).unwrap();
/// assert!(watcher.sign(msg).is_none());
/// assert!(watcher.verify(msg, sig.as_bytes()));
/// ```
pub struct KeyPair {
    public_key: [u8; 32],
    signing_key: Option<SigningKey>,
}

/// A detached 64-byte Ed25519 signature.
///
/// Stored as `Vec<u8>` for serde compatibility, always exactly 64 bytes when
/// produced by this crate. A signature of any other length simply fails
/// verification.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    bytes: Vec<u8>,
}

impl KeyPair {
    /// Generate a fresh signing key pair from the OS RNG.
    pub fn random() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Build a signing key pair from a raw 32-byte Ed25519 seed.
    pub fn from_raw_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    /// Build a signing key pair from secret bytes of unchecked length.
    pub fn from_private_key(secret: &[u8]) -> Result<Self> {
        let seed: [u8; SECRET_KEY_LENGTH] = secret
            .try_into()
            .map_err(|_| KeyError::length("private key", secret.len()))?;
        Ok(Self::from_raw_seed(&seed))
    }

    /// Build a signing key pair from an `S...` secret seed.
    pub fn from_secret_seed(seed: &str) -> Result<Self> {
        let raw = strkey::decode_secret_seed(seed)?;
        Ok(Self::from_raw_seed(&raw))
    }

    /// Build a verify-only key pair from a raw 32-byte public key.
    ///
    /// The bytes are not checked to be a valid curve point here; an invalid
    /// point just never verifies anything.
    pub fn from_public_key(public_key: &[u8]) -> Result<Self> {
        let public_key: [u8; PUBLIC_KEY_LENGTH] = public_key
            .try_into()
            .map_err(|_| KeyError::length("public key", public_key.len()))?;
        Ok(Self {
            public_key,
            signing_key: None,
        })
    }

    /// Build a verify-only key pair from a `G...` or `M...` account id.
    ///
    /// Muxed ids resolve to their underlying Ed25519 key; the sub-account id
    /// is dropped.
    pub fn from_account_id(account_id: &str) -> Result<Self> {
        let muxed = MuxedAccount::from_account_id(account_id)?;
        Self::from_public_key(muxed.ed25519())
    }

    /// Derive the key pair for account `index` from a mnemonic (SEP-0005).
    ///
    /// Stretches the mnemonic into a BIP-39 seed with `passphrase`, then walks
    /// `m/44'/148'/index'`.
    pub fn from_mnemonic(mnemonic: &Mnemonic, passphrase: &str, index: u32) -> Result<Self> {
        let seed = mnemonic.to_seed(passphrase);
        Self::from_bip39_seed(&seed, index)
    }

    /// Derive the key pair for account `index` from a BIP-39 seed.
    pub fn from_bip39_seed(seed: &[u8], index: u32) -> Result<Self> {
        let path = DerivationPath::for_account(index)?;
        debug!(path = %path, "deriving account key pair");
        let node = HdNode::master(seed)?.derive_path(&path)?;
        Ok(node.key_pair())
    }

    /// Same as [`from_bip39_seed`](Self::from_bip39_seed) with a hex seed.
    pub fn from_bip39_seed_hex(seed_hex: &str, index: u32) -> Result<Self> {
        let seed = hex::decode(seed_hex)?;
        Self::from_bip39_seed(&seed, index)
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        Self {
            public_key: signing_key.verifying_key().to_bytes(),
            signing_key: Some(signing_key),
        }
    }

    /// `true` if this pair holds a secret key.
    pub fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }

    /// The `G...` account id.
    pub fn account_id(&self) -> String {
        strkey::encode_account_id(&self.public_key)
    }

    /// The `S...` secret seed, if the secret is known.
    ///
    /// **Handle with care.** Anyone holding this string controls the account.
    pub fn secret_seed(&self) -> Option<String> {
        self.signing_key
            .as_ref()
            .map(|sk| strkey::encode_secret_seed(&sk.to_bytes()))
    }

    /// Raw 32-byte public key.
    pub fn raw_public_key(&self) -> &[u8; 32] {
        &self.public_key
    }

    /// Raw 32-byte secret seed, if known.
    pub fn raw_private_key(&self) -> Option<[u8; 32]> {
        self.signing_key.as_ref().map(SigningKey::to_bytes)
    }

    /// The muxed-account view of this key, with an optional sub-account id.
    pub fn muxed_account(&self, id: Option<u64>) -> MuxedAccount {
        MuxedAccount::new(self.public_key, id)
    }

    /// The last four bytes of the public key.
    pub fn hint(&self) -> [u8; 4] {
        signature_hint(&self.public_key)
    }

    /// Parse the public key as a dalek `VerifyingKey`.
    ///
    /// Fails if the stored bytes are not a valid Ed25519 point, which is
    /// possible for pairs built from arbitrary public key bytes.
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        VerifyingKey::from_bytes(&self.public_key)
            .map_err(|e| KeyError::CryptoFailure(e.to_string()))
    }

    /// Sign `message`.
    ///
    /// Returns `None` when there is no secret key or the Ed25519 primitive
    /// refuses to sign.
    pub fn sign(&self, message: &[u8]) -> Option<Signature> {
        let signing_key = self.signing_key.as_ref()?;
        let signature = signing_key.try_sign(message).ok()?;
        Some(Signature::from_bytes(signature.to_bytes()))
    }

    /// Sign `message` and attach this key's hint.
    pub fn sign_decorated(&self, message: &[u8]) -> Option<DecoratedSignature> {
        let signature = self.sign(message)?;
        Some(DecoratedSignature::new(self.hint(), signature))
    }

    /// Sign `payload` for a signed-payload signer.
    ///
    /// The hint is the key hint XORed with the payload's last four bytes, so
    /// validators can tell it apart from an ordinary signature by this key.
    pub fn sign_payload_decorated(&self, payload: &[u8]) -> Option<DecoratedSignature> {
        let signature = self.sign(payload)?;
        Some(DecoratedSignature::new(
            payload_signer_hint(&self.public_key, payload),
            signature,
        ))
    }

    /// Verify `signature` over `message` against this key.
    ///
    /// Returns `false` on any failure: wrong length, invalid point, bad
    /// signature. Never panics.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.public_key) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
            return false;
        };
        let signature = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &signature).is_ok()
    }
}

impl Clone for KeyPair {
    /// Cloning copies the secret. Every copy is another thing to protect.
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key,
            signing_key: self
                .signing_key
                .as_ref()
                .map(|sk| SigningKey::from_bytes(&sk.to_bytes())),
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material, not even partially.
        write!(
            f,
            "KeyPair({}, can_sign={})",
            self.account_id(),
            self.can_sign()
        )
    }
}

impl PartialEq for KeyPair {
    /// Two pairs are equal if their public keys match. Comparing secrets in
    /// non-constant time is a bad habit, and the public key is the identity.
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl Hash for KeyPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.public_key.hash(state);
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

impl Signature {
    /// Wrap raw 64 signature bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Wrap a byte slice, checking it is 64 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(KeyError::length("signature", bytes.len()));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex rendering, 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Parse a hex-encoded signature.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::try_from_slice(&hex::decode(s)?)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        if hex_str.len() >= 128 {
            write!(f, "Signature({}...{})", &hex_str[..8], &hex_str[120..])
        } else {
            write!(f, "Signature({})", hex_str)
        }
    }
}
