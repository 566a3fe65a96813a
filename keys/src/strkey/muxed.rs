//! # Muxed Accounts (`M...`)
//!
//! A muxed account is an Ed25519 account id plus a 64-bit sub-account id,
//! letting a custodian share one on-ledger account between many users. The
//! StrKey body is the 32-byte key followed by the id as a big-endian u64.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{KEY_PAYLOAD_LENGTH, MUXED_PAYLOAD_LENGTH};
use crate::error::{KeyError, Result};

use super::codec::{decode_account_id, decode_check, encode_account_id, encode_check};
use super::version::VersionByte;

/// An account that may carry a sub-account id.
///
/// Without an id this is a plain account and renders as `G...`; with one it
/// renders as `M...`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuxedAccount {
    ed25519: [u8; 32],
    id: Option<u64>,
}

impl MuxedAccount {
    /// Wrap an Ed25519 public key with an optional sub-account id.
    pub fn new(ed25519: [u8; 32], id: Option<u64>) -> Self {
        Self { ed25519, id }
    }

    /// Parse a `G...` or `M...` account id.
    pub fn from_account_id(account_id: &str) -> Result<Self> {
        match account_id.chars().next() {
            Some('M') => {
                let payload = decode_check(VersionByte::MuxedAccount, account_id)?;
                if payload.len() != MUXED_PAYLOAD_LENGTH {
                    return Err(KeyError::length("muxed account", payload.len()));
                }
                let (key, id) = payload.split_at(KEY_PAYLOAD_LENGTH);
                let mut ed25519 = [0u8; 32];
                ed25519.copy_from_slice(key);
                let mut id_bytes = [0u8; 8];
                id_bytes.copy_from_slice(id);
                Ok(Self::new(ed25519, Some(u64::from_be_bytes(id_bytes))))
            }
            _ => Ok(Self::new(decode_account_id(account_id)?, None)),
        }
    }

    /// The underlying Ed25519 public key.
    pub fn ed25519(&self) -> &[u8; 32] {
        &self.ed25519
    }

    /// The sub-account id, if any.
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// `M...` when an id is present, otherwise `G...`.
    pub fn account_id(&self) -> String {
        match self.id {
            Some(id) => encode_muxed_account(&self.ed25519, id),
            None => encode_account_id(&self.ed25519),
        }
    }

    /// The plain `G...` account id of the underlying key.
    pub fn ed25519_account_id(&self) -> String {
        encode_account_id(&self.ed25519)
    }
}

/// Encode an Ed25519 key and sub-account id as an `M...` StrKey.
pub fn encode_muxed_account(ed25519: &[u8; 32], id: u64) -> String {
    let mut payload = [0u8; MUXED_PAYLOAD_LENGTH];
    payload[..KEY_PAYLOAD_LENGTH].copy_from_slice(ed25519);
    payload[KEY_PAYLOAD_LENGTH..].copy_from_slice(&id.to_be_bytes());
    encode_check(VersionByte::MuxedAccount, &payload)
}

/// `true` if `encoded` is a well-formed `M...` StrKey.
pub fn is_valid_muxed_account_id(encoded: &str) -> bool {
    encoded.starts_with('M') && MuxedAccount::from_account_id(encoded).is_ok()
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.account_id())
    }
}

impl fmt::Debug for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MuxedAccount({})", self.account_id())
    }
}
