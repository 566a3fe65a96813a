//! StrKey version bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config;

/// The kind of identifier a StrKey carries, encoded as its version byte.
///
/// Each discriminant is `tag << 3`, so the leading base32 character of the
/// encoded string is fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VersionByte {
    /// Ed25519 public key, `G...`.
    AccountId = config::ACCOUNT_ID_TAG << 3,
    /// Ed25519 public key plus a 64-bit id, `M...`.
    MuxedAccount = config::MUXED_ACCOUNT_TAG << 3,
    /// Ed25519 secret seed, `S...`.
    Seed = config::SEED_TAG << 3,
    /// Pre-authorized transaction hash, `T...`.
    PreAuthTx = config::PRE_AUTH_TX_TAG << 3,
    /// SHA-256 hash-x signer, `X...`.
    Sha256Hash = config::SHA256_HASH_TAG << 3,
    /// Ed25519 signed payload signer, `P...`.
    SignedPayload = config::SIGNED_PAYLOAD_TAG << 3,
    /// Contract id, `C...`.
    ContractId = config::CONTRACT_ID_TAG << 3,
}

impl VersionByte {
    /// Every known kind, in tag order.
    pub const ALL: [VersionByte; 7] = [
        VersionByte::ContractId,
        VersionByte::AccountId,
        VersionByte::MuxedAccount,
        VersionByte::SignedPayload,
        VersionByte::Seed,
        VersionByte::PreAuthTx,
        VersionByte::Sha256Hash,
    ];

    /// The raw version byte.
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its raw version byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_byte() == byte)
    }

    /// The base32 character every StrKey of this kind starts with.
    pub const fn prefix(self) -> char {
        match self {
            VersionByte::AccountId => 'G',
            VersionByte::MuxedAccount => 'M',
            VersionByte::Seed => 'S',
            VersionByte::PreAuthTx => 'T',
            VersionByte::Sha256Hash => 'X',
            VersionByte::SignedPayload => 'P',
            VersionByte::ContractId => 'C',
        }
    }

    /// Look up a kind by the leading character of an encoded StrKey.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.prefix() == prefix)
    }

    /// Short human-readable name, used in CLI output and logs.
    pub const fn name(self) -> &'static str {
        match self {
            VersionByte::AccountId => "account_id",
            VersionByte::MuxedAccount => "muxed_account",
            VersionByte::Seed => "secret_seed",
            VersionByte::PreAuthTx => "pre_auth_tx",
            VersionByte::Sha256Hash => "sha256_hash",
            VersionByte::SignedPayload => "signed_payload",
            VersionByte::ContractId => "contract_id",
        }
    }
}

impl From<VersionByte> for u8 {
    fn from(version: VersionByte) -> u8 {
        version.as_byte()
    }
}

impl fmt::Display for VersionByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
