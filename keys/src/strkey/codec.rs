//! # StrKey Codec
//!
//! Wire format (SEP-0023):
//!
//! ```text
//! base32_nopad( version(1) ‖ payload(N) ‖ crc16_le(version ‖ payload)(2) )
//! ```
//!
//! Decoding always takes the version the caller expects. A seed handed to
//! something that wants an account id is an error, never a silent
//! reinterpretation.

use data_encoding::BASE32_NOPAD;

use crate::config::{CHECKSUM_LENGTH, KEY_PAYLOAD_LENGTH, MIN_DECODED_LENGTH};
use crate::crypto::checksum::{crc16, crc16_le_bytes};
use crate::error::{KeyError, Result};

use super::version::VersionByte;

/// Encode `payload` as a StrKey of the given kind.
pub fn encode_check(version: VersionByte, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LENGTH);
    data.push(version.as_byte());
    data.extend_from_slice(payload);
    let checksum = crc16_le_bytes(&data);
    data.extend_from_slice(&checksum);

    BASE32_NOPAD.encode(&data)
}

/// Decode a StrKey, checking its version byte and checksum.
///
/// Returns the payload between the version byte and the checksum.
pub fn decode_check(expected: VersionByte, encoded: &str) -> Result<Vec<u8>> {
    let data = BASE32_NOPAD
        .decode(encoded.as_bytes())
        .map_err(|e| KeyError::InvalidEncoding(e.to_string()))?;

    if data.len() < MIN_DECODED_LENGTH {
        return Err(KeyError::length("strkey", data.len()));
    }

    let version = data[0];
    if version != expected.as_byte() {
        return Err(KeyError::InvalidVersionByte {
            expected: expected.as_byte(),
            got: version,
        });
    }

    let (body, checksum) = data.split_at(data.len() - CHECKSUM_LENGTH);
    let stored = u16::from_le_bytes([checksum[0], checksum[1]]);
    if crc16(body) != stored {
        return Err(KeyError::InvalidChecksum);
    }

    Ok(body[1..].to_vec())
}

/// Decode any StrKey, picking the expected version from its first character.
pub fn decode_any(encoded: &str) -> Result<(VersionByte, Vec<u8>)> {
    let first = encoded
        .chars()
        .next()
        .ok_or_else(|| KeyError::InvalidEncoding("empty string".into()))?;
    let version = VersionByte::from_prefix(first).ok_or(KeyError::UnknownVersionPrefix(first))?;
    let payload = decode_check(version, encoded)?;
    Ok((version, payload))
}

fn decode_key(version: VersionByte, field: &'static str, encoded: &str) -> Result<[u8; 32]> {
    let payload = decode_check(version, encoded)?;
    to_key_array(field, &payload)
}

pub(crate) fn to_key_array(field: &'static str, bytes: &[u8]) -> Result<[u8; 32]> {
    <[u8; KEY_PAYLOAD_LENGTH]>::try_from(bytes).map_err(|_| KeyError::length(field, bytes.len()))
}

// ---------------------------------------------------------------------------
// Account ids (G...)
// ---------------------------------------------------------------------------

/// Encode an Ed25519 public key as an account id.
///
/// ```
/// use stellar_keys::strkey;
///
/// let id = strkey::encode_account_id(&[0u8; 32]);
/// assert_eq!(id, "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF");
/// ```
pub fn encode_account_id(public_key: &[u8; 32]) -> String {
    encode_check(VersionByte::AccountId, public_key)
}

/// Decode an account id into its Ed25519 public key.
pub fn decode_account_id(account_id: &str) -> Result<[u8; 32]> {
    decode_key(VersionByte::AccountId, "account id", account_id)
}

/// `true` if `account_id` is a well-formed `G...` StrKey.
pub fn is_valid_account_id(account_id: &str) -> bool {
    decode_account_id(account_id).is_ok()
}

// ---------------------------------------------------------------------------
// Secret seeds (S...)
// ---------------------------------------------------------------------------

/// Encode an Ed25519 secret seed.
pub fn encode_secret_seed(seed: &[u8; 32]) -> String {
    encode_check(VersionByte::Seed, seed)
}

/// Decode a secret seed into its raw 32 bytes.
pub fn decode_secret_seed(seed: &str) -> Result<[u8; 32]> {
    decode_key(VersionByte::Seed, "secret seed", seed)
}

/// `true` if `seed` is a well-formed `S...` StrKey.
pub fn is_valid_secret_seed(seed: &str) -> bool {
    decode_secret_seed(seed).is_ok()
}

// ---------------------------------------------------------------------------
// Pre-authorized transactions (T...) and hash-x signers (X...)
// ---------------------------------------------------------------------------

/// Encode a pre-authorized transaction hash.
pub fn encode_pre_auth_tx(hash: &[u8; 32]) -> String {
    encode_check(VersionByte::PreAuthTx, hash)
}

/// Decode a pre-authorized transaction hash.
pub fn decode_pre_auth_tx(encoded: &str) -> Result<[u8; 32]> {
    decode_key(VersionByte::PreAuthTx, "pre-auth tx hash", encoded)
}

/// `true` if `encoded` is a well-formed `T...` StrKey.
pub fn is_valid_pre_auth_tx(encoded: &str) -> bool {
    decode_pre_auth_tx(encoded).is_ok()
}

/// Encode a SHA-256 hash-x signer.
pub fn encode_sha256_hash(hash: &[u8; 32]) -> String {
    encode_check(VersionByte::Sha256Hash, hash)
}

/// Decode a SHA-256 hash-x signer.
pub fn decode_sha256_hash(encoded: &str) -> Result<[u8; 32]> {
    decode_key(VersionByte::Sha256Hash, "sha256 hash", encoded)
}

/// `true` if `encoded` is a well-formed `X...` StrKey.
pub fn is_valid_sha256_hash(encoded: &str) -> bool {
    decode_sha256_hash(encoded).is_ok()
}

// ---------------------------------------------------------------------------
// Contract ids (C...)
// ---------------------------------------------------------------------------

/// Encode a 32-byte contract id.
pub fn encode_contract_id(contract_id: &[u8; 32]) -> String {
    encode_check(VersionByte::ContractId, contract_id)
}

/// Decode a contract id.
pub fn decode_contract_id(encoded: &str) -> Result<[u8; 32]> {
    decode_key(VersionByte::ContractId, "contract id", encoded)
}

/// Encode a contract id given as 64 hex characters.
pub fn encode_contract_id_hex(contract_id_hex: &str) -> Result<String> {
    let bytes = hex::decode(contract_id_hex)?;
    let contract_id = to_key_array("contract id", &bytes)?;
    Ok(encode_contract_id(&contract_id))
}

/// Decode a contract id into lowercase hex.
pub fn decode_contract_id_hex(encoded: &str) -> Result<String> {
    decode_contract_id(encoded).map(hex::encode)
}

/// `true` if `encoded` is a well-formed `C...` StrKey.
pub fn is_valid_contract_id(encoded: &str) -> bool {
    decode_contract_id(encoded).is_ok()
}
