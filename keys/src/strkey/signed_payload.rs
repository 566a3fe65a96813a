//! # Signed Payload Signers (`P...`)
//!
//! CAP-0040 signers bind an Ed25519 key to a short payload. The StrKey body is
//! the XDR encoding of `{ ed25519: opaque[32], payload: opaque<64> }`:
//!
//! ```text
//! ed25519(32) ‖ u32_be(len) ‖ payload(len) ‖ zero padding to a multiple of 4
//! ```
//!
//! wrapped in the usual version byte and checksum. With a 4-byte payload the
//! whole thing is 43 bytes (69 characters); with 64 bytes it is 103 bytes
//! (165 characters).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{KEY_PAYLOAD_LENGTH, SIGNED_PAYLOAD_MAX_LENGTH, SIGNED_PAYLOAD_MIN_LENGTH};
use crate::error::{KeyError, Result};

use super::codec::{decode_check, encode_check, to_key_array};
use super::version::VersionByte;

/// An Ed25519 public key paired with the payload it must sign.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSigner")]
pub struct SignedPayloadSigner {
    ed25519: [u8; 32],
    payload: Vec<u8>,
}

/// Wire shape of [`SignedPayloadSigner`], checked through `new` on the way in.
#[derive(Deserialize)]
struct RawSigner {
    ed25519: [u8; 32],
    payload: Vec<u8>,
}

impl TryFrom<RawSigner> for SignedPayloadSigner {
    type Error = KeyError;

    fn try_from(raw: RawSigner) -> Result<Self> {
        Self::new(raw.ed25519, &raw.payload)
    }
}

impl SignedPayloadSigner {
    /// Build a signer, rejecting payloads outside 4..=64 bytes.
    pub fn new(ed25519: [u8; 32], payload: &[u8]) -> Result<Self> {
        if !(SIGNED_PAYLOAD_MIN_LENGTH..=SIGNED_PAYLOAD_MAX_LENGTH).contains(&payload.len()) {
            return Err(KeyError::length("signed payload", payload.len()));
        }
        Ok(Self {
            ed25519,
            payload: payload.to_vec(),
        })
    }

    /// Build a signer from a `G...` account id and a payload.
    pub fn from_account_id(account_id: &str, payload: &[u8]) -> Result<Self> {
        let ed25519 = super::codec::decode_account_id(account_id)?;
        Self::new(ed25519, payload)
    }

    /// The signer's Ed25519 public key.
    pub fn ed25519(&self) -> &[u8; 32] {
        &self.ed25519
    }

    /// The payload the signer must sign.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The `G...` account id of the signing key.
    pub fn account_id(&self) -> String {
        super::codec::encode_account_id(&self.ed25519)
    }

    /// Signature hint for this signer: the key's hint XORed with the last
    /// four bytes of the payload.
    pub fn hint(&self) -> [u8; 4] {
        crate::crypto::signatures::payload_signer_hint(&self.ed25519, &self.payload)
    }

    /// XDR body: key, big-endian length, payload, zero padding.
    fn to_xdr(&self) -> Vec<u8> {
        let padding = padding_for(self.payload.len());
        let mut body = Vec::with_capacity(KEY_PAYLOAD_LENGTH + 4 + self.payload.len() + padding);
        body.extend_from_slice(&self.ed25519);
        body.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        body.extend_from_slice(&self.payload);
        body.resize(body.len() + padding, 0);
        body
    }

    fn from_xdr(body: &[u8]) -> Result<Self> {
        let malformed = || KeyError::length("signed payload body", body.len());

        if body.len() < KEY_PAYLOAD_LENGTH + 4 {
            return Err(malformed());
        }
        let (key, rest) = body.split_at(KEY_PAYLOAD_LENGTH);
        let (len_prefix, data) = rest.split_at(4);
        let declared = u32::from_be_bytes([len_prefix[0], len_prefix[1], len_prefix[2], len_prefix[3]])
            as usize;

        if declared > SIGNED_PAYLOAD_MAX_LENGTH {
            return Err(KeyError::length("signed payload", declared));
        }
        if data.len() != declared + padding_for(declared) {
            return Err(malformed());
        }
        let (payload, padding) = data.split_at(declared);
        if padding.iter().any(|&b| b != 0) {
            return Err(malformed());
        }

        Self::new(to_key_array("signed payload key", key)?, payload)
    }
}

fn padding_for(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Encode a signed payload signer as a `P...` StrKey.
pub fn encode_signed_payload(signer: &SignedPayloadSigner) -> String {
    encode_check(VersionByte::SignedPayload, &signer.to_xdr())
}

/// Decode a `P...` StrKey.
pub fn decode_signed_payload(encoded: &str) -> Result<SignedPayloadSigner> {
    let body = decode_check(VersionByte::SignedPayload, encoded)?;
    SignedPayloadSigner::from_xdr(&body)
}

/// `true` if `encoded` is a well-formed `P...` StrKey.
pub fn is_valid_signed_payload(encoded: &str) -> bool {
    decode_signed_payload(encoded).is_ok()
}

impl fmt::Display for SignedPayloadSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_signed_payload(self))
    }
}

impl fmt::Debug for SignedPayloadSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SignedPayloadSigner({}, {} bytes)",
            self.account_id(),
            self.payload.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SIGNED_PAYLOAD_MAX_ENCODED_LENGTH, SIGNED_PAYLOAD_MIN_ENCODED_LENGTH};

    const ACCOUNT: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";

    fn payload(len: usize) -> Vec<u8> {
        (1..=len as u8).collect()
    }

    #[test]
    fn four_byte_payload_vector() {
        let signer = SignedPayloadSigner::from_account_id(ACCOUNT, &payload(4)).unwrap();
        let encoded = encode_signed_payload(&signer);
        assert_eq!(
            encoded,
            "PBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OAAAAACACAQDAS5L6"
        );
        assert_eq!(encoded.len(), SIGNED_PAYLOAD_MIN_ENCODED_LENGTH);
        assert_eq!(decode_signed_payload(&encoded).unwrap(), signer);
    }

    #[test]
    fn sixty_four_byte_payload_vector() {
        let signer = SignedPayloadSigner::from_account_id(ACCOUNT, &payload(64)).unwrap();
        let encoded = encode_signed_payload(&signer);
        assert_eq!(
            encoded,
            "PBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OAAAABAACAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUPB6IBBEIRSIJJGE4UCSKRLFQWS4LZQGEZDGNBVGY3TQOJ2HM6D2PR7IC3EM"
        );
        assert_eq!(encoded.len(), SIGNED_PAYLOAD_MAX_ENCODED_LENGTH);
        let decoded = decode_signed_payload(&encoded).unwrap();
        assert_eq!(decoded.payload(), payload(64).as_slice());
        assert_eq!(decoded.account_id(), ACCOUNT);
    }

    #[test]
    fn unaligned_payload_is_padded() {
        let signer = SignedPayloadSigner::from_account_id(ACCOUNT, &payload(5)).unwrap();
        let encoded = encode_signed_payload(&signer);
        assert_eq!(
            encoded,
            "PBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OAAAAACQCAQDAQCQAAAAM5FQ"
        );
        let decoded = decode_signed_payload(&encoded).unwrap();
        assert_eq!(decoded.payload(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn payload_bounds_are_enforced() {
        let key = [7u8; 32];
        assert!(matches!(
            SignedPayloadSigner::new(key, &payload(3)),
            Err(KeyError::InvalidLength { got: 3, .. })
        ));
        assert!(matches!(
            SignedPayloadSigner::new(key, &[0u8; 65]),
            Err(KeyError::InvalidLength { got: 65, .. })
        ));
        assert!(SignedPayloadSigner::new(key, &payload(4)).is_ok());
        assert!(SignedPayloadSigner::new(key, &[0u8; 64]).is_ok());
    }

    #[test]
    fn every_payload_length_roundtrips() {
        let key = [0xABu8; 32];
        for len in SIGNED_PAYLOAD_MIN_LENGTH..=SIGNED_PAYLOAD_MAX_LENGTH {
            let signer = SignedPayloadSigner::new(key, &vec![0x5A; len]).unwrap();
            let encoded = signer.to_string();
            assert!(encoded.starts_with('P'));
            assert!(encoded.len() >= SIGNED_PAYLOAD_MIN_ENCODED_LENGTH);
            assert!(encoded.len() <= SIGNED_PAYLOAD_MAX_ENCODED_LENGTH);
            assert_eq!(decode_signed_payload(&encoded).unwrap(), signer);
        }
    }

    #[test]
    fn deserialize_enforces_payload_bounds() {
        let short = format!(r#"{{"ed25519":{:?},"payload":[1,2,3]}}"#, [7u8; 32]);
        let err = serde_json::from_str::<SignedPayloadSigner>(&short).unwrap_err();
        assert!(err.to_string().contains("signed payload"));

        let long = format!(r#"{{"ed25519":{:?},"payload":{:?}}}"#, [7u8; 32], [0u8; 65]);
        assert!(serde_json::from_str::<SignedPayloadSigner>(&long).is_err());

        let ok = format!(r#"{{"ed25519":{:?},"payload":[1,2,3,4]}}"#, [7u8; 32]);
        let signer: SignedPayloadSigner = serde_json::from_str(&ok).unwrap();
        assert_eq!(
            decode_signed_payload(&encode_signed_payload(&signer)).unwrap(),
            signer
        );
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        let key = [1u8; 32];

        // Length prefix claims more data than present.
        let mut body = key.to_vec();
        body.extend_from_slice(&8u32.to_be_bytes());
        body.extend_from_slice(&[1, 2, 3, 4]);
        let encoded = encode_check(VersionByte::SignedPayload, &body);
        assert!(matches!(
            decode_signed_payload(&encoded),
            Err(KeyError::InvalidLength { .. })
        ));

        // Non-zero padding.
        let mut body = key.to_vec();
        body.extend_from_slice(&5u32.to_be_bytes());
        body.extend_from_slice(&[1, 2, 3, 4, 5, 0, 0, 9]);
        let encoded = encode_check(VersionByte::SignedPayload, &body);
        assert!(!is_valid_signed_payload(&encoded));

        // Declared length above 64.
        let mut body = key.to_vec();
        body.extend_from_slice(&68u32.to_be_bytes());
        body.extend_from_slice(&[0u8; 68]);
        let encoded = encode_check(VersionByte::SignedPayload, &body);
        assert!(matches!(
            decode_signed_payload(&encoded),
            Err(KeyError::InvalidLength { got: 68, .. })
        ));

        // Three-byte payload, correctly padded, is still too short.
        let mut body = key.to_vec();
        body.extend_from_slice(&3u32.to_be_bytes());
        body.extend_from_slice(&[1, 2, 3, 0]);
        let encoded = encode_check(VersionByte::SignedPayload, &body);
        assert!(matches!(
            decode_signed_payload(&encoded),
            Err(KeyError::InvalidLength { got: 3, .. })
        ));

        // Truncated before the length prefix.
        let encoded = encode_check(VersionByte::SignedPayload, &key);
        assert!(!is_valid_signed_payload(&encoded));
    }

    #[test]
    fn account_id_is_not_a_signed_payload() {
        assert!(matches!(
            decode_signed_payload(ACCOUNT),
            Err(KeyError::InvalidVersionByte { .. })
        ));
    }
}
