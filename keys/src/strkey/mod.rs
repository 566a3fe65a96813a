//! # StrKey
//!
//! Stellar's typed, checksummed base32 identifiers. Every key, hash and
//! contract id a user ever copies around is one of these:
//!
//! | Prefix | Kind               | Payload                              |
//! |--------|--------------------|--------------------------------------|
//! | `G`    | account id         | Ed25519 public key (32)              |
//! | `M`    | muxed account      | public key (32) ‖ u64 id             |
//! | `S`    | secret seed        | Ed25519 seed (32)                    |
//! | `T`    | pre-auth tx        | transaction hash (32)                |
//! | `X`    | sha256 hash signer | hash (32)                            |
//! | `P`    | signed payload     | key (32) ‖ u32 len ‖ payload (4..64) |
//! | `C`    | contract id        | contract hash (32)                   |
//!
//! The leading character comes for free from the version byte: each kind's
//! version is `tag << 3`, so the top five bits, which become the first base32
//! character, are the tag itself.

pub mod codec;
pub mod muxed;
pub mod signed_payload;
pub mod version;

pub use codec::{
    decode_account_id, decode_any, decode_check, decode_contract_id, decode_contract_id_hex,
    decode_pre_auth_tx, decode_secret_seed, decode_sha256_hash, encode_account_id, encode_check,
    encode_contract_id, encode_contract_id_hex, encode_pre_auth_tx, encode_secret_seed,
    encode_sha256_hash, is_valid_account_id, is_valid_contract_id, is_valid_pre_auth_tx,
    is_valid_secret_seed, is_valid_sha256_hash,
};
pub use muxed::{encode_muxed_account, is_valid_muxed_account_id, MuxedAccount};
pub use signed_payload::{
    decode_signed_payload, encode_signed_payload, is_valid_signed_payload, SignedPayloadSigner,
};
pub use version::VersionByte;
