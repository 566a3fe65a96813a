//! # Protocol Constants
//!
//! Every magic number in the key layer lives here. These values are fixed by
//! the Stellar network (SEP-0023 for StrKeys, SEP-0005 for key derivation,
//! BIP-39 for mnemonics), so none of them are tunable. If a constant here
//! disagrees with the network, the network wins and this file is wrong.

// ---------------------------------------------------------------------------
// StrKey Version Tags
// ---------------------------------------------------------------------------

/// Version tags from SEP-0023. The version byte on the wire is `tag << 3`,
/// which is what makes every account id start with `G`, every seed with `S`,
/// and so on: the top five bits of the first byte pick the first base32
/// character.
pub const ACCOUNT_ID_TAG: u8 = 6;

/// Multiplexed account (`M...`).
pub const MUXED_ACCOUNT_TAG: u8 = 12;

/// Ed25519 secret seed (`S...`).
pub const SEED_TAG: u8 = 18;

/// Pre-authorized transaction hash (`T...`).
pub const PRE_AUTH_TX_TAG: u8 = 19;

/// SHA-256 hash signer (`X...`).
pub const SHA256_HASH_TAG: u8 = 23;

/// Ed25519 signed payload signer (`P...`).
pub const SIGNED_PAYLOAD_TAG: u8 = 15;

/// Soroban contract id (`C...`).
pub const CONTRACT_ID_TAG: u8 = 2;

// ---------------------------------------------------------------------------
// StrKey Layout
// ---------------------------------------------------------------------------

/// Length of the CRC16 checksum appended to every StrKey, in bytes.
pub const CHECKSUM_LENGTH: usize = 2;

/// Smallest possible decoded StrKey: one version byte plus the checksum.
pub const MIN_DECODED_LENGTH: usize = 1 + CHECKSUM_LENGTH;

/// Payload length of account ids, seeds, hashes and contract ids.
pub const KEY_PAYLOAD_LENGTH: usize = 32;

/// Muxed account payload: Ed25519 key followed by a big-endian u64 id.
pub const MUXED_PAYLOAD_LENGTH: usize = KEY_PAYLOAD_LENGTH + 8;

/// Signed payloads carry between 4 and 64 bytes of auxiliary data.
pub const SIGNED_PAYLOAD_MIN_LENGTH: usize = 4;

/// Upper bound of the signed payload data, matching XDR `opaque<64>`.
pub const SIGNED_PAYLOAD_MAX_LENGTH: usize = 64;

/// Encoded length of the smallest signed payload StrKey.
///
/// 1 + 32 + 4 + 4 + 2 = 43 bytes, which base32 renders as 69 characters.
/// Some older SDKs shipped 56 here; that value was never reachable.
pub const SIGNED_PAYLOAD_MIN_ENCODED_LENGTH: usize = 69;

/// Encoded length of the largest signed payload StrKey (103 bytes).
pub const SIGNED_PAYLOAD_MAX_ENCODED_LENGTH: usize = 165;

// ---------------------------------------------------------------------------
// Ed25519
// ---------------------------------------------------------------------------

/// Ed25519 secret seed length. The seed *is* the secret key.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Ed25519 public key length.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Always 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Signature hints are the trailing 4 bytes of the signer's public key.
pub const SIGNATURE_HINT_LENGTH: usize = 4;

// ---------------------------------------------------------------------------
// BIP-39
// ---------------------------------------------------------------------------

/// Every BIP-39 vocabulary has exactly this many words (2^11).
pub const WORD_LIST_SIZE: usize = 2048;

/// Bits encoded by a single mnemonic word.
pub const BITS_PER_WORD: usize = 11;

/// Word counts a mnemonic may have. Each step of 3 words adds 32 bits of
/// entropy and 1 checksum bit.
pub const SUPPORTED_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Entropy lengths in bytes matching [`SUPPORTED_WORD_COUNTS`].
pub const SUPPORTED_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// PBKDF2-HMAC-SHA512 iteration count for mnemonic → seed stretching.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix for the mnemonic seed; the user passphrase is appended.
pub const PBKDF2_SALT_PREFIX: &str = "mnemonic";

/// Length of the BIP-39 seed fed into key derivation.
pub const BIP39_SEED_LENGTH: usize = 64;

/// Language used when callers don't ask for one.
pub const DEFAULT_LANGUAGE: &str = "english";

// ---------------------------------------------------------------------------
// Key Derivation (SLIP-0010 / SEP-0005)
// ---------------------------------------------------------------------------

/// HMAC key for the SLIP-0010 Ed25519 master node.
pub const ED25519_CURVE_SEED: &[u8] = b"ed25519 seed";

/// Indices at or above this value are hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP-44 purpose.
pub const BIP44_PURPOSE: u32 = 44;

/// SLIP-0044 coin type registered for Stellar lumens.
pub const STELLAR_COIN_TYPE: u32 = 148;

/// SLIP-0010 accepts seeds of 128 to 512 bits.
pub const MIN_SEED_LENGTH: usize = 16;

/// Upper bound on master seed length.
pub const MAX_SEED_LENGTH: usize = 64;
