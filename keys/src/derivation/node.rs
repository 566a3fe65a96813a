//! SLIP-0010 Ed25519 nodes.
//!
//! Ed25519 only supports hardened derivation, so every child mixes in the
//! parent's private key and there is no public-only derivation.

use std::fmt;
use tracing::trace;

use crate::config::{ED25519_CURVE_SEED, HARDENED_OFFSET, MAX_SEED_LENGTH, MIN_SEED_LENGTH};
use crate::crypto::hash::{hmac_sha512, hmac_sha512_parts};
use crate::crypto::KeyPair;
use crate::error::{KeyError, Result};

use super::path::DerivationPath;

/// A private key and chain code at some point in the derivation tree.
#[derive(Clone, PartialEq, Eq)]
pub struct HdNode {
    private_key: [u8; 32],
    chain_code: [u8; 32],
    depth: u8,
}

impl HdNode {
    /// The root node for a BIP-39 seed.
    ///
    /// Seeds of 16 to 64 bytes are accepted; a mnemonic always produces 64.
    pub fn master(seed: &[u8]) -> Result<Self> {
        if !(MIN_SEED_LENGTH..=MAX_SEED_LENGTH).contains(&seed.len()) {
            return Err(KeyError::length("derivation seed", seed.len()));
        }
        Ok(Self::from_digest(hmac_sha512(ED25519_CURVE_SEED, seed), 0))
    }

    /// Hardened child `index`.
    ///
    /// `index` is given unhardened and must be below 2^31; the hardening
    /// offset is added here.
    pub fn derive(&self, index: u32) -> Result<Self> {
        let hardened = index
            .checked_add(HARDENED_OFFSET)
            .ok_or(KeyError::NonHardenedIndex(index))?;
        trace!(depth = self.depth + 1, index, "deriving hardened child");

        let digest = hmac_sha512_parts(
            &self.chain_code,
            &[&[0x00], &self.private_key, &hardened.to_be_bytes()],
        );
        Ok(Self::from_digest(digest, self.depth.saturating_add(1)))
    }

    /// Walk every index of `path` from this node.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        path.indices()
            .iter()
            .try_fold(self.clone(), |node, &index| node.derive(index))
    }

    /// Parse `path` and walk it.
    pub fn derive_path_str(&self, path: &str) -> Result<Self> {
        self.derive_path(&DerivationPath::parse(path)?)
    }

    fn from_digest(digest: [u8; 64], depth: u8) -> Self {
        let mut private_key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        private_key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);
        Self {
            private_key,
            chain_code,
            depth,
        }
    }

    /// Left half of the HMAC output; also the Ed25519 seed.
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// Right half of the HMAC output, keyed into the next derivation.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Number of derivations from the master node.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// The Ed25519 key pair whose seed is this node's private key.
    pub fn key_pair(&self) -> KeyPair {
        KeyPair::from_raw_seed(&self.private_key)
    }
}

impl fmt::Debug for HdNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdNode")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slip10_seed() -> Vec<u8> {
        hex::decode("000102030405060708090a0b0c0d0e0f").unwrap()
    }

    #[test]
    fn slip10_master_vector() {
        let master = HdNode::master(&slip10_seed()).unwrap();
        assert_eq!(
            hex::encode(master.private_key()),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(master.chain_code()),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
        assert_eq!(master.depth(), 0);
    }

    #[test]
    fn slip10_first_child_vector() {
        let child = HdNode::master(&slip10_seed()).unwrap().derive(0).unwrap();
        assert_eq!(
            hex::encode(child.private_key()),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
        assert_eq!(
            hex::encode(child.chain_code()),
            "8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69"
        );
        assert_eq!(child.depth(), 1);
    }

    #[test]
    fn derivation_is_deterministic() {
        let master = HdNode::master(&[7u8; 64]).unwrap();
        let a = master.derive_path_str("m/44'/148'/0'").unwrap();
        let b = master.derive_path_str("m/44'/148'/0'").unwrap();
        let c = master.derive_path_str("m/44'/148'/1'").unwrap();
        assert_eq!(a, b);
        assert_ne!(a.private_key(), c.private_key());
        assert_eq!(a.depth(), 3);
    }

    #[test]
    fn path_walk_matches_stepwise_derive() {
        let master = HdNode::master(&[9u8; 32]).unwrap();
        let stepwise = master.derive(44).unwrap().derive(148).unwrap().derive(5).unwrap();
        let walked = master
            .derive_path(&DerivationPath::for_account(5).unwrap())
            .unwrap();
        assert_eq!(stepwise, walked);
    }

    #[test]
    fn hardened_input_is_rejected() {
        let master = HdNode::master(&[1u8; 64]).unwrap();
        assert!(matches!(
            master.derive(HARDENED_OFFSET),
            Err(KeyError::NonHardenedIndex(_))
        ));
        assert!(master.derive(HARDENED_OFFSET - 1).is_ok());
    }

    #[test]
    fn seed_length_bounds() {
        assert!(matches!(
            HdNode::master(&[0u8; 15]),
            Err(KeyError::InvalidLength { got: 15, .. })
        ));
        assert!(matches!(
            HdNode::master(&[0u8; 65]),
            Err(KeyError::InvalidLength { got: 65, .. })
        ));
        assert!(HdNode::master(&[0u8; 16]).is_ok());
        assert!(HdNode::master(&[0u8; 64]).is_ok());
    }

    #[test]
    fn invalid_path_propagates() {
        let master = HdNode::master(&[1u8; 64]).unwrap();
        assert!(matches!(
            master.derive_path_str("m/44/148'"),
            Err(KeyError::InvalidPath(_))
        ));
    }

    #[test]
    fn debug_hides_key_material() {
        let master = HdNode::master(&slip10_seed()).unwrap();
        let debug_str = format!("{:?}", master);
        assert!(!debug_str.contains("2b4be7"));
        assert!(debug_str.contains("depth"));
    }
}
