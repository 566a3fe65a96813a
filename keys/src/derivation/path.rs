//! Hardened derivation paths of the form `m/44'/148'/0'`.

use std::fmt;
use std::str::FromStr;

use crate::config::{BIP44_PURPOSE, HARDENED_OFFSET, STELLAR_COIN_TYPE};
use crate::error::{KeyError, Result};

/// A sequence of child indices, all hardened.
///
/// Indices are stored *before* hardening, so `m/44'/148'/0'` holds
/// `[44, 148, 0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<u32>,
}

impl DerivationPath {
    /// Parse `m/a'/b'/...`.
    ///
    /// The path must start with a literal `m`; every following segment must
    /// be a decimal number below 2^31 followed by `'`.
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = |why: &str| KeyError::InvalidPath(format!("{path:?}: {why}"));

        let mut segments = path.split('/');
        if segments.next() != Some("m") {
            return Err(invalid("must start with \"m\""));
        }

        let mut indices = Vec::new();
        for segment in segments {
            let digits = segment
                .strip_suffix('\'')
                .ok_or_else(|| invalid("every segment must be hardened"))?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("segment is not a number"));
            }
            let index: u32 = digits.parse().map_err(|_| invalid("index out of range"))?;
            if index >= HARDENED_OFFSET {
                return Err(invalid("index out of range"));
            }
            indices.push(index);
        }
        Ok(Self { indices })
    }

    /// The SEP-0005 path for account `index`: `m/44'/148'/index'`.
    pub fn for_account(index: u32) -> Result<Self> {
        if index >= HARDENED_OFFSET {
            return Err(KeyError::NonHardenedIndex(index));
        }
        Ok(Self {
            indices: vec![BIP44_PURPOSE, STELLAR_COIN_TYPE, index],
        })
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn depth(&self) -> usize {
        self.indices.len()
    }
}

impl FromStr for DerivationPath {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for index in &self.indices {
            write!(f, "/{}'", index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_account_path() {
        let path = DerivationPath::parse("m/44'/148'/7'").unwrap();
        assert_eq!(path.indices(), &[44, 148, 7]);
        assert_eq!(path, DerivationPath::for_account(7).unwrap());
        assert_eq!(path.to_string(), "m/44'/148'/7'");
    }

    #[test]
    fn bare_master_is_valid() {
        let path: DerivationPath = "m".parse().unwrap();
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "m");
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for bad in [
            "",
            "44'/148'/0'",
            "M/44'/148'/0'",
            "m/44/148'/0'",
            "m/44'/148'/0",
            "m/44'//0'",
            "m/'",
            "m/-1'",
            "m/+1'",
            "m/a'",
            "m/44'/148'/0'/",
            "m/2147483648'",
            "m/99999999999'",
        ] {
            assert!(
                matches!(DerivationPath::parse(bad), Err(KeyError::InvalidPath(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn largest_index_is_accepted() {
        let path = DerivationPath::parse("m/2147483647'").unwrap();
        assert_eq!(path.indices(), &[HARDENED_OFFSET - 1]);
    }

    #[test]
    fn account_index_must_be_unhardened() {
        assert!(matches!(
            DerivationPath::for_account(HARDENED_OFFSET),
            Err(KeyError::NonHardenedIndex(i)) if i == HARDENED_OFFSET
        ));
    }
}
