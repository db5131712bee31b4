//! The mining algorithms a block's proof-of-work can use.

use std::{fmt, str::FromStr};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

/// The flag set in the serialized algorithm byte of merge-mined proof-of-work.
pub const MERGE_MINED_FLAG: u8 = 0x80;

/// A proof-of-work algorithm.
///
/// SpaceXpanse blocks are mined with one of two independent algorithms, each
/// with its own difficulty and target spacing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum PowAlgo {
    /// Double SHA-256, merge-mined with a parent chain.
    Sha256d,
    /// Neoscrypt, mined stand-alone.
    Neoscrypt,
}

impl PowAlgo {
    /// Every supported algorithm, in serialization order.
    pub const ALL: [PowAlgo; 2] = [PowAlgo::Sha256d, PowAlgo::Neoscrypt];

    /// Returns the algorithm's code in the serialized proof-of-work data.
    pub fn code(self) -> u8 {
        match self {
            PowAlgo::Sha256d => 1,
            PowAlgo::Neoscrypt => 2,
        }
    }

    /// Returns the algorithm for a serialized code, ignoring the merge-mined flag.
    pub fn from_code(code: u8) -> Option<Self> {
        match code & !MERGE_MINED_FLAG {
            1 => Some(PowAlgo::Sha256d),
            2 => Some(PowAlgo::Neoscrypt),
            _ => None,
        }
    }

    /// Returns the lowercase name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            PowAlgo::Sha256d => "sha256d",
            PowAlgo::Neoscrypt => "neoscrypt",
        }
    }

    /// Returns true if blocks using this algorithm must be merge-mined, or
    /// false if they must be mined stand-alone.
    pub fn is_merge_mined(self) -> bool {
        match self {
            PowAlgo::Sha256d => true,
            PowAlgo::Neoscrypt => false,
        }
    }
}

impl fmt::Display for PowAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error parsing a [`PowAlgo`] name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown proof-of-work algorithm {0:?}, expected sha256d or neoscrypt")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for PowAlgo {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PowAlgo::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
