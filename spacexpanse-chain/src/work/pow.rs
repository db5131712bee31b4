//! Proof-of-work data attached to block headers, and its verification.
//!
//! A block's own hash never covers its nonce. Instead, the proof-of-work data
//! carries a separate header whose merkle root field commits to the block hash:
//! either a [`PureHeader`] mined directly for this chain, or the header of a
//! parent chain block when the block is merge-mined. [`PowData::verify`] is the
//! single place where the two cases are dispatched.

use std::io;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::{
    block::{self, merkle, PureHeader},
    serialization::{sha256d, ConsensusSerialize},
};

use super::{
    algorithm::{PowAlgo, MERGE_MINED_FLAG},
    difficulty::{CompactDifficulty, ExpandedDifficulty},
};

mod external;

pub use external::ExternalPowHasher;

/// The error type for proof-of-work validation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The compact difficulty is negative, zero or overflows.
    #[error("difficulty threshold {0} is not a valid target")]
    InvalidDifficulty(CompactDifficulty),

    /// The target is easier than the network allows.
    #[error("difficulty threshold {0} is easier than the proof-of-work limit")]
    TargetAbovePowLimit(CompactDifficulty),

    /// The proof-of-work header does not commit to the block.
    #[error("proof-of-work header commits to {committed}, not to block {block}")]
    CommitmentMismatch {
        /// The block hash committed to by the proof-of-work header.
        committed: block::Hash,
        /// The hash of the block being checked.
        block: block::Hash,
    },

    /// The algorithm is only valid for merge-mined blocks, or only for
    /// stand-alone blocks, and the proof-of-work data is the other kind.
    #[error("{algorithm} proof-of-work has the wrong mining mode, merge-mining required: {merge_mined}")]
    WrongMiningMode {
        /// The algorithm of the proof-of-work data.
        algorithm: PowAlgo,
        /// Whether the algorithm requires merge-mining.
        merge_mined: bool,
    },

    /// The proof-of-work header can't be serialized.
    #[error("proof-of-work header is not serializable: {0}")]
    InvalidHeader(String),

    /// The hasher can't compute hashes for this algorithm.
    #[error("no proof-of-work hasher is available for {0}")]
    UnsupportedAlgorithm(PowAlgo),

    /// An external hasher failed to produce a hash.
    #[error("external proof-of-work hasher failed: {0}")]
    ExternalHasher(String),

    /// The proof-of-work hash is above the target.
    #[error("proof-of-work hash is above the difficulty threshold")]
    InsufficientWork,
}

/// Computes proof-of-work hashes of serialized headers.
///
/// Returned hashes are in internal (little-endian) byte order, so they can be
/// compared with [`ExpandedDifficulty`] targets.
pub trait PowHasher {
    /// Returns the `algorithm` hash of the serialized `header`.
    fn pow_hash(&self, algorithm: PowAlgo, header: &[u8]) -> Result<[u8; 32], Error>;
}

impl<H: PowHasher + ?Sized> PowHasher for &H {
    fn pow_hash(&self, algorithm: PowAlgo, header: &[u8]) -> Result<[u8; 32], Error> {
        (**self).pow_hash(algorithm, header)
    }
}

/// The built-in hasher, which supports [`PowAlgo::Sha256d`] only.
///
/// Neoscrypt hashes need an [`ExternalPowHasher`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256dHasher;

impl PowHasher for Sha256dHasher {
    fn pow_hash(&self, algorithm: PowAlgo, header: &[u8]) -> Result<[u8; 32], Error> {
        match algorithm {
            PowAlgo::Sha256d => Ok(sha256d::hash(header)),
            PowAlgo::Neoscrypt => Err(Error::UnsupportedAlgorithm(algorithm)),
        }
    }
}

/// The proof-of-work attached to a block.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PowData {
    /// Proof-of-work mined directly for this chain.
    Native {
        /// The mining algorithm.
        algorithm: PowAlgo,
        /// The difficulty threshold the header hash must meet.
        difficulty_threshold: CompactDifficulty,
        /// The header carrying the nonce. Its merkle root is the block hash.
        header: PureHeader,
    },
    /// Proof-of-work mined on a parent chain's block.
    ///
    /// The parent block commits to this chain's block hash in its coinbase,
    /// identified by the network's auxpow chain id. Proving that commitment is
    /// the job of the merge-mining layer; this type carries the parent header
    /// whose hash is checked against the target.
    MergeMined {
        /// The mining algorithm.
        algorithm: PowAlgo,
        /// The difficulty threshold the parent header hash must meet.
        difficulty_threshold: CompactDifficulty,
        /// The parent chain block header.
        parent_header: PureHeader,
    },
}

impl PowData {
    /// Returns native proof-of-work data for the block with `block_hash`, with
    /// the nonce set to `nonce` and every other header field zeroed.
    pub fn native(
        algorithm: PowAlgo,
        difficulty_threshold: CompactDifficulty,
        block_hash: block::Hash,
        nonce: u32,
    ) -> Self {
        let header = PureHeader {
            merkle_root: merkle::Root(block_hash.0),
            nonce,
            ..PureHeader::null()
        };

        PowData::Native {
            algorithm,
            difficulty_threshold,
            header,
        }
    }

    /// Returns the mining algorithm.
    pub fn algorithm(&self) -> PowAlgo {
        match self {
            PowData::Native { algorithm, .. } | PowData::MergeMined { algorithm, .. } => *algorithm,
        }
    }

    /// Returns the difficulty threshold.
    pub fn difficulty_threshold(&self) -> CompactDifficulty {
        match self {
            PowData::Native {
                difficulty_threshold,
                ..
            }
            | PowData::MergeMined {
                difficulty_threshold,
                ..
            } => *difficulty_threshold,
        }
    }

    /// Returns true if this is merge-mined proof-of-work.
    pub fn is_merge_mined(&self) -> bool {
        matches!(self, PowData::MergeMined { .. })
    }

    /// Returns the header whose hash is checked against the target.
    pub fn pow_header(&self) -> &PureHeader {
        match self {
            PowData::Native { header, .. } => header,
            PowData::MergeMined { parent_header, .. } => parent_header,
        }
    }

    /// Returns the nonce of the header whose hash is checked against the target.
    pub fn nonce(&self) -> u32 {
        self.pow_header().nonce
    }

    /// Returns a mutable reference to the nonce of a native proof-of-work
    /// header, or `None` for merge-mined data.
    pub fn native_nonce_mut(&mut self) -> Option<&mut u32> {
        match self {
            PowData::Native { header, .. } => Some(&mut header.nonce),
            PowData::MergeMined { .. } => None,
        }
    }

    /// Returns the serialized algorithm byte, including the merge-mined flag.
    pub fn algorithm_code(&self) -> u8 {
        let flag = if self.is_merge_mined() {
            MERGE_MINED_FLAG
        } else {
            0
        };
        self.algorithm().code() | flag
    }

    /// Checks that this proof-of-work is valid for the block with `block_hash`.
    ///
    /// The target must be valid and at or below `pow_limit`, the algorithm must
    /// be used in its mining mode, and the hash of the proof-of-work header
    /// computed by `hasher` must be at or below the target. Native headers must
    /// also commit to `block_hash` in their merkle root field.
    pub fn verify<H: PowHasher + ?Sized>(
        &self,
        block_hash: block::Hash,
        pow_limit: ExpandedDifficulty,
        hasher: &H,
    ) -> Result<(), Error> {
        let difficulty_threshold = self.difficulty_threshold();
        let target = difficulty_threshold
            .to_expanded()
            .ok_or(Error::InvalidDifficulty(difficulty_threshold))?;
        if target > pow_limit {
            return Err(Error::TargetAbovePowLimit(difficulty_threshold));
        }

        let algorithm = self.algorithm();
        if algorithm.is_merge_mined() != self.is_merge_mined() {
            return Err(Error::WrongMiningMode {
                algorithm,
                merge_mined: algorithm.is_merge_mined(),
            });
        }

        if let PowData::Native { header, .. } = self {
            let committed = block::Hash(header.merkle_root.0);
            if committed != block_hash {
                return Err(Error::CommitmentMismatch {
                    committed,
                    block: block_hash,
                });
            }
        }

        let header_bytes = self
            .pow_header()
            .consensus_serialize_to_vec()
            .map_err(|e| Error::InvalidHeader(e.to_string()))?;
        let pow_hash = hasher.pow_hash(algorithm, &header_bytes)?;

        if target >= pow_hash {
            Ok(())
        } else {
            Err(Error::InsufficientWork)
        }
    }
}

impl ConsensusSerialize for PowData {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_u8(self.algorithm_code())?;
        writer.write_u32::<LittleEndian>(self.difficulty_threshold().0)?;
        self.pow_header().consensus_serialize(&mut writer)
    }
}
