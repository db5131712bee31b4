use std::{fmt, io};

use byteorder::{LittleEndian, WriteBytesExt};
use chrono::{DateTime, TimeZone, Utc};

use crate::{
    serialization::ConsensusSerialize,
    work::{difficulty::CompactDifficulty, pow::PowData},
};

use super::{merkle, Hash};

/// The block version used by the genesis blocks of every network.
pub const BLOCK_VERSION: i32 = 1;

/// The fields of a Bitcoin-style block header, without any proof-of-work data.
///
/// SpaceXpanse blocks use this header twice: once as the block's own base
/// header, whose hash identifies the block, and once inside the
/// [`PowData`], where it carries the nonce that is checked against the target.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PureHeader {
    /// The block's version field.
    pub version: i32,

    /// The hash of the previous block, used to create a chain of blocks back to
    /// the genesis block.
    ///
    /// This ensures no previous block can be changed without also changing this
    /// block's header.
    pub previous_block_hash: Hash,

    /// The root of the transaction Merkle tree.
    ///
    /// In a proof-of-work header, this field commits to the hash of the block
    /// being mined instead.
    pub merkle_root: merkle::Root,

    /// The block timestamp is a Unix epoch time (UTC) when the miner
    /// started hashing the header (according to the miner).
    pub time: DateTime<Utc>,

    /// The legacy difficulty field.
    ///
    /// Base headers carry zero here: their difficulty lives in the
    /// [`PowData`].
    pub difficulty_threshold: CompactDifficulty,

    /// The legacy nonce field.
    pub nonce: u32,
}

impl PureHeader {
    /// Returns a header with every field zeroed, and the time set to the epoch.
    pub fn null() -> Self {
        PureHeader {
            version: 0,
            previous_block_hash: Hash([0; 32]),
            merkle_root: merkle::Root([0; 32]),
            time: Utc
                .timestamp_opt(0, 0)
                .single()
                .expect("the epoch is a valid time"),
            difficulty_threshold: CompactDifficulty(0),
            nonce: 0,
        }
    }

    /// Compute the hash of this header.
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }
}

impl fmt::Debug for PureHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PureHeader")
            .field("version", &self.version)
            .field("previous_block_hash", &self.previous_block_hash)
            .field("merkle_root", &self.merkle_root)
            .field("time", &self.time.timestamp())
            .field("difficulty_threshold", &self.difficulty_threshold)
            .field("nonce", &self.nonce)
            .finish()
    }
}

impl ConsensusSerialize for PureHeader {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_i32::<LittleEndian>(self.version)?;
        writer.write_all(&self.previous_block_hash.0)?;
        writer.write_all(&self.merkle_root.0)?;
        writer.write_u32::<LittleEndian>(
            self.time
                .timestamp()
                .try_into()
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "time is not a u32"))?,
        )?;
        writer.write_u32::<LittleEndian>(self.difficulty_threshold.0)?;
        writer.write_u32::<LittleEndian>(self.nonce)?;
        Ok(())
    }
}

/// A block header: the base header and its proof-of-work data.
///
/// The block hash is computed from [`Header::base`] alone.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// The base header, which identifies the block.
    pub base: PureHeader,

    /// The proof-of-work attached to this block.
    pub pow: PowData,
}

impl Header {
    /// Returns the merkle root of the block's transactions.
    pub fn merkle_root(&self) -> merkle::Root {
        self.base.merkle_root
    }

    /// Returns the time of the block.
    pub fn time(&self) -> DateTime<Utc> {
        self.base.time
    }

    /// Compute the hash of this header.
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }
}

impl ConsensusSerialize for Header {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.base.consensus_serialize(&mut writer)?;
        self.pow.consensus_serialize(&mut writer)
    }
}
