//! Blocks and block-related structures (heights, headers, etc.)

use std::{fmt, io, sync::Arc};

use crate::{serialization::ConsensusSerialize, transaction::Transaction};

mod hash;
mod header;
mod height;

pub mod genesis;
pub mod merkle;
pub mod miner;


pub use hash::Hash;
pub use header::{Header, PureHeader, BLOCK_VERSION};
pub use height::Height;

/// A SpaceXpanse block, containing a header and a list of transactions.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Block {
    /// The block header, containing block metadata and its proof-of-work data.
    pub header: Arc<Header>,
    /// The block transactions.
    pub transactions: Vec<Arc<Transaction>>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmter = f.debug_struct("Block");

        fmter.field("hash", &DisplayToDebug(self.hash()));
        fmter.field("merkle_root", &DisplayToDebug(self.header.merkle_root()));
        fmter.field("transactions", &self.transactions.len());

        fmter.finish()
    }
}

impl Block {
    /// Compute the hash of this block.
    ///
    /// The hash only commits to the base header. The proof-of-work data
    /// commits to the block hash instead, see [`crate::work::pow::PowData`].
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }

    /// Compute the merkle root of this block's transactions.
    pub fn compute_merkle_root(&self) -> merkle::Root {
        self.transactions.iter().map(|tx| tx.hash()).collect()
    }
}

impl<'a> From<&'a Block> for Hash {
    fn from(block: &'a Block) -> Hash {
        block.header.as_ref().into()
    }
}

impl ConsensusSerialize for Block {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.header.consensus_serialize(&mut writer)?;
        self.transactions.as_slice().consensus_serialize(&mut writer)
    }
}

/// Wrapper to format a value using its `Display` impl inside `Debug` output.
struct DisplayToDebug<T>(T);

impl<T: fmt::Display> fmt::Debug for DisplayToDebug<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
