//! Brute-force mining of genesis blocks.
//!
//! This is an offline tool for crafting new networks. Nodes never mine their
//! genesis blocks, they rebuild them from known-good constants.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::work::{
    difficulty::ExpandedDifficulty,
    pow::{self, PowData, PowHasher},
};

use super::Block;

/// Progress is logged every time this many nonces have been tried.
pub const PROGRESS_INTERVAL: u32 = 1000;

/// An error mining a genesis block.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MinerError {
    /// Every nonce was tried without meeting the target.
    ///
    /// The difficulty is too hard for the algorithm, or the wrong algorithm
    /// was configured.
    #[error("no nonce meets the target at time {time}, the difficulty or algorithm is misconfigured")]
    NonceOverflow {
        /// The block time the nonces were tried with.
        time: DateTime<Utc>,
    },

    /// Merge-mined proof-of-work has no nonce of its own to search.
    #[error("merge-mined genesis blocks can't be mined with a nonce search")]
    MergeMined,

    /// The proof-of-work check failed for a reason other than the hash
    /// missing the target.
    #[error(transparent)]
    Pow(#[from] pow::Error),
}

/// Mines `block` at `time`, returning the block with the first nonce that
/// meets its difficulty threshold.
///
/// Setting the time changes the block hash, so the proof-of-work header is
/// rebuilt to commit to the new hash, starting from a zero nonce. The search
/// runs on the calling thread until it succeeds or the nonce space runs out.
pub fn mine_genesis<H: PowHasher + ?Sized>(
    block: Block,
    time: DateTime<Utc>,
    pow_limit: ExpandedDifficulty,
    hasher: &H,
) -> Result<Block, MinerError> {
    mine_genesis_from(block, time, 0, pow_limit, hasher)
}

/// Mines `block` at `time` like [`mine_genesis`], trying nonces from
/// `first_nonce` upwards.
pub(crate) fn mine_genesis_from<H: PowHasher + ?Sized>(
    mut block: Block,
    time: DateTime<Utc>,
    first_nonce: u32,
    pow_limit: ExpandedDifficulty,
    hasher: &H,
) -> Result<Block, MinerError> {
    if block.header.pow.is_merge_mined() {
        return Err(MinerError::MergeMined);
    }

    let header = Arc::make_mut(&mut block.header);
    header.base.time = time;
    header.pow = PowData::native(
        header.pow.algorithm(),
        header.pow.difficulty_threshold(),
        header.base.hash(),
        first_nonce,
    );

    let block_hash = header.base.hash();
    tracing::info!(%block_hash, algorithm = %header.pow.algorithm(), "mining genesis block");

    loop {
        match header.pow.verify(block_hash, pow_limit, hasher) {
            Ok(()) => break,
            Err(pow::Error::InsufficientWork) => {}
            Err(error) => return Err(error.into()),
        }

        let nonce = header
            .pow
            .native_nonce_mut()
            .ok_or(MinerError::MergeMined)?;
        *nonce = nonce
            .checked_add(1)
            .ok_or(MinerError::NonceOverflow { time })?;

        if *nonce % PROGRESS_INTERVAL == 0 {
            tracing::info!(nonce = *nonce, "still mining");
        }
    }

    tracing::info!(
        nonce = header.pow.nonce(),
        time = time.timestamp(),
        %block_hash,
        merkle_root = %header.merkle_root(),
        "found genesis nonce",
    );

    Ok(block)
}
