//! Deterministic construction of each network's genesis block.
//!
//! Genesis blocks are the first block in a blockchain, with no parent block.
//! They are rebuilt from a handful of constants every time a network's
//! parameters are constructed, and their hashes are checked against the
//! hard-coded values in [`crate::parameters`].

use std::sync::Arc;

use chrono::DateTime;

use crate::{
    amount::Amount,
    transaction::Transaction,
    transparent::{CoinbaseData, Script, ScriptHash},
    work::{algorithm::PowAlgo, difficulty::CompactDifficulty, pow::PowData},
};

use super::{merkle, Block, Hash, Header, PureHeader, BLOCK_VERSION};

/// The number of coins paid to the premine output of every genesis block.
pub const PREMINE_COINS: i64 = 199_999_998;

/// The amount paid to the premine output of every genesis block.
pub const PREMINE_AMOUNT: Amount = Amount::from_coins(PREMINE_COINS);

/// The algorithm that mines every genesis block.
pub const GENESIS_POW_ALGO: PowAlgo = PowAlgo::Neoscrypt;

/// The text embedded in the Mainnet genesis coinbase.
pub const MAINNET_TIMESTAMP: &str =
    "01/Jun/2022: NASA has hosted the Martian Metaverse Creation Challenge";

/// The text embedded in the genesis coinbase of the test networks.
pub const TESTNET_TIMESTAMP: &str = "SpaceXpance Testnet";

/// The script hash paid by the Mainnet premine.
pub const MAINNET_PREMINE_SCRIPT_HASH: &str = "fe546eafc3574b33f1c9e20a4d44680c4e54074d";

/// The 2-of-2 multisig redeem script that receives the Testnet premine.
///
/// The keys are shared by the developers, so test coins can be spent freely.
pub const TESTNET_PREMINE_REDEEM_SCRIPT: &str =
    "522102dcc2da82ec53da47647f0765e5a36f81786907deaf6b189f22ac38d70d00c1da\
     210289da4bca18786ac1112d280360c186707d32ef2c08b5960dac4a93604272722052ae";

/// The script hash of [`TESTNET_PREMINE_REDEEM_SCRIPT`].
pub const TESTNET_PREMINE_SCRIPT_HASH: &str = "a25f20bd7dd2d450b5475dc0f27115ce3143427b";

/// The inputs from which a genesis block is built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenesisInputs {
    /// The block time, in seconds since the Unix epoch.
    pub time: u32,
    /// The nonce of the proof-of-work header.
    pub nonce: u32,
    /// The difficulty threshold of the proof-of-work.
    pub difficulty_threshold: CompactDifficulty,
    /// Free text proving the block was not mined before a certain date.
    pub timestamp: &'static str,
    /// The script hash that receives the premine.
    pub premine: ScriptHash,
}

impl GenesisInputs {
    /// Builds the genesis block for these inputs.
    pub fn build(&self) -> Block {
        genesis_block(
            self.time,
            self.nonce,
            self.difficulty_threshold,
            self.timestamp,
            &self.premine,
        )
    }
}

/// Builds a genesis block.
///
/// The only transaction spends nothing, carries `timestamp` as a single data
/// push in its input, and pays [`PREMINE_AMOUNT`] to the pay-to-script-hash
/// address of `premine`.
///
/// The base header has a zero difficulty and nonce. The nonce and
/// `difficulty_threshold` live in native [`GENESIS_POW_ALGO`] proof-of-work
/// data, whose header commits to the block hash. This function doesn't check
/// the proof-of-work: callers supply a `nonce` that meets the target, or mine
/// one with [`super::miner::mine_genesis`].
///
/// The result only depends on the arguments.
pub fn genesis_block(
    time: u32,
    nonce: u32,
    difficulty_threshold: CompactDifficulty,
    timestamp: &str,
    premine: &ScriptHash,
) -> Block {
    let coinbase = Transaction::new_coinbase(
        CoinbaseData::push(timestamp.as_bytes()),
        PREMINE_AMOUNT,
        Script::pay_to_script_hash(premine),
    );
    let merkle_root: merkle::Root = std::iter::once(coinbase.hash()).collect();

    let base = PureHeader {
        version: BLOCK_VERSION,
        previous_block_hash: Hash([0; 32]),
        merkle_root,
        time: DateTime::from_timestamp(time.into(), 0).expect("u32 timestamps are in range"),
        ..PureHeader::null()
    };

    let pow = PowData::native(GENESIS_POW_ALGO, difficulty_threshold, base.hash(), nonce);

    Block {
        header: Arc::new(Header { base, pow }),
        transactions: vec![Arc::new(coinbase)],
    }
}
