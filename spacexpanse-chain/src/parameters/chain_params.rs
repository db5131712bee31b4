//! The frozen parameter set of a network.

use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};

use chrono::{DateTime, Utc};

use crate::{
    block::{self, genesis::GenesisInputs, Block, Height},
    transparent::ScriptHash,
};

use super::{constants, CheckpointList, ConsensusRules, Deployments, Magic, Network};

mod mainnet;
mod regtest;
mod signet;
mod testnet;

pub(super) use mainnet::mainnet;
pub(super) use regtest::regtest;
pub(super) use signet::signet;
pub(super) use testnet::testnet;

/// The version bit of the `testdummy` deployment.
const TESTDUMMY_BIT: u8 = 28;

/// The version bit of the `taproot` deployment.
const TAPROOT_BIT: u8 = 2;

static_assertions::const_assert!(TESTDUMMY_BIT < Deployments::VERSION_BITS);
static_assertions::const_assert!(TAPROOT_BIT < Deployments::VERSION_BITS);
static_assertions::const_assert_ne!(TESTDUMMY_BIT, TAPROOT_BIT);

/// The easiest Neoscrypt target on the public networks.
const PUBLIC_POW_LIMIT: &str = "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// The easiest Neoscrypt target on regtest.
const REGTEST_POW_LIMIT: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// The Base58Check prefixes of a network's addresses and keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Base58Prefixes {
    /// Public key hash addresses.
    pub pubkey_address: [u8; 1],
    /// Script hash addresses.
    pub script_address: [u8; 1],
    /// Secret keys.
    pub secret_key: [u8; 1],
    /// Extended public keys.
    pub ext_public_key: [u8; 4],
    /// Extended secret keys.
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    /// Returns the mainnet prefixes.
    pub fn mainnet() -> Self {
        Base58Prefixes {
            pubkey_address: constants::mainnet::B58_PUBKEY_ADDRESS_PREFIX,
            script_address: constants::mainnet::B58_SCRIPT_ADDRESS_PREFIX,
            secret_key: constants::mainnet::B58_SECRET_KEY_PREFIX,
            ext_public_key: constants::mainnet::B58_EXT_PUBLIC_KEY_PREFIX,
            ext_secret_key: constants::mainnet::B58_EXT_SECRET_KEY_PREFIX,
        }
    }

    /// Returns the prefixes shared by the test networks.
    pub fn testnet() -> Self {
        Base58Prefixes {
            pubkey_address: constants::testnet::B58_PUBKEY_ADDRESS_PREFIX,
            script_address: constants::testnet::B58_SCRIPT_ADDRESS_PREFIX,
            secret_key: constants::testnet::B58_SECRET_KEY_PREFIX,
            ext_public_key: constants::testnet::B58_EXT_PUBLIC_KEY_PREFIX,
            ext_secret_key: constants::testnet::B58_EXT_SECRET_KEY_PREFIX,
        }
    }
}

/// Defaults for node policy that differ between networks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodePolicy {
    /// Whether expensive internal consistency checks run by default.
    pub default_consistency_checks: bool,
    /// Whether only standard transactions are relayed and mined.
    pub require_standard: bool,
    /// Whether this is a test chain.
    pub is_test_chain: bool,
    /// Whether the node's clock can be mocked.
    pub is_mockable_chain: bool,
    /// The height from which the name database is checked by default, or
    /// `None` if it is never checked by default.
    pub default_check_name_db: Option<Height>,
}

/// Transaction statistics at a known point in the chain, used to estimate
/// sync progress.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ChainTxData {
    /// The Unix time of the last known block.
    pub time: i64,
    /// The total number of transactions up to and including that block.
    pub tx_count: u64,
    /// The estimated number of transactions per second after that block.
    pub tx_rate: f64,
}

impl ChainTxData {
    /// Returns the estimated total number of transactions in the chain at `now`.
    pub fn estimated_tx_count(&self, now: DateTime<Utc>) -> f64 {
        let elapsed = now.timestamp().saturating_sub(self.time).max(0);
        self.tx_count as f64 + elapsed as f64 * self.tx_rate
    }

    /// Returns the estimated fraction of the chain that is synced, given the
    /// total transaction count and time of the tip.
    ///
    /// Tips past the statistics are estimated from the tip instead.
    pub fn verification_progress(
        &self,
        tip_tx_count: u64,
        tip_time: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> f64 {
        let total = if tip_tx_count <= self.tx_count {
            self.estimated_tx_count(now)
        } else {
            let elapsed = (now - tip_time).num_seconds().max(0);
            tip_tx_count as f64 + elapsed as f64 * self.tx_rate
        };

        if total <= 0.0 {
            return 0.0;
        }

        (tip_tx_count as f64 / total).min(1.0)
    }
}

/// A trusted UTXO set snapshot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AssumeutxoEntry {
    /// The hash of the serialized UTXO set.
    pub hash_serialized: [u8; 32],
    /// The total number of transactions up to and including the snapshot block.
    pub chain_tx_count: u64,
}

/// Trusted UTXO set snapshots, keyed by height.
pub type AssumeutxoData = BTreeMap<Height, AssumeutxoEntry>;

/// The complete, immutable parameters of a network.
///
/// Built once at startup by [`super::select`], then shared read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    pub(super) network: Network,
    pub(super) magic: Magic,
    pub(super) default_port: u16,
    pub(super) prune_after_height: u64,
    pub(super) assumed_blockchain_size: u64,
    pub(super) assumed_chain_state_size: u64,
    pub(super) genesis: Arc<Block>,
    pub(super) consensus: ConsensusRules,
    pub(super) base58_prefixes: Base58Prefixes,
    pub(super) bech32_hrp: &'static str,
    pub(super) dns_seeds: Vec<String>,
    pub(super) fixed_seeds: Vec<SocketAddr>,
    pub(super) checkpoints: CheckpointList,
    pub(super) chain_tx_data: ChainTxData,
    pub(super) assumeutxo: AssumeutxoData,
    pub(super) policy: NodePolicy,
}

impl ChainParams {
    /// Returns the network these parameters are for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the magic at the start of peer-to-peer messages.
    pub fn magic(&self) -> Magic {
        self.magic
    }

    /// Returns the default peer-to-peer port.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Returns the height below which blocks are never pruned.
    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    /// Returns the expected size of the block chain on disk, in GB.
    pub fn assumed_blockchain_size(&self) -> u64 {
        self.assumed_blockchain_size
    }

    /// Returns the expected size of the chain state on disk, in GB.
    pub fn assumed_chain_state_size(&self) -> u64 {
        self.assumed_chain_state_size
    }

    /// Returns the genesis block.
    pub fn genesis_block(&self) -> Arc<Block> {
        self.genesis.clone()
    }

    /// Returns the hash of the genesis block.
    pub fn genesis_hash(&self) -> block::Hash {
        self.consensus.genesis_hash
    }

    /// Returns the consensus rules.
    pub fn consensus(&self) -> &ConsensusRules {
        &self.consensus
    }

    /// Returns the Base58Check prefixes of addresses and keys.
    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// Returns the human-readable prefix of Bech32 segwit addresses.
    pub fn bech32_hrp(&self) -> &'static str {
        self.bech32_hrp
    }

    /// Returns the DNS seeds, or on signet, the configured seed nodes.
    pub fn dns_seeds(&self) -> &[String] {
        &self.dns_seeds
    }

    /// Returns the hard-coded peer addresses.
    pub fn fixed_seeds(&self) -> &[SocketAddr] {
        &self.fixed_seeds
    }

    /// Returns the checkpoints.
    pub fn checkpoints(&self) -> &CheckpointList {
        &self.checkpoints
    }

    /// Returns the transaction statistics used to estimate sync progress.
    pub fn chain_tx_data(&self) -> &ChainTxData {
        &self.chain_tx_data
    }

    /// Returns the trusted UTXO set snapshots.
    pub fn assumeutxo(&self) -> &AssumeutxoData {
        &self.assumeutxo
    }

    /// Returns the node policy defaults.
    pub fn policy(&self) -> &NodePolicy {
        &self.policy
    }
}

/// Builds the genesis block from `inputs`, and checks it against the
/// hard-coded `hash` and `merkle_root`.
///
/// # Panics
///
/// If the block doesn't match, because the shipped constants are inconsistent.
fn checked_genesis(inputs: GenesisInputs, hash: &str, merkle_root: &str) -> Arc<Block> {
    let block = inputs.build();

    assert_eq!(
        block.hash(),
        hash.parse::<block::Hash>()
            .expect("hard-coded genesis hash is valid hex"),
        "genesis block hash must match its hard-coded value",
    );
    assert_eq!(
        block.header.merkle_root(),
        merkle_root
            .parse::<block::merkle::Root>()
            .expect("hard-coded merkle root is valid hex"),
        "genesis merkle root must match its hard-coded value",
    );

    Arc::new(block)
}

/// Parses a hard-coded premine script hash.
fn premine(script_hash: &str) -> ScriptHash {
    script_hash
        .parse()
        .expect("hard-coded premine script hashes are valid hex")
}
