//! Testnet: the public test network, which is reset from time to time.

use crate::{
    block::{
        genesis::{self, GenesisInputs},
        Height,
    },
    parameters::{
        constants::{self, magics, testnet},
        CheckpointList, ConsensusRules, DeploymentEntry, Deployments, Network, SoftForkHeights,
    },
    work::{
        difficulty::{CompactDifficulty, ExpandedDifficulty, Work},
        spacing::DEFAULT_SPACING,
    },
};

use super::{
    checked_genesis, premine, Base58Prefixes, ChainParams, ChainTxData, NodePolicy,
    PUBLIC_POW_LIMIT, TAPROOT_BIT, TESTDUMMY_BIT,
};

/// Returns the testnet parameters.
pub fn testnet() -> ChainParams {
    let genesis = checked_genesis(
        GenesisInputs {
            time: 1654336227,
            nonce: 2573921,
            difficulty_threshold: CompactDifficulty(0x1e0ffff0),
            timestamp: genesis::TESTNET_TIMESTAMP,
            premine: premine(genesis::TESTNET_PREMINE_SCRIPT_HASH),
        },
        "30d791386d3fce328be9dce11abfb289d8cf6c06d4947950834d1e54044f037c",
        "159f4b9d14e17ebdba22ac6ae5781d5c7f39cb22328bd16486b84202fee9de06",
    );

    let heights = SoftForkHeights {
        bip16: Height(0),
        bip34: Height(1),
        bip65: Height(0),
        bip66: Height(0),
        csv: Height(1),
        segwit: Height(0),
    };
    let miner_confirmation_window = 2016;

    let consensus = ConsensusRules {
        genesis_hash: genesis.hash(),
        subsidy_halving_interval: 1_054_080,
        initial_subsidy: constants::INITIAL_SUBSIDY,
        heights,
        min_bip9_warning_height: Height(heights.segwit.0 + miner_confirmation_window),
        // 75% for test chains
        rule_change_activation_threshold: 1512,
        miner_confirmation_window,
        pow_limit_neoscrypt: ExpandedDifficulty::from_hex_const(PUBLIC_POW_LIMIT),
        pow_no_retargeting: false,
        deployments: Deployments::new(
            DeploymentEntry::never_active(TESTDUMMY_BIT),
            DeploymentEntry::never_active(TAPROOT_BIT),
        ),
        auxpow_chain_id: constants::AUXPOW_CHAIN_ID,
        signet_challenge: None,
        minimum_chain_work: Work::zero(),
        default_assume_valid: Default::default(),
        target_spacing: DEFAULT_SPACING,
    };

    ChainParams {
        network: Network::Testnet,
        magic: magics::TESTNET,
        default_port: Network::Testnet.default_port(),
        prune_after_height: 1000,
        assumed_blockchain_size: 1,
        assumed_chain_state_size: 1,
        genesis,
        consensus,
        base58_prefixes: Base58Prefixes::testnet(),
        bech32_hrp: testnet::HRP_SEGWIT_ADDRESS,
        dns_seeds: testnet::DNS_SEEDS.map(String::from).to_vec(),
        fixed_seeds: Vec::new(),
        checkpoints: CheckpointList::from_hex_list(&[
            (
                1,
                "15d3d57c15dd8dcfdcc03e69c4c0647416789083a17fd1c88902112399855a48",
            ),
            (
                2880,
                "48d26b2b69c4d70d2284d983e10341c034f7fb3d36205677cd8d6198991764b3",
            ),
        ]),
        // getchaintxstats at block 2880
        chain_tx_data: ChainTxData {
            time: 1655635459,
            tx_count: 2882,
            tx_rate: 0.003367995621605692,
        },
        assumeutxo: Default::default(),
        policy: NodePolicy {
            default_consistency_checks: false,
            require_standard: false,
            is_test_chain: true,
            is_mockable_chain: false,
            default_check_name_db: None,
        },
    }
}
