//! Mainnet: the production network, where people trade goods and services.

use crate::{
    block::{
        genesis::{self, GenesisInputs},
        Height,
    },
    parameters::{
        constants::{self, magics, mainnet},
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

/// Returns the mainnet parameters.
pub fn mainnet() -> ChainParams {
    let genesis = checked_genesis(
        GenesisInputs {
            time: 1654336219,
            nonce: 18073,
            difficulty_threshold: CompactDifficulty(0x1e0ffff0),
            timestamp: genesis::MAINNET_TIMESTAMP,
            premine: premine(genesis::MAINNET_PREMINE_SCRIPT_HASH),
        },
        "5d4b20be4fc87d2333aea5235d9de1c685696fc935f806a9ffd71c9f9abf3c57",
        "afdbec35a16bea610dafafeee5a8cd072dc74a056894a12165da027079d5e138",
    );

    let consensus = ConsensusRules {
        genesis_hash: genesis.hash(),
        subsidy_halving_interval: 1_054_080,
        initial_subsidy: constants::INITIAL_SUBSIDY,
        heights: SoftForkHeights {
            bip16: Height(0),
            bip34: Height(1),
            bip65: Height(0),
            bip66: Height(0),
            csv: Height(1),
            segwit: Height(0),
        },
        // segwit activation height + miner confirmation window
        min_bip9_warning_height: Height(2016),
        // 90% of 2016
        rule_change_activation_threshold: 1815,
        miner_confirmation_window: 2016,
        pow_limit_neoscrypt: ExpandedDifficulty::from_hex_const(PUBLIC_POW_LIMIT),
        pow_no_retargeting: false,
        deployments: Deployments::new(
            DeploymentEntry::never_active(TESTDUMMY_BIT),
            DeploymentEntry::never_active(TAPROOT_BIT),
        ),
        auxpow_chain_id: constants::AUXPOW_CHAIN_ID,
        signet_challenge: None,
        minimum_chain_work: Work::from_hex_const(
            "0000000000000000000000000000000000000000000007d524faed2c48c6c828",
        ),
        // block 800000
        default_assume_valid: "4d26cb0da44a06a2f5dc639e921f49a62714b6156256caf8461840adb66dc83f"
            .parse()
            .expect("hard-coded hash is valid hex"),
        target_spacing: DEFAULT_SPACING,
    };

    ChainParams {
        network: Network::Mainnet,
        magic: magics::MAINNET,
        default_port: Network::Mainnet.default_port(),
        prune_after_height: 100_000,
        assumed_blockchain_size: 5,
        assumed_chain_state_size: 1,
        genesis,
        consensus,
        base58_prefixes: Base58Prefixes::mainnet(),
        bech32_hrp: mainnet::HRP_SEGWIT_ADDRESS,
        dns_seeds: mainnet::DNS_SEEDS.map(String::from).to_vec(),
        // Peers are found through the DNS seeds.
        fixed_seeds: Vec::new(),
        checkpoints: CheckpointList::from_hex_list(&[
            (
                0,
                "5d4b20be4fc87d2333aea5235d9de1c685696fc935f806a9ffd71c9f9abf3c57",
            ),
            (
                48550,
                "9f7abe9fa74ea774f66a89beebb9381d1bfb6434c132a2d0b12e50ba8634bf69",
            ),
            (
                800001,
                "c8f940192478381008b63f6b522aa609060fe8024436e68bb0e2d4f617d1c7f3",
            ),
        ]),
        // getchaintxstats at block 800001
        chain_tx_data: ChainTxData {
            time: 1680320335,
            tx_count: 92864,
            tx_rate: 0.03371758688912199,
        },
        assumeutxo: Default::default(),
        policy: NodePolicy {
            default_consistency_checks: false,
            require_standard: true,
            is_test_chain: false,
            is_mockable_chain: false,
            default_check_name_db: None,
        },
    }
}
