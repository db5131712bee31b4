//! Regtest: private regression test networks, with minimal difficulty so
//! blocks can be found instantly.

use crate::{
    block::{
        genesis::{self, GenesisInputs},
        Height,
    },
    parameters::{
        constants::{self, magics, testnet},
        overrides::apply_regtest_overrides,
        ChainOptions, CheckpointList, ConfigError, ConsensusRules, DeploymentEntry, Deployments,
        Network, SoftForkHeights,
    },
    work::{
        difficulty::{CompactDifficulty, ExpandedDifficulty, Work},
        spacing::DEFAULT_SPACING,
    },
};

use super::{
    checked_genesis, premine, Base58Prefixes, ChainParams, ChainTxData, NodePolicy,
    REGTEST_POW_LIMIT, TAPROOT_BIT, TESTDUMMY_BIT,
};

/// The regtest genesis block hash.
const GENESIS_HASH: &str = "fa630c42f5e250d75191914d8d894e3f1e8fd54f750430e279becf86c42abd12";

/// Returns the regtest parameters, with the activation overrides and pruning
/// option in `options` applied.
pub fn regtest(options: &ChainOptions) -> Result<ChainParams, ConfigError> {
    let genesis = checked_genesis(
        GenesisInputs {
            time: 1654337353,
            nonce: 0,
            difficulty_threshold: CompactDifficulty(0x207fffff),
            timestamp: genesis::TESTNET_TIMESTAMP,
            premine: premine(genesis::TESTNET_PREMINE_SCRIPT_HASH),
        },
        GENESIS_HASH,
        "159f4b9d14e17ebdba22ac6ae5781d5c7f39cb22328bd16486b84202fee9de06",
    );

    let mut consensus = ConsensusRules {
        genesis_hash: genesis.hash(),
        subsidy_halving_interval: 360,
        initial_subsidy: constants::INITIAL_SUBSIDY,
        heights: SoftForkHeights {
            bip16: Height(0),
            // used in functional tests
            bip34: Height(500),
            bip65: Height(1351),
            bip66: Height(1251),
            csv: Height(432),
            segwit: Height(0),
        },
        min_bip9_warning_height: Height(0),
        // 75% for test chains
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        pow_limit_neoscrypt: ExpandedDifficulty::from_hex_const(REGTEST_POW_LIMIT),
        pow_no_retargeting: true,
        deployments: Deployments::new(
            DeploymentEntry {
                start_time: 0,
                ..DeploymentEntry::never_active(TESTDUMMY_BIT)
            },
            DeploymentEntry::always_active(TAPROOT_BIT),
        ),
        auxpow_chain_id: constants::AUXPOW_CHAIN_ID,
        signet_challenge: None,
        minimum_chain_work: Work::zero(),
        default_assume_valid: Default::default(),
        target_spacing: DEFAULT_SPACING,
    };

    apply_regtest_overrides(&mut consensus, options)?;

    Ok(ChainParams {
        network: Network::Regtest,
        magic: magics::REGTEST,
        default_port: Network::Regtest.default_port(),
        prune_after_height: if options.fast_prune { 100 } else { 1000 },
        assumed_blockchain_size: 0,
        assumed_chain_state_size: 0,
        genesis,
        consensus,
        base58_prefixes: Base58Prefixes::testnet(),
        bech32_hrp: testnet::REGTEST_HRP_SEGWIT_ADDRESS,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        checkpoints: CheckpointList::from_hex_list(&[(0, GENESIS_HASH)]),
        chain_tx_data: ChainTxData::default(),
        assumeutxo: Default::default(),
        policy: NodePolicy {
            default_consistency_checks: true,
            require_standard: true,
            is_test_chain: true,
            is_mockable_chain: true,
            default_check_name_db: Some(Height(0)),
        },
    })
}
