//! Signet: a test network whose blocks must also be signed by a challenge
//! script (BIP325).

use hex::FromHex;

use crate::{
    block::{
        genesis::{self, GenesisInputs},
        Height,
    },
    parameters::{
        constants::{self, testnet, DEFAULT_SIGNET_CHALLENGE},
        ChainOptions, CheckpointList, ConfigError, ConsensusRules, DeploymentEntry, Deployments,
        Magic, Network, SoftForkHeights,
    },
    transparent::Script,
    work::{
        difficulty::{CompactDifficulty, ExpandedDifficulty, Work},
        spacing::DEFAULT_SPACING,
    },
};

use super::{
    checked_genesis, premine, Base58Prefixes, ChainParams, ChainTxData, NodePolicy,
    PUBLIC_POW_LIMIT, TAPROOT_BIT, TESTDUMMY_BIT,
};

/// Returns the signet parameters for the challenge and seed nodes in `options`.
///
/// The network magic is derived from the challenge, so signets with different
/// challenges can't connect to each other.
pub fn signet(options: &ChainOptions) -> Result<ChainParams, ConfigError> {
    let (challenge, assumed_blockchain_size) = match options.signet_challenge.as_slice() {
        [] => (
            Script::from_hex(DEFAULT_SIGNET_CHALLENGE).expect("hard-coded challenge is valid hex"),
            1,
        ),
        [challenge] => {
            let script =
                Script::from_hex(challenge).map_err(|error| ConfigError::InvalidSignetChallenge {
                    challenge: challenge.clone(),
                    reason: error.to_string(),
                })?;
            tracing::info!(%challenge, "signet with challenge");

            (script, 0)
        }
        challenges => return Err(ConfigError::MultipleSignetChallenges(challenges.len())),
    };

    let genesis = checked_genesis(
        GenesisInputs {
            time: 1654337344,
            nonce: 20993,
            difficulty_threshold: CompactDifficulty(0x1e0ffff0),
            timestamp: genesis::TESTNET_TIMESTAMP,
            premine: premine(genesis::MAINNET_PREMINE_SCRIPT_HASH),
        },
        "9aee26a672738ed0546bd5c12e094e808fd05a008be54a295af8e92c5d77a507",
        "340b7fb90cb28c4a4b145785678e0acebc05b662b40cf4018472bc608115b3c2",
    );

    let magic = Magic::from_signet_challenge(&challenge);

    let consensus = ConsensusRules {
        genesis_hash: genesis.hash(),
        subsidy_halving_interval: 2880,
        initial_subsidy: constants::INITIAL_SUBSIDY,
        heights: SoftForkHeights {
            bip16: Height(1),
            bip34: Height(1),
            bip65: Height(1),
            bip66: Height(1),
            csv: Height(1),
            segwit: Height(1),
        },
        min_bip9_warning_height: Height(0),
        // 90% of 2016
        rule_change_activation_threshold: 1815,
        miner_confirmation_window: 2016,
        pow_limit_neoscrypt: ExpandedDifficulty::from_hex_const(PUBLIC_POW_LIMIT),
        pow_no_retargeting: false,
        deployments: Deployments::new(
            DeploymentEntry::never_active(TESTDUMMY_BIT),
            DeploymentEntry::always_active(TAPROOT_BIT),
        ),
        auxpow_chain_id: constants::AUXPOW_CHAIN_ID,
        signet_challenge: Some(challenge),
        minimum_chain_work: Work::zero(),
        default_assume_valid: Default::default(),
        target_spacing: DEFAULT_SPACING,
    };

    Ok(ChainParams {
        network: Network::Signet,
        magic,
        default_port: Network::Signet.default_port(),
        prune_after_height: 1000,
        assumed_blockchain_size,
        assumed_chain_state_size: 0,
        genesis,
        consensus,
        base58_prefixes: Base58Prefixes::testnet(),
        bech32_hrp: testnet::SIGNET_HRP_SEGWIT_ADDRESS,
        dns_seeds: options.signet_seed_nodes.clone().unwrap_or_default(),
        fixed_seeds: Vec::new(),
        checkpoints: CheckpointList::default(),
        chain_tx_data: ChainTxData::default(),
        assumeutxo: Default::default(),
        policy: NodePolicy {
            default_consistency_checks: false,
            require_standard: true,
            is_test_chain: true,
            is_mockable_chain: false,
            default_check_name_db: None,
        },
    })
}
