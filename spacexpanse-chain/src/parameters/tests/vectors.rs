//! Fixed test vectors for each network's parameters.

use color_eyre::Report;

use crate::{
    block::{self, Height},
    parameters::{
        apply_version_bits_params, constants::magics, parse_activation_height, select,
        ChainOptions, ChainParams, ChainTxData, ConfigError, Deployment, DeploymentEntry,
        Deployments, Magic, Network, VersionBitsParams,
    },
    transparent::Script,
};

/// The expected genesis hash and merkle root of each network.
const GENESIS: [(Network, &str, &str); 4] = [
    (
        Network::Mainnet,
        "5d4b20be4fc87d2333aea5235d9de1c685696fc935f806a9ffd71c9f9abf3c57",
        "afdbec35a16bea610dafafeee5a8cd072dc74a056894a12165da027079d5e138",
    ),
    (
        Network::Testnet,
        "30d791386d3fce328be9dce11abfb289d8cf6c06d4947950834d1e54044f037c",
        "159f4b9d14e17ebdba22ac6ae5781d5c7f39cb22328bd16486b84202fee9de06",
    ),
    (
        Network::Signet,
        "9aee26a672738ed0546bd5c12e094e808fd05a008be54a295af8e92c5d77a507",
        "340b7fb90cb28c4a4b145785678e0acebc05b662b40cf4018472bc608115b3c2",
    ),
    (
        Network::Regtest,
        "fa630c42f5e250d75191914d8d894e3f1e8fd54f750430e279becf86c42abd12",
        "159f4b9d14e17ebdba22ac6ae5781d5c7f39cb22328bd16486b84202fee9de06",
    ),
];

/// Returns the default parameters of `network`.
fn params(network: Network) -> ChainParams {
    select(network.token(), &ChainOptions::default()).expect("default options are valid")
}

/// Returns the regtest parameters with `vbparams`.
fn regtest_with_vbparams(vbparams: &[&str]) -> Result<ChainParams, ConfigError> {
    let options = ChainOptions {
        vbparams: vbparams.iter().map(|s| s.to_string()).collect(),
        ..ChainOptions::default()
    };
    select("regtest", &options)
}

#[test]
fn genesis_hashes() {
    let _init_guard = spacexpanse_test::init();

    for (network, hash, merkle_root) in GENESIS {
        let params = params(network);

        assert_eq!(params.network(), network);
        assert_eq!(params.genesis_hash().to_string(), hash);
        assert_eq!(params.genesis_block().hash(), params.genesis_hash());
        assert_eq!(params.consensus().genesis_hash, params.genesis_hash());
        assert_eq!(
            params.genesis_block().header.merkle_root().to_string(),
            merkle_root
        );
    }
}

#[test]
fn building_parameters_is_deterministic() {
    let _init_guard = spacexpanse_test::init();

    for network in Network::iter() {
        let first = params(network);
        let second = params(network);

        assert_eq!(first, second);
        assert_eq!(first.genesis_hash(), second.genesis_hash());
        assert_eq!(
            first.genesis_block().header.merkle_root(),
            second.genesis_block().header.merkle_root()
        );
    }
}

#[test]
fn checkpoints_increase_from_genesis() {
    let _init_guard = spacexpanse_test::init();

    for network in Network::iter() {
        let params = params(network);
        let checkpoints = params.checkpoints();

        let heights: Vec<Height> = checkpoints.iter().map(|(height, _)| height).collect();
        assert!(
            heights.windows(2).all(|pair| pair[0] < pair[1]),
            "{network} checkpoint heights must be strictly increasing"
        );

        if let Some(hash) = checkpoints.hash(Height(0)) {
            assert_eq!(hash, params.genesis_hash(), "{network} genesis checkpoint");
        }
    }

    assert_eq!(params(Network::Mainnet).checkpoints().len(), 3);
    assert_eq!(
        params(Network::Mainnet).checkpoints().max_height(),
        Some(Height(800001))
    );
    assert!(params(Network::Regtest).checkpoints().contains(Height(0)));
    assert!(!params(Network::Testnet).checkpoints().contains(Height(0)));
    assert!(params(Network::Signet).checkpoints().is_empty());
}

#[test]
fn unknown_network_names_are_rejected() {
    let _init_guard = spacexpanse_test::init();

    assert_eq!(
        select("mainnet", &ChainOptions::default()),
        Err(ConfigError::UnknownNetwork("mainnet".to_string()))
    );
    assert_eq!(
        select("", &ChainOptions::default()),
        Err(ConfigError::UnknownNetwork(String::new()))
    );
    assert_eq!(
        "REGTEST".parse::<Network>(),
        Err(ConfigError::UnknownNetwork("REGTEST".to_string()))
    );
    assert_eq!(
        select("MAIN", &ChainOptions::default()),
        Err(ConfigError::UnknownNetwork("MAIN".to_string()))
    );
    assert_eq!(
        select("Regtest", &ChainOptions::default()),
        Err(ConfigError::UnknownNetwork("Regtest".to_string()))
    );

    for network in Network::iter() {
        assert_eq!(network.to_string().parse::<Network>(), Ok(network));
    }
}

#[test]
fn mainnet_constants() {
    let _init_guard = spacexpanse_test::init();

    let params = params(Network::Mainnet);
    let consensus = params.consensus();

    assert_eq!(params.magic(), magics::MAINNET);
    assert_eq!(params.default_port(), 11998);
    assert_eq!(params.prune_after_height(), 100_000);
    assert_eq!(params.assumed_blockchain_size(), 5);
    assert_eq!(params.bech32_hrp(), "rod");
    assert_eq!(params.base58_prefixes().pubkey_address, [60]);
    assert_eq!(params.base58_prefixes().script_address, [75]);
    assert_eq!(params.base58_prefixes().secret_key, [78]);
    assert_eq!(
        params.dns_seeds(),
        ["seed1.spacexpanse.net", "seed2.spacexpanse.net"]
    );
    assert!(params.assumeutxo().is_empty());
    assert!(!params.policy().is_test_chain);
    assert!(params.policy().require_standard);

    assert_eq!(consensus.subsidy_halving_interval, 1_054_080);
    assert_eq!(consensus.initial_subsidy.base_units(), 800 * crate::amount::COIN);
    assert_eq!(consensus.heights.bip34, Height(1));
    assert_eq!(consensus.min_bip9_warning_height, Height(2016));
    assert_eq!(consensus.rule_change_activation_threshold, 1815);
    assert_eq!(consensus.auxpow_chain_id, 1899);
    assert!(!consensus.signet_blocks());
    assert!(!consensus.minimum_chain_work.is_zero());
    assert!(!consensus.default_assume_valid.is_null());
    assert_eq!(
        consensus.deployments.get(Deployment::Taproot),
        &DeploymentEntry::never_active(2)
    );
    assert_eq!(consensus.avg_target_spacing(Height(0)), 30);
}

#[test]
fn testnet_constants() {
    let _init_guard = spacexpanse_test::init();

    let params = params(Network::Testnet);
    let consensus = params.consensus();

    assert_eq!(params.magic(), magics::TESTNET);
    assert_eq!(params.default_port(), 18398);
    assert_eq!(params.bech32_hrp(), "rodtn");
    assert_eq!(params.base58_prefixes().pubkey_address, [122]);
    assert_eq!(params.base58_prefixes().ext_public_key, [0x04, 0x35, 0x87, 0xcf]);
    assert!(!params.policy().require_standard);

    assert_eq!(
        consensus.min_bip9_warning_height,
        Height(consensus.heights.segwit.0 + consensus.miner_confirmation_window)
    );
    assert_eq!(consensus.rule_change_activation_threshold, 1512);
    assert!(consensus.minimum_chain_work.is_zero());
    assert!(consensus.default_assume_valid.is_null());
    assert_eq!(params.chain_tx_data().tx_count, 2882);
}

#[test]
fn regtest_constants() {
    let _init_guard = spacexpanse_test::init();

    let params = params(Network::Regtest);
    let consensus = params.consensus();

    assert_eq!(params.magic(), magics::REGTEST);
    assert_eq!(params.default_port(), 18498);
    assert_eq!(params.prune_after_height(), 1000);
    assert_eq!(params.bech32_hrp(), "rodrt");
    assert!(params.dns_seeds().is_empty());
    assert!(params.fixed_seeds().is_empty());
    assert!(params.policy().is_mockable_chain);
    assert_eq!(params.policy().default_check_name_db, Some(Height(0)));

    assert!(consensus.pow_no_retargeting);
    assert_eq!(consensus.subsidy_halving_interval, 360);
    assert_eq!(consensus.heights.bip65, Height(1351));
    assert_eq!(consensus.miner_confirmation_window, 144);
    assert_eq!(consensus.deployments.get(Deployment::TestDummy).start_time, 0);
    assert_eq!(
        consensus.deployments.get(Deployment::Taproot).start_time,
        DeploymentEntry::ALWAYS_ACTIVE
    );

    let fast_prune = select(
        "regtest",
        &ChainOptions {
            fast_prune: true,
            ..ChainOptions::default()
        },
    )
    .expect("fast pruning is a valid option");
    assert_eq!(fast_prune.prune_after_height(), 100);
}

#[test]
fn signet_default_challenge() {
    let _init_guard = spacexpanse_test::init();

    let params = params(Network::Signet);
    let consensus = params.consensus();

    assert!(consensus.signet_blocks());
    assert_eq!(
        consensus
            .signet_challenge
            .as_ref()
            .map(|challenge| challenge.to_string()),
        Some(crate::parameters::constants::DEFAULT_SIGNET_CHALLENGE.to_string())
    );
    assert_eq!(params.magic(), magics::DEFAULT_SIGNET);
    assert!(consensus.minimum_chain_work.is_zero());
    assert!(consensus.default_assume_valid.is_null());
    assert_eq!(params.chain_tx_data().tx_count, 0);
    assert_eq!(params.assumed_blockchain_size(), 1);
    assert_eq!(params.assumed_chain_state_size(), 0);
    assert!(params.dns_seeds().is_empty());
    assert_eq!(params.default_port(), 38398);
    assert_eq!(params.bech32_hrp(), "rodtb");
}

#[test]
fn signet_custom_challenge() -> Result<(), Report> {
    let _init_guard = spacexpanse_test::init();

    let options = ChainOptions {
        signet_challenge: vec!["51".to_string()],
        signet_seed_nodes: Some(vec!["127.0.0.1:38398".to_string()]),
        ..ChainOptions::default()
    };
    let params = select("signet", &options)?;
    let challenge = Script::new(&[0x51]);

    assert_eq!(params.magic(), Magic::from_signet_challenge(&challenge));
    assert_eq!(params.magic(), Magic([0x54, 0xd2, 0x6f, 0xbd]));
    assert_eq!(params.consensus().signet_challenge, Some(challenge));
    assert!(params.consensus().minimum_chain_work.is_zero());
    assert!(params.consensus().default_assume_valid.is_null());
    assert_eq!(params.assumed_blockchain_size(), 0);
    assert_eq!(params.dns_seeds(), ["127.0.0.1:38398"]);

    // The genesis block doesn't depend on the challenge.
    assert_eq!(params.genesis_hash(), params_genesis(Network::Signet));

    Ok(())
}

/// Returns the genesis hash of `network` with default options.
fn params_genesis(network: Network) -> block::Hash {
    params(network).genesis_hash()
}

#[test]
fn signet_challenge_errors() {
    let _init_guard = spacexpanse_test::init();

    let two_challenges = ChainOptions {
        signet_challenge: vec!["51".to_string(), "52".to_string()],
        ..ChainOptions::default()
    };
    assert_eq!(
        select("signet", &two_challenges),
        Err(ConfigError::MultipleSignetChallenges(2))
    );

    let not_hex = ChainOptions {
        signet_challenge: vec!["5g".to_string()],
        ..ChainOptions::default()
    };
    assert!(matches!(
        select("signet", &not_hex),
        Err(ConfigError::InvalidSignetChallenge { challenge, .. }) if challenge == "5g"
    ));

    // Signet options are ignored by other networks.
    assert!(select("main", &two_challenges).is_ok());
}

#[test]
fn version_bits_override_grammar() {
    let _init_guard = spacexpanse_test::init();

    assert_eq!(
        "testdummy:100:200:5".parse::<VersionBitsParams>(),
        Ok(VersionBitsParams {
            deployment: Deployment::TestDummy,
            start_time: 100,
            timeout: 200,
            min_activation_height: 5,
        })
    );
    assert_eq!(
        "taproot:-1:9223372036854775807".parse::<VersionBitsParams>(),
        Ok(VersionBitsParams {
            deployment: Deployment::Taproot,
            start_time: DeploymentEntry::ALWAYS_ACTIVE,
            timeout: DeploymentEntry::NO_TIMEOUT,
            min_activation_height: 0,
        })
    );

    for malformed in ["testdummy:100", "testdummy", "", "testdummy:1:2:3:4"] {
        assert_eq!(
            malformed.parse::<VersionBitsParams>(),
            Err(ConfigError::MalformedVersionBits(malformed.to_string()))
        );
    }

    assert_eq!(
        "testdummy:soon:200".parse::<VersionBitsParams>(),
        Err(ConfigError::InvalidStartTime("soon".to_string()))
    );
    assert_eq!(
        "testdummy:100:".parse::<VersionBitsParams>(),
        Err(ConfigError::InvalidTimeout(String::new()))
    );
    assert_eq!(
        "testdummy:100:200:4294967296".parse::<VersionBitsParams>(),
        Err(ConfigError::InvalidMinActivationHeight(
            "4294967296".to_string()
        ))
    );
    assert_eq!(
        "segwit:100:200".parse::<VersionBitsParams>(),
        Err(ConfigError::UnknownDeployment("segwit".to_string()))
    );
    assert_eq!(
        "TestDummy:100:200".parse::<VersionBitsParams>(),
        Err(ConfigError::UnknownDeployment("TestDummy".to_string()))
    );
}

#[test]
fn regtest_version_bits_overrides() -> Result<(), Report> {
    let _init_guard = spacexpanse_test::init();

    let params = regtest_with_vbparams(&["testdummy:100:200:5"])?;
    let testdummy = params.consensus().deployments.get(Deployment::TestDummy);

    assert_eq!(testdummy.start_time, 100);
    assert_eq!(testdummy.timeout, 200);
    assert_eq!(testdummy.min_activation_height, 5);
    assert_eq!(testdummy.bit, 28);

    // Later overrides of the same deployment win.
    let params = regtest_with_vbparams(&["taproot:1:2", "taproot:3:4"])?;
    let taproot = params.consensus().deployments.get(Deployment::Taproot);
    assert_eq!((taproot.start_time, taproot.timeout), (3, 4));
    assert_eq!(taproot.min_activation_height, 0);

    assert_eq!(
        regtest_with_vbparams(&["testdummy:1:2", "testdummy:1"]),
        Err(ConfigError::MalformedVersionBits("testdummy:1".to_string()))
    );
    assert_eq!(
        regtest_with_vbparams(&["unknown:1:2"]),
        Err(ConfigError::UnknownDeployment("unknown".to_string()))
    );

    // Overrides are ignored by other networks.
    let options = ChainOptions {
        vbparams: vec!["unknown".to_string()],
        bip16_height: Some(-5),
        ..ChainOptions::default()
    };
    assert!(select("test", &options).is_ok());
    assert!(select("signet", &options).is_ok());

    Ok(())
}

#[test]
fn version_bits_overrides_are_all_or_nothing() {
    let _init_guard = spacexpanse_test::init();

    let mut deployments = Deployments::new(
        DeploymentEntry::never_active(28),
        DeploymentEntry::never_active(2),
    );
    let original = deployments.clone();

    assert!(apply_version_bits_params(&mut deployments, &["taproot:1:2", "bad"]).is_err());
    assert_eq!(deployments, original);

    assert_eq!(
        apply_version_bits_params(&mut deployments, &["taproot:1:2"]),
        Ok(())
    );
    assert_eq!(deployments.get(Deployment::Taproot).start_time, 1);
}

#[test]
fn activation_height_overrides() -> Result<(), Report> {
    let _init_guard = spacexpanse_test::init();

    assert_eq!(parse_activation_height("BIP16", 0), Ok(Height(0)));
    assert_eq!(parse_activation_height("BIP16", -1), Ok(Height::MAX));
    assert_eq!(
        parse_activation_height("segwit", i64::from(i32::MAX) - 1),
        Ok(Height(i32::MAX as u32 - 1))
    );

    for height in [-2, i64::from(i32::MAX), i64::MAX, i64::MIN] {
        assert_eq!(
            parse_activation_height("segwit", height),
            Err(ConfigError::ActivationHeightOutOfRange {
                fork: "segwit",
                height,
            })
        );
    }

    let options = ChainOptions {
        bip16_height: Some(-1),
        segwit_height: Some(10),
        ..ChainOptions::default()
    };
    let params = select("regtest", &options)?;
    assert_eq!(params.consensus().heights.bip16, Height::MAX);
    assert_eq!(params.consensus().heights.segwit, Height(10));

    let options = ChainOptions {
        segwit_height: Some(-2),
        ..ChainOptions::default()
    };
    assert!(matches!(
        select("regtest", &options),
        Err(ConfigError::ActivationHeightOutOfRange { fork: "segwit", height: -2 })
    ));

    Ok(())
}

#[test]
fn deployment_table() {
    let _init_guard = spacexpanse_test::init();

    for network in Network::iter() {
        let params = params(network);
        let deployments = &params.consensus().deployments;

        let bits: Vec<u8> = deployments.iter().map(|(_, entry)| entry.bit).collect();
        assert_eq!(bits, [28, 2], "{network} deployment bits");

        for (deployment, entry) in deployments.iter() {
            assert_eq!(deployment.to_string().parse::<Deployment>(), Ok(deployment));
            assert_eq!(entry.timeout, DeploymentEntry::NO_TIMEOUT);
        }
    }
}

#[test]
#[should_panic(expected = "must be unique")]
fn duplicate_deployment_bits_panic() {
    let _init_guard = spacexpanse_test::init();

    Deployments::new(
        DeploymentEntry::never_active(2),
        DeploymentEntry::always_active(2),
    );
}

#[test]
fn options_from_toml() -> Result<(), Report> {
    let _init_guard = spacexpanse_test::init();

    #[derive(serde::Deserialize)]
    struct Config {
        chain: ChainOptions,
    }

    let config: Config = toml::from_str(
        r#"
        [chain]
        signet_challenge = ["51"]
        vbparams = ["testdummy:100:200:5"]
        segwit_height = -1
        fast_prune = true
        "#,
    )?;

    assert_eq!(
        config.chain,
        ChainOptions {
            signet_challenge: vec!["51".to_string()],
            signet_seed_nodes: None,
            bip16_height: None,
            segwit_height: Some(-1),
            vbparams: vec!["testdummy:100:200:5".to_string()],
            fast_prune: true,
        }
    );

    assert!(toml::from_str::<ChainOptions>("unknown_option = 1").is_err());
    assert_eq!(toml::from_str::<ChainOptions>("")?, ChainOptions::default());

    Ok(())
}

#[test]
fn sync_progress_estimates() {
    let _init_guard = spacexpanse_test::init();

    let params = params(Network::Mainnet);
    let data = params.chain_tx_data();
    let at = |time: i64| chrono::DateTime::from_timestamp(time, 0).expect("valid time");

    assert_eq!(data.estimated_tx_count(at(data.time)), data.tx_count as f64);
    assert_eq!(data.estimated_tx_count(at(data.time - 100)), data.tx_count as f64);
    assert!(data.estimated_tx_count(at(data.time + 1000)) > data.tx_count as f64);

    let now = at(data.time + 1000);
    let progress = data.verification_progress(data.tx_count / 2, at(data.time / 2), now);
    assert!(progress > 0.0 && progress < 0.5);

    // A tip at the current time past the statistics is fully synced.
    assert_eq!(
        data.verification_progress(data.tx_count + 10, now, now),
        1.0
    );

    // Networks without statistics can't estimate progress from genesis.
    let signet = ChainTxData::default();
    assert_eq!(signet.verification_progress(0, now, now), 0.0);
    assert_eq!(signet.verification_progress(5, now, now), 1.0);
}
