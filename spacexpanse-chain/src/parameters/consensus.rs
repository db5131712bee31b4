//! Consensus rules that vary between networks.

use std::{fmt, str::FromStr};

use crate::{
    amount::Amount,
    block::{self, Height},
    transparent::Script,
    work::{
        algorithm::PowAlgo,
        difficulty::{ExpandedDifficulty, Work},
        spacing::{self, AlgorithmSpacing, TargetSpacing},
    },
};

use super::ConfigError;

/// A version bits deployment, which activates a soft fork by miner signalling.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// A deployment that exists only to test the signalling machinery.
    TestDummy,
    /// Schnorr signatures and Taproot (BIPs 340-342).
    Taproot,
}

impl Deployment {
    /// Every deployment, in table order.
    pub const ALL: [Deployment; 2] = [Deployment::TestDummy, Deployment::Taproot];

    /// Returns the name used for this deployment in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Deployment::TestDummy => "testdummy",
            Deployment::Taproot => "taproot",
        }
    }

    /// Returns the position of this deployment in a [`Deployments`] table.
    fn index(self) -> usize {
        match self {
            Deployment::TestDummy => 0,
            Deployment::Taproot => 1,
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deployment {
    type Err = ConfigError;

    /// Deployment names are case-sensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Deployment::ALL
            .into_iter()
            .find(|deployment| deployment.name() == name)
            .ok_or_else(|| ConfigError::UnknownDeployment(name.to_string()))
    }
}

/// The signalling parameters of a [`Deployment`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DeploymentEntry {
    /// The version bit miners set to signal for the deployment.
    pub bit: u8,
    /// The median time past at which signalling starts, or one of the
    /// [`ALWAYS_ACTIVE`](Self::ALWAYS_ACTIVE) and
    /// [`NEVER_ACTIVE`](Self::NEVER_ACTIVE) sentinels.
    pub start_time: i64,
    /// The median time past at which an unsuccessful deployment fails.
    pub timeout: i64,
    /// The earliest height the deployment can activate at.
    pub min_activation_height: i32,
}

impl DeploymentEntry {
    /// A start time meaning the deployment is active from genesis.
    pub const ALWAYS_ACTIVE: i64 = -1;

    /// A start time meaning the deployment can never activate.
    pub const NEVER_ACTIVE: i64 = -2;

    /// A timeout meaning the deployment never times out.
    pub const NO_TIMEOUT: i64 = i64::MAX;

    /// Returns a deployment on `bit` that can never activate.
    pub const fn never_active(bit: u8) -> Self {
        DeploymentEntry {
            bit,
            start_time: Self::NEVER_ACTIVE,
            timeout: Self::NO_TIMEOUT,
            min_activation_height: 0,
        }
    }

    /// Returns a deployment on `bit` that is active from genesis.
    pub const fn always_active(bit: u8) -> Self {
        DeploymentEntry {
            bit,
            start_time: Self::ALWAYS_ACTIVE,
            timeout: Self::NO_TIMEOUT,
            min_activation_height: 0,
        }
    }
}

/// The deployment table of a network, with one entry per [`Deployment`].
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Deployments([DeploymentEntry; 2]);

impl Deployments {
    /// The number of bits available for signalling in a block version.
    pub const VERSION_BITS: u8 = 29;

    /// Returns a table with the `testdummy` and `taproot` entries.
    ///
    /// # Panics
    ///
    /// If two entries share a bit, or a bit is outside the signalling bits.
    pub fn new(testdummy: DeploymentEntry, taproot: DeploymentEntry) -> Self {
        let deployments = Deployments([testdummy, taproot]);

        for (i, entry) in deployments.0.iter().enumerate() {
            assert!(
                entry.bit < Self::VERSION_BITS,
                "deployment bit {} must be a signalling bit",
                entry.bit,
            );
            assert!(
                deployments.0[..i].iter().all(|other| other.bit != entry.bit),
                "deployment bit {} must be unique",
                entry.bit,
            );
        }

        deployments
    }

    /// Returns the entry for `deployment`.
    pub fn get(&self, deployment: Deployment) -> &DeploymentEntry {
        &self.0[deployment.index()]
    }

    /// Returns a mutable reference to the entry for `deployment`.
    ///
    /// Bits are never overridden, so they stay unique.
    pub(super) fn get_mut(&mut self, deployment: Deployment) -> &mut DeploymentEntry {
        &mut self.0[deployment.index()]
    }

    /// Returns each deployment with its entry.
    pub fn iter(&self) -> impl Iterator<Item = (Deployment, &DeploymentEntry)> {
        Deployment::ALL.into_iter().zip(self.0.iter())
    }
}

/// The heights at which the buried soft forks activate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SoftForkHeights {
    /// Pay to script hash (BIP16).
    pub bip16: Height,
    /// Block height in coinbase (BIP34).
    pub bip34: Height,
    /// `OP_CHECKLOCKTIMEVERIFY` (BIP65).
    pub bip65: Height,
    /// Strict DER signatures (BIP66).
    pub bip66: Height,
    /// `OP_CHECKSEQUENCEVERIFY` and relative lock times (BIPs 68, 112 and 113).
    pub csv: Height,
    /// Segregated witness (BIPs 141, 143 and 147).
    pub segwit: Height,
}

/// The consensus rules of a network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsensusRules {
    /// The hash of the network's genesis block.
    pub genesis_hash: block::Hash,
    /// The number of blocks between subsidy halvings.
    pub subsidy_halving_interval: u32,
    /// The block subsidy before the first halving.
    pub initial_subsidy: Amount,
    /// The activation heights of the buried soft forks.
    pub heights: SoftForkHeights,
    /// Unknown version bits are not warned about below this height.
    pub min_bip9_warning_height: Height,
    /// The number of signalling blocks in a confirmation window needed to lock
    /// in a deployment.
    pub rule_change_activation_threshold: u32,
    /// The number of blocks in each version bits confirmation window.
    pub miner_confirmation_window: u32,
    /// The easiest target allowed for Neoscrypt blocks.
    pub pow_limit_neoscrypt: ExpandedDifficulty,
    /// Whether difficulty retargeting is disabled.
    pub pow_no_retargeting: bool,
    /// The version bits deployments.
    pub deployments: Deployments,
    /// The merge-mining chain id.
    pub auxpow_chain_id: u32,
    /// The script that signs signet blocks, only present on signet.
    pub signet_challenge: Option<Script>,
    /// The minimum total chain work a node needs before it considers itself
    /// synced.
    pub minimum_chain_work: Work,
    /// Scripts in ancestors of this block are assumed valid, unless it is the
    /// null hash.
    pub default_assume_valid: block::Hash,
    /// The target spacing of each mining algorithm.
    pub target_spacing: AlgorithmSpacing,
}

impl ConsensusRules {
    /// Returns true if blocks must be signed by the signet challenge.
    pub fn signet_blocks(&self) -> bool {
        self.signet_challenge.is_some()
    }

    /// Returns the average spacing between blocks of any algorithm at `height`.
    pub fn avg_target_spacing(&self, height: Height) -> i64 {
        spacing::avg_target_spacing(self, height)
    }
}

impl TargetSpacing for ConsensusRules {
    fn target_spacing(&self, algorithm: PowAlgo, height: Height) -> i64 {
        self.target_spacing.target_spacing(algorithm, height)
    }
}
