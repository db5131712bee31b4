//! Consensus parameters for each SpaceXpanse network.
//!
//! A node builds exactly one [`ChainParams`] at startup with [`select`], and
//! shares it read-only with every subsystem that needs it.

mod chain_params;
mod checkpoint;
mod consensus;
mod error;
mod network;
mod options;
mod overrides;
mod selector;

pub mod constants;


pub use chain_params::{
    AssumeutxoData, AssumeutxoEntry, Base58Prefixes, ChainParams, ChainTxData, NodePolicy,
};
pub use checkpoint::CheckpointList;
pub use consensus::{ConsensusRules, Deployment, DeploymentEntry, Deployments, SoftForkHeights};
pub use error::ConfigError;
pub use network::{magic::Magic, Network};
pub use options::ChainOptions;
pub use overrides::{apply_version_bits_params, parse_activation_height, VersionBitsParams};
pub use selector::select;
