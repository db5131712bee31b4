//! Startup options that change the chain parameters.

/// Options for building chain parameters, usually loaded from the `[chain]`
/// section of the node's config file.
///
/// Options that don't apply to the selected network are ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ChainOptions {
    /// The hex challenge script that signs signet blocks.
    ///
    /// At most one challenge can be configured. If there is none, signet uses
    /// [`DEFAULT_SIGNET_CHALLENGE`](super::constants::DEFAULT_SIGNET_CHALLENGE).
    pub signet_challenge: Vec<String>,

    /// The seed nodes of a signet, replacing its empty default seed list.
    pub signet_seed_nodes: Option<Vec<String>>,

    /// Overrides the regtest BIP16 activation height. `-1` disables BIP16.
    pub bip16_height: Option<i64>,

    /// Overrides the regtest segwit activation height. `-1` disables segwit.
    pub segwit_height: Option<i64>,

    /// Overrides regtest version bits deployments, in the format
    /// `deployment:start:timeout[:min_activation_height]`.
    pub vbparams: Vec<String>,

    /// Prune regtest blocks sooner, for faster pruning tests.
    pub fast_prune: bool,
}
