//! Errors in the startup configuration of a network.

/// A configuration error found while building chain parameters.
///
/// These are all detected before the parameters are published, so callers
/// should stop the node rather than run with partially applied parameters.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The network name is not one of the supported tokens.
    #[error("unknown chain {0:?}, expected main, test, signet or regtest")]
    UnknownNetwork(String),

    /// More than one signet challenge was configured.
    #[error("signet_challenge cannot be multiple values, got {0}")]
    MultipleSignetChallenges(usize),

    /// The signet challenge is not a hex script.
    #[error("signet challenge {challenge:?} is not valid hex: {reason}")]
    InvalidSignetChallenge {
        /// The configured challenge.
        challenge: String,
        /// The hex decoding error.
        reason: String,
    },

    /// A soft-fork activation height override is out of range.
    #[error("activation height {height} for {fork} is out of valid range, use -1 to disable {fork}")]
    ActivationHeightOutOfRange {
        /// The soft fork being overridden.
        fork: &'static str,
        /// The rejected height.
        height: i64,
    },

    /// A version bits override doesn't have 3 or 4 fields.
    #[error(
        "version bits parameters {0:?} malformed, expecting deployment:start:end[:min_activation_height]"
    )]
    MalformedVersionBits(String),

    /// The start time of a version bits override is not a 64-bit integer.
    #[error("invalid start time {0:?}")]
    InvalidStartTime(String),

    /// The timeout of a version bits override is not a 64-bit integer.
    #[error("invalid timeout {0:?}")]
    InvalidTimeout(String),

    /// The minimum activation height of a version bits override is not a
    /// 32-bit integer.
    #[error("invalid min_activation_height {0:?}")]
    InvalidMinActivationHeight(String),

    /// A version bits override names an unknown deployment.
    #[error("invalid deployment {0:?}")]
    UnknownDeployment(String),
}
