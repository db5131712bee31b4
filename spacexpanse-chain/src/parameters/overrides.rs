//! Overrides of soft fork activation rules, only used on regtest.

use std::str::FromStr;

use crate::block::Height;

use super::{ChainOptions, ConfigError, ConsensusRules, Deployment, Deployments};

/// The activation height override that disables a soft fork.
const DISABLED_HEIGHT: i64 = -1;

/// Returns the activation height of `fork` for an overridden `height`.
///
/// [`DISABLED_HEIGHT`] disables the fork by moving it to [`Height::MAX`], which
/// is never reached. Other heights must be in `0..Height::MAX`.
pub fn parse_activation_height(fork: &'static str, height: i64) -> Result<Height, ConfigError> {
    if height == DISABLED_HEIGHT {
        tracing::info!(fork, "soft fork disabled for testing");
        return Ok(Height::MAX);
    }

    match u32::try_from(height) {
        Ok(height) if height < Height::MAX_AS_U32 => Ok(Height(height)),
        _ => Err(ConfigError::ActivationHeightOutOfRange { fork, height }),
    }
}

/// An override of a version bits deployment's signalling parameters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VersionBitsParams {
    /// The overridden deployment.
    pub deployment: Deployment,
    /// The new start time.
    pub start_time: i64,
    /// The new timeout.
    pub timeout: i64,
    /// The new minimum activation height, zero if it wasn't given.
    pub min_activation_height: i32,
}

impl FromStr for VersionBitsParams {
    type Err = ConfigError;

    /// Parses `deployment:start:timeout[:min_activation_height]`.
    ///
    /// Numbers are checked before the deployment name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();

        let (name, start_time, timeout, min_activation_height) = match fields.as_slice() {
            [name, start_time, timeout] => (*name, *start_time, *timeout, None),
            [name, start_time, timeout, min_activation_height] => {
                (*name, *start_time, *timeout, Some(*min_activation_height))
            }
            _ => return Err(ConfigError::MalformedVersionBits(s.to_string())),
        };

        let start_time = start_time
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidStartTime(start_time.to_string()))?;
        let timeout = timeout
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidTimeout(timeout.to_string()))?;
        let min_activation_height = min_activation_height
            .map(|height| {
                height
                    .parse::<i32>()
                    .map_err(|_| ConfigError::InvalidMinActivationHeight(height.to_string()))
            })
            .transpose()?
            .unwrap_or(0);

        Ok(VersionBitsParams {
            deployment: name.parse()?,
            start_time,
            timeout,
            min_activation_height,
        })
    }
}

impl VersionBitsParams {
    /// Overwrites the signalling parameters of the deployment in `deployments`.
    ///
    /// The deployment keeps its bit.
    pub fn apply(&self, deployments: &mut Deployments) {
        let entry = deployments.get_mut(self.deployment);
        entry.start_time = self.start_time;
        entry.timeout = self.timeout;
        entry.min_activation_height = self.min_activation_height;

        tracing::info!(
            deployment = %self.deployment,
            start = self.start_time,
            timeout = self.timeout,
            min_activation_height = self.min_activation_height,
            "setting version bits activation parameters",
        );
    }
}

/// Parses each of `overrides` and applies them to `deployments` in order.
///
/// Nothing is applied if any override is invalid.
pub fn apply_version_bits_params<S: AsRef<str>>(
    deployments: &mut Deployments,
    overrides: &[S],
) -> Result<(), ConfigError> {
    let overrides = overrides
        .iter()
        .map(|s| s.as_ref().parse::<VersionBitsParams>())
        .collect::<Result<Vec<_>, _>>()?;

    for params in overrides {
        params.apply(deployments);
    }

    Ok(())
}

/// Applies the activation overrides in `options` to the regtest `rules`.
pub(super) fn apply_regtest_overrides(
    rules: &mut ConsensusRules,
    options: &ChainOptions,
) -> Result<(), ConfigError> {
    if let Some(height) = options.bip16_height {
        rules.heights.bip16 = parse_activation_height("BIP16", height)?;
    }

    if let Some(height) = options.segwit_height {
        rules.heights.segwit = parse_activation_height("segwit", height)?;
    }

    apply_version_bits_params(&mut rules.deployments, &options.vbparams)
}
