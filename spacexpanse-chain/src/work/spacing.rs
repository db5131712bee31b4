//! The average spacing between blocks of any algorithm.
//!
//! Each mining algorithm produces blocks as an independent process with its own
//! target spacing `s_i`, so blocks of any algorithm arrive at the summed rate
//! `Σ 1/s_i`. The combined spacing is the reciprocal of that rate:
//!
//! ```text
//!   1 / Σ (1/s_i)  =  Π s_j / Σ_i Π_{j≠i} s_j
//! ```
//!
//! Both sides of the right-hand fraction are computed with exact integer
//! arithmetic, and the final division must also be exact.

use crate::block::Height;

use super::algorithm::PowAlgo;

/// Looks up the target spacing of each algorithm's blocks.
///
/// This is implemented by the difficulty retargeting rules of each network.
pub trait TargetSpacing {
    /// Returns the target number of seconds between `algorithm` blocks at `height`.
    fn target_spacing(&self, algorithm: PowAlgo, height: Height) -> i64;
}

/// Fixed per-algorithm target spacings, in seconds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AlgorithmSpacing {
    /// The target spacing of SHA-256d blocks.
    pub sha256d: i64,
    /// The target spacing of Neoscrypt blocks.
    pub neoscrypt: i64,
}

/// The target spacings used by every network: one SHA-256d block every two
/// minutes and one Neoscrypt block every 40 seconds, for a combined 30 seconds.
pub const DEFAULT_SPACING: AlgorithmSpacing = AlgorithmSpacing {
    sha256d: 120,
    neoscrypt: 40,
};

impl TargetSpacing for AlgorithmSpacing {
    fn target_spacing(&self, algorithm: PowAlgo, _height: Height) -> i64 {
        match algorithm {
            PowAlgo::Sha256d => self.sha256d,
            PowAlgo::Neoscrypt => self.neoscrypt,
        }
    }
}

/// An error combining target spacings.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingError {
    /// No spacings were supplied.
    #[error("at least one target spacing is required")]
    Empty,

    /// A spacing was zero or negative.
    #[error("target spacing {0} is not positive")]
    NotPositive(i64),

    /// The product of the spacings does not fit in 64 bits.
    #[error("target spacings are too large to combine")]
    Overflow,

    /// The combined spacing is not a whole number of seconds.
    #[error("combined spacing {numerator}/{denominator} is not a whole number of seconds")]
    Inexact {
        /// The product of all spacings.
        numerator: i64,
        /// The sum of the products of all spacings but one.
        denominator: i64,
    },
}

/// Returns the average spacing between blocks of any algorithm, given the
/// target spacing of each algorithm.
///
/// Spacings must be positive, and must be chosen so the combined spacing is a
/// whole number of seconds. The result does not depend on the order of
/// `spacings`.
pub fn combine_spacings(spacings: impl IntoIterator<Item = i64>) -> Result<i64, SpacingError> {
    let mut numerator: i64 = 1;
    let mut denominator: i64 = 0;

    for spacing in spacings {
        if spacing <= 0 {
            return Err(SpacingError::NotPositive(spacing));
        }

        // Every block count already added excludes this algorithm, so it gets
        // multiplied by this spacing. Then this algorithm's own count is the
        // product of all the spacings before it.
        denominator = denominator
            .checked_mul(spacing)
            .and_then(|denominator| denominator.checked_add(numerator))
            .ok_or(SpacingError::Overflow)?;

        numerator = numerator
            .checked_mul(spacing)
            .ok_or(SpacingError::Overflow)?;
    }

    if denominator == 0 {
        return Err(SpacingError::Empty);
    }

    if numerator % denominator != 0 {
        return Err(SpacingError::Inexact {
            numerator,
            denominator,
        });
    }

    Ok(numerator / denominator)
}

/// Returns the average target spacing between blocks of any algorithm at
/// `height`.
///
/// # Panics
///
/// If the spacings of `rules` don't combine exactly. Each network's rules are
/// chosen so they do, so this is a bug in the rules.
pub fn avg_target_spacing<T: TargetSpacing + ?Sized>(rules: &T, height: Height) -> i64 {
    let spacings = PowAlgo::ALL.map(|algorithm| rules.target_spacing(algorithm, height));

    combine_spacings(spacings).unwrap_or_else(|error| {
        panic!("target spacings {spacings:?} at height {height} must combine exactly: {error}")
    })
}
