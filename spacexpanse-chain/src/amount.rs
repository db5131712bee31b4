//! Strongly-typed coin amounts.

use std::{fmt, ops::Mul};

/// The number of base units in one coin.
pub const COIN: i64 = 100_000_000;

/// The largest amount this type accepts, in base units.
pub const MAX_AMOUNT: i64 = i64::MAX;

/// An amount of base units.
///
/// Amounts are signed on the wire, but every amount constructed through this
/// type is in the range `0..=MAX_AMOUNT`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(i64);

/// An error constructing an [`Amount`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The value is outside `0..=MAX_AMOUNT`.
    #[error("amount {value} is negative or too large")]
    OutOfRange {
        /// The rejected value.
        value: i64,
    },
}

impl Amount {
    /// Returns the zero amount.
    pub const fn zero() -> Self {
        Amount(0)
    }

    /// Returns an amount of `coins` whole coins.
    ///
    /// # Panics
    ///
    /// If `coins` whole coins exceed [`MAX_AMOUNT`].
    pub const fn from_coins(coins: i64) -> Self {
        assert!(coins >= 0 && coins <= MAX_AMOUNT / COIN, "coin amount out of range");
        Amount(coins * COIN)
    }

    /// Returns `self + other`, or an error if the sum is out of range.
    pub fn checked_add(self, other: Amount) -> Result<Amount, Error> {
        self.0
            .checked_add(other.0)
            .ok_or(Error::OutOfRange { value: i64::MAX })?
            .try_into()
    }

    /// Returns the value in base units.
    pub const fn base_units(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=MAX_AMOUNT).contains(&value) {
            Ok(Amount(value))
        } else {
            Err(Error::OutOfRange { value })
        }
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Mul<u32> for Amount {
    type Output = Result<Amount, Error>;

    fn mul(self, rhs: u32) -> Self::Output {
        let value = self
            .0
            .checked_mul(i64::from(rhs))
            .ok_or(Error::OutOfRange { value: i64::MAX })?;
        value.try_into()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coins = self.0 / COIN;
        let units = self.0 % COIN;
        write!(f, "{coins}.{units:08} ROD")
    }
}
