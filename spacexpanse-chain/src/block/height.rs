//! Block height.

use std::{fmt, ops::Add};

/// The length of the chain back to the genesis block.
///
/// Two [`Height`]s can't be added, but an `i64` can be added to a [`Height`].
///
/// Activation heights for soft forks are compared against block heights, so an
/// activation height of [`Height::MAX`] is never reached.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Height(pub u32);

impl Height {
    /// The minimum [`Height`].
    ///
    /// Due to the underlying type, it is impossible to construct block heights
    /// less than [`Height::MIN`].
    ///
    /// Style note: Sometimes, [`Height::MIN`] is less readable than
    /// `Height(0)`. Use whichever makes sense in context.
    pub const MIN: Height = Height(0);

    /// The maximum [`Height`].
    ///
    /// Heights are stored as signed 32-bit integers by the rest of the node,
    /// so this is the largest height that can be represented everywhere.
    pub const MAX: Height = Height(Self::MAX_AS_U32);

    /// The maximum [`Height`] as a [`u32`], for range patterns.
    pub const MAX_AS_U32: u32 = i32::MAX as u32;

    /// Returns the next [`Height`], or `None` at [`Height::MAX`].
    pub fn next(self) -> Option<Self> {
        self + 1
    }

    /// Returns the previous [`Height`], or `None` at the genesis height.
    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub(1).map(Height)
    }

    /// Returns true if this is the genesis height.
    pub fn is_min(self) -> bool {
        self == Self::MIN
    }
}

impl Add<i64> for Height {
    type Output = Option<Height>;

    fn add(self, rhs: i64) -> Option<Height> {
        let result = i64::from(self.0).checked_add(rhs)?;
        let result = u32::try_from(result).ok()?;

        (result <= Self::MAX_AS_U32).then_some(Height(result))
    }
}

impl TryFrom<i64> for Height {
    type Error = &'static str;

    fn try_from(height: i64) -> Result<Self, Self::Error> {
        match u32::try_from(height) {
            Ok(height) if height <= Self::MAX_AS_U32 => Ok(Height(height)),
            _ => Err("heights must be in the range 0..=Height::MAX"),
        }
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
