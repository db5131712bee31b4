//! Block difficulty data structures and calculations
//!
//! The block difficulty "target threshold" is stored in the proof-of-work
//! data as a 32-bit [`CompactDifficulty`]. The `block::Hash` must be less than
//! or equal to the [`ExpandedDifficulty`] threshold, when represented as a
//! 256-bit integer in little-endian order.
//!
//! The target threshold is also used to calculate the [`Work`] for each block.
//! The block work is used to find the chain with the greatest total work. Each
//! block's work value depends on the fixed threshold in the block header, not
//! the actual work represented by the block header hash.

use std::{cmp::Ordering, fmt};

use hex::ToHex;

pub use primitive_types::U256;

/// A 32-bit "compact bits" value, which represents the difficulty threshold for
/// a block header.
///
/// Used for:
///   - checking the `difficulty_threshold` value in the proof-of-work data,
///   - calculating the 256-bit `ExpandedDifficulty` threshold, for comparison
///     with the proof-of-work hash.
///
/// Details:
///
/// This is a floating-point encoding, with a 24-bit signed mantissa,
/// an 8-bit exponent, an offset of 3, and a radix of 256.
/// (IEEE 754 32-bit floating-point values use a separate sign bit, an implicit
/// leading mantissa bit, an offset of 127, and a radix of 2.)
///
/// The precise bit pattern of a `CompactDifficulty` value is
/// consensus-critical, because it is used for the `difficulty_threshold` field,
/// which is:
///   - part of the serialized proof-of-work data, and
///   - hashed as part of the block hash of merge-mined parent headers.
///
/// Without these consensus rules, some `ExpandedDifficulty` values would have
/// multiple equivalent `CompactDifficulty` values, due to redundancy in the
/// floating-point format.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CompactDifficulty(pub u32);

/// A 256-bit unsigned "expanded difficulty" value.
///
/// Used as a target threshold for the difficulty of a proof-of-work hash,
/// and as the proof-of-work limit of each network.
///
/// Details:
///
/// The precise bit pattern of an `ExpandedDifficulty` value is
/// consensus-critical, because it is compared with the proof-of-work hash.
///
/// Note that each `CompactDifficulty` value can be converted from a
/// range of `ExpandedDifficulty` values, because the precision of
/// the floating-point format requires rounding on conversion.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ExpandedDifficulty(U256);

/// A 256-bit quantity of cumulative chain work, such as the minimum chain work
/// a node requires before it considers itself synced.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Work(U256);

impl fmt::Debug for CompactDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // There isn't a standard way to show different representations of the
        // same value
        f.debug_tuple("CompactDifficulty")
            // Use hex, because it's a float
            .field(&format_args!("{:#010x}", self.0))
            // Use expanded difficulty, for bitwise difficulty comparisons
            .field(&format_args!("{:?}", self.to_expanded()))
            .finish()
    }
}

impl fmt::Display for CompactDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl CompactDifficulty {
    /// Precision of the mantissa, in bits.
    const PRECISION: u32 = 24;

    /// Sign bit for the mantissa.
    const SIGN_BIT: u32 = 1 << (Self::PRECISION - 1);

    /// Unsigned mantissa bit mask.
    const UNSIGNED_MANTISSA_MASK: u32 = CompactDifficulty::SIGN_BIT - 1;

    /// Offset for the exponent, in bytes.
    const OFFSET: u32 = 3;

    /// Calculate the `ExpandedDifficulty` for a compact representation.
    ///
    /// Returns `None` for negative, zero, and overflow values. (The
    /// Bitcoin-inherited `SetCompact` would accept some of these values, but
    /// they can never be valid proof-of-work targets.)
    pub fn to_expanded(self) -> Option<ExpandedDifficulty> {
        // The constants for this floating-point representation.
        // Alias the struct constants here, so the code is easier to read.
        const PRECISION: u32 = CompactDifficulty::PRECISION;
        const SIGN_BIT: u32 = CompactDifficulty::SIGN_BIT;
        const UNSIGNED_MANTISSA_MASK: u32 = CompactDifficulty::UNSIGNED_MANTISSA_MASK;
        const OFFSET: u32 = CompactDifficulty::OFFSET;

        // Negative values in this floating-point representation.
        // 0 if (x & 2^23 == 2^23)
        // Zero values are handled below.
        if self.0 & SIGN_BIT == SIGN_BIT {
            return None;
        }

        // The components of the result
        // The fractional part of the floating-point number
        // x & (2^23 - 1)
        let mantissa = self.0 & UNSIGNED_MANTISSA_MASK;
        if mantissa == 0 {
            return None;
        }

        // The exponent for the multiplier in the floating-point number
        // 256^(floor(x/(2^24)) - 3)
        //
        // The i32 conversion is safe, because we've just divided self by 2^24.
        let exponent = i32::try_from(self.0 >> PRECISION).expect("fits in i32") - OFFSET as i32;

        // Normalise the mantissa and exponent before multiplying.
        //
        // If the exponent is negative, the mantissa is shifted right instead.
        let result = if exponent < 0 {
            U256::from(mantissa) >> (8 * (-exponent) as usize)
        } else {
            let shift = 8 * exponent as usize;
            // Checks for overflow, like Bitcoin's `SetCompact`.
            if exponent > 31
                || (mantissa > 0xff && exponent > 30)
                || (mantissa > 0xffff && exponent > 29)
            {
                return None;
            }
            U256::from(mantissa) << shift
        };

        if result == U256::zero() {
            None
        } else {
            Some(result.into())
        }
    }
}

impl ExpandedDifficulty {
    /// Returns the difficulty of a big-endian hex string, as used for
    /// proof-of-work limits.
    ///
    /// # Panics
    ///
    /// If the string is not a hex number of at most 256 bits.
    pub fn from_hex_const(hex: &str) -> Self {
        ExpandedDifficulty(parse_u256_hex(hex))
    }

    /// Returns the difficulty threshold that a hash must be at or below.
    pub fn from_hash(hash: &[u8; 32]) -> Self {
        ExpandedDifficulty(U256::from_little_endian(hash))
    }

    /// Returns the underlying 256-bit integer.
    pub fn as_u256(&self) -> U256 {
        self.0
    }

    /// Calculate the CompactDifficulty for an expanded difficulty.
    ///
    /// This rounds the mantissa down, like Bitcoin's `GetCompact`.
    pub fn to_compact(self) -> CompactDifficulty {
        let mut size = (self.0.bits() as u32).div_ceil(8);
        let mut compact = if size <= CompactDifficulty::OFFSET {
            (self.0.low_u64() << (8 * (CompactDifficulty::OFFSET - size))) as u32
        } else {
            (self.0 >> (8 * (size - CompactDifficulty::OFFSET) as usize)).low_u32()
        };

        // The 0x00800000 bit denotes the sign, so if it is already set,
        // divide the mantissa by 256 and increase the exponent.
        if compact & CompactDifficulty::SIGN_BIT != 0 {
            compact >>= 8;
            size += 1;
        }

        CompactDifficulty(compact | (size << CompactDifficulty::PRECISION))
    }
}

impl From<U256> for ExpandedDifficulty {
    fn from(value: U256) -> Self {
        ExpandedDifficulty(value)
    }
}

impl fmt::Debug for ExpandedDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; 32];
        // Use the same byte order as block::Hash
        self.0.to_big_endian(&mut buf);

        f.debug_tuple("ExpandedDifficulty")
            .field(&buf.encode_hex::<String>())
            .finish()
    }
}

impl PartialEq<[u8; 32]> for ExpandedDifficulty {
    /// Is `self` equal to `other`, when `other` is a little-endian hash?
    fn eq(&self, other: &[u8; 32]) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<[u8; 32]> for ExpandedDifficulty {
    /// `block::Hash`es are compared with `ExpandedDifficulty` thresholds by
    /// converting the hash to a 256-bit integer in little-endian order.
    fn partial_cmp(&self, other: &[u8; 32]) -> Option<Ordering> {
        self.partial_cmp(&ExpandedDifficulty::from_hash(other))
    }
}

impl Work {
    /// Returns the chain work of a big-endian hex string.
    ///
    /// # Panics
    ///
    /// If the string is not a hex number of at most 256 bits.
    pub fn from_hex_const(hex: &str) -> Self {
        Work(parse_u256_hex(hex))
    }

    /// Returns zero work.
    pub fn zero() -> Self {
        Work(U256::zero())
    }

    /// Returns true if this is zero work.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the underlying 256-bit integer.
    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl fmt::Debug for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Work")
            .field(&format_args!("{:#x}", self.0))
            .finish()
    }
}

/// Parses an optionally `0x`-prefixed big-endian hex number.
fn parse_u256_hex(hex: &str) -> U256 {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    U256::from_str_radix(hex, 16).expect("hard-coded 256-bit hex values are valid")
}
