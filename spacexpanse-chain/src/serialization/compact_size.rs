//! The variable-length integer encoding used for lengths and counts.

use std::io;

use byteorder::{LittleEndian, WriteBytesExt};

use super::ConsensusSerialize;

/// A length or count, serialized using Bitcoin's "compact size" encoding.
///
/// Values below `0xfd` take a single byte. Larger values take a one byte
/// marker followed by a little-endian `u16`, `u32` or `u64`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct CompactSizeMessage(u64);

impl CompactSizeMessage {
    /// Returns the compact size of an in-memory length.
    pub fn from_len(len: usize) -> Self {
        CompactSizeMessage(len.try_into().expect("usize fits in u64"))
    }

    /// Returns the encoded value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for CompactSizeMessage {
    fn from(value: u64) -> Self {
        CompactSizeMessage(value)
    }
}

impl ConsensusSerialize for CompactSizeMessage {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        let n = self.0;
        match n {
            0x00..=0xfc => writer.write_u8(n as u8),
            0x00fd..=0xffff => {
                writer.write_u8(0xfd)?;
                writer.write_u16::<LittleEndian>(n as u16)
            }
            0x0001_0000..=0xffff_ffff => {
                writer.write_u8(0xfe)?;
                writer.write_u32::<LittleEndian>(n as u32)
            }
            _ => {
                writer.write_u8(0xff)?;
                writer.write_u64::<LittleEndian>(n)
            }
        }
    }
}
