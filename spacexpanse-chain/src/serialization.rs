//! Consensus-critical serialization.
//!
//! This module contains the [`ConsensusSerialize`] trait, the compact size
//! encoding used for lengths, and a SHA-256d writer for computing hashes of
//! serialized data without an intermediate buffer.

use std::io;

mod compact_size;

pub mod sha256d;

pub use compact_size::CompactSizeMessage;

#[cfg(test)]
mod tests;

/// Consensus-critical serialization.
///
/// This trait provides a generic serialization for consensus-critical
/// formats, such as network messages, transactions, blocks, etc.
pub trait ConsensusSerialize: Sized {
    /// Write `self` to the given `writer` using the canonical format.
    ///
    /// This function has a `consensus_` prefix to alert the reader that the
    /// serialization in use is consensus-critical serialization, rather than
    /// some other kind of serialization.
    fn consensus_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error>;

    /// Helper function to construct a vec to serialize the current struct into.
    fn consensus_serialize_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut data = Vec::new();
        self.consensus_serialize(&mut data)?;
        Ok(data)
    }

    /// Get the size of `self` by using a fake writer.
    fn consensus_serialized_size(&self) -> usize {
        let mut writer = FakeWriter(0);
        self.consensus_serialize(&mut writer)
            .expect("writer should never fail");
        writer.0
    }
}

/// A fake writer helper used to get object lengths without allocating RAM.
pub struct FakeWriter(pub usize);

impl io::Write for FakeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len();

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Serialize a byte vector as a compact size length followed by the bytes.
impl ConsensusSerialize for Vec<u8> {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        CompactSizeMessage::from_len(self.len()).consensus_serialize(&mut writer)?;
        writer.write_all(self)
    }
}

/// Serialize a list of items as a compact size count followed by each item.
impl<T: ConsensusSerialize> ConsensusSerialize for &[T] {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        CompactSizeMessage::from_len(self.len()).consensus_serialize(&mut writer)?;
        for item in self.iter() {
            item.consensus_serialize(&mut writer)?;
        }
        Ok(())
    }
}

impl<T: ConsensusSerialize> ConsensusSerialize for std::sync::Arc<T> {
    fn consensus_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error> {
        T::consensus_serialize(self, writer)
    }
}
