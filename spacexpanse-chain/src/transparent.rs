//! Transparent-related (Bitcoin-inherited) functionality.

use std::io;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::{amount::Amount, serialization::ConsensusSerialize, transaction};

mod script;

#[cfg(test)]
mod tests;

pub use script::{opcodes, Script, ScriptHash};

/// OutPoint
///
/// A particular transaction output reference.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// References the transaction that contains the UTXO being spent.
    pub hash: transaction::Hash,

    /// Identifies which UTXO from that transaction is referenced; the
    /// first output is 0, etc.
    pub index: u32,
}

impl OutPoint {
    /// The null outpoint, which is spent by inputs that create new coins.
    pub const NULL: OutPoint = OutPoint {
        hash: transaction::Hash([0; 32]),
        index: u32::MAX,
    };
}

impl ConsensusSerialize for OutPoint {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_all(&self.hash.0)?;
        writer.write_u32::<LittleEndian>(self.index)
    }
}

/// Arbitrary data inserted by miners into a coinbase transaction.
///
/// The data is stored where an ordinary input's unlock script would be, but it
/// is never executed as a script.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CoinbaseData(pub(crate) Vec<u8>);

impl CoinbaseData {
    /// Returns coinbase data that pushes `data` as a single script push, the
    /// way genesis timestamps are embedded.
    pub fn push(data: &[u8]) -> Self {
        CoinbaseData(Script::builder().push_slice(data).into_bytes())
    }
}

impl AsRef<[u8]> for CoinbaseData {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for CoinbaseData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let escaped = String::from_utf8(
            self.0
                .iter()
                .cloned()
                .flat_map(std::ascii::escape_default)
                .collect(),
        )
        .expect("ascii::escape_default produces utf8");
        f.debug_tuple("CoinbaseData").field(&escaped).finish()
    }
}

/// A transparent input to a transaction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Input {
    /// A reference to an output of a previous transaction.
    PrevOut {
        /// The previous output transaction reference.
        outpoint: OutPoint,
        /// The script that authorizes spending `outpoint`.
        unlock_script: Script,
        /// The sequence number for the output.
        sequence: u32,
    },
    /// New coins created by the block reward.
    Coinbase {
        /// Free data inserted by miners.
        data: CoinbaseData,
        /// The sequence number for the output.
        sequence: u32,
    },
}

impl ConsensusSerialize for Input {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        match self {
            Input::PrevOut {
                outpoint,
                unlock_script,
                sequence,
            } => {
                outpoint.consensus_serialize(&mut writer)?;
                unlock_script.consensus_serialize(&mut writer)?;
                writer.write_u32::<LittleEndian>(*sequence)?;
            }
            Input::Coinbase { data, sequence } => {
                OutPoint::NULL.consensus_serialize(&mut writer)?;
                data.0.consensus_serialize(&mut writer)?;
                writer.write_u32::<LittleEndian>(*sequence)?;
            }
        }
        Ok(())
    }
}

/// A transparent output from a transaction.
///
/// The most fundamental building block of a transaction is a
/// transaction output -- the coins you own in your "wallet" are in
/// fact a subset of unspent transaction outputs (or "UTXO"s) of the
/// global UTXO set.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Output {
    /// Transaction value.
    pub value: Amount,

    /// The lock script defines the conditions under which this output can be spent.
    pub lock_script: Script,
}

impl ConsensusSerialize for Output {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_i64::<LittleEndian>(self.value.base_units())?;
        self.lock_script.consensus_serialize(&mut writer)
    }
}
