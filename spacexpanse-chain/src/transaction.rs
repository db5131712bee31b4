//! Transactions and transaction-related structures.

use std::{fmt, io};

use byteorder::{LittleEndian, WriteBytesExt};
use hex::ToHex;

use crate::{
    amount::Amount,
    serialization::{sha256d, ConsensusSerialize},
    transparent,
};

/// The transaction version used by genesis transactions.
pub const GENESIS_TX_VERSION: i32 = 1;

/// A legacy (non-witness) transaction.
///
/// Only the transparent parts of the transaction format are modelled here,
/// which is everything a genesis block contains.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction version.
    pub version: i32,
    /// The transparent inputs to the transaction.
    pub inputs: Vec<transparent::Input>,
    /// The transparent outputs from the transaction.
    pub outputs: Vec<transparent::Output>,
    /// The earliest time or block height that this transaction can be added to the
    /// chain.
    pub lock_time: u32,
}

impl Transaction {
    /// Returns a transaction that spends nothing, carries `data` in its only
    /// input, and pays `value` to `lock_script` in its only output.
    pub fn new_coinbase(
        data: transparent::CoinbaseData,
        value: Amount,
        lock_script: transparent::Script,
    ) -> Self {
        Transaction {
            version: GENESIS_TX_VERSION,
            inputs: vec![transparent::Input::Coinbase {
                data,
                sequence: u32::MAX,
            }],
            outputs: vec![transparent::Output { value, lock_script }],
            lock_time: 0,
        }
    }

    /// Compute the hash (id) of this transaction.
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }

    /// Returns true if this transaction spends nothing.
    pub fn is_coinbase(&self) -> bool {
        matches!(
            self.inputs.as_slice(),
            [transparent::Input::Coinbase { .. }]
        )
    }

    /// Returns the sum of the transaction's output values.
    pub fn output_value(&self) -> Result<Amount, crate::amount::Error> {
        self.outputs
            .iter()
            .try_fold(Amount::zero(), |total, output| total.checked_add(output.value))
    }
}

impl ConsensusSerialize for Transaction {
    fn consensus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_i32::<LittleEndian>(self.version)?;
        self.inputs.as_slice().consensus_serialize(&mut writer)?;
        self.outputs.as_slice().consensus_serialize(&mut writer)?;
        writer.write_u32::<LittleEndian>(self.lock_time)?;
        Ok(())
    }
}

/// A transaction ID, which uniquely identifies a legacy transaction.
///
/// Note: transaction hashes are displayed in reversed byte-order, like block
/// hashes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Return the hash bytes in big-endian byte-order suitable for printing out byte by byte.
    pub fn bytes_in_display_order(&self) -> [u8; 32] {
        let mut reversed_bytes = self.0;
        reversed_bytes.reverse();
        reversed_bytes
    }
}

impl<'a> From<&'a Transaction> for Hash {
    fn from(transaction: &'a Transaction) -> Self {
        let mut hash_writer = sha256d::Writer::default();
        transaction
            .consensus_serialize(&mut hash_writer)
            .expect("Transactions must serialize into the hash.");
        Self(hash_writer.finish())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bytes_in_display_order().encode_hex::<String>())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("transaction::Hash")
            .field(&self.bytes_in_display_order().encode_hex::<String>())
            .finish()
    }
}
