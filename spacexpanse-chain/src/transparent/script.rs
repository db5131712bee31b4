//! Bitcoin script for SpaceXpanse

use std::{fmt, io};

use hex::{FromHex, ToHex};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::serialization::ConsensusSerialize;

/// The script opcodes used to build standard scripts.
pub mod opcodes {
    /// Push the next byte as the length of the data to push.
    pub const OP_PUSHDATA1: u8 = 0x4c;
    /// Push the next two bytes as the length of the data to push.
    pub const OP_PUSHDATA2: u8 = 0x4d;
    /// Push the next four bytes as the length of the data to push.
    pub const OP_PUSHDATA4: u8 = 0x4e;
    /// Replace the top stack item with its RIPEMD-160(SHA-256) hash.
    pub const OP_HASH160: u8 = 0xa9;
    /// Push true if the top two stack items are equal.
    pub const OP_EQUAL: u8 = 0x87;
}

/// The HASH160 of a redeem script, which pay-to-script-hash outputs commit to.
///
/// The bytes are stored in script order, which is also the order they are
/// displayed in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScriptHash(pub [u8; 20]);

impl fmt::Debug for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScriptHash").field(&hex::encode(self.0)).finish()
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl std::str::FromStr for ScriptHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <[u8; 20]>::from_hex(s).map(ScriptHash)
    }
}

/// An encoding of a Bitcoin script.
#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Script(
    /// # Correctness
    ///
    /// Consensus-critical serialization uses a compact size length prefix,
    /// which is not part of the script itself.
    #[serde(with = "hex")]
    Vec<u8>,
);

impl Script {
    /// Create a new Bitcoin script from its raw bytes.
    /// The raw bytes must not contain the length prefix.
    pub fn new(raw_bytes: &[u8]) -> Self {
        Script(raw_bytes.to_vec())
    }

    /// Return the raw bytes of the script without the length prefix.
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns an empty builder for a new script.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the `OP_HASH160 <script_hash> OP_EQUAL` lock script, which pays to
    /// the redeem script hashing to `script_hash`.
    pub fn pay_to_script_hash(script_hash: &ScriptHash) -> Self {
        Script::builder()
            .push_opcode(opcodes::OP_HASH160)
            .push_slice(&script_hash.0)
            .push_opcode(opcodes::OP_EQUAL)
            .into_script()
    }

    /// Returns the HASH160 of this script, for use as a redeem script.
    pub fn script_hash(&self) -> ScriptHash {
        let sha = Sha256::digest(&self.0);
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&Ripemd160::digest(sha));
        ScriptHash(hash)
    }

    /// Returns the script hash if this is a pay-to-script-hash lock script.
    pub fn p2sh_script_hash(&self) -> Option<ScriptHash> {
        match self.0.as_slice() {
            [opcodes::OP_HASH160, 20, hash @ .., opcodes::OP_EQUAL] if hash.len() == 20 => {
                Some(ScriptHash(hash.try_into().ok()?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_hex::<String>())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Script")
            .field(&hex::encode(&self.0))
            .finish()
    }
}

impl ToHex for &Script {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.as_raw_bytes().encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.as_raw_bytes().encode_hex_upper()
    }
}

impl ToHex for Script {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        (&self).encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        (&self).encode_hex_upper()
    }
}

impl FromHex for Script {
    type Error = hex::FromHexError;

    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let bytes = Vec::from_hex(hex)?;
        Ok(Script(bytes))
    }
}

impl ConsensusSerialize for Script {
    fn consensus_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error> {
        self.0.consensus_serialize(writer)
    }
}

/// Builds scripts from opcodes and data pushes.
#[derive(Clone, Debug, Default)]
pub struct Builder(Vec<u8>);

impl Builder {
    /// Appends a single opcode.
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Appends a push of `data`, using the smallest push encoding for its length.
    ///
    /// Empty and single-byte small number pushes are encoded as direct
    /// pushes, like every other length.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < usize::from(opcodes::OP_PUSHDATA1) {
            self.0.push(len as u8);
        } else if let Ok(len) = u8::try_from(len) {
            self.0.push(opcodes::OP_PUSHDATA1);
            self.0.push(len);
        } else if let Ok(len) = u16::try_from(len) {
            self.0.push(opcodes::OP_PUSHDATA2);
            self.0.extend_from_slice(&len.to_le_bytes());
        } else {
            let len = u32::try_from(len).expect("script pushes are smaller than 4 GiB");
            self.0.push(opcodes::OP_PUSHDATA4);
            self.0.extend_from_slice(&len.to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Returns the built script.
    pub fn into_script(self) -> Script {
        Script(self.0)
    }

    /// Returns the raw bytes of the built script.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}
