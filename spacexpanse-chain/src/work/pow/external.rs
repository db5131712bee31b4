//! Proof-of-work hashes computed by an external program.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use hex::FromHex;

use super::{Error, PowHasher};
use crate::work::algorithm::PowAlgo;

/// A [`PowHasher`] that runs an external hashing tool.
///
/// The tool is called as `<program> <algorithm> <header-hex>`, and must print
/// the hash as display-order hex on its standard output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExternalPowHasher {
    program: PathBuf,
}

impl ExternalPowHasher {
    /// Returns a hasher that runs `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the path of the hashing tool.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl PowHasher for ExternalPowHasher {
    fn pow_hash(&self, algorithm: PowAlgo, header: &[u8]) -> Result<[u8; 32], Error> {
        let output = Command::new(&self.program)
            .arg(algorithm.name())
            .arg(hex::encode(header))
            .output()
            .map_err(|e| Error::ExternalHasher(format!("{}: {e}", self.program.display())))?;

        if !output.status.success() {
            return Err(Error::ExternalHasher(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim(),
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut hash = <[u8; 32]>::from_hex(stdout.trim())
            .map_err(|e| Error::ExternalHasher(format!("invalid hash {:?}: {e}", stdout.trim())))?;

        // The tool prints hashes in display order.
        hash.reverse();

        Ok(hash)
    }
}
