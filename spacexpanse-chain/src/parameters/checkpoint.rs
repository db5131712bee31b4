//! Hard-coded checkpoints, which reject deep alternative chain histories.

use std::collections::{btree_map, BTreeMap};

use itertools::Itertools;

use crate::block::{self, Height};

/// A list of block height and hash checkpoints.
///
/// Heights are unique and iterate in increasing order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CheckpointList(BTreeMap<Height, block::Hash>);

impl CheckpointList {
    /// Returns a checkpoint list from hard-coded `(height, hash)` pairs.
    ///
    /// # Panics
    ///
    /// If the heights are not strictly increasing, or a hash is not valid hex.
    pub fn from_hex_list(checkpoints: &[(u32, &str)]) -> Self {
        assert!(
            checkpoints
                .iter()
                .tuple_windows()
                .all(|((lower, _), (higher, _))| lower < higher),
            "checkpoint heights must be strictly increasing",
        );

        CheckpointList(
            checkpoints
                .iter()
                .map(|&(height, hash)| {
                    let hash = hash
                        .parse::<block::Hash>()
                        .expect("hard-coded checkpoint hashes are valid hex");
                    (Height(height), hash)
                })
                .collect(),
        )
    }

    /// Returns the hash of the checkpoint at `height`, if there is one.
    pub fn hash(&self, height: Height) -> Option<block::Hash> {
        self.0.get(&height).copied()
    }

    /// Returns true if there is a checkpoint at `height`.
    pub fn contains(&self, height: Height) -> bool {
        self.0.contains_key(&height)
    }

    /// Returns the height of the highest checkpoint.
    pub fn max_height(&self) -> Option<Height> {
        self.0.keys().next_back().copied()
    }

    /// Returns the number of checkpoints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the checkpoints in increasing height order.
    pub fn iter(&self) -> impl Iterator<Item = (Height, block::Hash)> + '_ {
        self.0.iter().map(|(height, hash)| (*height, *hash))
    }
}

impl IntoIterator for CheckpointList {
    type Item = (Height, block::Hash);
    type IntoIter = btree_map::IntoIter<Height, block::Hash>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
