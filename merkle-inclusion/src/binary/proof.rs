use alloc::vec::Vec;
use core::slice;

use crate::{
    binary::{
        leaf_sum,
        node_sum,
    },
    common::{
        Digest,
        MerkleTreeError,
    },
};

/// Where the sibling digest sits relative to the running hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

/// One level of an inclusion proof.
///
/// With the `serde` feature a step reads and writes as
/// `{"position": "left", "hash": "<hex>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofStep {
    #[cfg_attr(feature = "serde", serde(rename = "position"))]
    pub side: Side,
    #[cfg_attr(feature = "serde", serde(rename = "hash"))]
    pub digest: Digest,
}

impl ProofStep {
    pub const fn new(side: Side, digest: Digest) -> Self {
        Self { side, digest }
    }

    /// Combines the sibling with the running hash in the order given by
    /// [`Side`].
    pub fn apply(&self, computed: &Digest) -> Digest {
        match self.side {
            Side::Left => node_sum(&self.digest, computed),
            Side::Right => node_sum(computed, &self.digest),
        }
    }
}

/// The sibling path of one leaf, ordered from the leaf level upward.
///
/// Levels where the leaf's ancestor had no sibling contribute no step, so a
/// proof may be shorter than the tree height. The proof carries the leaf
/// position and the number of leaves so that replaying it knows at which
/// levels the running hash was paired with itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proof {
    leaf_index: u64,
    leaves_count: u64,
    steps: Vec<ProofStep>,
}

impl Proof {
    pub fn new(leaf_index: u64, leaves_count: u64, steps: Vec<ProofStep>) -> Self {
        Self {
            leaf_index,
            leaves_count,
            steps,
        }
    }

    pub fn leaf_index(&self) -> u64 {
        self.leaf_index
    }

    pub fn leaves_count(&self) -> u64 {
        self.leaves_count
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ProofStep> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<ProofStep> {
        self.steps
    }

    /// Replays the proof on top of `data` and returns the root it implies.
    ///
    /// Walks the levels of a tree with `leaves_count` leaves. Where the
    /// ancestor is the unpaired last node of its layer, the running hash is
    /// combined with itself; every other level consumes the next step.
    /// Returns `None` when the steps do not fit that shape: too few, too
    /// many, or a leaf index outside the tree.
    pub fn root_from(&self, data: &[u8]) -> Option<Digest> {
        if self.leaf_index >= self.leaves_count {
            return None
        }

        let mut steps = self.steps.iter();
        let mut computed = leaf_sum(data);
        let mut position = self.leaf_index;
        let mut width = self.leaves_count;

        while width > 1 {
            computed = if position + 1 == width && position % 2 == 0 {
                node_sum(&computed, &computed)
            } else {
                steps.next()?.apply(&computed)
            };
            position /= 2;
            width = (width + 1) / 2;
        }

        match steps.next() {
            Some(_) => None,
            None => Some(computed),
        }
    }
}

impl IntoIterator for Proof {
    type Item = ProofStep;
    type IntoIter = alloc::vec::IntoIter<ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Proof {
    type Item = &'a ProofStep;
    type IntoIter = slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Proofs for every leaf of a tree, in leaf order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LeafProofs {
    proofs: Vec<Proof>,
}

impl LeafProofs {
    pub(crate) fn new(proofs: Vec<Proof>) -> Self {
        Self { proofs }
    }

    pub fn get(&self, proof_index: u64) -> Result<&Proof, MerkleTreeError> {
        usize::try_from(proof_index)
            .ok()
            .and_then(|index| self.proofs.get(index))
            .ok_or(MerkleTreeError::InvalidProofIndex(proof_index))
    }

    pub fn len(&self) -> usize {
        self.proofs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proofs.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Proof> {
        self.proofs.iter()
    }

    pub fn into_inner(self) -> Vec<Proof> {
        self.proofs
    }
}

impl IntoIterator for LeafProofs {
    type Item = Proof;
    type IntoIter = alloc::vec::IntoIter<Proof>;

    fn into_iter(self) -> Self::IntoIter {
        self.proofs.into_iter()
    }
}

impl<'a> IntoIterator for &'a LeafProofs {
    type Item = &'a Proof;
    type IntoIter = slice::Iter<'a, Proof>;

    fn into_iter(self) -> Self::IntoIter {
        self.proofs.iter()
    }
}
