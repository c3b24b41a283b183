use alloc::vec::Vec;
use tracing::{
    debug,
    trace,
};

use crate::{
    binary::{
        leaf_sum,
        node_sum,
        LeafProofs,
        Proof,
        ProofStep,
        Side,
    },
    common::{
        Digest,
        MerkleTreeError,
    },
};

/// A fully materialized binary Merkle tree.
///
/// Layer 0 holds the leaf digests in input order and every following layer
/// pairs up the nodes below it. When a layer has an odd number of nodes, the
/// last node is paired with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<Digest>>,
    root: Digest,
}

impl MerkleTree {
    pub fn new<I, T>(leaves: I) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut current = leaves
            .into_iter()
            .map(|data| leaf_sum(data.as_ref()))
            .collect::<Vec<_>>();

        if current.is_empty() {
            return Err(MerkleTreeError::EmptyLeafSet)
        }

        let mut layers = Vec::new();
        while current.len() > 1 {
            let next = Self::next_layer(&current);
            trace!(height = layers.len() + 1, width = next.len(), "derived layer");
            layers.push(current);
            current = next;
        }
        let root = current[0];
        layers.push(current);

        let tree = Self { layers, root };
        debug!(
            leaves = tree.leaves_count(),
            height = tree.height(),
            root = %tree.root,
            "built merkle tree"
        );

        Ok(tree)
    }

    pub fn root(&self) -> Digest {
        self.root
    }

    pub fn leaves_count(&self) -> u64 {
        self.layers[0].len() as u64
    }

    /// Number of layers, counting the leaves and the root.
    pub fn height(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, level: usize) -> Option<&[Digest]> {
        self.layers.get(level).map(Vec::as_slice)
    }

    pub fn leaf(&self, index: u64) -> Option<&Digest> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.layers[0].get(index))
    }

    pub fn prove(&self, proof_index: u64) -> Result<(Digest, Proof), MerkleTreeError> {
        if proof_index >= self.leaves_count() {
            return Err(MerkleTreeError::InvalidProofIndex(proof_index))
        }

        Ok((self.root, self.proof_path(proof_index as usize)))
    }

    pub fn proofs(&self) -> LeafProofs {
        let proofs = (0..self.layers[0].len())
            .map(|position| self.proof_path(position))
            .collect();
        LeafProofs::new(proofs)
    }

    pub fn into_proofs(self) -> (Digest, LeafProofs) {
        (self.root, self.proofs())
    }

    //
    // PRIVATE
    //

    fn next_layer(layer: &[Digest]) -> Vec<Digest> {
        layer
            .chunks(2)
            .map(|pair| {
                let lhs = &pair[0];
                let rhs = pair.get(1).unwrap_or(lhs);
                node_sum(lhs, rhs)
            })
            .collect()
    }

    fn proof_path(&self, leaf_index: usize) -> Proof {
        let mut position = leaf_index;
        let below_root = &self.layers[..self.layers.len() - 1];
        let mut steps = Vec::with_capacity(below_root.len());

        for layer in below_root {
            let (sibling, side) = if position % 2 == 0 {
                (position + 1, Side::Right)
            } else {
                (position - 1, Side::Left)
            };

            // An unpaired node was hashed with itself; that level has no step.
            if let Some(digest) = layer.get(sibling) {
                steps.push(ProofStep::new(side, *digest));
            }

            position /= 2;
        }

        Proof::new(leaf_index as u64, self.leaves_count(), steps)
    }
}

/// Builds the tree over `leaves` and returns its root together with the proof
/// of every leaf.
pub fn build<I, T>(leaves: I) -> Result<(Digest, LeafProofs), MerkleTreeError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    Ok(MerkleTree::new(leaves)?.into_proofs())
}
