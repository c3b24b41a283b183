use alloc::vec::Vec;

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

/// Computes the root of [`MerkleTree`](crate::binary::MerkleTree) from a
/// stream of leaves without keeping the layers around.
///
/// `pending[h]` holds a finished subtree of height `h` that is still waiting
/// for its right sibling. At most one digest per height is kept.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MerkleRootCalculator {
    pending: Vec<Option<Digest>>,
    leaves_count: u64,
}

impl MerkleRootCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaves_count(&self) -> u64 {
        self.leaves_count
    }

    pub fn push(&mut self, data: &[u8]) {
        let mut carry = leaf_sum(data);
        let mut height = 0;

        while let Some(slot) = self.pending.get_mut(height) {
            match slot.take() {
                Some(lhs) => {
                    carry = node_sum(&lhs, &carry);
                    height += 1;
                }
                None => {
                    *slot = Some(carry);
                    self.leaves_count += 1;
                    return
                }
            }
        }

        self.pending.push(Some(carry));
        self.leaves_count += 1;
    }

    pub fn root(mut self) -> Result<Digest, MerkleTreeError> {
        let mut carry: Option<Digest> = None;

        for height in 0..self.pending.len() {
            let has_ancestors = self.pending[height + 1..].iter().any(Option::is_some);

            carry = match (self.pending[height].take(), carry) {
                (Some(lhs), Some(rhs)) => Some(node_sum(&lhs, &rhs)),
                // Last node of a layer with more nodes above: it pairs with
                // itself, exactly as when the full tree is built.
                (Some(node), None) | (None, Some(node)) if has_ancestors => {
                    Some(node_sum(&node, &node))
                }
                (Some(node), None) | (None, Some(node)) => return Ok(node),
                (None, None) => None,
            };
        }

        carry.ok_or(MerkleTreeError::EmptyLeafSet)
    }

    pub fn root_from_iterator<I: IntoIterator<Item = T>, T: AsRef<[u8]>>(
        mut self,
        iterator: I,
    ) -> Result<Digest, MerkleTreeError> {
        for data in iterator {
            self.push(data.as_ref());
        }

        self.root()
    }
}
