use tracing::trace;

use crate::{
    binary::Proof,
    common::Digest,
};

/// Checks that `data` is included under `root` according to `proof`.
///
/// A `false` result is an ordinary outcome: the value is not in the tree, or
/// the value, proof or root was altered.
pub fn verify<T: AsRef<[u8]>>(proof: &Proof, root: &Digest, data: T) -> bool {
    let Some(computed) = proof.root_from(data.as_ref()) else {
        trace!(
            leaf_index = proof.leaf_index(),
            leaves_count = proof.leaves_count(),
            steps = proof.len(),
            "proof does not fit the tree"
        );
        return false
    };

    if computed != *root {
        trace!(%root, %computed, steps = proof.len(), "proof does not match root");
        return false
    }

    true
}
