mod binary_proof;

use crate::{
    binary::{
        LeafProofs,
        MerkleRootCalculator,
        MerkleTree,
        Proof,
        ProofStep,
    },
    common::{
        Digest,
        DigestError,
        MerkleTreeError,
    },
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<Digest>();
    assert_send_sync::<MerkleTree>();
    assert_send_sync::<Proof>();
    assert_send_sync::<ProofStep>();
    assert_send_sync::<LeafProofs>();
    assert_send_sync::<MerkleRootCalculator>();
    assert_send_sync::<MerkleTreeError>();
    assert_send_sync::<DigestError>();
}
