mod hash;
mod merkle_tree;
mod proof;
mod root_calculator;
mod verify;

pub use hash::{
    leaf_sum,
    node_sum,
};
pub use merkle_tree::{
    build,
    MerkleTree,
};
pub use proof::{
    LeafProofs,
    Proof,
    ProofStep,
    Side,
};
pub use root_calculator::MerkleRootCalculator;
pub use verify::verify;
