mod digest;
mod error;
mod hash;

pub use digest::Digest;
pub use error::{
    DigestError,
    MerkleTreeError,
};
pub use hash::{
    sum,
    sum_iter,
};

pub type Bytes32 = [u8; 32];
