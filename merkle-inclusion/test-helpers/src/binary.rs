mod merkle_tree;
mod verify;

pub use merkle_tree::MerkleTree;
pub use verify::verify;

pub(crate) fn hash(data: &[u8]) -> String {
    use sha2::Digest;
    hex::encode(sha2::Sha256::digest(data))
}
