#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum MerkleTreeError {
    #[display(fmt = "cannot build a merkle tree from an empty leaf set")]
    EmptyLeafSet,

    #[display(fmt = "proof index {} is not valid", _0)]
    InvalidProofIndex(u64),
}

/// Failure to read a [`Digest`](crate::common::Digest) from its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum DigestError {
    #[display(fmt = "expected 64 hex characters, found {}", _0)]
    InvalidLength(usize),

    #[display(fmt = "digest contains a non-hex character")]
    InvalidHex,
}
