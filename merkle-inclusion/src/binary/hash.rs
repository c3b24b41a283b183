use crate::common::{
    sum,
    sum_iter,
    Digest,
};

// Digest of a leaf value
// L(d) = Hash(d)
pub fn leaf_sum(data: &[u8]) -> Digest {
    sum(data)
}

// Digest of an inner node, taken over the lowercase hex text of its children
// N(l, r) = Hash(hex(l) || hex(r))
pub fn node_sum(lhs: &Digest, rhs: &Digest) -> Digest {
    sum_iter([lhs.to_hex_bytes(), rhs.to_hex_bytes()])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn leaf_sum_is_the_plain_hash_of_the_value() {
        let expected = "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb";
        assert_eq!(leaf_sum(b"a").to_hex(), expected);
    }

    #[test]
    fn node_sum_hashes_the_concatenated_hex_strings() {
        let lhs = leaf_sum(b"a");
        let rhs = leaf_sum(b"b");

        let text = format!("{lhs}{rhs}");
        assert_eq!(node_sum(&lhs, &rhs), sum(text.as_bytes()));

        let expected = "62af5c3cb8da3e4f25061e829ebeea5c7513c54949115b1acc225930a90154da";
        assert_eq!(node_sum(&lhs, &rhs).to_hex(), expected);
    }

    #[test]
    fn node_sum_is_not_commutative() {
        let lhs = leaf_sum(b"a");
        let rhs = leaf_sum(b"b");

        assert_ne!(node_sum(&lhs, &rhs), node_sum(&rhs, &lhs));
    }
}
