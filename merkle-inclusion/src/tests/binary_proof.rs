use alloc::vec::Vec;

use proptest::{
    arbitrary::any,
    collection::vec,
    prop_assert,
    prop_assert_eq,
    prop_assert_ne,
    prop_assume,
    prop_compose,
    proptest,
    sample::Index,
};

use crate::binary::{
    build,
    verify,
    MerkleRootCalculator,
    MerkleTree,
    Proof,
    ProofStep,
    Side,
};

prop_compose! {
    fn arb_leaves(max: usize)(leaves in vec(vec(any::<u8>(), 0..48), 1..max)) -> Vec<Vec<u8>> {
        leaves
    }
}

fn swap_sides(proof: &Proof) -> Proof {
    let steps = proof
        .iter()
        .map(|step| {
            let side = match step.side {
                Side::Left => Side::Right,
                Side::Right => Side::Left,
            };
            ProofStep::new(side, step.digest)
        })
        .collect();
    Proof::new(proof.leaf_index(), proof.leaves_count(), steps)
}

proptest! {
    #[test]
    fn verify_accepts_every_leaf_with_its_own_proof(leaves in arb_leaves(64)) {
        let (root, proofs) = build(&leaves).unwrap();

        prop_assert_eq!(proofs.len(), leaves.len());
        for (leaf, proof) in leaves.iter().zip(proofs.iter()) {
            prop_assert!(verify(proof, &root, leaf));
        }
    }

    #[test]
    fn verify_rejects_a_mutated_leaf(
        leaves in arb_leaves(64),
        index in any::<Index>(),
        suffix in any::<u8>(),
    ) {
        let index = index.index(leaves.len());
        let (root, proofs) = build(&leaves).unwrap();

        let mut tampered = leaves[index].clone();
        tampered.push(suffix);

        let proof = proofs.get(index as u64).unwrap();
        prop_assert!(!verify(proof, &root, &tampered));
    }

    #[test]
    fn verify_rejects_a_proof_with_swapped_sides(leaves in arb_leaves(64), index in any::<Index>()) {
        // Distinct leaves keep every sibling different from the running hash,
        // which would otherwise hash the same on either side.
        let leaves = leaves
            .into_iter()
            .enumerate()
            .map(|(position, mut leaf)| {
                leaf.extend_from_slice(&(position as u64).to_be_bytes());
                leaf
            })
            .collect::<Vec<_>>();
        let index = index.index(leaves.len());
        let (root, proofs) = build(&leaves).unwrap();
        let proof = proofs.get(index as u64).unwrap();

        prop_assume!(!proof.is_empty());
        prop_assert!(!verify(&swap_sides(proof), &root, &leaves[index]));
    }

    #[test]
    fn proof_is_never_longer_than_the_tree_is_high(leaves in arb_leaves(128)) {
        let tree = MerkleTree::new(&leaves).unwrap();

        for proof in tree.proofs().iter() {
            prop_assert!(proof.len() < tree.height());
        }
    }

    #[test]
    fn root_calculator_matches_the_tree(leaves in arb_leaves(128)) {
        let expected = MerkleTree::new(&leaves).unwrap().root();
        let root = MerkleRootCalculator::new().root_from_iterator(&leaves).unwrap();

        prop_assert_eq!(root, expected);
    }

    #[test]
    fn swapping_two_distinct_leaves_changes_the_root(
        leaves in arb_leaves(64),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let (a, b) = (a.index(leaves.len()), b.index(leaves.len()));
        prop_assume!(leaves[a] != leaves[b]);

        let mut reordered = leaves.clone();
        reordered.swap(a, b);

        let root = MerkleTree::new(&leaves).unwrap().root();
        let reordered_root = MerkleTree::new(&reordered).unwrap().root();
        prop_assert_ne!(root, reordered_root);
    }
}
