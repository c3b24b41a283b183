use crate::binary::hash;

/// A naive tree over hex strings. It rebuilds every layer on each query and
/// serves as the reference the real tree is compared against.
#[derive(Default)]
pub struct MerkleTree {
    leaves: Vec<Vec<u8>>,
    proof_index: u64,
}

impl MerkleTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_proof_index(&mut self, proof_index: u64) {
        if !self.leaves.is_empty() {
            panic!("Cannot change the proof index after adding a leaf!");
        }
        self.proof_index = proof_index;
    }

    pub fn push(&mut self, data: &[u8]) {
        self.leaves.push(data.to_vec());
    }

    pub fn root(&self) -> String {
        let layers = self.layers();
        layers[layers.len() - 1][0].clone()
    }

    /// The root and the `(position, hash)` pairs proving the leaf at the
    /// configured proof index.
    pub fn prove(&self) -> (String, Vec<(String, String)>) {
        let layers = self.layers();
        let mut proof = Vec::new();
        let mut position = self.proof_index as usize;

        for layer in &layers[..layers.len() - 1] {
            let pair_index = if position % 2 == 0 {
                position + 1
            } else {
                position - 1
            };

            if pair_index < layer.len() {
                let side = if position % 2 == 0 { "right" } else { "left" };
                proof.push((side.to_string(), layer[pair_index].clone()));
            }

            position /= 2;
        }

        (layers[layers.len() - 1][0].clone(), proof)
    }

    fn layers(&self) -> Vec<Vec<String>> {
        assert!(!self.leaves.is_empty(), "the reference tree needs leaves");

        let mut layers = vec![self
            .leaves
            .iter()
            .map(|leaf| hash(leaf))
            .collect::<Vec<_>>()];

        while layers[layers.len() - 1].len() > 1 {
            let current = &layers[layers.len() - 1];
            let mut next = Vec::new();

            let mut i = 0;
            while i < current.len() {
                let left = &current[i];
                let right = current.get(i + 1).unwrap_or(left);
                next.push(hash(format!("{left}{right}").as_bytes()));
                i += 2;
            }

            layers.push(next);
        }

        layers
    }
}
