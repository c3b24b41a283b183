use std::{
    fs::File,
    path::Path,
};

use merkle_inclusion::{
    binary::{
        verify,
        MerkleTree,
        Proof,
    },
    common::Digest,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    binary::verify as verify_from_test_helper,
    data::{
        EncodedValue,
        TestError,
    },
};

/// One fixture of the proof test suite.
///
/// When `leaves` is given, the tree is rebuilt from them and must reproduce
/// `root` and `proof` for the leaf the proof names.
#[derive(Serialize, Deserialize)]
pub struct ProofTest {
    pub name: String,
    pub description: String,
    pub root: Digest,
    pub data: EncodedValue,
    pub proof: Proof,
    #[serde(default)]
    pub leaves: Option<Vec<EncodedValue>>,
    pub expected_verification: bool,
}

impl ProofTest {
    pub fn from_path(path: &Path) -> Result<Self, TestError> {
        let file = File::open(path)
            .map_err(|e| TestError::Fixture(format!("{}: {e}", path.display())))?;
        serde_yaml::from_reader(file)
            .map_err(|e| TestError::Fixture(format!("{}: {e}", path.display())))
    }

    pub fn execute(self) -> Result<(), TestError> {
        let ProofTest {
            name,
            root,
            data,
            proof,
            leaves,
            expected_verification,
            ..
        } = self;
        let failed = |reason: String| TestError::Failed {
            name: name.clone(),
            reason,
        };

        let data = data.into_bytes()?;
        let verification = verify(&proof, &root, &data);

        let reference_proof = proof
            .iter()
            .map(|step| (step.side.to_string(), step.digest.to_hex()))
            .collect::<Vec<_>>();
        let verification_from_test_helper = verify_from_test_helper(
            &root.to_hex(),
            &data,
            &reference_proof,
            proof.leaf_index(),
            proof.leaves_count(),
        );

        if verification != verification_from_test_helper {
            return Err(failed(format!(
                "verification {verification} does not match reference verification {verification_from_test_helper}"
            )))
        }

        if verification != expected_verification {
            return Err(failed(format!(
                "verification {verification} does not match expected verification {expected_verification}"
            )))
        }

        if let Some(leaves) = leaves {
            let leaves = leaves
                .into_iter()
                .map(EncodedValue::into_bytes)
                .collect::<Result<Vec<_>, _>>()?;

            let (built_root, built_proof) = MerkleTree::new(&leaves)
                .and_then(|tree| tree.prove(proof.leaf_index()))
                .map_err(|e| failed(e.to_string()))?;

            if built_root != root {
                return Err(failed(format!(
                    "built root {built_root} does not match root {root}"
                )))
            }

            if built_proof != proof {
                return Err(failed(format!(
                    "built proof {built_proof:?} does not match proof {proof:?}"
                )))
            }
        }

        Ok(())
    }
}
