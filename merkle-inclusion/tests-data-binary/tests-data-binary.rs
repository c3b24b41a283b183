use std::path::Path;

use merkle_inclusion_test_helpers::data::binary::ProofTest;

fn test(path: &Path) -> datatest_stable::Result<()> {
    ProofTest::from_path(path)?.execute()?;
    Ok(())
}

datatest_stable::harness!(test, "./tests-data-binary/fixtures", r"^.*\.yaml$");
