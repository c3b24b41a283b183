use crate::binary::hash;

/// Replays `proof` for the leaf at `proof_index` of a tree with
/// `leaves_count` leaves. An unpaired last node is hashed with itself and
/// has no entry in the proof.
pub fn verify(
    root: &str,
    data: &[u8],
    proof: &[(String, String)],
    proof_index: u64,
    leaves_count: u64,
) -> bool {
    if proof_index >= leaves_count {
        return false;
    }

    let mut computed = hash(data);
    let mut proof = proof.iter();
    let mut position = proof_index;
    let mut width = leaves_count;

    while width > 1 {
        let unpaired = position % 2 == 0 && position == width - 1;
        computed = if unpaired {
            hash(format!("{computed}{computed}").as_bytes())
        } else {
            match proof.next() {
                Some((side, sibling)) if side == "left" => {
                    hash(format!("{sibling}{computed}").as_bytes())
                }
                Some((_, sibling)) => hash(format!("{computed}{sibling}").as_bytes()),
                None => return false,
            }
        };

        position /= 2;
        width = (width + 1) / 2;
    }

    proof.next().is_none() && computed == root
}
