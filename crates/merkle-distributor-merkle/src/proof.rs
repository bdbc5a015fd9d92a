use crate::hasher::{combine, Hash};

/// Fold a proof into the root it implies for `leaf`.
pub fn process_proof(leaf: &Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(*leaf, |candidate, sibling| combine(&candidate, sibling))
}

/// Verify a proof the way the distributor contract does.
///
/// Needs only the leaf hash, the proof and the expected root, not the tree that produced them.
pub fn verify_proof(leaf: &Hash, proof: &[Hash], root: &Hash) -> bool {
    process_proof(leaf, proof) == *root
}
