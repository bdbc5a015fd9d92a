use std::collections::HashMap;

use rs_merkle::Hasher;
use tracing::debug;

use crate::error::{MerkleError, MerkleResult};
use crate::hasher::{hash_to_hex, Hash, KeccakHasher};

/// Binary merkle tree over an ordered list of leaf hashes.
///
/// Layer 0 holds the leaves in the order given; each following layer has `ceil(len / 2)` nodes
/// and the last layer holds only the root. The tree is built once and never mutated.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
    /// Leaf hash -> first position in layer 0
    positions: HashMap<Hash, usize>,
}

impl MerkleTree {
    /// Build the tree bottom-up, one layer at a time.
    pub fn from_leaves(leaves: Vec<Hash>) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut positions = HashMap::with_capacity(leaves.len());
        for (position, leaf) in leaves.iter().enumerate() {
            positions.entry(*leaf).or_insert(position);
        }

        let mut layers = vec![leaves];
        loop {
            let current = &layers[layers.len() - 1];
            if current.len() == 1 {
                break;
            }

            let next: Vec<Hash> = current
                .chunks(2)
                .map(|pair| KeccakHasher::concat_and_hash(&pair[0], pair.get(1)))
                .collect();
            layers.push(next);
        }

        let tree = Self { layers, positions };
        debug!(
            "Built merkle tree: {} leaves, depth {}, root {}",
            tree.len(),
            tree.depth(),
            hash_to_hex(&tree.root())
        );
        Ok(tree)
    }

    pub fn root(&self) -> Hash {
        // from_leaves guarantees a final layer with exactly one node
        self.layers[self.layers.len() - 1][0]
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.layers[0]
    }

    pub fn layers(&self) -> &[Vec<Hash>] {
        &self.layers
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.layers[0].len()
    }

    /// Always false: a tree cannot be built from zero leaves.
    pub fn is_empty(&self) -> bool {
        self.layers[0].is_empty()
    }

    /// Number of proof elements for every leaf.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn position_of(&self, leaf: &Hash) -> Option<usize> {
        self.positions.get(leaf).copied()
    }

    /// Sibling path for a leaf hash, leaf to root.
    pub fn proof_for(&self, leaf: &Hash) -> MerkleResult<Vec<Hash>> {
        let position = self
            .position_of(leaf)
            .ok_or_else(|| MerkleError::ProofNotFound(hash_to_hex(leaf)))?;

        self.proof_at(position)
    }

    /// Sibling path for the leaf at `position` in layer 0, leaf to root.
    pub fn proof_at(&self, position: usize) -> MerkleResult<Vec<Hash>> {
        if position >= self.len() {
            return Err(MerkleError::ProofNotFound(format!("at position {position}")));
        }

        let mut proof = Vec::with_capacity(self.depth());
        let mut current = position;

        for layer in &self.layers[..self.depth()] {
            let sibling = current ^ 1;
            // The unpaired last node was combined with itself, so it is its own sibling
            proof.push(*layer.get(sibling).unwrap_or(&layer[current]));
            current /= 2;
        }

        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::combine;
    use crate::proof::verify_proof;

    fn leaves(count: usize) -> Vec<Hash> {
        (0..count)
            .map(|i| {
                let mut leaf = [0u8; 32];
                leaf[24..].copy_from_slice(&(i as u64 + 1).to_be_bytes());
                crate::hasher::keccak256(&leaf)
            })
            .collect()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            MerkleTree::from_leaves(vec![]).unwrap_err(),
            MerkleError::EmptyInput
        );
    }

    #[test]
    fn test_single_leaf_tree() {
        let leaf = leaves(1)[0];
        let tree = MerkleTree::from_leaves(vec![leaf]).unwrap();

        assert_eq!(tree.root(), leaf, "Single leaf root should be the leaf hash");
        assert_eq!(tree.depth(), 0);
        assert!(tree.proof_for(&leaf).unwrap().is_empty());
        assert!(verify_proof(&leaf, &[], &tree.root()));
    }

    #[test]
    fn test_layer_sizes_halve_rounding_up() {
        let tree = MerkleTree::from_leaves(leaves(11)).unwrap();
        let sizes: Vec<usize> = tree.layers().iter().map(Vec::len).collect();

        assert_eq!(sizes, vec![11, 6, 3, 2, 1]);
        assert_eq!(tree.len(), 11);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_odd_layer_duplicates_last_node() {
        let l = leaves(3);
        let tree = MerkleTree::from_leaves(l.clone()).unwrap();

        let left = combine(&l[0], &l[1]);
        let right = combine(&l[2], &l[2]);
        assert_eq!(tree.root(), combine(&left, &right));

        // The unpaired leaf's first sibling is itself
        assert_eq!(tree.proof_at(2).unwrap(), vec![l[2], left]);
        assert_eq!(tree.proof_at(0).unwrap(), vec![l[1], right]);
    }

    #[test]
    fn test_every_leaf_verifies_for_small_trees() {
        for count in 1..=33 {
            let l = leaves(count);
            let tree = MerkleTree::from_leaves(l.clone()).unwrap();
            let root = tree.root();

            for leaf in &l {
                let proof = tree.proof_for(leaf).unwrap();
                assert_eq!(proof.len(), tree.depth());
                assert!(
                    verify_proof(leaf, &proof, &root),
                    "Proof should verify for tree with {} leaves",
                    count
                );
            }
        }
    }

    #[test]
    fn test_proof_length_is_ceil_log2() {
        for (count, depth) in [(1, 0), (2, 1), (3, 2), (4, 2), (5, 3), (8, 3), (9, 4), (1000, 10)] {
            let tree = MerkleTree::from_leaves(leaves(count)).unwrap();
            assert_eq!(tree.depth(), depth, "{} leaves", count);
        }
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let first = MerkleTree::from_leaves(leaves(17)).unwrap();
        let second = MerkleTree::from_leaves(leaves(17)).unwrap();
        assert_eq!(first.root(), second.root());
    }

    #[test]
    fn test_leaf_grouping_changes_root() {
        let l = leaves(4);
        let tree = MerkleTree::from_leaves(l.clone()).unwrap();

        // Pairs are sorted before hashing, so mirroring the whole layer keeps the root
        let mut reversed = l.clone();
        reversed.reverse();
        assert_eq!(MerkleTree::from_leaves(reversed).unwrap().root(), tree.root());

        // Moving a leaf into a different pair does not
        let regrouped = vec![l[0], l[2], l[1], l[3]];
        assert_ne!(MerkleTree::from_leaves(regrouped).unwrap().root(), tree.root());
    }

    #[test]
    fn test_missing_leaf_has_no_proof() {
        let tree = MerkleTree::from_leaves(leaves(4)).unwrap();

        assert!(matches!(
            tree.proof_for(&[0xAA; 32]),
            Err(MerkleError::ProofNotFound(_))
        ));
        assert!(matches!(
            tree.proof_at(4),
            Err(MerkleError::ProofNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_leaf_resolves_to_first_position() {
        let l = leaves(2);
        let tree = MerkleTree::from_leaves(vec![l[0], l[1], l[0]]).unwrap();

        assert_eq!(tree.position_of(&l[0]), Some(0));
        assert_eq!(tree.proof_for(&l[0]).unwrap(), tree.proof_at(0).unwrap());
    }
}
