use alloy_primitives::{Address, U256};

use crate::error::MerkleResult;
use crate::hasher::{hash_to_hex, Hash};
use crate::leaf::hash_balance_leaf;
use crate::proof::verify_proof;
use crate::tree::MerkleTree;

/// An already-validated allocation: one account and its two token amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Balance {
    pub account: Address,
    pub amount0: U256,
    pub amount1: U256,
}

impl Balance {
    pub fn new(account: Address, amount0: U256, amount1: U256) -> Self {
        Self {
            account,
            amount0,
            amount1,
        }
    }
}

/// Merkle tree over balances, indexed by their position in the slice it was built from.
///
/// No sorting or duplicate detection happens here; the balance map builder does that before
/// handing over the canonical ordering.
#[derive(Clone, Debug)]
pub struct BalanceTree {
    tree: MerkleTree,
}

impl BalanceTree {
    pub fn new(balances: &[Balance]) -> MerkleResult<Self> {
        let leaves = balances
            .iter()
            .enumerate()
            .map(|(index, balance)| {
                hash_balance_leaf(
                    index as u64,
                    balance.account,
                    balance.amount0,
                    balance.amount1,
                )
            })
            .collect();

        Ok(Self {
            tree: MerkleTree::from_leaves(leaves)?,
        })
    }

    pub fn root(&self) -> Hash {
        self.tree.root()
    }

    pub fn hex_root(&self) -> String {
        hash_to_hex(&self.tree.root())
    }

    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Proof for the leaf built from exactly these fields.
    pub fn proof(
        &self,
        index: u64,
        account: Address,
        amount0: U256,
        amount1: U256,
    ) -> MerkleResult<Vec<Hash>> {
        self.tree
            .proof_for(&hash_balance_leaf(index, account, amount0, amount1))
    }

    /// Recompute the leaf from its fields and fold the proof into `root`.
    pub fn verify_proof(
        index: u64,
        account: Address,
        amount0: U256,
        amount1: U256,
        proof: &[Hash],
        root: &Hash,
    ) -> bool {
        verify_proof(
            &hash_balance_leaf(index, account, amount0, amount1),
            proof,
            root,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MerkleError;

    fn wallet0() -> Address {
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap()
    }

    fn wallet1() -> Address {
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".parse().unwrap()
    }

    fn two_account_tree() -> BalanceTree {
        BalanceTree::new(&[
            Balance::new(wallet0(), U256::from(50), U256::from(100)),
            Balance::new(wallet1(), U256::from(51), U256::from(102)),
        ])
        .unwrap()
    }

    #[test]
    fn test_two_account_root() {
        assert_eq!(
            two_account_tree().hex_root(),
            "0x54b09b181b807c93f0264bfd082d3e1719bef9014b50175da0a2b2d80c417c26"
        );
    }

    #[test]
    fn test_two_account_claims_verify() {
        let tree = two_account_tree();
        let root = tree.root();

        let proof0 = tree.proof(0, wallet0(), U256::from(50), U256::from(100)).unwrap();
        assert!(BalanceTree::verify_proof(
            0,
            wallet0(),
            U256::from(50),
            U256::from(100),
            &proof0,
            &root
        ));

        let proof1 = tree.proof(1, wallet1(), U256::from(51), U256::from(102)).unwrap();
        assert!(BalanceTree::verify_proof(
            1,
            wallet1(),
            U256::from(51),
            U256::from(102),
            &proof1,
            &root
        ));
    }

    #[test]
    fn test_cannot_claim_more_than_proof() {
        let tree = two_account_tree();
        let proof0 = tree.proof(0, wallet0(), U256::from(50), U256::from(100)).unwrap();

        assert!(!BalanceTree::verify_proof(
            0,
            wallet0(),
            U256::from(50),
            U256::from(101),
            &proof0,
            &tree.root()
        ));
    }

    #[test]
    fn test_cannot_claim_for_address_other_than_proof() {
        let tree = two_account_tree();
        let proof0 = tree.proof(0, wallet0(), U256::from(50), U256::from(100)).unwrap();

        assert!(!BalanceTree::verify_proof(
            1,
            wallet1(),
            U256::from(50),
            U256::from(101),
            &proof0,
            &tree.root()
        ));
        assert!(!BalanceTree::verify_proof(
            0,
            wallet1(),
            U256::from(50),
            U256::from(100),
            &proof0,
            &tree.root()
        ));
    }

    #[test]
    fn test_wrong_index_fails() {
        let tree = two_account_tree();
        let proof0 = tree.proof(0, wallet0(), U256::from(50), U256::from(100)).unwrap();

        assert!(!BalanceTree::verify_proof(
            1,
            wallet0(),
            U256::from(50),
            U256::from(100),
            &proof0,
            &tree.root()
        ));
    }

    #[test]
    fn test_unknown_leaf_has_no_proof() {
        let tree = two_account_tree();
        let result = tree.proof(0, wallet0(), U256::from(50), U256::from(101));
        assert!(matches!(result, Err(MerkleError::ProofNotFound(_))));
    }

    #[test]
    fn test_empty_balances_are_rejected() {
        assert!(matches!(
            BalanceTree::new(&[]),
            Err(MerkleError::EmptyInput)
        ));
    }
}
