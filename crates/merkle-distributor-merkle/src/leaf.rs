use alloy_primitives::{Address, U256};

use crate::hasher::{keccak256, Hash};

/// Length of the tightly packed leaf preimage: 32 + 20 + 32 + 32 bytes.
pub const PACKED_LEAF_LEN: usize = 116;

/// The data hashed into a single leaf of the distribution tree.
///
/// ## ⚠️ Layout Must Match the Distributor Contract
///
/// The contract recomputes this hash from the claim arguments
/// (`keccak256(abi.encodePacked(index, account, amount0, amount1))`), so the packed layout is
/// fixed:
///
/// ```text
/// index    uint256  32 bytes, big-endian, offset 0
/// account  address  20 bytes,             offset 32
/// amount0  uint256  32 bytes, big-endian, offset 52
/// amount1  uint256  32 bytes, big-endian, offset 84
/// total             116 bytes
/// ```
///
/// Reordering fields, changing widths or endianness breaks every existing root and proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceLeaf {
    /// Position of the claim in the canonical ordering.
    pub index: u64,
    /// Recipient of both amounts.
    pub account: Address,
    /// Amount of the first token.
    pub amount0: U256,
    /// Amount of the second token.
    pub amount1: U256,
}

impl BalanceLeaf {
    pub fn new(index: u64, account: Address, amount0: U256, amount1: U256) -> Self {
        Self {
            index,
            account,
            amount0,
            amount1,
        }
    }

    /// Tightly packed preimage of the leaf hash.
    pub fn to_packed(&self) -> [u8; PACKED_LEAF_LEN] {
        let mut packed = [0u8; PACKED_LEAF_LEN];
        packed[0..32].copy_from_slice(&U256::from(self.index).to_be_bytes::<32>());
        packed[32..52].copy_from_slice(self.account.as_slice());
        packed[52..84].copy_from_slice(&self.amount0.to_be_bytes::<32>());
        packed[84..116].copy_from_slice(&self.amount1.to_be_bytes::<32>());
        packed
    }

    pub fn to_hash(&self) -> Hash {
        keccak256(&self.to_packed())
    }
}

/// Hash one allocation record. No validation is performed.
pub fn hash_balance_leaf(index: u64, account: Address, amount0: U256, amount1: U256) -> Hash {
    BalanceLeaf::new(index, account, amount0, amount1).to_hash()
}
