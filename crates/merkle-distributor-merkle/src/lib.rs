/*!
# Merkle Distributor: Merkle Tree

Leaf encoding, tree construction and proof verification for balance snapshots that are
claimed against an on-chain merkle distributor.

## Hashing Scheme

- **Leaf**: `keccak256(uint256 index || address account || uint256 amount0 || uint256 amount1)`
  (tightly packed, 116 bytes)
- **Internal node**: `keccak256(min(a, b) || max(a, b))`, comparing the two hashes as unsigned
  big-endian integers
- **Odd layers**: the unpaired last node is combined with itself

Because the pair is sorted before hashing, a proof is just the list of sibling hashes from
leaf to root. No left/right flags are needed and the verifier folds the proof with the same
`combine` the builder uses.

## Usage

```rust
use merkle_distributor_merkle::{Address, Balance, BalanceTree, U256};

let a: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
let b: Address = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".parse().unwrap();
let balances = vec![
    Balance::new(a, U256::from(50), U256::from(100)),
    Balance::new(b, U256::from(51), U256::from(102)),
];
let tree = BalanceTree::new(&balances).unwrap();

let proof = tree.proof(0, a, U256::from(50), U256::from(100)).unwrap();
assert!(BalanceTree::verify_proof(0, a, U256::from(50), U256::from(100), &proof, &tree.root()));
```
*/

pub mod balance_tree;
pub mod error;
pub mod hasher;
pub mod leaf;
pub mod proof;
pub mod tree;

pub use balance_tree::{Balance, BalanceTree};
pub use error::{MerkleError, MerkleResult};
pub use hasher::{combine, hash_to_hex, keccak256, Hash, KeccakHasher};
pub use leaf::{hash_balance_leaf, BalanceLeaf, PACKED_LEAF_LEN};
pub use proof::{process_proof, verify_proof};
pub use tree::MerkleTree;

// Re-export primitives used in the public API
pub use alloy_primitives::{Address, U256};
