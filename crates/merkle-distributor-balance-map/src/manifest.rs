/*!
# Distribution Manifest

The blob that gets published alongside the deployed distributor. It is sufficient on its own
to rebuild the whole tree, so anyone can check that every allocation is included and that the
tree holds nothing else.

```json
{
  "merkleRoot": "0x…32 bytes…",
  "tokenTotal0": "0x0177",
  "tokenTotal1": "0x02ee",
  "claims": {
    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed": {
      "index": 0,
      "amount0": "0x64",
      "amount1": "0xc8",
      "proof": ["0x…", "0x…"]
    }
  }
}
```
*/

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use merkle_distributor_merkle::{hash_balance_leaf, hash_to_hex, verify_proof, Hash, MerkleTree};
use serde::{Deserialize, Serialize};

use crate::address::{checksum, normalize_address};
use crate::amount::{parse_quantity_hex, quantity_hex, widen, U512};
use crate::errors::{BalanceMapError, BalanceMapResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(with = "hex_hash")]
    pub merkle_root: Hash,

    /// Sum of every `amount0`
    #[serde(with = "hex_u512")]
    pub token_total0: U512,

    /// Sum of every `amount1`
    #[serde(with = "hex_u512")]
    pub token_total1: U512,

    /// Keyed by checksummed account. Key order is index order.
    pub claims: BTreeMap<String, Claim>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub index: u64,

    #[serde(with = "hex_u256")]
    pub amount0: U256,

    #[serde(with = "hex_u256")]
    pub amount1: U256,

    #[serde(with = "hex_hashes")]
    pub proof: Vec<Hash>,
}

impl Claim {
    pub fn leaf_hash(&self, account: Address) -> Hash {
        hash_balance_leaf(self.index, account, self.amount0, self.amount1)
    }

    /// Whether this claim's proof folds to `root`.
    pub fn verify(&self, account: Address, root: &Hash) -> bool {
        verify_proof(&self.leaf_hash(account), &self.proof, root)
    }
}

impl Manifest {
    pub fn hex_root(&self) -> String {
        hash_to_hex(&self.merkle_root)
    }

    /// Look up a claim by account in any accepted spelling.
    pub fn claim_for(&self, account: &str) -> BalanceMapResult<Option<&Claim>> {
        let address = normalize_address(account)?;
        Ok(self.claims.get(&checksum(&address)))
    }

    /// Re-derive everything the manifest asserts from its own contents.
    ///
    /// Checks that keys are canonical, indices are `0..n` in key order, every proof verifies,
    /// the tree rebuilt from the claims has the published root, and the totals are the sums.
    pub fn verify(&self) -> BalanceMapResult<()> {
        if self.claims.is_empty() {
            return Err(BalanceMapError::InvalidManifest(
                "manifest has no claims".to_string(),
            ));
        }

        let mut leaves = Vec::with_capacity(self.claims.len());
        let mut total0 = U512::ZERO;
        let mut total1 = U512::ZERO;

        for (position, (account, claim)) in self.claims.iter().enumerate() {
            let address = normalize_address(account)?;
            if checksum(&address) != *account {
                return Err(BalanceMapError::InvalidManifest(format!(
                    "claim key {} is not in checksummed form",
                    account
                )));
            }

            if claim.index != position as u64 {
                return Err(BalanceMapError::InvalidManifest(format!(
                    "claim {} has index {}, expected {}",
                    account, claim.index, position
                )));
            }

            if !claim.verify(address, &self.merkle_root) {
                return Err(BalanceMapError::InvalidProof(account.clone()));
            }

            total0 = checked_total(total0, claim.amount0)?;
            total1 = checked_total(total1, claim.amount1)?;
            leaves.push(claim.leaf_hash(address));
        }

        let tree = MerkleTree::from_leaves(leaves)?;
        if tree.root() != self.merkle_root {
            return Err(BalanceMapError::InvalidManifest(format!(
                "claims rebuild to root {}, manifest has {}",
                hash_to_hex(&tree.root()),
                self.hex_root()
            )));
        }

        if total0 != self.token_total0 || total1 != self.token_total1 {
            return Err(BalanceMapError::InvalidManifest(format!(
                "token totals ({}, {}) do not match the claims ({}, {})",
                self.token_total0, self.token_total1, total0, total1
            )));
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> BalanceMapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> BalanceMapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub(crate) fn checked_total(total: U512, amount: U256) -> BalanceMapResult<U512> {
    total.checked_add(widen(amount)).ok_or_else(|| {
        BalanceMapError::InvalidManifest("token total overflowed 512 bits".to_string())
    })
}

// ================================================================================================
// Custom Serde Functions
// ================================================================================================

mod hex_hash {
    use merkle_distributor_merkle::{hash_to_hex, Hash};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hash: &Hash, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hash_to_hex(hash))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hash(&s).map_err(serde::de::Error::custom)
    }
}

mod hex_hashes {
    use merkle_distributor_merkle::{hash_to_hex, Hash};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hashes: &[Hash], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(hashes.iter().map(hash_to_hex))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Hash>, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| super::parse_hash(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

mod hex_u256 {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::amount::{parse_quantity_hex, quantity_hex};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&quantity_hex(&value.to_be_bytes::<32>()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_quantity_hex(&s)
            .and_then(|bytes| U256::try_from_be_slice(&bytes))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid uint256 quantity: {}", s)))
    }
}

mod hex_u512 {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::amount::{parse_quantity_hex, quantity_hex, U512};

    pub fn serialize<S: Serializer>(value: &U512, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&quantity_hex(&value.to_be_bytes::<64>()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U512, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_quantity_hex(&s)
            .and_then(|bytes| U512::try_from_be_slice(&bytes))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid quantity: {}", s)))
    }
}

/// Parse a `0x`-prefixed, full-width 32-byte hash.
fn parse_hash(s: &str) -> Result<Hash, String> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| format!("expected 0x prefix: {}", s))?;
    let mut hash = [0u8; 32];
    hex::decode_to_slice(digits, &mut hash)
        .map_err(|e| format!("invalid 32-byte hash {}: {}", s, e))?;
    Ok(hash)
}

/// Hex quantity of a uint256 as it appears in the manifest.
pub fn u256_to_hex(value: &U256) -> String {
    quantity_hex(&value.to_be_bytes::<32>())
}

/// Hex quantity of a token total as it appears in the manifest.
pub fn u512_to_hex(value: &U512) -> String {
    quantity_hex(&value.to_be_bytes::<64>())
}

/// Parse a manifest hex quantity into a uint256.
pub fn u256_from_hex(text: &str) -> Option<U256> {
    parse_quantity_hex(text).and_then(|bytes| U256::try_from_be_slice(&bytes))
}
