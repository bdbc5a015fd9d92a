use rs_merkle::Hasher;
use sha3::{Digest, Keccak256};

/// A 32-byte tree node: either a leaf hash or an internal node hash.
pub type Hash = [u8; 32];

/// Keccak-256 over arbitrary bytes.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Merkle tree hasher matching the verification rule of the on-chain distributor.
///
/// ## Hashing Scheme
///
/// - **Leaves** are hashed by the caller (see [`crate::leaf`]); `hash` is plain Keccak-256.
/// - **Internal nodes**: `keccak256(lower || higher)` where the two children are ordered as
///   unsigned big-endian integers. For fixed-width big-endian arrays this is the same as
///   byte-wise comparison, which is what `[u8; 32]`'s `Ord` does.
/// - **Unpaired node**: combined with itself rather than promoted unchanged.
///
/// The on-chain verifier has no domain separation between leaves and internal nodes, so
/// neither does this hasher. Leaves are 116-byte preimages and internal nodes 64-byte
/// preimages, so the two never share an input.
#[derive(Clone, Debug)]
pub struct KeccakHasher;

impl Hasher for KeccakHasher {
    type Hash = Hash;

    fn hash(data: &[u8]) -> Hash {
        keccak256(data)
    }

    fn concat_and_hash(left: &Self::Hash, right: Option<&Self::Hash>) -> Self::Hash {
        let right = right.unwrap_or(left);

        let mut hasher = Keccak256::new();
        if left <= right {
            hasher.update(left);
            hasher.update(right);
        } else {
            hasher.update(right);
            hasher.update(left);
        }
        hasher.finalize().into()
    }
}

/// Commutative pair hash used by both the tree builder and the proof verifier.
#[must_use]
pub fn combine(a: &Hash, b: &Hash) -> Hash {
    KeccakHasher::concat_and_hash(a, Some(b))
}

/// `0x`-prefixed, full-width hex encoding of a node.
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    format!("0x{}", hex::encode(hash))
}
