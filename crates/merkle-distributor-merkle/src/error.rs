use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Expected non-zero number of leaves")]
    EmptyInput,

    #[error("Leaf {0} is not in the tree")]
    ProofNotFound(String),
}
