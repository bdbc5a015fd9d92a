use merkle_distributor_merkle::MerkleError;
use thiserror::Error;

pub type BalanceMapResult<T> = Result<T, BalanceMapError>;

#[derive(Error, Debug)]
pub enum BalanceMapError {
    #[error("Found invalid address: {0}")]
    InvalidAddress(String),

    #[error("Duplicate address: {0}")]
    DuplicateAddress(String),

    #[error("Invalid amount for account {account}: {amount}")]
    InvalidAmount { account: String, amount: String },

    #[error("No allocation records provided")]
    EmptyInput,

    #[error(transparent)]
    Merkle(#[from] MerkleError),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Proof for {0} does not verify against the merkle root")]
    InvalidProof(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
