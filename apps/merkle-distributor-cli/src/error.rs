use merkle_distributor_balance_map::BalanceMapError;
use merkle_distributor_csvs::CsvError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    BalanceMap(#[from] BalanceMapError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No claim for account {0} in manifest")]
    ClaimNotFound(String),
}
