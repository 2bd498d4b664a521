use thiserror::Error;

use crate::fixtures::TargetKind;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error("Invocation error: {0}")]
    Invoke(#[from] invoke::InvokeError),

    #[error("No call_user_func baseline measured for {0}")]
    MissingBaseline(TargetKind),
}
