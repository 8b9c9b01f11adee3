use thiserror::Error;

use crate::domain::SubmitterId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{field} mismatch: configured {configured}, persisted registry has {persisted}")]
    Mismatch {
        field: &'static str,
        configured: String,
        persisted: String,
    },
}

/// Errors returned when registering a prediction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("submitter {submitter} has already predicted")]
    AlreadyPredicted { submitter: SubmitterId },
}

/// Errors returned when evaluating predictions against an actual value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("caller {caller} is not authorized to evaluate")]
    Unauthorized { caller: SubmitterId },
}

/// Errors raised while rebuilding a registry from persisted state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("duplicate prediction for submitter {submitter}")]
    DuplicateSubmitter { submitter: SubmitterId },

    #[error("prediction for submitter {submitter} is not marked as submitted")]
    NotSubmitted { submitter: SubmitterId },

    #[error("owner cannot be empty")]
    EmptyOwner,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for Error {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Error::Connection(err.to_string())
    }
}
