use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while configuring, introspecting or writing a generation run
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to read configuration file {path}: {source}")]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("invalid configuration: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("unsupported database dialect: {0}")]
    UnsupportedDialect(String),

    #[error("table `{0}` not found in database")]
    UnknownTable(String),

    #[error("table name `{0}` can't be used as a file name")]
    InvalidTableName(String),

    #[error("column `{column}` not found in table `{table}`")]
    UnknownColumn { table: String, column: String },

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("schema discovery failed: {0}")]
    Discovery(String),

    #[error("failed to serialize table manifest: {0}")]
    Manifest(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
