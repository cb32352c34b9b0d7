// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-domain caller input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Key not present in the coefficient tables.
    #[error("unknown {table} '{key}'")]
    Lookup { table: &'static str, key: String },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn lookup(table: &'static str, key: impl Into<String>) -> Self {
        Error::Lookup { table, key: key.into() }
    }

    /// Re-tag a table miss as bad caller input. Used where a name arrives
    /// from scraped text rather than from the tables themselves.
    pub fn into_invalid(self) -> Self {
        match self {
            Error::Lookup { table, key } => Error::InvalidArgument(format!("unknown {table} '{key}'")),
            other => other,
        }
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, Error::Lookup { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
