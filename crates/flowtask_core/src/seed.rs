//! Static seed datasets for the in-memory services.
//!
//! # Responsibility
//! - Parse the embedded default dataset or a caller-provided JSON document.
//! - Reject datasets that would break store id uniqueness.
//!
//! # Invariants
//! - Record order in the document is the initial store order.
//! - Task and list ids are unique within their own collection.

use crate::model::list::List;
use crate::model::task::Task;
use crate::store::{ensure_unique_ids, DuplicateIdError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_SEED_JSON: &str = include_str!("../seed/default.json");

/// Seed loading failure.
#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    DuplicateId(DuplicateIdError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed data: {err}"),
            Self::DuplicateId(err) => write!(f, "invalid seed data: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::DuplicateId(err) => Some(err),
        }
    }
}

impl From<DuplicateIdError> for SeedError {
    fn from(value: DuplicateIdError) -> Self {
        Self::DuplicateId(value)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Initial contents for both stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl SeedData {
    /// Dataset bundled with the crate.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(DEFAULT_SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let data: Self = serde_json::from_str(json)?;
        data.check_unique_ids()?;
        Ok(data)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn check_unique_ids(&self) -> Result<(), SeedError> {
        ensure_unique_ids(&self.tasks)?;
        ensure_unique_ids(&self.lists)?;
        Ok(())
    }
}
