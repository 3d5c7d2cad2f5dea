//! Error types for building and solving an arrangement.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of the bipartite problem an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Drivers,
    Destinations,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Drivers => f.write_str("drivers"),
            Collection::Destinations => f.write_str("destinations"),
        }
    }
}

/// Errors raised while validating inputs or loading them from disk.
#[derive(Debug, Error)]
pub enum MatchError {
    // === Input validation ===
    /// The collection is not an ordered sequence of entities.
    #[error("{collection} must be a list of names, found {found}")]
    InvalidCollectionType {
        collection: Collection,
        found: &'static str,
    },

    /// The collection has no entities to match.
    #[error("{collection} must not be empty")]
    EmptyCollection { collection: Collection },

    /// An element of the collection is not a string.
    #[error("{collection}[{index}] must be a string, found {found}")]
    InvalidElementType {
        collection: Collection,
        index: usize,
        found: &'static str,
    },

    // === Loading ===
    /// Failed to read an input file.
    #[error("failed to read {collection} from {path}: {source}")]
    Read {
        collection: Collection,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid JSON.
    #[error("failed to parse {collection} from {path}: {source}")]
    Parse {
        collection: Collection,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl MatchError {
    /// The collection the error refers to.
    pub fn collection(&self) -> Collection {
        match self {
            MatchError::InvalidCollectionType { collection, .. }
            | MatchError::EmptyCollection { collection }
            | MatchError::InvalidElementType { collection, .. }
            | MatchError::Read { collection, .. }
            | MatchError::Parse { collection, .. } => *collection,
        }
    }
}

/// Result type for arrangement operations.
pub type Result<T> = std::result::Result<T, MatchError>;
