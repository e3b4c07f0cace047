//! JSON loader for curriculum documents
//!
//! Reads the static curriculum document (years → semesters → courses) into
//! the data model. The document is fetched once per session and treated as
//! read-only afterwards; there is no retry and no caching. Load failures are
//! split into two outcomes so callers can tell a missing/unreadable document
//! from a malformed one.

use crate::core::models::Curriculum;
use std::fmt;
use std::fs;
use std::path::Path;

/// Why a curriculum document could not be loaded
#[derive(Debug)]
pub enum LoadError {
    /// The document could not be fetched (missing file, I/O failure)
    Unavailable(std::io::Error),
    /// The document was fetched but is not a valid curriculum record
    Malformed(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "curriculum document unavailable: {err}"),
            Self::Malformed(err) => write!(f, "malformed curriculum document: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

/// Parse a curriculum document from its JSON text
///
/// # Errors
/// Returns the underlying `serde_json` error when the text does not match
/// the curriculum schema.
pub fn parse_curriculum_json(content: &str) -> Result<Curriculum, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load and parse a curriculum document from a file
///
/// # Arguments
/// * `path` - Path to the JSON document
///
/// # Errors
/// Returns [`LoadError::Unavailable`] when the file cannot be read and
/// [`LoadError::Malformed`] when its contents do not parse.
pub fn load_curriculum<P: AsRef<Path>>(path: P) -> Result<Curriculum, LoadError> {
    let content = fs::read_to_string(path).map_err(LoadError::Unavailable)?;
    parse_curriculum_json(&content).map_err(LoadError::Malformed)
}
