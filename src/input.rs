//! Loading entity names from files.
//!
//! Two layouts are understood:
//!
//! - `lines`: one name per line. Whitespace around the whole file is dropped
//!   and each line loses its trailing whitespace. Blank lines in the middle of
//!   the file are kept as empty names.
//! - `json`: a JSON array whose elements are all strings.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Collection, MatchError, Result};

/// On-disk layout of an entity list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    #[default]
    Lines,
    Json,
}

/// Reads the names of `collection` from `path`.
///
/// # Errors
///
/// Returns [`MatchError::Read`] if the file cannot be read,
/// [`MatchError::Parse`] for malformed JSON, and the validation errors of
/// [`parse_lines`] or [`from_json_value`] otherwise.
pub fn read_entities(
    path: &Path,
    format: InputFormat,
    collection: Collection,
) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| MatchError::Read {
        collection,
        path: path.to_path_buf(),
        source,
    })?;

    let entities = match format {
        InputFormat::Lines => parse_lines(&bytes, collection)?,
        InputFormat::Json => {
            let document = serde_json::from_slice(&bytes).map_err(|source| MatchError::Parse {
                collection,
                path: path.to_path_buf(),
                source,
            })?;
            from_json_value(document, collection)?
        }
    };
    tracing::debug!(
        %collection,
        path = %path.display(),
        count = entities.len(),
        "loaded entities"
    );
    Ok(entities)
}

/// Splits newline-delimited names.
///
/// # Errors
///
/// Returns [`MatchError::InvalidElementType`] for a line that is not UTF-8.
pub fn parse_lines(bytes: &[u8], collection: Collection) -> Result<Vec<String>> {
    let content = bytes.trim_ascii();
    if content.is_empty() {
        return Ok(Vec::new());
    }

    content
        .split(|&b| b == b'\n')
        .enumerate()
        .map(|(index, line)| {
            std::str::from_utf8(line)
                .map(|name| name.trim_end().to_owned())
                .map_err(|_| MatchError::InvalidElementType {
                    collection,
                    index,
                    found: "non-UTF-8 text",
                })
        })
        .collect()
}

/// Extracts names from a parsed JSON document.
///
/// # Errors
///
/// Returns [`MatchError::InvalidCollectionType`] if the document is not an
/// array and [`MatchError::InvalidElementType`] for the first element that is
/// not a string.
pub fn from_json_value(document: Value, collection: Collection) -> Result<Vec<String>> {
    let elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(MatchError::InvalidCollectionType {
                collection,
                found: kind(&other),
            })
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::String(name) => Ok(name),
            other => Err(MatchError::InvalidElementType {
                collection,
                index,
                found: kind(&other),
            }),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
