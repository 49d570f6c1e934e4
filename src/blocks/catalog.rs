//! Block catalog input: definitions, resource-key parsing, and file loaders.
//!
//! A catalog is the list of `(name, range_start, range_end)` triples the
//! [`RangeTable`](crate::blocks::RangeTable) is built from. Three input shapes
//! are supported:
//!
//! - **Resource pairs**: the legacy resource-table shape, where each entry's
//!   key embeds both bounds as base-16 integers (`U<start>U<end>`, e.g.
//!   `U0000U0080`) and the value is the display name. Two reserved keys,
//!   `ResourceManager` and `Culture`, are table metadata rather than ranges
//!   and are skipped.
//! - **JSON / TOML documents**: an explicit `blocks` array of
//!   [`BlockDef`] records, loadable from a string or a file.
//!
//! Unparsable hex bounds fail the whole catalog. Defaulting a bad bound to
//! zero would produce a wrong range and silently misclassify sequences, so
//! the parser rejects instead.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, SeqPickerError};

/// Resource keys that are table metadata, not block ranges.
pub const RESERVED_KEYS: [&str; 2] = ["ResourceManager", "Culture"];

/// A raw block definition: a named code-point range with an exclusive upper
/// bound.
///
/// This is the input record consumed by
/// [`RangeTable::build`](crate::blocks::RangeTable::build); validation of the
/// `range_start < range_end` invariant happens there, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDef {
    /// Display name of the block, e.g. `"Basic Latin"`.
    pub name: String,

    /// Inclusive lower code-point bound.
    pub range_start: u32,

    /// Exclusive upper code-point bound.
    pub range_end: u32,
}

impl BlockDef {
    /// Creates a block definition.
    #[must_use]
    pub fn new(name: impl Into<String>, range_start: u32, range_end: u32) -> Self {
        Self {
            name: name.into(),
            range_start,
            range_end,
        }
    }
}

/// Wire shape for JSON/TOML catalog documents.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    blocks: Vec<BlockDef>,
}

/// Builds block definitions from resource-style `(key, display name)` pairs.
///
/// Reserved metadata keys are skipped; every other key must carry both bounds
/// as base-16 integers in the `U<start>U<end>` shape.
///
/// # Errors
///
/// Returns [`SeqPickerError::BlockKey`] on the first key whose bounds are
/// missing or not valid hex. The whole catalog is rejected (fail fast).
///
/// # Examples
///
/// ```
/// use seqpicker::blocks::from_resource_pairs;
///
/// let blocks = from_resource_pairs([
///     ("U0000U0080", "Basic Latin"),
///     ("Culture", "en-US"),
///     ("U0080U0100", "Latin-1 Supplement"),
/// ])?;
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].range_end, 0x0080);
/// # Ok::<(), seqpicker::SeqPickerError>(())
/// ```
pub fn from_resource_pairs<I, K, V>(pairs: I) -> Result<Vec<BlockDef>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut blocks = Vec::new();
    for (key, name) in pairs {
        let key = key.as_ref();
        if RESERVED_KEYS.contains(&key) {
            continue;
        }
        let (range_start, range_end) = parse_range_key(key)?;
        blocks.push(BlockDef {
            name: name.into(),
            range_start,
            range_end,
        });
    }
    tracing::debug!(block_count = blocks.len(), "parsed resource catalog");
    Ok(blocks)
}

/// Parses the two base-16 bounds embedded in a `U<start>U<end>` key.
fn parse_range_key(key: &str) -> Result<(u32, u32)> {
    let mut segments = key.split('U').filter(|segment| !segment.is_empty());
    let start = segments
        .next()
        .ok_or_else(|| SeqPickerError::BlockKey(format!("key '{key}' has no range bounds")))?;
    let end = segments
        .next()
        .ok_or_else(|| SeqPickerError::BlockKey(format!("key '{key}' is missing its end bound")))?;
    if segments.next().is_some() {
        return Err(SeqPickerError::BlockKey(format!(
            "key '{key}' has more than two range bounds"
        )));
    }

    let start = u32::from_str_radix(start, 16)
        .map_err(|e| SeqPickerError::BlockKey(format!("bad hex start in key '{key}': {e}")))?;
    let end = u32::from_str_radix(end, 16)
        .map_err(|e| SeqPickerError::BlockKey(format!("bad hex end in key '{key}': {e}")))?;
    Ok((start, end))
}

/// Parses a JSON catalog document.
///
/// Expected shape: `{"blocks": [{"name": ..., "range_start": ...,
/// "range_end": ...}, ...]}`.
///
/// # Errors
///
/// Returns [`SeqPickerError::Json`] if the document does not deserialize.
pub fn from_json_str(document: &str) -> Result<Vec<BlockDef>> {
    let catalog: CatalogDocument = serde_json::from_str(document)?;
    Ok(catalog.blocks)
}

/// Parses a TOML catalog document.
///
/// Expected shape: a `[[blocks]]` array of tables with `name`,
/// `range_start`, and `range_end` keys.
///
/// # Errors
///
/// Returns [`SeqPickerError::Toml`] if the document does not deserialize.
pub fn from_toml_str(document: &str) -> Result<Vec<BlockDef>> {
    let catalog: CatalogDocument = toml::from_str(document)?;
    Ok(catalog.blocks)
}

/// Loads a JSON catalog file.
///
/// # Errors
///
/// Returns [`SeqPickerError::Io`] if the file cannot be read, or
/// [`SeqPickerError::Json`] if it does not deserialize.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<BlockDef>> {
    from_json_str(&fs::read_to_string(path)?)
}

/// Loads a TOML catalog file.
///
/// # Errors
///
/// Returns [`SeqPickerError::Io`] if the file cannot be read, or
/// [`SeqPickerError::Toml`] if it does not deserialize.
pub fn load_toml(path: impl AsRef<Path>) -> Result<Vec<BlockDef>> {
    from_toml_str(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn resource_pairs_skip_reserved_keys() {
        let blocks = from_resource_pairs([
            ("ResourceManager", "System.Resources.ResourceManager"),
            ("U0000U0080", "Basic Latin"),
            ("Culture", ""),
            ("U1F300U1F600", "Miscellaneous Symbols and Pictographs"),
        ])
        .expect("valid catalog");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], BlockDef::new("Basic Latin", 0x0000, 0x0080));
        assert_eq!(blocks[1].range_start, 0x1F300);
        assert_eq!(blocks[1].range_end, 0x1F600);
    }

    #[test]
    fn bad_hex_fails_the_whole_catalog() {
        let err = from_resource_pairs([("U0000U0080", "ok"), ("U00G0U0100", "bad")])
            .expect_err("non-hex bound");
        assert!(matches!(err, SeqPickerError::BlockKey(_)));
    }

    #[test]
    fn missing_end_bound_is_rejected() {
        let err = from_resource_pairs([("U0080", "half a key")]).expect_err("single bound");
        assert!(matches!(err, SeqPickerError::BlockKey(_)));
    }

    #[test]
    fn extra_bounds_are_rejected() {
        let err =
            from_resource_pairs([("U0000U0080U0100", "three bounds")]).expect_err("extra bound");
        assert!(matches!(err, SeqPickerError::BlockKey(_)));
    }

    #[test]
    fn json_document_parses() {
        let blocks = from_json_str(
            r#"{"blocks": [{"name": "Basic Latin", "range_start": 0, "range_end": 128}]}"#,
        )
        .expect("valid json");
        assert_eq!(blocks, vec![BlockDef::new("Basic Latin", 0, 128)]);
    }

    #[test]
    fn toml_document_parses() {
        let blocks = from_toml_str(
            "[[blocks]]\nname = \"Basic Latin\"\nrange_start = 0\nrange_end = 128\n",
        )
        .expect("valid toml");
        assert_eq!(blocks, vec![BlockDef::new("Basic Latin", 0, 128)]);
    }

    #[test]
    fn json_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"blocks": [{{"name": "Arrows", "range_start": 8592, "range_end": 8704}}]}}"#
        )
        .expect("write");

        let blocks = load_json(file.path()).expect("load");
        assert_eq!(blocks, vec![BlockDef::new("Arrows", 0x2190, 0x2200)]);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = load_toml("/nonexistent/blocks.toml").expect_err("missing file");
        assert!(matches!(err, SeqPickerError::Io(_)));
    }
}
