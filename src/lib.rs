//! Seqpicker: the classification and live-filter engine behind an
//! interactive compose-sequence picker.
//!
//! Given thousands of key-sequence records and a few hundred named Unicode
//! block ranges, the engine answers two questions on every keystroke: which
//! category does a sequence's result code point belong to, and does the
//! sequence match the current search text. Category selection and free-text
//! search compose into a single predicate over the whole collection.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  Engine Layer (engine/)                         │  ← Filter composition
//! │  - Predicate evaluation                         │  ← Refresh contract
//! │  - Snapshot + listener notification             │
//! └─────────────────────────────────────────────────┘
//!          │                        │
//! ┌──────────────────┐    ┌──────────────────┐
//! │ Blocks Layer     │    │ Search Layer     │
//! │ (blocks/)        │    │ (search/)        │
//! │ - Catalog input  │    │ - Tokenization   │
//! │ - Range table    │    │ - Collation      │
//! │ - Ceiling lookup │    │                  │
//! └──────────────────┘    └──────────────────┘
//!          │                        │
//! ┌─────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                         │
//! │  - Category / CategoryId                        │
//! │  - SequenceDescription / SequenceRecord         │
//! │  - Error types                                  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`engine`]: [`FilterEngine`], the predicate, and the refresh contract
//! - [`blocks`]: block catalogs and the category-range index
//! - [`search`]: search tokenization and collation policy
//! - [`domain`]: core types and errors
//! - [`observability`]: optional tracing subscriber setup
//!
//! # Data flow
//!
//! Raw block definitions → [`blocks::RangeTable`] (sorted categories) → each
//! sequence assigned its category at construction → the engine re-evaluates
//! its predicate per record whenever category selection or search text
//! changes → the consumer re-renders the surviving subset.
//!
//! # Example
//!
//! ```
//! use seqpicker::{blocks::BlockDef, EngineConfig, FilterEngine, SequenceDescription};
//!
//! let blocks = vec![
//!     BlockDef::new("Basic Latin", 0x0000, 0x0080),
//!     BlockDef::new("Latin-1 Supplement", 0x0080, 0x0100),
//! ];
//! let descriptions = vec![
//!     SequenceDescription::new(vec!["o".into(), "c".into()], "©", "copyright sign"),
//!     SequenceDescription::new(vec!["a".into()], "A", "latin letter a"),
//! ];
//!
//! let mut engine = FilterEngine::new(blocks, descriptions, &EngineConfig::default())?;
//! assert_eq!(engine.visible().count(), 2);
//!
//! engine.set_search_text("copyright");
//! let visible: Vec<_> = engine.visible().map(|r| r.description().output.as_str()).collect();
//! assert_eq!(visible, vec!["©"]);
//! # Ok::<(), seqpicker::SeqPickerError>(())
//! ```
//!
//! # Concurrency model
//!
//! Single-threaded and synchronous: construction, assignment, and filtering
//! run to completion on the calling thread with no suspension points and no
//! I/O (catalog file loaders are thin adapters outside the core path). Each
//! refresh evaluates against an atomically taken [`engine::FilterSnapshot`],
//! which is also the only shared state a parallel fan-out of the per-record
//! predicate would read.

pub mod blocks;
pub mod domain;
pub mod engine;
pub mod observability;
pub mod search;

pub use domain::{Category, CategoryId, Result, SeqPickerError, SequenceDescription, SequenceRecord};
pub use engine::{FilterChange, FilterEngine, RefreshListener};
pub use search::{Collation, SearchTokens};

use std::collections::BTreeMap;

/// Engine configuration.
///
/// All policy the engine depends on is carried here explicitly — in
/// particular the [`Collation`], so casing and sort behavior never depend on
/// ambient locale state.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Casing and string-ordering policy for tokenization and category-name
    /// sorting. Default: [`Collation::CaseInsensitive`].
    pub collation: Collation,

    /// Initial value of the search-in-selection toggle. Default: `false`.
    pub search_in_selection: bool,

    /// Tracing filter directive for [`observability::init_tracing`], e.g.
    /// `"debug"`. `None` leaves subscriber setup entirely to the host.
    pub trace_level: Option<String>,
}

impl EngineConfig {
    /// Parses configuration from a string map with fallback defaults.
    ///
    /// Recognized keys:
    ///
    /// - `collation`: `"case-insensitive"` (default) or `"ordinal"`
    /// - `search_in_selection`: `"true"` / `"false"` (default `false`)
    /// - `trace_level`: tracing filter directive
    ///
    /// Unknown keys are ignored; unparsable values fall back to defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use seqpicker::{Collation, EngineConfig};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("collation".to_string(), "ordinal".to_string());
    /// map.insert("search_in_selection".to_string(), "true".to_string());
    ///
    /// let config = EngineConfig::from_map(&map);
    /// assert_eq!(config.collation, Collation::Ordinal);
    /// assert!(config.search_in_selection);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let collation = config
            .get("collation")
            .and_then(|name| Collation::from_name(name))
            .unwrap_or_default();

        let search_in_selection = config
            .get("search_in_selection")
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            collation,
            search_in_selection,
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Builds a fully initialized engine, installing tracing if configured.
///
/// Convenience entry point for standalone hosts: initializes the tracing
/// subscriber when `config.trace_level` is set, then constructs the
/// [`FilterEngine`] and runs its initial refresh.
///
/// # Errors
///
/// Returns an error if any block definition has an invalid range.
pub fn initialize(
    config: &EngineConfig,
    blocks: Vec<blocks::BlockDef>,
    descriptions: Vec<SequenceDescription>,
) -> Result<FilterEngine> {
    if config.trace_level.is_some() {
        observability::init_tracing(config);
    }
    tracing::debug!("initializing seqpicker engine");
    FilterEngine::new(blocks, descriptions, config)
}
