//! Block catalog input and the category-range index.
//!
//! This module turns raw Unicode block definitions into the immutable
//! [`RangeTable`] the engine classifies sequences with. Catalogs arrive as
//! resource-style key/value pairs (bounds embedded in the key as hex) or as
//! explicit JSON/TOML documents; both shapes produce the same [`BlockDef`]
//! triples.
//!
//! # Modules
//!
//! - `catalog`: `BlockDef` records, resource-key parsing, file loaders
//! - `table`: `RangeTable` construction, orderings, and ceiling assignment

pub mod catalog;
pub mod table;

pub use catalog::{
    from_json_str, from_resource_pairs, from_toml_str, load_json, load_toml, BlockDef,
    RESERVED_KEYS,
};
pub use table::RangeTable;
