//! Error types for the seqpicker engine.
//!
//! This module defines the centralized error type [`SeqPickerError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Malformed catalog input is a construction-time fatal error: a block key
//! with unparsable hex bounds or an inverted range is rejected outright rather
//! than defaulted to zero, since a zero-width or wrong range would silently
//! misclassify every sequence that lands in it.

use thiserror::Error;

/// The main error type for seqpicker operations.
///
/// This enum consolidates all error conditions that can occur while building
/// the category table and filter engine. Variants wrapping external crates use
/// `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum SeqPickerError {
    /// A resource-style block key could not be parsed.
    ///
    /// Block keys embed their code-point bounds as base-16 integers
    /// (`U<start>U<end>`). Missing segments or non-hex digits end up here.
    #[error("Block key error: {0}")]
    BlockKey(String),

    /// A block definition has an inverted or empty code-point range.
    ///
    /// Every category must satisfy `range_start < range_end`; the builder
    /// rejects the whole catalog rather than keeping a range that could
    /// never match.
    #[error("Invalid range for block '{name}': start U+{start:04X} must be below end U+{end:04X}")]
    InvalidRange {
        /// Display name of the offending block.
        name: String,
        /// Inclusive lower bound as supplied.
        start: u32,
        /// Exclusive upper bound as supplied.
        end: u32,
    },

    /// A category id does not exist in this engine.
    ///
    /// Ids are issued by the engine itself, so this indicates an id that
    /// outlived its engine or was fabricated by the caller.
    #[error("Unknown category id {index}")]
    UnknownCategory {
        /// Raw slab index of the unknown id.
        index: usize,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed while loading a catalog file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON catalog document could not be deserialized.
    #[error("JSON catalog error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML catalog document could not be deserialized.
    #[error("TOML catalog error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized `Result` type for seqpicker operations.
pub type Result<T> = std::result::Result<T, SeqPickerError>;
