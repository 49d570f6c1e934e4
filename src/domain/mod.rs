//! Domain layer for the seqpicker engine.
//!
//! This module contains the core domain types, independent of how catalogs
//! are loaded or how a consumer renders the filtered collection. Business
//! rules (range validity, classification identity, match semantics) live
//! here, isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`category`]: Category model and ids
//! - [`sequence`]: Sequence description and classified record models

pub mod category;
pub mod error;
pub mod sequence;

pub use category::{Category, CategoryId};
pub use error::{Result, SeqPickerError};
pub use sequence::{SequenceDescription, SequenceRecord};
