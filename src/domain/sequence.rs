//! Sequence domain models.
//!
//! This module defines the two shapes a compose sequence takes inside the
//! engine: [`SequenceDescription`], the raw record handed in by the loader
//! collaborator, and [`SequenceRecord`], the immutable, category-bound search
//! subject the filter engine actually evaluates.
//!
//! The split mirrors the storage-vs-domain boundary elsewhere in the crate:
//! descriptions are plain serde records with no engine state, while records
//! carry the assigned [`CategoryId`] and pre-folded copies of every
//! searchable field so per-keystroke matching never re-normalizes strings.

use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryId;
use crate::search::{Collation, SearchTokens};

/// Raw description of a compose sequence, as supplied by the loader.
///
/// # Fields
///
/// - `keys`: rendered names of the input keys, in press order
/// - `output`: the text the sequence produces (possibly empty)
/// - `description`: human-readable description, e.g. `"copyright sign"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDescription {
    pub keys: Vec<String>,
    pub output: String,
    #[serde(default)]
    pub description: String,
}

impl SequenceDescription {
    /// Creates a description from its three parts.
    #[must_use]
    pub fn new(
        keys: Vec<String>,
        output: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            output: output.into(),
            description: description.into(),
        }
    }

    /// First code point of the output text, or `None` if the output is empty.
    ///
    /// This is the value the sequence is classified by. An empty output is
    /// not an error; such sequences are simply never surfaced.
    #[must_use]
    pub fn result_code_point(&self) -> Option<u32> {
        self.output.chars().next().map(u32::from)
    }

    /// The key sequence rendered as a single searchable string.
    #[must_use]
    pub fn key_text(&self) -> String {
        self.keys.join(" ")
    }
}

/// An immutable, classified sequence record.
///
/// Created once at engine construction for every description whose result
/// code point found a category; never mutated afterwards. Holds folded copies
/// of the description text, output text, and rendered key text — the three
/// fields the search contract matches against.
#[derive(Debug, Clone)]
pub struct SequenceRecord {
    description: SequenceDescription,
    result_code_point: u32,
    category: CategoryId,
    folded_description: String,
    folded_output: String,
    folded_keys: String,
}

impl SequenceRecord {
    pub(crate) fn new(
        description: SequenceDescription,
        result_code_point: u32,
        category: CategoryId,
        collation: &Collation,
    ) -> Self {
        let folded_description = collation.fold(&description.description);
        let folded_output = collation.fold(&description.output);
        let folded_keys = collation.fold(&description.key_text());
        Self {
            description,
            result_code_point,
            category,
            folded_description,
            folded_output,
            folded_keys,
        }
    }

    /// The raw description this record was built from.
    #[must_use]
    pub fn description(&self) -> &SequenceDescription {
        &self.description
    }

    /// Code point the record was classified by.
    #[must_use]
    pub const fn result_code_point(&self) -> u32 {
        self.result_code_point
    }

    /// The category this record belongs to, fixed at construction.
    #[must_use]
    pub const fn category(&self) -> CategoryId {
        self.category
    }

    /// Whether this record matches a token set.
    ///
    /// A record matches iff **every** token is a substring of **at least
    /// one** searchable field (description, output text, key text) — AND
    /// across tokens, OR across fields. Tokens are already folded, so the
    /// check is plain substring containment against the folded fields.
    ///
    /// An empty token set vacuously matches; the engine never asks in that
    /// case (empty search has its own predicate arm).
    #[must_use]
    pub fn matches(&self, tokens: &SearchTokens) -> bool {
        tokens.iter().all(|token| {
            self.folded_description.contains(token)
                || self.folded_output.contains(token)
                || self.folded_keys.contains(token)
        })
    }
}
