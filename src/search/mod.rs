//! Search tokenization and collation policy.
//!
//! This module defines [`SearchTokens`], the parsed form of the picker's
//! free-text search input, and [`Collation`], the explicit casing/ordering
//! policy threaded through tokenization and category-name sorting.
//!
//! The collation is always passed as a parameter; nothing in the crate reads
//! ambient locale state, so two engines built with the same inputs behave
//! identically regardless of the host environment.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Casing and string-ordering policy for search normalization and display
/// sorting.
///
/// [`Collation::CaseInsensitive`] uses Rust's locale-independent Unicode
/// lowercase fold. Locale-tailored folds (e.g. Turkish dotted/dotless i)
/// would require a full collation library; this type is the seam where one
/// would plug in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Collation {
    /// Unicode lowercase fold for matching, folded comparison for sorting.
    #[default]
    CaseInsensitive,

    /// Byte-wise comparison, no case folding.
    Ordinal,
}

impl Collation {
    /// Looks up a collation by configuration name.
    ///
    /// Accepted names: `"case-insensitive"`, `"ordinal"`. Returns `None` for
    /// anything else so callers can fall back to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "case-insensitive" => Some(Self::CaseInsensitive),
            "ordinal" => Some(Self::Ordinal),
            _ => None,
        }
    }

    /// Normalizes text for matching under this collation.
    #[must_use]
    pub fn fold(&self, text: &str) -> String {
        match self {
            Self::CaseInsensitive => text.to_lowercase(),
            Self::Ordinal => text.to_string(),
        }
    }

    /// Compares two category names for display ordering.
    ///
    /// Case-insensitive collation compares folded forms first and breaks ties
    /// on the unfolded names so the order is total and deterministic.
    #[must_use]
    pub fn compare_names(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::CaseInsensitive => self.fold(a).cmp(&self.fold(b)).then_with(|| a.cmp(b)),
            Self::Ordinal => a.cmp(b),
        }
    }
}

/// A parsed, case-normalized set of search tokens.
///
/// Built by splitting raw search text on whitespace and folding each token
/// under the engine's [`Collation`]. Duplicate tokens collapse. A new value
/// replaces the previous one wholesale every time the search text changes.
///
/// An empty token set is not an error: the filter engine treats it as its own
/// predicate arm ("show selected categories") rather than asking records to
/// match it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTokens {
    tokens: BTreeSet<String>,
}

impl SearchTokens {
    /// Parses search text into a token set.
    ///
    /// Empty or all-whitespace input yields an empty set.
    #[must_use]
    pub fn new(text: &str, collation: &Collation) -> Self {
        let tokens = text
            .split_whitespace()
            .map(|token| collation.fold(token))
            .collect();
        Self { tokens }
    }

    /// `true` iff the input produced zero tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Iterates the normalized tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
