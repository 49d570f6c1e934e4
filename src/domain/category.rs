//! Category domain model.
//!
//! A [`Category`] is a named, half-open range of Unicode code points with a
//! user-toggleable selection flag. Categories are created once at engine
//! construction from block definitions and live for the whole session; only
//! `is_selected` (user interaction) and `member_count` (assignment) ever
//! change afterwards.

use crate::domain::error::{Result, SeqPickerError};

/// Opaque handle to a category inside a [`RangeTable`](crate::blocks::RangeTable).
///
/// Ids are slab indices issued during table construction. They are stable for
/// the lifetime of the engine that issued them and are what sequence records
/// carry instead of references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub(crate) usize);

impl CategoryId {
    /// Returns the raw slab index of this id.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A named half-open code-point range with selection and membership state.
///
/// The range covers `range_start..range_end` (exclusive upper bound). Note
/// that assignment of sequences to categories does **not** use containment in
/// this range: it is a ceiling lookup over ascending `range_end` values, see
/// [`RangeTable::assign`](crate::blocks::RangeTable::assign).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display name of the block, e.g. `"Basic Latin"`.
    pub name: String,

    /// Inclusive lower code-point bound.
    pub range_start: u32,

    /// Exclusive upper code-point bound.
    pub range_end: u32,

    /// Whether the user currently has this category selected. Defaults to
    /// `true`; mutated only through the engine so every change refreshes the
    /// filter.
    pub(crate) is_selected: bool,

    /// Number of sequence records assigned to this category.
    pub(crate) member_count: usize,
}

impl Category {
    /// Creates a category, validating the range invariant.
    ///
    /// # Errors
    ///
    /// Returns [`SeqPickerError::InvalidRange`] if `range_start >= range_end`.
    /// Inverted and zero-width ranges are rejected at construction rather
    /// than kept as never-matching entries.
    pub fn new(name: impl Into<String>, range_start: u32, range_end: u32) -> Result<Self> {
        let name = name.into();
        if range_start >= range_end {
            return Err(SeqPickerError::InvalidRange {
                name,
                start: range_start,
                end: range_end,
            });
        }
        Ok(Self {
            name,
            range_start,
            range_end,
            is_selected: true,
            member_count: 0,
        })
    }

    /// Whether the user currently has this category selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Number of sequence records assigned to this category.
    #[must_use]
    pub const fn member_count(&self) -> usize {
        self.member_count
    }

    /// `true` iff no sequence record was assigned to this category.
    ///
    /// Empty categories are kept in the table (their ids stay valid) but are
    /// not surfaced in the engine's display collection.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.member_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enforces_start_below_end() {
        let category = Category::new("Basic Latin", 0x0000, 0x0080).expect("valid range");
        assert_eq!(category.name, "Basic Latin");
        assert!(category.is_selected());
        assert!(category.is_empty());
    }

    #[test]
    fn new_rejects_inverted_range() {
        let err = Category::new("Backwards", 0x0100, 0x0080).expect_err("inverted range");
        assert!(matches!(err, SeqPickerError::InvalidRange { start: 0x0100, end: 0x0080, .. }));
    }

    #[test]
    fn new_rejects_zero_width_range() {
        assert!(Category::new("Empty", 0x0080, 0x0080).is_err());
    }
}
