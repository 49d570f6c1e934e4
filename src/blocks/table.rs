//! The category-range index.
//!
//! [`RangeTable`] owns every [`Category`] for a session plus two orderings
//! over them: a display ordering (names sorted under the configured
//! [`Collation`]) and a lookup ordering (`range_end` ascending) used only for
//! assignment.
//!
//! # Ceiling semantics
//!
//! Assignment is a **ceiling lookup**, not interval containment: a code point
//! is assigned to the first category in ascending `range_end` order whose
//! `range_end` strictly exceeds it, even when the point lies below that
//! category's `range_start`. With gaps in the input ranges this can assign a
//! point to a category that does not contain it. The behavior is load-bearing
//! for which category low code points land in, so it is preserved exactly;
//! see `assignment_can_land_below_the_winners_start` in the tests before
//! changing anything here.

use tracing::debug_span;

use crate::blocks::catalog::BlockDef;
use crate::domain::category::{Category, CategoryId};
use crate::domain::error::Result;
use crate::search::Collation;

/// Immutable set of category ranges with display and lookup orderings.
///
/// Built once from a block catalog; read-only afterwards except for
/// per-category selection and member-count state, which the engine mutates
/// through [`category_mut`](Self::category_mut).
#[derive(Debug, Clone)]
pub struct RangeTable {
    /// Category slab; `CategoryId` values index into it.
    categories: Vec<Category>,

    /// Ids sorted by name under the build-time collation.
    display: Vec<CategoryId>,

    /// Ids sorted by `range_end` ascending. Stable sort, so categories
    /// sharing a `range_end` keep their catalog order.
    lookup: Vec<CategoryId>,
}

impl RangeTable {
    /// Builds the table from a block catalog.
    ///
    /// One category per definition, all selected and empty. Duplicate names
    /// and duplicate `range_end` values are both kept; there is no
    /// deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`SeqPickerError::InvalidRange`](crate::SeqPickerError::InvalidRange)
    /// if any definition has `range_start >= range_end`. The whole catalog is
    /// rejected.
    pub fn build(blocks: Vec<BlockDef>, collation: &Collation) -> Result<Self> {
        let _span = debug_span!("build_range_table", block_count = blocks.len()).entered();

        let mut categories = Vec::with_capacity(blocks.len());
        for block in blocks {
            categories.push(Category::new(block.name, block.range_start, block.range_end)?);
        }

        let mut display: Vec<CategoryId> = (0..categories.len()).map(CategoryId).collect();
        display.sort_by(|a, b| collation.compare_names(&categories[a.0].name, &categories[b.0].name));

        let mut lookup: Vec<CategoryId> = (0..categories.len()).map(CategoryId).collect();
        lookup.sort_by_key(|id| categories[id.0].range_end);

        tracing::debug!(category_count = categories.len(), "range table built");
        Ok(Self {
            categories,
            display,
            lookup,
        })
    }

    /// Assigns a code point to a category by ceiling lookup.
    ///
    /// Returns the id of the category with the smallest `range_end` strictly
    /// greater than `code_point`, or `None` if the point is at or beyond
    /// every `range_end`. Implemented as a binary search over the lookup
    /// ordering; the result is identical to a linear scan from the smallest
    /// `range_end` upward.
    #[must_use]
    pub fn assign(&self, code_point: u32) -> Option<CategoryId> {
        let idx = self
            .lookup
            .partition_point(|id| self.categories[id.0].range_end <= code_point);
        self.lookup.get(idx).copied()
    }

    /// Returns the category for an id issued by this table.
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this table. Ids never leave the
    /// engine that owns the table, so callers going through the engine cannot
    /// trigger this.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> &Category {
        &self.categories[id.0]
    }

    /// Mutable access for the engine's selection and member-count updates.
    pub(crate) fn category_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.get_mut(id.0)
    }

    /// Number of categories in the table, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// `true` iff the table holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Ids in display order (collation name sort), empty categories included.
    pub fn display_order(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.display.iter().copied()
    }

    /// Ids in lookup order (`range_end` ascending).
    pub fn lookup_order(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.lookup.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SeqPickerError;

    fn table(blocks: Vec<BlockDef>) -> RangeTable {
        RangeTable::build(blocks, &Collation::CaseInsensitive).expect("valid catalog")
    }

    /// Linear-scan reference for the assignment contract.
    fn assign_linear(table: &RangeTable, code_point: u32) -> Option<CategoryId> {
        table
            .lookup_order()
            .find(|&id| table.category(id).range_end > code_point)
    }

    #[test]
    fn build_rejects_invalid_triples() {
        let err = RangeTable::build(
            vec![
                BlockDef::new("Basic Latin", 0x0000, 0x0080),
                BlockDef::new("Backwards", 0x0200, 0x0100),
            ],
            &Collation::CaseInsensitive,
        )
        .expect_err("inverted range");
        assert!(matches!(err, SeqPickerError::InvalidRange { .. }));
    }

    #[test]
    fn assign_picks_smallest_range_end_above_the_point() {
        let table = table(vec![
            BlockDef::new("Latin-1 Supplement", 0x0080, 0x0100),
            BlockDef::new("Basic Latin", 0x0000, 0x0080),
            BlockDef::new("Cyrillic", 0x0400, 0x0500),
        ]);

        let basic = table.assign(0x0041).expect("assigned");
        assert_eq!(table.category(basic).name, "Basic Latin");

        let supplement = table.assign(0x00A0).expect("assigned");
        assert_eq!(table.category(supplement).name, "Latin-1 Supplement");

        // Boundary: range_end is exclusive, so 0x7F stays in Basic Latin and
        // 0x80 moves on to the supplement.
        assert_eq!(table.assign(0x007F), Some(basic));
        assert_eq!(table.assign(0x0080), Some(supplement));
    }

    #[test]
    fn assignment_can_land_below_the_winners_start() {
        // Gap between 0x80 and 0x400: ceiling lookup sends 0x200 to Cyrillic
        // even though 0x200 < 0x400. Containment would say "no category".
        let table = table(vec![
            BlockDef::new("Basic Latin", 0x0000, 0x0080),
            BlockDef::new("Cyrillic", 0x0400, 0x0500),
        ]);

        let id = table.assign(0x0200).expect("ceiling assignment");
        let category = table.category(id);
        assert_eq!(category.name, "Cyrillic");
        assert!(0x0200 < category.range_start);
    }

    #[test]
    fn points_beyond_every_range_end_are_unassigned() {
        let table = table(vec![BlockDef::new("Basic Latin", 0x0000, 0x0080)]);
        assert_eq!(table.assign(0x0080), None);
        assert_eq!(table.assign(0x10FFFF), None);
    }

    #[test]
    fn binary_search_matches_linear_reference() {
        let table = table(vec![
            BlockDef::new("A", 0x0000, 0x0080),
            BlockDef::new("B", 0x0080, 0x0100),
            BlockDef::new("C", 0x0200, 0x0300),
            BlockDef::new("D", 0x0250, 0x0300),
            BlockDef::new("E", 0x1000, 0x2000),
        ]);

        for code_point in (0..0x2100).step_by(7) {
            assert_eq!(
                table.assign(code_point),
                assign_linear(&table, code_point),
                "divergence at U+{code_point:04X}"
            );
        }
    }

    #[test]
    fn equal_range_ends_break_ties_by_catalog_order() {
        let table = table(vec![
            BlockDef::new("Second", 0x0100, 0x0200),
            BlockDef::new("First", 0x0000, 0x0200),
        ]);

        // Both end at 0x200; the catalog-order entry wins.
        let id = table.assign(0x0150).expect("assigned");
        assert_eq!(table.category(id).name, "Second");
    }

    #[test]
    fn display_order_sorts_names_under_the_collation() {
        let table = table(vec![
            BlockDef::new("cyrillic", 0x0400, 0x0500),
            BlockDef::new("Basic Latin", 0x0000, 0x0080),
            BlockDef::new("Arrows", 0x2190, 0x2200),
        ]);

        let names: Vec<&str> = table
            .display_order()
            .map(|id| table.category(id).name.as_str())
            .collect();
        assert_eq!(names, vec!["Arrows", "Basic Latin", "cyrillic"]);
    }

    #[test]
    fn duplicate_names_are_both_kept() {
        let table = table(vec![
            BlockDef::new("Private Use", 0xE000, 0xF900),
            BlockDef::new("Private Use", 0xF0000, 0x100000),
        ]);
        assert_eq!(table.len(), 2);
    }
}
