//! Filter composition and the refresh contract.
//!
//! [`FilterEngine`] is the single owner of a session's classified state: the
//! [`RangeTable`], the surfaced [`SequenceRecord`]s, the current
//! [`SearchTokens`], and the search-in-selection toggle. All mutation goes
//! through explicit setters that perform the change and then call
//! [`refresh`](FilterEngine::refresh) directly — there is no hidden global
//! instance and no implicit change-notification machinery; consumers that
//! want a callback register a [`RefreshListener`].
//!
//! # Predicate
//!
//! Visibility of a record is decided per refresh:
//!
//! - empty token set → visible iff its category is selected;
//! - search-in-selection → visible iff its category is selected **and** it
//!   matches the tokens;
//! - otherwise → visible iff it matches the tokens (selection ignored).
//!
//! # Refresh contract
//!
//! Every refresh snapshots the filter state ([`FilterSnapshot`]: tokens,
//! selection flags, search-in-selection) before evaluating a single record,
//! so a pass can never observe a half-mutated filter; the snapshot is also
//! the only shared state a parallel fan-out of the per-record predicate would
//! need. Refresh filters, it never sorts: the visible set is a subsequence of
//! the sequences collection in original order. Refreshing with unchanged
//! state reproduces the same visible set. Each completed pass bumps a
//! generation counter published through [`FilterChange`]; a consumer holding
//! results from an older generation should discard them in favor of the
//! newest.

use tracing::debug_span;

use crate::blocks::{BlockDef, RangeTable};
use crate::domain::category::{Category, CategoryId};
use crate::domain::error::{Result, SeqPickerError};
use crate::domain::sequence::{SequenceDescription, SequenceRecord};
use crate::search::{Collation, SearchTokens};
use crate::EngineConfig;

/// Notification payload for a completed refresh pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChange {
    /// Monotonically increasing pass counter. Results tagged with an older
    /// generation are stale and should be discarded.
    pub generation: u64,

    /// Number of records visible after this pass.
    pub visible_count: usize,
}

/// Consumer hook invoked after every completed refresh pass.
///
/// Registered explicitly via [`FilterEngine::add_listener`]; the engine calls
/// every listener once per pass, in registration order.
pub trait RefreshListener {
    /// Called after the visible set has been recomputed.
    fn on_refresh(&mut self, change: &FilterChange);
}

/// Immutable copy of the filter state one refresh pass evaluates against.
///
/// Taken atomically at the start of [`FilterEngine::refresh`]; records are
/// evaluated only against the snapshot, never against live engine state.
#[derive(Debug, Clone)]
pub struct FilterSnapshot {
    tokens: SearchTokens,
    search_in_selection: bool,
    /// Selection flag per category, indexed by `CategoryId`.
    selected: Vec<bool>,
}

impl FilterSnapshot {
    /// The filter predicate: whether `record` is visible under this snapshot.
    #[must_use]
    pub fn should_show(&self, record: &SequenceRecord) -> bool {
        let selected = self.selected[record.category().index()];
        if self.tokens.is_empty() {
            return selected;
        }
        if self.search_in_selection {
            return selected && record.matches(&self.tokens);
        }
        record.matches(&self.tokens)
    }
}

/// The live, composable filter over a session's classified sequences.
///
/// Constructed once with the block catalog and sequence descriptions; owned
/// and passed down by the top-level application object.
pub struct FilterEngine {
    table: RangeTable,
    /// Records that received a category, in description order. Never
    /// reordered; the visible set indexes into this.
    sequences: Vec<SequenceRecord>,
    search_text: String,
    tokens: SearchTokens,
    search_in_selection: bool,
    collation: Collation,
    visible: Vec<usize>,
    generation: u64,
    listeners: Vec<Box<dyn RefreshListener>>,
}

impl FilterEngine {
    /// Builds the engine: range table, classification, and the initial
    /// refresh.
    ///
    /// Every description with a non-empty output is assigned by ceiling
    /// lookup on its first output code point; the winning category's member
    /// count is incremented once per record. Descriptions with empty output
    /// or a code point beyond every `range_end` are dropped from the
    /// surfaced collection — by policy, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if any block definition has an invalid range.
    pub fn new(
        blocks: Vec<BlockDef>,
        descriptions: Vec<SequenceDescription>,
        config: &EngineConfig,
    ) -> Result<Self> {
        let _span = debug_span!(
            "build_filter_engine",
            block_count = blocks.len(),
            description_count = descriptions.len(),
        )
        .entered();

        let mut table = RangeTable::build(blocks, &config.collation)?;

        let mut sequences = Vec::with_capacity(descriptions.len());
        let mut dropped = 0usize;
        for description in descriptions {
            let Some(code_point) = description.result_code_point() else {
                dropped += 1;
                continue;
            };
            let Some(id) = table.assign(code_point) else {
                dropped += 1;
                continue;
            };
            if let Some(category) = table.category_mut(id) {
                category.member_count += 1;
            }
            sequences.push(SequenceRecord::new(
                description,
                code_point,
                id,
                &config.collation,
            ));
        }
        tracing::debug!(
            sequence_count = sequences.len(),
            dropped,
            "sequences classified"
        );

        let mut engine = Self {
            table,
            sequences,
            search_text: String::new(),
            tokens: SearchTokens::default(),
            search_in_selection: config.search_in_selection,
            collation: config.collation,
            visible: Vec::new(),
            generation: 0,
            listeners: Vec::new(),
        };
        engine.refresh();
        Ok(engine)
    }

    /// Surfaced categories: display order, non-empty only.
    pub fn categories(&self) -> impl Iterator<Item = (CategoryId, &Category)> {
        self.table
            .display_order()
            .map(|id| (id, self.table.category(id)))
            .filter(|(_, category)| !category.is_empty())
    }

    /// Looks up a category by id, empty ones included.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> &Category {
        self.table.category(id)
    }

    /// All surfaced records, in original order.
    #[must_use]
    pub fn sequences(&self) -> &[SequenceRecord] {
        &self.sequences
    }

    /// Records visible under the current filter, in original order.
    pub fn visible(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.visible.iter().map(|&idx| &self.sequences[idx])
    }

    /// Indices into [`sequences`](Self::sequences) of the visible records.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// The raw search text as last set.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether search is currently restricted to selected categories.
    #[must_use]
    pub const fn search_in_selection(&self) -> bool {
        self.search_in_selection
    }

    /// Generation of the most recent completed refresh pass.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Registers a listener notified after every refresh pass.
    pub fn add_listener(&mut self, listener: Box<dyn RefreshListener>) {
        self.listeners.push(listener);
    }

    /// Replaces the search text, rebuilds the token set, and refreshes.
    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.tokens = SearchTokens::new(text, &self.collation);
        self.refresh();
    }

    /// Sets the search-in-selection toggle and refreshes.
    pub fn set_search_in_selection(&mut self, enabled: bool) {
        self.search_in_selection = enabled;
        self.refresh();
    }

    /// Sets a category's selection flag and refreshes.
    ///
    /// Toggling an empty category refreshes but cannot change the visible
    /// set, since no record belongs to it.
    ///
    /// # Errors
    ///
    /// Returns [`SeqPickerError::UnknownCategory`] if the id was not issued
    /// by this engine.
    pub fn set_category_selected(&mut self, id: CategoryId, selected: bool) -> Result<()> {
        let category = self
            .table
            .category_mut(id)
            .ok_or(SeqPickerError::UnknownCategory { index: id.index() })?;
        category.is_selected = selected;
        self.refresh();
        Ok(())
    }

    /// Re-evaluates the predicate over the full collection and notifies
    /// listeners.
    ///
    /// Idempotent: with unchanged state the pass reproduces the same visible
    /// set (and still notifies, carrying a new generation).
    pub fn refresh(&mut self) {
        let _span = debug_span!(
            "refresh_filters",
            sequence_count = self.sequences.len(),
            token_count = self.tokens.len(),
            search_in_selection = self.search_in_selection,
        )
        .entered();

        let snapshot = self.snapshot();
        self.visible = self
            .sequences
            .iter()
            .enumerate()
            .filter(|(_, record)| snapshot.should_show(record))
            .map(|(idx, _)| idx)
            .collect();
        self.generation += 1;

        let change = FilterChange {
            generation: self.generation,
            visible_count: self.visible.len(),
        };
        tracing::debug!(
            generation = change.generation,
            visible_count = change.visible_count,
            "filters refreshed"
        );
        for listener in &mut self.listeners {
            listener.on_refresh(&change);
        }
    }

    /// Atomically copies the filter state for one evaluation pass.
    #[must_use]
    pub fn snapshot(&self) -> FilterSnapshot {
        let selected = (0..self.table.len())
            .map(|idx| self.table.category(CategoryId(idx)).is_selected())
            .collect();
        FilterSnapshot {
            tokens: self.tokens.clone(),
            search_in_selection: self.search_in_selection,
            selected,
        }
    }
}
