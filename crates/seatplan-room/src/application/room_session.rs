//! RoomSession: the read/write surface the renderers and exporters use.
//!
//! A session owns one analysis snapshot plus the two pieces of user state
//! layered on top of it: the [`LayoutSelection`] (persisted on demand) and
//! the [`FilterState`] (never persisted).  Every read accessor recomputes
//! from those inputs, so there is no cached partition to invalidate.
//!
//! ```text
//! AnalysisResult ─► linear_order() ─► partition() ─► view()
//!                                          ▲            ▲
//!                  LayoutSelection ────────┘            │
//!                  FilterState ─────────────────────────┘
//! ```

use std::sync::Arc;

use seatplan_core::{
    partition, AnalysisResult, FilterState, LayoutFormat, Participant, Partition,
    PartitionOptions, ResolvedGroups, ScoreIndex,
};
use tracing::{debug, info, info_span};
use uuid::Uuid;

use super::layout_selection::{LayoutSelection, LayoutStore};
use super::room_view::RoomView;

/// One user's interactive view over an analysis snapshot.
#[derive(Debug)]
pub struct RoomSession {
    id: Uuid,
    analysis: AnalysisResult,
    scores: ScoreIndex,
    selection: LayoutSelection,
    filter: FilterState,
    options: PartitionOptions,
}

impl RoomSession {
    /// Starts a session over `analysis`, restoring any saved layout from
    /// `store`.
    pub fn new(
        analysis: AnalysisResult,
        store: Arc<dyn LayoutStore>,
        options: PartitionOptions,
    ) -> Self {
        let id = Uuid::new_v4();
        let _span = info_span!("room_session", session = %id).entered();

        let scores = analysis.score_index();
        let selection = LayoutSelection::load_initial(store, analysis.suggested_layout);
        info!(
            participants = analysis.participants.len(),
            groups = analysis.seating_groups.len(),
            layout = %selection.current(),
            "room session started"
        );

        Self {
            id,
            analysis,
            scores,
            selection,
            filter: FilterState::default(),
            options,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn analysis(&self) -> &AnalysisResult {
        &self.analysis
    }

    pub fn scores(&self) -> &ScoreIndex {
        &self.scores
    }

    // ── Read accessors ────────────────────────────────────────────────────────

    /// Seating groups after dropping dangling and repeated IDs.
    pub fn seating(&self) -> ResolvedGroups<'_> {
        ResolvedGroups::resolve(&self.analysis.seating_groups, &self.analysis.participants)
    }

    /// The current linear seating order.
    pub fn linear_order(&self) -> Vec<&Participant> {
        self.seating().linear().to_vec()
    }

    /// The partition for the active layout.
    pub fn partition(&self) -> Partition<'_> {
        self.partition_for(self.selection.current())
    }

    /// The partition `format` would produce, without selecting it.
    pub fn partition_for(&self, format: LayoutFormat) -> Partition<'_> {
        partition(format, &self.seating(), &self.options)
    }

    /// Whether participant `id` is highlighted under the current filter.
    ///
    /// Unknown IDs are reported as not visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.analysis
            .participant(id)
            .is_some_and(|p| self.filter.is_visible(p, &self.scores))
    }

    /// The distinct participant segments, sorted, for the segment picker.
    pub fn segments(&self) -> Vec<String> {
        self.analysis.segments()
    }

    /// The render model for the active layout and filter.
    pub fn view(&self) -> RoomView {
        RoomView::build(
            &self.partition(),
            self.selection.suggested(),
            &self.filter,
            &self.scores,
        )
    }

    // ── Filter ────────────────────────────────────────────────────────────────

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_segment(&mut self, segment: Option<String>) {
        self.filter.set_segment(segment);
        debug!(session = %self.id, segment = ?self.filter.segment(), "segment filter changed");
    }

    pub fn set_min_score(&mut self, min_score: u8) {
        self.filter.set_min_score(min_score);
        debug!(session = %self.id, min_score = self.filter.min_score(), "score filter changed");
    }

    // ── Layout selection ──────────────────────────────────────────────────────

    pub fn current_layout(&self) -> LayoutFormat {
        self.selection.current()
    }

    pub fn suggested_layout(&self) -> LayoutFormat {
        self.selection.suggested()
    }

    pub fn select_layout(&mut self, format: LayoutFormat) {
        let _span = info_span!("room_session", session = %self.id).entered();
        self.selection.select(format);
    }

    /// Persists the active layout.  See [`LayoutSelection::save`].
    pub fn save_layout(&self) -> bool {
        let _span = info_span!("room_session", session = %self.id).entered();
        self.selection.save()
    }

    /// Registers a callback fired whenever the active layout changes, so
    /// exports can mirror the room selection instead of the suggestion.
    pub fn on_layout_change(&mut self, listener: impl Fn(LayoutFormat) + Send + Sync + 'static) {
        self.selection.subscribe(listener);
    }
}
