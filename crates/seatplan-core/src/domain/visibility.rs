//! Segment / score visibility filter.
//!
//! Filtering is a highlight-or-dim signal, nothing more: it never removes a
//! participant from a [`Partition`] and never moves or renumbers a seat.
//! Partitioning and filtering are orthogonal, so the renderer can evaluate
//! [`FilterState::is_visible`] per seat on every render.

use super::analysis::{Participant, ScoreIndex, MAX_SCORE};
use super::partition::Partition;

/// Transient, session-local filter settings.
///
/// The default state (no segment, minimum score 0) shows everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    segment: Option<String>,
    min_score: u8,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterState::set_segment`].
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.set_segment(Some(segment.into()));
        self
    }

    /// Builder form of [`FilterState::set_min_score`].
    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.set_min_score(min_score);
        self
    }

    /// Restricts visibility to one segment.  `None` or an empty string
    /// clears the restriction.
    pub fn set_segment(&mut self, segment: Option<String>) {
        self.segment = segment.filter(|s| !s.is_empty());
    }

    /// Sets the minimum Business Index, clamped to `0..=100`.
    pub fn set_min_score(&mut self, min_score: u8) {
        self.min_score = min_score.min(MAX_SCORE);
    }

    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// `true` when any criterion would dim someone.
    pub fn is_active(&self) -> bool {
        self.segment.is_some() || self.min_score > 0
    }

    /// The visibility predicate.
    ///
    /// `visible = (no segment OR segment matches) AND score >= min_score`,
    /// where a participant without a score counts as 0.
    pub fn is_visible(&self, participant: &Participant, scores: &ScoreIndex) -> bool {
        let matches_segment = self
            .segment
            .as_deref()
            .map_or(true, |segment| participant.segment == segment);
        matches_segment && scores.score_of(&participant.id) >= self.min_score
    }

    /// Visibility of every seat of `partition`, in seat order.
    pub fn mask(&self, partition: &Partition<'_>, scores: &ScoreIndex) -> Vec<bool> {
        partition
            .seats()
            .map(|seat| self.is_visible(seat.participant, scores))
            .collect()
    }
}
