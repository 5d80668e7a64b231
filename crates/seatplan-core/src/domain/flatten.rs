//! Group flattening: from seating clusters to one linear seating order.
//!
//! The upstream analysis clusters participants into small groups meant to
//! sit together.  Round-table layouts use those groups as-is; every other
//! layout needs a single total order.  Concatenating the groups in order
//! keeps cluster-mates adjacent, so even a straight row places high-affinity
//! neighbours next to each other.
//!
//! # Boundary filter
//!
//! The clustering is occasionally imperfect.  All tolerance lives here, at
//! the flattener's boundary, so the partitioner never sees a bad reference:
//!
//! - IDs that do not resolve to a known participant are dropped.
//! - An ID that appears more than once keeps its **first** occurrence; later
//!   occurrences are dropped.
//!
//! Neither case is an error.  Drops are counted and reported at `debug`.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::analysis::{Participant, ParticipantId};

/// Seating groups after the boundary filter, plus their concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedGroups<'a> {
    groups: Vec<Vec<&'a Participant>>,
    linear: Vec<&'a Participant>,
    dangling: usize,
    duplicates: usize,
}

impl<'a> ResolvedGroups<'a> {
    /// Resolves every group against `participants`.
    ///
    /// Group order and intra-group order are preserved.  A group whose IDs
    /// are all dropped stays in place as an empty group.
    pub fn resolve(groups: &[Vec<ParticipantId>], participants: &'a [Participant]) -> Self {
        let mut by_id: HashMap<&str, &'a Participant> = HashMap::with_capacity(participants.len());
        for participant in participants {
            by_id.entry(participant.id.as_str()).or_insert(participant);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(participants.len());
        let mut resolved = Vec::with_capacity(groups.len());
        let mut linear = Vec::with_capacity(participants.len());
        let mut dangling = 0;
        let mut duplicates = 0;

        for group in groups {
            let mut members = Vec::with_capacity(group.len());
            for id in group {
                let Some(&participant) = by_id.get(id.as_str()) else {
                    dangling += 1;
                    continue;
                };
                if !seen.insert(participant.id.as_str()) {
                    duplicates += 1;
                    continue;
                }
                members.push(participant);
                linear.push(participant);
            }
            resolved.push(members);
        }

        if dangling > 0 || duplicates > 0 {
            debug!(dangling, duplicates, "dropped unresolved seating references");
        }

        Self {
            groups: resolved,
            linear,
            dangling,
            duplicates,
        }
    }

    /// The filtered groups, one entry per input group.
    pub fn groups(&self) -> &[Vec<&'a Participant>] {
        &self.groups
    }

    /// The flattened sequence: every group concatenated in order.
    pub fn linear(&self) -> &[&'a Participant] {
        &self.linear
    }

    /// Number of participants in the flattened sequence.
    pub fn len(&self) -> usize {
        self.linear.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty()
    }

    /// How many IDs were dropped because no participant matched.
    pub fn dangling_count(&self) -> usize {
        self.dangling
    }

    /// How many IDs were dropped as repeats of an earlier seat.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }
}

/// Concatenates `groups` into one ordered participant sequence.
///
/// Shorthand for [`ResolvedGroups::resolve`] when only the linear order is
/// needed.
pub fn flatten_groups<'a>(
    groups: &[Vec<ParticipantId>],
    participants: &'a [Participant],
) -> Vec<&'a Participant> {
    ResolvedGroups::resolve(groups, participants).linear
}
