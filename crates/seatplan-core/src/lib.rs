//! # seatplan-core
//!
//! Shared library for the seating-plan tools: the analysis snapshot model,
//! room layout formats, and the algorithms that turn a list of seating
//! groups into a room map.
//!
//! The crate has no dependencies on storage, terminals or network clients.
//! It consumes an [`AnalysisResult`] produced elsewhere and answers three
//! questions about it:
//!
//! - **In what order do people sit?**  [`ResolvedGroups`] concatenates the
//!   seating groups into one linear sequence, dropping dangling IDs.
//! - **Where does each seat go for a given room format?**  [`partition`]
//!   maps that sequence onto the zones of a [`LayoutFormat`] (sides of a U,
//!   rows of a theater, round tables, ...).
//! - **Is a participant highlighted right now?**  [`FilterState`] evaluates
//!   the segment / minimum-score predicate without touching the partition.
//!
//! ```
//! use seatplan_core::{partition, LayoutFormat, PartitionOptions, Participant, ResolvedGroups};
//!
//! let participants: Vec<Participant> = (1..=10)
//!     .map(|i| Participant {
//!         id: format!("p{i}"),
//!         name: format!("Guest {i}"),
//!         company: "Acme".into(),
//!         segment: "Tech".into(),
//!         is_host: false,
//!         event_name: None,
//!     })
//!     .collect();
//! let groups = vec![participants.iter().map(|p| p.id.clone()).collect()];
//!
//! let seating = ResolvedGroups::resolve(&groups, &participants);
//! let room = partition(LayoutFormat::UShape, &seating, &PartitionOptions::default());
//! assert_eq!(room.seat_count(), 10);
//! ```

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `seatplan_core::LayoutFormat` instead of the full module path.
pub use domain::analysis::{
    unique_segments, AnalysisResult, ConnectionType, IndividualScore, Participant, ParticipantId,
    RecommendedConnection, ScoreIndex, SegmentShare, TopMatch, MAX_SCORE,
};
pub use domain::flatten::{flatten_groups, ResolvedGroups};
pub use domain::layout_format::{LayoutFormat, ParseLayoutError};
pub use domain::partition::{
    o_sizes, partition, partitioner_for, t_sizes, u_sizes, OSizes, Partition, PartitionFn,
    PartitionOptions, Seat, TSizes, USizes, Zone, ZoneKind, DEFAULT_GRID_COLUMNS,
    T_BAR_MIN_SEATS,
};
pub use domain::visibility::FilterState;
