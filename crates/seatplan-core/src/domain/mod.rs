//! Domain entities for seating plans.
//!
//! Pure business logic with no infrastructure dependencies: no file system,
//! no storage, no rendering.  Everything here can be compiled and tested in
//! isolation, and every function is safe to call on each UI re-render.
//!
//! The modules build on each other in this order:
//!
//! ```text
//! analysis  ──►  flatten  ──►  partition  ──►  visibility
//! (snapshot)     (linear        (zones per      (dim / highlight
//!                 order)         layout)         per seat)
//! ```

/// Upstream analysis snapshot types and the score lookup.
pub mod analysis;

/// Seating groups → one ordered seating sequence.
pub mod flatten;

/// The nine room layout formats.
pub mod layout_format;

/// Layout-specific zone partitioning.
pub mod partition;

/// Segment / minimum-score visibility filter.
pub mod visibility;
