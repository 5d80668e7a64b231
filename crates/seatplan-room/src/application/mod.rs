//! Application layer use cases for the room tool.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure seating rules in `seatplan-core`) and the infrastructure (files,
//! terminals).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "show the
//!   room as a U with only the Tech segment highlighted").
//! - **Depend on abstractions** (traits) rather than concrete implementations,
//!   so storage can be swapped without changing this code.
//! - **Contain no file system access**.
//!
//! # Sub-modules
//!
//! - **`layout_selection`** – The active layout, its initialisation from the
//!   saved choice or the suggestion, and the change notification hook.
//!
//! - **`room_session`** – One analysis snapshot plus the user's layout and
//!   filter state; the accessors renderers and exporters call.
//!
//! - **`room_view`** – The serializable render model built from a partition.

pub mod layout_selection;
pub mod room_session;
pub mod room_view;
