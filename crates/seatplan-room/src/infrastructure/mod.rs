//! Infrastructure layer for the room tool.
//!
//! Contains file-facing adapters: the analysis snapshot reader, the config
//! and saved-layout storage, and the plain-text renderer.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `seatplan_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod render;
pub mod snapshot;
pub mod storage;
