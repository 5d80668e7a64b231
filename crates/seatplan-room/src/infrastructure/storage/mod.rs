//! Storage infrastructure: configuration and saved-layout persistence.
//!
//! - **`config`** reads the TOML configuration file from the
//!   platform-appropriate directory, with defaults on first run.
//! - **`layout_store`** implements the application's `LayoutStore` over a
//!   key-value TOML state file, plus an in-memory variant.

pub mod config;
pub mod layout_store;
