//! Pure domain logic for the film tour backend.
//!
//! No DB, no async, no I/O. The import module carries the full row model
//! for the municipal permit dataset; `types` holds the ID and timestamp
//! aliases shared across the workspace.

pub mod import;
pub mod types;
