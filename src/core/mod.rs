//! Core data structures for Stratum.
//!
//! This module contains the foundational types used throughout the merge:
//! - Source sets (per-variant input bundles)
//! - Precedence resolution (caller order to merge order)

pub mod precedence;
pub mod source_set;

pub use precedence::{resolve_precedence, Ranked};
pub use source_set::{SourceSet, SOURCE_SET_FORMAT};
