//! Merge operations.
//!
//! Each phase is its own function so it can be driven (and tested)
//! independently; [`merge`] is the public entry point tying them together.

pub mod errors;
pub mod merge;
pub mod merge_manifest;
pub mod merge_resources;

pub use errors::MergeError;
pub use merge::{merge, MergeRequest, MergedVariant};
pub use merge_manifest::merge_manifests;
pub use merge_resources::merge_resources;
