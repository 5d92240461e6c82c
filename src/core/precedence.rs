//! Precedence resolution for source-set lists.
//!
//! Callers declare source sets low priority first: `[main, debug, flavor]`
//! means the flavor overlays the build type, which overlays main. The merge
//! works in the opposite order, so resolution reverses the list and attaches
//! an explicit rank (0 = highest precedence) to each entry.
//!
//! Resolution happens exactly once per merge invocation and the resolved
//! sequence is shared by both the manifest and resource phases, so the two
//! phases can never disagree about which source set is primary. The caller's
//! slice is never mutated.

use crate::core::source_set::SourceSet;

/// A source set annotated with its resolved precedence rank.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    /// Precedence rank; 0 is the highest-precedence (most specific) set
    pub rank: usize,

    /// The underlying source set
    pub source_set: &'a SourceSet,
}

/// Resolve precedence for a caller-declared source-set list.
///
/// Returns the exact reverse of the input order: the last-declared (most
/// specific) source set comes first, at rank 0. No deduplication, no
/// filtering.
pub fn resolve_precedence(source_sets: &[SourceSet]) -> Vec<Ranked<'_>> {
    source_sets
        .iter()
        .rev()
        .enumerate()
        .map(|(rank, source_set)| Ranked { rank, source_set })
        .collect()
}
