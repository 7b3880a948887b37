//! Overlap resolution policies
//!
//! A matcher emits a redundant, possibly-overlapping candidate set; a
//! resolver reduces it to a pairwise non-overlapping set under one of two
//! objectives: keep the longest spans, or keep as many spans as possible.

use crate::entity::Entity;

/// Closed-interval intersection test
///
/// Touching at a single shared offset counts as overlap, not adjacency.
/// Symmetric in its arguments.
pub fn overlap(a: &Entity, b: &Entity) -> bool {
    a.start_offset <= b.end_offset && b.start_offset <= a.end_offset
}

/// A policy reducing candidate entities to a non-overlapping set
///
/// Implementations are deterministic functions of the input multiset;
/// tie-breaks are fixed, not inherited from iteration order.
pub trait Resolver {
    /// Produce a pairwise non-overlapping subset of the candidates
    fn resolve(&self, entities: Vec<Entity>) -> Vec<Entity>;
}

/// Keep the longest spans
///
/// Candidates are taken longest first (ties by start offset, then end
/// offset, then label) and accepted greedily when they overlap nothing
/// already accepted. Favors fewer, longer spans: with both "東京" and
/// "東京都" matching, only "東京都" survives. Output is ordered by start
/// offset ascending.
pub struct LongestMatch;

impl Resolver for LongestMatch {
    fn resolve(&self, mut entities: Vec<Entity>) -> Vec<Entity> {
        entities.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a.start_offset.cmp(&b.start_offset))
                .then_with(|| a.end_offset.cmp(&b.end_offset))
                .then_with(|| a.label.cmp(&b.label))
        });
        let mut accepted: Vec<Entity> = Vec::new();
        for candidate in entities {
            if accepted.iter().all(|kept| !overlap(kept, &candidate)) {
                accepted.push(candidate);
            }
        }
        accepted.sort_by_key(|entity| entity.start_offset);
        log::debug!("longest-match resolution kept {} entities", accepted.len());
        accepted
    }
}

/// Keep as many spans as possible
///
/// Classic interval scheduling: candidates sorted by end offset ascending
/// (ties by start offset, then label), accepting each one that does not
/// overlap the most recently accepted. Maximizes the count of surviving
/// spans at the expense of discarding long ones that block many short ones.
pub struct MaximizedCount;

impl Resolver for MaximizedCount {
    fn resolve(&self, mut entities: Vec<Entity>) -> Vec<Entity> {
        entities.sort_by(|a, b| {
            a.end_offset
                .cmp(&b.end_offset)
                .then_with(|| a.start_offset.cmp(&b.start_offset))
                .then_with(|| a.label.cmp(&b.label))
        });
        let mut accepted: Vec<Entity> = Vec::new();
        for candidate in entities {
            match accepted.last() {
                Some(last) if overlap(last, &candidate) => {}
                _ => accepted.push(candidate),
            }
        }
        log::debug!("maximized-count resolution kept {} entities", accepted.len());
        accepted
    }
}
