use crate::bounding_volume::Aabb;
use crate::utils::SortedPair;

/// A pair of body indices that may be in contact, smallest index first.
pub type CandidatePair = SortedPair<u32>;

/// Trait implemented by broad-phase algorithms.
///
/// A broad phase is updated with the `Aabb` of every body, indexed by body
/// index, then queried for the pairs whose `Aabb`s overlap. The candidate
/// list it outputs contains each unordered pair at most once and never pairs
/// a body with itself.
pub trait BroadPhase {
    /// Replaces the bounding boxes of all the bodies.
    fn update(&mut self, aabbs: &[Aabb]);

    /// Appends to `out` every pair of bodies whose bounding boxes overlap.
    ///
    /// Pairs are output in an order that only depends on the last `update`.
    fn candidate_pairs(&self, out: &mut Vec<CandidatePair>);
}
