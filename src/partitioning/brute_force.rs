use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::partitioning::{BroadPhase, CandidatePair};

/// A broad phase testing every pair of bodies.
///
/// Quadratic in the number of bodies. Useful for small scenes and as a
/// reference for other broad phases.
#[derive(Clone, Debug, Default)]
pub struct BruteForceBroadPhase {
    aabbs: Vec<Aabb>,
    margin: Real,
}

impl BruteForceBroadPhase {
    /// Creates an empty broad phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loosens every bounding box by `margin` before testing it.
    pub fn with_margin(mut self, margin: Real) -> Self {
        self.margin = margin;
        self
    }
}

impl BroadPhase for BruteForceBroadPhase {
    fn update(&mut self, aabbs: &[Aabb]) {
        self.aabbs.clear();
        self.aabbs
            .extend(aabbs.iter().map(|aabb| aabb.loosened(self.margin)));
    }

    fn candidate_pairs(&self, out: &mut Vec<CandidatePair>) {
        for (i, aabb1) in self.aabbs.iter().enumerate() {
            for (j, aabb2) in self.aabbs.iter().enumerate().skip(i + 1) {
                if aabb1.intersects(aabb2) {
                    out.push(CandidatePair::new(i as u32, j as u32));
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Vector};

    #[test]
    fn finds_overlapping_pairs_only() {
        let aabbs = [
            Aabb::from_half_extents(Point::new(0.0, 0.0, 0.0), Vector::repeat(1.0)),
            Aabb::from_half_extents(Point::new(1.5, 0.0, 0.0), Vector::repeat(1.0)),
            Aabb::from_half_extents(Point::new(10.0, 0.0, 0.0), Vector::repeat(1.0)),
            Aabb::from_half_extents(Point::new(0.0, 1.9, 0.0), Vector::repeat(1.0)),
        ];
        let mut broad_phase = BruteForceBroadPhase::new();
        broad_phase.update(&aabbs);

        let mut pairs = Vec::new();
        broad_phase.candidate_pairs(&mut pairs);
        let pairs: Vec<_> = pairs.iter().map(|p| p.as_tuple()).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 3)]);
    }

    #[test]
    fn margin_catches_nearby_bodies() {
        let aabbs = [
            Aabb::from_half_extents(Point::origin(), Vector::repeat(1.0)),
            Aabb::from_half_extents(Point::new(2.1, 0.0, 0.0), Vector::repeat(1.0)),
        ];
        let mut broad_phase = BruteForceBroadPhase::new();
        let mut pairs = Vec::new();

        broad_phase.update(&aabbs);
        broad_phase.candidate_pairs(&mut pairs);
        assert!(pairs.is_empty());

        broad_phase = broad_phase.with_margin(0.1);
        broad_phase.update(&aabbs);
        broad_phase.candidate_pairs(&mut pairs);
        assert_eq!(pairs, vec![CandidatePair::new(0, 1)]);
    }
}
