use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, Vector, DIM};
use crate::partitioning::{BroadPhase, CandidatePair};
use ordered_float::OrderedFloat;

/// A sweep-and-prune broad phase.
///
/// Bounding boxes are projected on a single axis, sorted by their lower
/// bound, then swept: a box can only overlap the boxes that start before it
/// ends. The axis is re-chosen at each update as the one with the largest
/// spread of box centers, which keeps the intervals as disjoint as possible.
#[derive(Clone, Debug, Default)]
pub struct SweepAndPrune {
    aabbs: Vec<Aabb>,
    // Body indices sorted by the lower bound of their box on `axis`.
    sorted: Vec<u32>,
    axis: usize,
    margin: Real,
}

impl SweepAndPrune {
    /// Creates an empty broad phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loosens every bounding box by `margin` before testing it.
    pub fn with_margin(mut self, margin: Real) -> Self {
        self.margin = margin;
        self
    }

    /// The axis used by the last sweep.
    pub fn sweep_axis(&self) -> usize {
        self.axis
    }

    fn choose_sweep_axis(aabbs: &[Aabb]) -> usize {
        let mut mins = Vector::repeat(Real::MAX);
        let mut maxs = Vector::repeat(-Real::MAX);

        for aabb in aabbs {
            let center = aabb.center().coords;
            mins = mins.inf(&center);
            maxs = maxs.sup(&center);
        }

        let spread = maxs - mins;
        (1..DIM).fold(0, |best, i| if spread[i] > spread[best] { i } else { best })
    }
}

impl BroadPhase for SweepAndPrune {
    fn update(&mut self, aabbs: &[Aabb]) {
        self.aabbs.clear();
        self.aabbs
            .extend(aabbs.iter().map(|aabb| aabb.loosened(self.margin)));
        self.axis = Self::choose_sweep_axis(&self.aabbs);

        let axis = self.axis;
        let boxes = &self.aabbs;
        self.sorted.clear();
        self.sorted.extend(0..boxes.len() as u32);
        // Ties are broken by index so the sweep order is fully determined.
        self.sorted
            .sort_unstable_by_key(|i| (OrderedFloat(boxes[*i as usize].mins[axis]), *i));
    }

    fn candidate_pairs(&self, out: &mut Vec<CandidatePair>) {
        let axis = self.axis;

        for (k, i) in self.sorted.iter().enumerate() {
            let aabb1 = &self.aabbs[*i as usize];

            for j in &self.sorted[k + 1..] {
                let aabb2 = &self.aabbs[*j as usize];

                if aabb2.mins[axis] > aabb1.maxs[axis] {
                    break;
                }

                if aabb1.intersects(aabb2) {
                    out.push(CandidatePair::new(*i, *j));
                }
            }
        }
    }
}
