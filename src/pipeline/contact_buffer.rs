use crate::math::{Point, Real, Vector};
use crate::query::{ContactPair, ContactPoint};
use crate::shape::FeatureId;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The contacts of a set of contact pairs, flattened into contiguous arrays.
///
/// The contacts of the `k`-th pair are `points[offsets[k]..offsets[k + 1]]`.
/// This is the layout a constraint solver iterating over all contacts at
/// once expects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactBuffer {
    /// The `(body1, body2)` indices of each pair.
    pub bodies: Vec<(u32, u32)>,
    /// The contact normal of each pair.
    pub normals: Vec<Vector<Real>>,
    /// Start of the contacts of each pair in `points`, followed by the total number of contacts.
    pub offsets: Vec<usize>,
    /// The contacts of all the pairs.
    pub points: Vec<ContactPoint>,
}

impl ContactBuffer {
    /// Flattens the contacts of `pairs`, keeping their order.
    ///
    /// Offsets are the exclusive prefix sum of the per-pair contact counts.
    /// Each pair then copies its contacts into its own disjoint slot, which
    /// happens in parallel with the `parallel` feature.
    pub fn from_pairs(pairs: &[ContactPair]) -> Self {
        let mut offsets = Vec::with_capacity(pairs.len() + 1);
        let mut total = 0;
        offsets.push(total);
        for pair in pairs {
            total += pair.manifold.points.len();
            offsets.push(total);
        }

        let placeholder = ContactPoint::new(Point::origin(), 0.0, FeatureId::UNSET_ALL);
        let mut points = vec![placeholder; total];

        let mut slots = Vec::with_capacity(pairs.len());
        let mut rest = points.as_mut_slice();
        for pair in pairs {
            let (slot, tail) = std::mem::take(&mut rest).split_at_mut(pair.manifold.points.len());
            slots.push(slot);
            rest = tail;
        }

        #[cfg(feature = "parallel")]
        slots
            .into_par_iter()
            .zip(pairs.par_iter())
            .for_each(|(slot, pair)| slot.copy_from_slice(&pair.manifold.points));
        #[cfg(not(feature = "parallel"))]
        slots
            .into_iter()
            .zip(pairs.iter())
            .for_each(|(slot, pair)| slot.copy_from_slice(&pair.manifold.points));

        Self {
            bodies: pairs.iter().map(|p| (p.body1, p.body2)).collect(),
            normals: pairs.iter().map(|p| p.manifold.normal).collect(),
            offsets,
            points,
        }
    }

    /// The number of contact pairs.
    #[inline]
    pub fn num_pairs(&self) -> usize {
        self.bodies.len()
    }

    /// The contacts of the `k`-th pair.
    #[inline]
    pub fn contacts(&self, k: usize) -> &[ContactPoint] {
        &self.points[self.offsets[k]..self.offsets[k + 1]]
    }
}
