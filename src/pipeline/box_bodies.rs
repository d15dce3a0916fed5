use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, Vector};
use crate::partitioning::CandidatePair;
use crate::query::CollisionError;
use crate::shape::Obb;

/// Read-only view over the per-body arrays of a simulation.
///
/// Body `i` is the box centered at `positions[i]`, with orientation
/// `rotations[i]` and half-extents `half_extents[i]`. Quaternion
/// orientations can be converted with
/// [`quaternion_to_rotation_matrix`](crate::utils::quaternion_to_rotation_matrix).
#[derive(Copy, Clone, Debug)]
pub struct BoxBodies<'a> {
    /// World-space center of each body.
    pub positions: &'a [Point<Real>],
    /// Rotation matrix of each body, local axes as columns.
    pub rotations: &'a [Matrix<Real>],
    /// Half-extents of each body's box.
    pub half_extents: &'a [Vector<Real>],
}

impl<'a> BoxBodies<'a> {
    /// Wraps the per-body arrays.
    pub fn new(
        positions: &'a [Point<Real>],
        rotations: &'a [Matrix<Real>],
        half_extents: &'a [Vector<Real>],
    ) -> Self {
        Self {
            positions,
            rotations,
            half_extents,
        }
    }

    /// Checks that all the arrays describe the same number of bodies.
    pub fn validate(&self) -> Result<(), CollisionError> {
        let len = self.positions.len();

        if self.rotations.len() != len || self.half_extents.len() != len {
            return Err(CollisionError::LengthMismatch {
                positions: len,
                rotations: self.rotations.len(),
                half_extents: self.half_extents.len(),
            });
        }

        Ok(())
    }

    /// Checks that `pair` references two distinct existing bodies.
    pub fn validate_pair(&self, pair: &CandidatePair) -> Result<(), CollisionError> {
        let (i, j) = pair.as_tuple();

        if i == j {
            return Err(CollisionError::SelfPair { index: i });
        }

        // `j` is the largest index of the pair.
        if j as usize >= self.len() {
            return Err(CollisionError::BodyIndexOutOfBounds {
                index: j,
                len: self.len(),
            });
        }

        Ok(())
    }

    /// The number of bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Is there no body at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The box of the `i`-th body.
    #[inline]
    pub fn obb(&self, i: usize) -> Obb {
        Obb::new(self.positions[i], self.half_extents[i], self.rotations[i])
    }

    /// Appends the world-space `Aabb` of every body to `out`.
    pub fn compute_aabbs(&self, out: &mut Vec<Aabb>) {
        out.extend((0..self.len()).map(|i| self.obb(i).aabb()));
    }
}
