//! Oriented box shape.

use crate::math::{Matrix, Point, Quaternion, Real, Vector, DIM};
use crate::shape::cuboid_edge_id;
use crate::utils;

/// A box with an arbitrary position and orientation.
///
/// The box is a read-only view rebuilt from the simulation's per-body arrays
/// at every query; nothing in this crate keeps it around.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Obb {
    /// The world-space center of the box.
    pub center: Point<Real>,
    /// The half-lengths of the box along its local axes. All components must be positive.
    pub half_extents: Vector<Real>,
    /// The orientation of the box. Column `i` is the box's `i`-th local axis in world-space.
    pub rotation: Matrix<Real>,
}

impl Obb {
    /// Creates a new box from its center, half-extents and rotation matrix.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation: Matrix<Real>) -> Obb {
        Obb {
            center,
            half_extents,
            rotation,
        }
    }

    /// Creates a new box whose orientation is given by a quaternion.
    ///
    /// See [`utils::quaternion_to_rotation_matrix`] for the conversion rules.
    #[inline]
    pub fn from_quaternion(
        center: Point<Real>,
        half_extents: Vector<Real>,
        rotation: &Quaternion<Real>,
    ) -> Obb {
        Self::new(
            center,
            half_extents,
            utils::quaternion_to_rotation_matrix(rotation),
        )
    }

    /// An axis-aligned box.
    #[inline]
    pub fn axis_aligned(center: Point<Real>, half_extents: Vector<Real>) -> Obb {
        Self::new(center, half_extents, Matrix::identity())
    }

    /// The `i`-th local axis of this box, in world-space.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.rotation.column(i).into_owned()
    }

    /// Maps a point from the local-space of this box to world-space.
    #[inline]
    pub fn transform_point(&self, local_pt: &Point<Real>) -> Point<Real> {
        self.center + self.rotation * local_pt.coords
    }

    /// Rotates a vector from the local-space of this box to world-space.
    #[inline]
    pub fn transform_vector(&self, local_v: &Vector<Real>) -> Vector<Real> {
        self.rotation * local_v
    }

    /// Rotates a world-space vector into the local-space of this box.
    #[inline]
    pub fn inverse_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.tr_mul(v)
    }

    /// The edge of this box that best supports the direction `dir`.
    ///
    /// Among the four edges parallel to the local axis least aligned with
    /// `dir`, this picks the one lying in the octant of `dir`. Returns both
    /// world-space end-points and the edge id.
    pub fn support_edge(&self, dir: &Vector<Real>) -> (Point<Real>, Point<Real>, u8) {
        let local_dir = self.inverse_transform_vector(dir);
        let abs_dir = local_dir.abs();

        // The edge runs along the axis with the smallest component of `dir`.
        let edge_axis = if abs_dir.x > abs_dir.y {
            if abs_dir.y > abs_dir.z {
                2
            } else {
                1
            }
        } else if abs_dir.x > abs_dir.z {
            2
        } else {
            0
        };

        let mut a = self.half_extents;
        for i in 0..DIM {
            if local_dir[i] < 0.0 {
                a[i] = -a[i];
            }
        }

        let mut b = a;
        b[edge_axis] = -b[edge_axis];

        (
            self.transform_point(&a.into()),
            self.transform_point(&b.into()),
            cuboid_edge_id(edge_axis, &a),
        )
    }
}
