use crate::math::{Point, Real, Vector};
use crate::shape::FeatureId;
use arrayvec::ArrayVec;
use ordered_float::OrderedFloat;

/// Maximum number of points of a box-box contact manifold.
pub const MAX_MANIFOLD_POINTS: usize = 8;

/// A single contact point between two boxes.
///
/// # Distance Convention
///
/// `dist` is the signed distance between the boxes at this point, measured
/// along the manifold normal. It is never positive: points that would be
/// separated are discarded while the manifold is built, so `-dist` is the
/// penetration depth.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// The contact position in world-space.
    pub point: Point<Real>,
    /// The signed distance at this contact (`<= 0.0`).
    pub dist: Real,
    /// The box features that generated this contact.
    pub feature: FeatureId,
}

impl ContactPoint {
    /// Creates a new contact point.
    #[inline]
    pub fn new(point: Point<Real>, dist: Real, feature: FeatureId) -> Self {
        Self {
            point,
            dist,
            feature,
        }
    }
}

/// The contact points between two boxes, all sharing the same normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ContactManifold {
    /// The world-space unit contact normal, pointing from the first box toward the second.
    pub normal: Vector<Real>,
    /// The contact points.
    pub points: ArrayVec<ContactPoint, MAX_MANIFOLD_POINTS>,
}

impl Default for ContactManifold {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactManifold {
    /// An empty manifold.
    pub fn new() -> Self {
        Self {
            normal: Vector::zeros(),
            points: ArrayVec::new(),
        }
    }

    /// Removes all the contact points and resets the normal.
    pub fn clear(&mut self) {
        self.normal = Vector::zeros();
        self.points.clear();
    }

    /// The number of contact points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Does this manifold contain no contact point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The contact with the largest penetration depth.
    pub fn deepest_point(&self) -> Option<&ContactPoint> {
        self.points.iter().min_by_key(|pt| OrderedFloat(pt.dist))
    }
}

/// The contact manifold between two bodies, tagged with their indices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ContactPair {
    /// Index of the first body.
    pub body1: u32,
    /// Index of the second body.
    pub body2: u32,
    /// The contacts between both bodies. The normal points from `body1` toward `body2`.
    pub manifold: ContactManifold,
}

impl ContactPair {
    /// Creates a new contact pair.
    pub fn new(body1: u32, body2: u32, manifold: ContactManifold) -> Self {
        Self {
            body1,
            body2,
            manifold,
        }
    }
}
