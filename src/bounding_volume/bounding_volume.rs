use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes. The broad phase
/// only ever compares bounding volumes, never the shapes themselves.
pub trait BoundingVolume {
    /// A point inside of this bounding volume, ideally its center.
    fn center(&self) -> Point<Real>;

    /// Do this bounding volume and `other` overlap? Touching volumes overlap.
    fn intersects(&self, other: &Self) -> bool;

    /// Is `other` entirely inside this bounding volume?
    fn contains(&self, other: &Self) -> bool;

    /// A copy of this bounding volume grown by `margin` in every direction.
    fn loosened(&self, margin: Real) -> Self;
}
