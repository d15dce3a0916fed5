use crate::bounding_volume::Aabb;
use crate::shape::Obb;

impl Obb {
    /// Computes the world-space `Aabb` of this box.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        let ws_half_extents = self.rotation.abs() * self.half_extents;
        Aabb::from_half_extents(self.center, ws_half_extents)
    }
}
