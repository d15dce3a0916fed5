//! Contact manifolds between oriented boxes.
//!
//! A contact manifold is the set of contact points between two boxes that
//! share the same contact normal. Face contacts produce up to eight points,
//! obtained by clipping the face of one box (the incident face) against the
//! face of the other box most aligned with the normal (the reference face).
//! Edge contacts produce a single point.

pub use self::contact_manifold::{ContactManifold, ContactPair, ContactPoint, MAX_MANIFOLD_POINTS};
pub use self::contact_manifold_edge_edge::{contact_manifold_edge_edge, edge_edge_closest_parameters};
pub use self::contact_manifold_obb_obb::{contact_manifold_obb_obb, contact_obb_obb};

mod contact_manifold;
mod contact_manifold_edge_edge;
mod contact_manifold_obb_obb;
