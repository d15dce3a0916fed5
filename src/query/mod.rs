//! Non-persistent geometric queries between oriented boxes.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::contact_obb_obb()`] to compute the contact manifold between two boxes.
//! * [`query::contact_manifold_obb_obb()`] to fill an existing manifold with the contacts between two boxes.
//! * [`query::intersection_test_obb_obb()`] to determine if two boxes are intersecting or not.
//!
//! All of them are tuned by a [`ContactParams`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the building blocks of the above:
//! the separating-axis search, clipping of an incident face, and the edge-edge contact.
//!
//! [`query::contact_obb_obb()`]: crate::query::contact_obb_obb
//! [`query::contact_manifold_obb_obb()`]: crate::query::contact_manifold_obb_obb
//! [`query::intersection_test_obb_obb()`]: crate::query::intersection_test_obb_obb

pub use self::contact_manifolds::{
    contact_manifold_obb_obb, contact_obb_obb, ContactManifold, ContactPair, ContactPoint,
    MAX_MANIFOLD_POINTS,
};
pub use self::contact_params::{
    ContactParams, DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_CLIP_EPSILON, DEFAULT_COS_TOLERANCE,
    DEFAULT_RELATIVE_TOLERANCE,
};
pub use self::error::CollisionError;
pub use self::sat::intersection_test_obb_obb;

pub mod clip;
mod contact_manifolds;
mod contact_params;
mod error;
pub mod sat;

/// Queries dedicated to specific parts of the box-box contact generation.
pub mod details {
    pub use super::clip::*;
    pub use super::contact_manifolds::{contact_manifold_edge_edge, edge_edge_closest_parameters};
    pub use super::sat::obb_obb_find_separating_axis;
}
