//! Per-step collision detection over arrays of boxes.
//!
//! Each step runs the broad phase to completion, then computes the contact
//! manifold of every candidate pair independently. With the `parallel`
//! feature enabled, candidate pairs are processed on the rayon thread pool.

pub use self::box_bodies::BoxBodies;
pub use self::collision_pipeline::CollisionPipeline;
pub use self::contact_buffer::ContactBuffer;
pub use self::narrow_phase::narrow_phase;

mod box_bodies;
mod collision_pipeline;
mod contact_buffer;
mod narrow_phase;
