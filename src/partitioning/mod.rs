//! Broad-phase collision detection.
//!
//! A broad phase prunes the set of all body pairs down to the pairs whose
//! bounding boxes overlap. Only those candidates are handed to the narrow
//! phase, which computes the actual contacts.

pub use self::broad_phase::{BroadPhase, CandidatePair};
pub use self::brute_force::BruteForceBroadPhase;
pub use self::sweep_and_prune::SweepAndPrune;

mod broad_phase;
mod brute_force;
mod sweep_and_prune;
