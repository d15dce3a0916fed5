/// Errors raised when the per-body input arrays do not honour the pipeline's contract.
///
/// The geometric core itself never fails: separated pairs and empty clips
/// simply produce no manifold. Only malformed inputs are reported, before
/// any contact is computed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// The position, rotation and half-extent arrays do not describe the same number of bodies.
    #[error(
        "input arrays disagree on the number of bodies: {positions} positions, \
         {rotations} rotations, {half_extents} half-extents"
    )]
    LengthMismatch {
        /// Length of the position array.
        positions: usize,
        /// Length of the rotation array.
        rotations: usize,
        /// Length of the half-extent array.
        half_extents: usize,
    },
    /// A candidate pair references a body that does not exist.
    #[error("candidate pair references body {index} but only {len} bodies were given")]
    BodyIndexOutOfBounds {
        /// The offending body index.
        index: u32,
        /// The number of bodies.
        len: usize,
    },
    /// A candidate pair pairs a body with itself.
    #[error("candidate pair ({index}, {index}) pairs a body with itself")]
    SelfPair {
        /// The duplicated body index.
        index: u32,
    },
}
