use crate::partitioning::CandidatePair;
use crate::pipeline::BoxBodies;
use crate::query::{contact_obb_obb, CollisionError, ContactPair, ContactParams};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the contacts of every candidate pair.
///
/// The inputs are validated before any contact is computed. Pairs that are
/// separated, or that only touch without producing any contact point, are
/// dropped; the others are returned in the order of `candidates`. Each pair
/// is independent of all the others, so with the `parallel` feature they are
/// processed concurrently.
pub fn narrow_phase(
    bodies: &BoxBodies,
    candidates: &[CandidatePair],
    params: &ContactParams,
) -> Result<Vec<ContactPair>, CollisionError> {
    bodies.validate()?;

    for pair in candidates {
        bodies.validate_pair(pair)?;
    }

    let contact = |pair: &CandidatePair| {
        let (i, j) = pair.as_tuple();
        let obb1 = bodies.obb(i as usize);
        let obb2 = bodies.obb(j as usize);
        contact_obb_obb(&obb1, &obb2, params).map(|manifold| ContactPair::new(i, j, manifold))
    };

    #[cfg(feature = "parallel")]
    let pairs = candidates.par_iter().filter_map(contact).collect();
    #[cfg(not(feature = "parallel"))]
    let pairs = candidates.iter().filter_map(contact).collect();

    Ok(pairs)
}
