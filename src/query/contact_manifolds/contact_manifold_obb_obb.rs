use crate::math::{Real, Vector};
use crate::query::clip::clip_incident_face;
use crate::query::details::contact_manifold_edge_edge;
use crate::query::sat::{self, SeparatingAxis};
use crate::query::{ContactManifold, ContactParams};
use crate::shape::Obb;

/// Computes the contact manifold between two oriented boxes.
///
/// `manifold` is cleared first. It is left empty if the boxes are separated,
/// or if they only touch without any clipped point penetrating the reference
/// face. Otherwise its normal points from `obb1` toward `obb2` and it holds
/// between one and eight contacts, all with a non-positive `dist`.
///
/// Face contacts clip the incident face of one box against the reference
/// face of the other one. Edge contacts produce a single point.
pub fn contact_manifold_obb_obb(
    obb1: &Obb,
    obb2: &Obb,
    params: &ContactParams,
    manifold: &mut ContactManifold,
) {
    manifold.clear();

    let Some(sat) = sat::obb_obb_find_separating_axis(obb1, obb2, params) else {
        return;
    };

    match sat.axis {
        SeparatingAxis::FaceA(i) => face_contacts(obb1, obb2, i, &sat.normal, params, manifold),
        SeparatingAxis::FaceB(j) => face_contacts(obb2, obb1, j, &-sat.normal, params, manifold),
        SeparatingAxis::Edge(..) => contact_manifold_edge_edge(
            obb1,
            obb2,
            &sat.normal,
            sat.separation,
            params,
            manifold,
        ),
    }

    if !manifold.is_empty() {
        manifold.normal = sat.normal;
    }
}

/// Computes the contact manifold between two oriented boxes.
///
/// Returns `None` if the boxes are separated or if no contact point was
/// generated. See [`contact_manifold_obb_obb`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use boxclip3d::math::{Point, Vector};
/// use boxclip3d::query::{contact_obb_obb, ContactParams};
/// use boxclip3d::shape::Obb;
///
/// let obb1 = Obb::axis_aligned(Point::origin(), Vector::repeat(1.0));
/// let obb2 = Obb::axis_aligned(Point::new(0.0, 1.5, 0.0), Vector::repeat(1.0));
///
/// let manifold = contact_obb_obb(&obb1, &obb2, &ContactParams::default()).unwrap();
/// assert_eq!(manifold.points.len(), 4);
/// assert!(manifold.points.iter().all(|c| (c.dist + 0.5).abs() < 1.0e-5));
/// # }
/// ```
pub fn contact_obb_obb(obb1: &Obb, obb2: &Obb, params: &ContactParams) -> Option<ContactManifold> {
    let mut manifold = ContactManifold::new();
    contact_manifold_obb_obb(obb1, obb2, params, &mut manifold);

    if manifold.is_empty() {
        None
    } else {
        Some(manifold)
    }
}

// `normal` points from `reference` toward `incident`.
fn face_contacts(
    reference: &Obb,
    incident: &Obb,
    axis: usize,
    normal: &Vector<Real>,
    params: &ContactParams,
    manifold: &mut ContactManifold,
) {
    let reference_face = reference.reference_face(axis, normal);
    let incident_face = incident.incident_face(normal);
    clip_incident_face(&reference_face, &incident_face, params, &mut manifold.points);
}
