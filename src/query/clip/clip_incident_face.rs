use crate::math::{Point, Real};
use crate::query::{ContactParams, ContactPoint, MAX_MANIFOLD_POINTS};
use crate::shape::{ClipVertex, FeatureId, ReferenceFace};
use arrayvec::ArrayVec;

type ClipPolygon = ArrayVec<ClipVertex, MAX_MANIFOLD_POINTS>;

// A side plane of the reference face: `sign * v[axis] - extent` is the
// signed distance of `v`, in the reference face's frame.
#[derive(Copy, Clone)]
struct SidePlane {
    sign: Real,
    extent: Real,
    axis: usize,
    edge: u8,
}

impl SidePlane {
    #[inline]
    fn distance(&self, pt: &Point<Real>) -> Real {
        self.sign * pt[self.axis] - self.extent
    }
}

/// Clips the incident face of a box against the reference face of another.
///
/// The incident polygon is clipped by the four side planes of the reference
/// face, then every vertex above the reference face itself is discarded.
/// The remaining vertices are pushed into `out` with their signed distance
/// to the reference face. A vertex created by a side plane inherits the
/// feature of the vertex it replaces, with that plane's edge recorded in
/// `in_reference` (entering) or `out_reference` (leaving) and the matching
/// incident slot unset.
///
/// If one side plane discards the whole polygon nothing is pushed.
pub fn clip_incident_face(
    reference: &ReferenceFace,
    incident: &[ClipVertex; 4],
    params: &ContactParams,
    out: &mut ArrayVec<ContactPoint, MAX_MANIFOLD_POINTS>,
) {
    let ext = reference.extents;
    let planes = [
        SidePlane {
            sign: 1.0,
            extent: ext.x,
            axis: 0,
            edge: reference.clip_edges[0],
        },
        SidePlane {
            sign: 1.0,
            extent: ext.y,
            axis: 1,
            edge: reference.clip_edges[1],
        },
        SidePlane {
            sign: -1.0,
            extent: ext.x,
            axis: 0,
            edge: reference.clip_edges[2],
        },
        SidePlane {
            sign: -1.0,
            extent: ext.y,
            axis: 1,
            edge: reference.clip_edges[3],
        },
    ];

    // Work in the local frame of the reference face.
    let mut polygon: ClipPolygon = incident
        .iter()
        .map(|v| ClipVertex {
            point: reference.basis.tr_mul(&(v.point - reference.center)).into(),
            feature: v.feature,
        })
        .collect();
    let mut clipped = ClipPolygon::new();

    for plane in &planes {
        clip_side_plane(plane, &polygon, params.clip_epsilon, &mut clipped);

        if clipped.is_empty() {
            return;
        }

        std::mem::swap(&mut polygon, &mut clipped);
    }

    let len_before = out.len();

    for v in &polygon {
        let dist = v.point.z - ext.z;

        if dist <= 0.0 {
            let point = reference.center + reference.basis * v.point.coords;
            out.push(ContactPoint::new(point, dist, v.feature));
        }
    }
}

fn clip_side_plane(plane: &SidePlane, polygon: &ClipPolygon, eps: Real, result: &mut ClipPolygon) {
    result.clear();

    let Some(mut a) = polygon.last() else {
        return;
    };
    let mut da = plane.distance(&a.point);

    for b in polygon {
        let db = plane.distance(&b.point);
        let a_front = da < eps;
        let b_front = db < eps;

        if a_front && b_front {
            result.push(*b);
        } else if a_front {
            let mut feature = b.feature;
            feature.out_reference = plane.edge;
            feature.out_incident = FeatureId::UNSET;
            result.push(ClipVertex {
                point: a.point + (b.point - a.point) * (da / (da - db)),
                feature,
            });
        } else if b_front {
            let mut feature = a.feature;
            feature.in_reference = plane.edge;
            feature.in_incident = FeatureId::UNSET;
            result.push(ClipVertex {
                point: a.point + (b.point - a.point) * (da / (da - db)),
                feature,
            });
            result.push(*b);
        }

        a = b;
        da = db;
    }
}
