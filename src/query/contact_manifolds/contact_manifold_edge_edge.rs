use crate::math::{Point, Real, Vector};
use crate::query::{ContactManifold, ContactParams, ContactPoint};
use crate::shape::{FeatureId, Obb};

/// Computes the single contact between two boxes whose deepest axis is an edge-edge axis.
///
/// `normal` is the world-space separating axis oriented from `obb1` toward
/// `obb2` and `separation` its (non-positive) separation. The contact lies
/// halfway between the closest points of the edges of each box that best
/// support the axis.
pub fn contact_manifold_edge_edge(
    obb1: &Obb,
    obb2: &Obb,
    normal: &Vector<Real>,
    separation: Real,
    params: &ContactParams,
    manifold: &mut ContactManifold,
) {
    let (pa, qa, edge1) = obb1.support_edge(normal);
    let (pb, qb, edge2) = obb2.support_edge(&-normal);
    let dir1 = qa - pa;
    let dir2 = qb - pb;

    let (s, t, parallel) =
        edge_edge_closest_parameters(&pa, &dir1, &pb, &dir2, params.parallel_edge_epsilon);

    if parallel {
        log::debug!(
            "edges {} and {} are nearly parallel, using the projection of the first end-point",
            edge1,
            edge2
        );
    }

    let pt1 = pa + dir1 * s;
    let pt2 = pb + dir2 * t;

    manifold.normal = *normal;
    manifold.points.push(ContactPoint::new(
        na::center(&pt1, &pt2),
        separation,
        FeatureId::edge_edge(edge1, edge2),
    ));
}

/// Locates the closest points `orig1 + dir1 * s` and `orig2 + dir2 * t` of two
/// edges extended to lines. Returns `(s, t, parallel)`.
///
/// The parameters solve a 2×2 linear system whose determinant is
/// `|dir1|² |dir2|² - (dir1·dir2)²`. When it is below `eps`, or equal to zero
/// up to a few ULPs of `|dir1|² |dir2|²`, the lines are parallel and their
/// closest points are not unique: `s` is then `0`, `t` locates the projection
/// of `orig1` on the second line, and `parallel` is `true`. The result is
/// never NaN, even for zero-length directions.
pub fn edge_edge_closest_parameters(
    orig1: &Point<Real>,
    dir1: &Vector<Real>,
    orig2: &Point<Real>,
    dir2: &Vector<Real>,
    eps: Real,
) -> (Real, Real, bool) {
    let r = orig1 - orig2;
    let len1 = dir1.norm_squared();
    let len2 = dir2.norm_squared();
    let proj1 = dir1.dot(&r);
    let proj2 = dir2.dot(&r);

    if len2 <= eps {
        let s = if len1 <= eps { 0.0 } else { -proj1 / len1 };
        return (s, 0.0, false);
    }

    if len1 <= eps {
        return (0.0, proj2 / len2, false);
    }

    let cross = dir1.dot(dir2);
    let lens = len1 * len2;
    let det = lens - cross * cross;

    if det <= eps || ulps_eq!(lens, cross * cross) {
        return (0.0, proj2 / len2, true);
    }

    let s = (cross * proj2 - proj1 * len2) / det;
    (s, (cross * s + proj2) / len2, false)
}
