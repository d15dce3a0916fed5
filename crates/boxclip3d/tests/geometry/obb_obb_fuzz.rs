use boxclip3d::math::{Point, Real, Vector};
use boxclip3d::query::details::edge_edge_closest_parameters;
use boxclip3d::query::sat::{obb_obb_find_separating_axis, SeparatingAxis};
use boxclip3d::query::{contact_manifold_obb_obb, ContactManifold, ContactParams};
use boxclip3d::shape::Obb;
use boxclip3d::utils::quaternion_to_rotation_matrix;
use na::{Quaternion, UnitQuaternion};

fn random_obb(rng: &mut oorandom::Rand32, max_angle: Real) -> Obb {
    let mut coord = |scale: Real| (rng.rand_float() * 2.0 - 1.0) * scale;
    let center = Point::new(coord(1.5), coord(1.5), coord(1.5));
    let half_extents = Vector::new(coord(0.5), coord(0.5), coord(0.5)).abs() + Vector::repeat(0.25);
    let axis = Vector::new(coord(1.0), coord(1.0), coord(1.0));
    let angle = coord(max_angle);
    let rotation = na::Unit::try_new(axis, 1.0e-3)
        .map(|axis| UnitQuaternion::from_axis_angle(&axis, angle))
        .unwrap_or_else(UnitQuaternion::identity);

    Obb::new(
        center,
        half_extents,
        quaternion_to_rotation_matrix(rotation.quaternion()),
    )
}

fn check_manifold(obb1: &Obb, obb2: &Obb, manifold: &ContactManifold) {
    let params = ContactParams::default();

    if obb_obb_find_separating_axis(obb1, obb2, &params).is_none() {
        assert!(manifold.is_empty());
        return;
    }

    if manifold.is_empty() {
        return;
    }

    assert!(manifold.points.len() <= 8);
    assert_relative_eq!(manifold.normal.norm(), 1.0, epsilon = 1.0e-4);
    assert!(manifold.normal.dot(&(obb2.center - obb1.center)) >= 0.0);

    for contact in &manifold.points {
        assert!(contact.dist <= 0.0, "positive distance {}", contact.dist);
        assert!(contact.point.coords.iter().all(|x| x.is_finite()));
        assert!(!contact.feature.is_unset());
    }
}

// Edge axes are only tested when no two box axes are parallel, so the edges
// supporting a selected edge axis never hit the singular closest-point system.
// Returns `true` if the pair was routed to the edge-edge contact.
fn check_edge_axis(obb1: &Obb, obb2: &Obb, params: &ContactParams) -> bool {
    let Some(sat) = obb_obb_find_separating_axis(obb1, obb2, params) else {
        return false;
    };
    let SeparatingAxis::Edge(i, j) = sat.axis else {
        return false;
    };

    let (pa, qa, edge1) = obb1.support_edge(&sat.normal);
    let (pb, qb, edge2) = obb2.support_edge(&-sat.normal);
    let (_, _, parallel) = edge_edge_closest_parameters(
        &pa,
        &(qa - pa),
        &pb,
        &(qb - pb),
        params.parallel_edge_epsilon,
    );
    assert!(
        !parallel,
        "axis ({}, {}) gave parallel edges {} and {}",
        i, j, edge1, edge2
    );

    true
}

fn run_fuzz(seed: u64, max_angle: Real) -> usize {
    let mut rng = oorandom::Rand32::new(seed);
    let params = ContactParams::default();
    let mut manifold = ContactManifold::new();
    let mut again = ContactManifold::new();
    let mut num_contacts = 0;
    let mut num_edge_contacts = 0;

    for _ in 0..5000 {
        let obb1 = random_obb(&mut rng, max_angle);
        let obb2 = random_obb(&mut rng, max_angle);

        contact_manifold_obb_obb(&obb1, &obb2, &params, &mut manifold);
        check_manifold(&obb1, &obb2, &manifold);

        // Same inputs, same manifold, bit for bit.
        contact_manifold_obb_obb(&obb1, &obb2, &params, &mut again);
        assert_eq!(manifold, again);

        num_contacts += manifold.points.len();
        if check_edge_axis(&obb1, &obb2, &params) {
            num_edge_contacts += 1;
        }
    }

    assert!(num_contacts > 0);
    num_edge_contacts
}

#[test]
fn random_boxes() {
    let num_edge_contacts = run_fuzz(0, std::f32::consts::PI as Real);
    assert!(num_edge_contacts > 0);
}

#[test]
fn nearly_aligned_boxes() {
    run_fuzz(1, 1.0e-3);
}

#[test]
fn raw_quaternions_are_used_as_given() {
    // A non-unit quaternion is not renormalized before being turned into a matrix.
    let q = Quaternion::new(0.0, 0.0, 0.0, 2.0);
    let obb = Obb::from_quaternion(Point::origin(), Vector::repeat(1.0), &q);
    assert_relative_eq!(obb.axis(0), Vector::new(-7.0, 0.0, 0.0));
    assert_relative_eq!(obb.axis(2), Vector::z());
}
