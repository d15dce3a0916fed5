use boxclip3d::math::{Matrix, Point, Quaternion, Real, Vector};
use boxclip3d::query::sat::{obb_obb_find_separating_axis, SeparatingAxis};
use boxclip3d::query::{contact_obb_obb, intersection_test_obb_obb, ContactParams};
use boxclip3d::shape::{FeatureId, Obb};

fn unit_box(center: Point<Real>) -> Obb {
    Obb::axis_aligned(center, Vector::repeat(1.0))
}

#[test]
fn aligned_unit_boxes_overlapping_by_half() {
    let params = ContactParams::default();
    let obb1 = unit_box(Point::origin());

    for axis in 0..3 {
        for sign in [1.0, -1.0] {
            let mut offset = Vector::zeros();
            offset[axis] = sign * 1.5;
            let obb2 = unit_box(Point::from(offset));

            let manifold = contact_obb_obb(&obb1, &obb2, &params)
                .unwrap_or_else(|| panic!("no contact along {:?}", offset));

            assert_eq!(manifold.points.len(), 4, "offset {:?}", offset);
            assert_relative_eq!(manifold.normal, offset / 1.5, epsilon = 1.0e-6);
            for contact in &manifold.points {
                assert_relative_eq!(contact.dist, -0.5, epsilon = 1.0e-5);
                // The second box is the reference: contacts lie on the incident face of `obb1`.
                assert_relative_eq!(contact.point[axis], sign, epsilon = 1.0e-5);
            }
        }
    }
}

#[test]
fn rotated_box_resting_on_an_edge() {
    // The rotation is built from the quaternion with vector part
    // `sin(0.1) * (0.2, 0.5, 1.0)` (the axis is not normalized) and scalar
    // part `cos(0.1)`, conjugated: the recorded scene stores its matrices
    // column-major, so the box is rotated by the transpose.
    let (sin, cos) = (0.1 as Real).sin_cos();
    let q = Quaternion::new(cos, -0.2 * sin, -0.5 * sin, -sin);

    let obb1 = unit_box(Point::origin());
    let obb2 = Obb::from_quaternion(Point::new(0.0, 1.5, 0.0), Vector::repeat(1.0), &q);
    let params = ContactParams::default();

    let sat = obb_obb_find_separating_axis(&obb1, &obb2, &params).unwrap();
    assert_eq!(sat.axis, SeparatingAxis::Edge(0, 2));

    let manifold = contact_obb_obb(&obb1, &obb2, &params).unwrap();
    assert_eq!(manifold.points.len(), 1);

    let contact = &manifold.points[0];
    assert_relative_eq!(contact.dist, -0.731658161, epsilon = 1.0e-5);
    assert_relative_eq!(
        manifold.normal,
        Vector::new(0.0, 0.99875, -0.04993),
        epsilon = 1.0e-4
    );
    assert_relative_eq!(
        contact.point,
        Point::new(0.87958, 0.63462, -0.98173),
        epsilon = 1.0e-3
    );
    assert_ne!(contact.feature.in_reference, FeatureId::UNSET);
    assert_ne!(contact.feature.in_incident, FeatureId::UNSET);
}

#[test]
fn face_rotated_about_the_normal_gives_an_octagon() {
    let s = (0.5 as Real).sqrt();
    let rotation = Matrix::new(s, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, s);
    let obb1 = unit_box(Point::origin());
    let obb2 = Obb::new(Point::new(0.0, 1.5, 0.0), Vector::repeat(1.0), rotation);

    let manifold = contact_obb_obb(&obb1, &obb2, &ContactParams::default()).unwrap();
    assert_relative_eq!(manifold.normal, Vector::y(), epsilon = 1.0e-6);
    assert_eq!(manifold.points.len(), 8);

    let tan = (2.0 as Real).sqrt() - 1.0;
    for contact in &manifold.points {
        assert_relative_eq!(contact.dist, -0.5, epsilon = 1.0e-5);
        assert_relative_eq!(contact.point.y, 1.0, epsilon = 1.0e-5);

        // Each vertex of the octagon is the crossing of one edge of each face.
        let (x, z) = (contact.point.x.abs(), contact.point.z.abs());
        assert!(
            relative_eq!(x, 1.0, epsilon = 1.0e-5) && relative_eq!(z, tan, epsilon = 1.0e-5)
                || relative_eq!(x, tan, epsilon = 1.0e-5) && relative_eq!(z, 1.0, epsilon = 1.0e-5)
        );
        let f = contact.feature;
        assert!(f.in_reference != FeatureId::UNSET || f.out_reference != FeatureId::UNSET);
    }
}

#[test]
fn crossed_edges_give_a_single_contact() {
    let s = (0.5 as Real).sqrt();
    let rot1 = Matrix::new(s, -s, 0.0, s, s, 0.0, 0.0, 0.0, 1.0);
    let rot2 = Matrix::new(1.0, 0.0, 0.0, 0.0, s, -s, 0.0, s, s);
    let obb1 = Obb::new(Point::origin(), Vector::repeat(1.0), rot1);
    let obb2 = Obb::new(Point::new(0.0, 2.6, 0.0), Vector::repeat(1.0), rot2);

    let manifold = contact_obb_obb(&obb1, &obb2, &ContactParams::default()).unwrap();
    assert_eq!(manifold.points.len(), 1);
    assert_relative_eq!(manifold.normal, Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(manifold.points[0].dist, 2.6 - 4.0 * s, epsilon = 1.0e-5);
    assert_relative_eq!(
        manifold.points[0].point,
        Point::new(0.0, 1.3, 0.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn separated_boxes_have_no_contact() {
    let params = ContactParams::default();
    let obb1 = unit_box(Point::origin());

    for center in [
        Point::new(2.01, 0.0, 0.0),
        Point::new(0.0, -2.5, 0.0),
        Point::new(1.5, 1.5, 1.5).map(|x| x * 1.4),
    ] {
        let obb2 = unit_box(center);
        assert!(!intersection_test_obb_obb(&obb1, &obb2, &params));
        assert!(contact_obb_obb(&obb1, &obb2, &params).is_none());
    }
}
