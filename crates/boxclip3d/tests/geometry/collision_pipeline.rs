use boxclip3d::math::{Matrix, Point, Real, Vector};
use boxclip3d::partitioning::{BruteForceBroadPhase, CandidatePair, SweepAndPrune};
use boxclip3d::pipeline::{BoxBodies, CollisionPipeline, ContactBuffer};
use boxclip3d::query::{CollisionError, ContactPair, ContactParams};
use boxclip3d::utils::quaternion_to_rotation_matrix;
use na::UnitQuaternion;

#[test]
fn stacked_boxes() {
    let positions = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 1.9, 0.0),
        Point::new(0.0, 3.8, 0.0),
        Point::new(10.0, 0.0, 0.0),
    ];
    let rotations = [Matrix::identity(); 4];
    let half_extents = [Vector::repeat(1.0); 4];
    let bodies = BoxBodies::new(&positions, &rotations, &half_extents);

    let mut pipeline = CollisionPipeline::<SweepAndPrune>::default();
    let pairs = pipeline.step(&bodies).unwrap();

    // The isolated box makes x the axis of largest spread. Only the two
    // contacts of the stack survive the broad phase.
    assert_eq!(pipeline.broad_phase().sweep_axis(), 0);
    assert_eq!(
        pipeline.candidates(),
        &[CandidatePair::new(0, 1), CandidatePair::new(1, 2)]
    );

    assert_eq!(pairs.len(), 2);
    assert_eq!((pairs[0].body1, pairs[0].body2), (0, 1));
    assert_eq!((pairs[1].body1, pairs[1].body2), (1, 2));

    for pair in &pairs {
        assert_relative_eq!(pair.manifold.normal, Vector::y(), epsilon = 1.0e-6);
        assert_eq!(pair.manifold.num_points(), 4);
        for contact in &pair.manifold.points {
            assert_relative_eq!(contact.dist, -0.1, epsilon = 1.0e-5);
        }
    }

    let buffer = ContactBuffer::from_pairs(&pairs);
    assert_eq!(buffer.offsets, vec![0, 4, 8]);
    assert_eq!(buffer.normals.len(), 2);
    assert_eq!(buffer.contacts(1), &pairs[1].manifold.points[..]);
}

fn random_scene(seed: u64, len: usize) -> (Vec<Point<Real>>, Vec<Matrix<Real>>, Vec<Vector<Real>>) {
    let mut rng = oorandom::Rand32::new(seed);
    let mut unit = || rng.rand_float() as Real;

    let mut positions = Vec::new();
    let mut rotations = Vec::new();
    let mut half_extents = Vec::new();

    for _ in 0..len {
        positions.push(Point::new(unit() * 10.0, unit() * 10.0, unit() * 10.0));
        half_extents.push(Vector::new(unit(), unit(), unit()) * 0.8 + Vector::repeat(0.2));
        let rotation = UnitQuaternion::from_euler_angles(unit() * 6.0, unit() * 6.0, unit() * 6.0);
        rotations.push(quaternion_to_rotation_matrix(rotation.quaternion()));
    }

    (positions, rotations, half_extents)
}

fn body_pairs(pairs: &[ContactPair]) -> Vec<(u32, u32)> {
    pairs.iter().map(|p| (p.body1, p.body2)).collect()
}

#[test]
fn broad_phases_agree() {
    let (positions, rotations, half_extents) = random_scene(42, 200);
    let bodies = BoxBodies::new(&positions, &rotations, &half_extents);

    let mut sap = CollisionPipeline::<SweepAndPrune>::default();
    let mut brute_force =
        CollisionPipeline::new(BruteForceBroadPhase::new(), ContactParams::default());

    let mut sap_pairs = sap.step(&bodies).unwrap();
    let mut brute_force_pairs = brute_force.step(&bodies).unwrap();
    assert!(!sap_pairs.is_empty());

    sap_pairs.sort_by_key(|p| (p.body1, p.body2));
    brute_force_pairs.sort_by_key(|p| (p.body1, p.body2));
    assert_eq!(body_pairs(&sap_pairs), body_pairs(&brute_force_pairs));
    assert_eq!(sap_pairs, brute_force_pairs);

    let buffer = ContactBuffer::from_pairs(&sap_pairs);
    assert_eq!(buffer.num_pairs(), sap_pairs.len());
    assert_eq!(buffer.offsets.len(), sap_pairs.len() + 1);
    assert_eq!(buffer.offsets.last(), Some(&buffer.points.len()));
    assert!(buffer.offsets.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn repeated_steps_are_deterministic() {
    let (positions, rotations, half_extents) = random_scene(7, 100);
    let bodies = BoxBodies::new(&positions, &rotations, &half_extents);
    let mut pipeline = CollisionPipeline::new(SweepAndPrune::new(), ContactParams::default());

    let first = pipeline.step(&bodies).unwrap();
    let second = pipeline.step(&bodies).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mismatched_inputs_are_rejected() {
    let positions = [Point::origin(), Point::new(1.0, 0.0, 0.0)];
    let rotations = [Matrix::identity()];
    let half_extents = [Vector::repeat(1.0); 2];
    let bodies = BoxBodies::new(&positions, &rotations, &half_extents);

    let mut pipeline = CollisionPipeline::<SweepAndPrune>::default();
    assert_eq!(
        pipeline.step(&bodies),
        Err(CollisionError::LengthMismatch {
            positions: 2,
            rotations: 1,
            half_extents: 2,
        })
    );
}
