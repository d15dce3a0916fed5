use crate::math::{Matrix, Real, Vector, DIM};
use crate::query::ContactParams;
use crate::shape::Obb;

/// One of the 15 candidate separating axes of a pair of boxes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeparatingAxis {
    /// The `i`-th face normal of the first box.
    FaceA(usize),
    /// The `i`-th face normal of the second box.
    FaceB(usize),
    /// The cross product of the `i`-th axis of the first box with the `j`-th axis of the second box.
    Edge(usize, usize),
}

impl SeparatingAxis {
    /// The index of this axis in `0..15`.
    ///
    /// Faces of the first box are `0..3`, faces of the second box `3..6` and
    /// the edge pair `(i, j)` is `6 + 3 * i + j`.
    pub fn index(self) -> usize {
        match self {
            SeparatingAxis::FaceA(i) => i,
            SeparatingAxis::FaceB(i) => DIM + i,
            SeparatingAxis::Edge(i, j) => 2 * DIM + DIM * i + j,
        }
    }

    /// The axis with the given index, if it lies in `0..15`.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0..=2 => Some(SeparatingAxis::FaceA(index)),
            3..=5 => Some(SeparatingAxis::FaceB(index - DIM)),
            6..=14 => {
                let k = index - 2 * DIM;
                Some(SeparatingAxis::Edge(k / DIM, k % DIM))
            }
            _ => None,
        }
    }

    /// Is this a face normal of either box?
    pub fn is_face(self) -> bool {
        !matches!(self, SeparatingAxis::Edge(..))
    }
}

/// The family of axes chosen by [`select_axis`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AxisFamily {
    /// A face normal of the first box.
    FaceA,
    /// A face normal of the second box.
    FaceB,
    /// An edge-edge cross product.
    Edge,
}

/// The axis of least penetration between two overlapping boxes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SatQuery {
    /// Which of the 15 axes was selected.
    pub axis: SeparatingAxis,
    /// The signed separation along that axis. Never positive.
    pub separation: Real,
    /// The world-space unit axis, pointing from the first box toward the second.
    pub normal: Vector<Real>,
}

#[derive(Copy, Clone, Debug)]
struct AxisCandidate {
    axis: SeparatingAxis,
    separation: Real,
    normal: Vector<Real>,
}

// Running maximum of the separations of one axis family.
struct AxisTracker {
    best: Option<AxisCandidate>,
}

impl AxisTracker {
    fn new() -> Self {
        Self { best: None }
    }

    fn separation(&self) -> Real {
        self.best.map(|b| b.separation).unwrap_or(-Real::MAX)
    }

    /// Returns `true` if `separation` proves the boxes are disjoint.
    fn track_face(&mut self, axis: SeparatingAxis, separation: Real, normal: Vector<Real>) -> bool {
        if separation > 0.0 {
            return true;
        }

        if separation > self.separation() {
            self.best = Some(AxisCandidate {
                axis,
                separation,
                normal,
            });
        }

        false
    }

    /// Same as `track_face` but `local_normal` is an unnormalized axis
    /// expressed in the frame `rotation`: the separation is rescaled by its
    /// length before being compared.
    fn track_edge(
        &mut self,
        axis: SeparatingAxis,
        separation: Real,
        local_normal: Vector<Real>,
        rotation: &Matrix<Real>,
    ) -> bool {
        if separation > 0.0 {
            return true;
        }

        let inv_len = 1.0 / local_normal.norm();
        let separation = separation * inv_len;

        if separation > self.separation() {
            self.best = Some(AxisCandidate {
                axis,
                separation,
                normal: rotation * (local_normal * inv_len),
            });
        }

        false
    }
}

/// Picks the axis family used to build the contact manifold.
///
/// An edge axis only wins if `relative_tolerance * edge` beats the best face
/// separation by more than `absolute_tolerance`; likewise a face of the
/// second box must beat the faces of the first box by the same margin.
/// Face contacts yield up to eight points and are much more stable for a
/// solver than a single edge-edge point, hence this bias.
pub fn select_axis(
    face_a: Real,
    face_b: Real,
    edge: Real,
    params: &ContactParams,
) -> AxisFamily {
    let face_max = face_a.max(face_b);

    if params.relative_tolerance * edge > face_max + params.absolute_tolerance {
        AxisFamily::Edge
    } else if params.relative_tolerance * face_b > face_a + params.absolute_tolerance {
        AxisFamily::FaceB
    } else {
        AxisFamily::FaceA
    }
}

/// Runs the separating-axis test between two boxes.
///
/// Returns `None` as soon as one of the 15 axes separates the boxes.
/// Otherwise returns the selected axis (see [`select_axis`]) with its
/// separation and a normal oriented from `obb1` toward `obb2`.
///
/// Edge axes are not tested at all when any axis of `obb1` is parallel to
/// any axis of `obb2` (within `params.cos_tolerance`): their cross products
/// would then be close to zero and the face axes already cover that case.
pub fn obb_obb_find_separating_axis(
    obb1: &Obb,
    obb2: &Obb,
    params: &ContactParams,
) -> Option<SatQuery> {
    let e1 = obb1.half_extents;
    let e2 = obb2.half_extents;
    let v = obb2.center - obb1.center;

    // obb2's axes expressed in obb1's frame: c[(i, j)] = a_i · b_j.
    let c = obb1.rotation.tr_mul(&obb2.rotation);
    let abs_c = c.abs();
    let parallel = abs_c.iter().any(|cos| *cos + params.cos_tolerance >= 1.0);

    // Center-to-center vector in the frames of obb1 and obb2.
    let t = obb1.inverse_transform_vector(&v);
    let t2 = c.tr_mul(&t);
    let r2_on_faces1 = abs_c * e2;
    let r1_on_faces2 = abs_c.tr_mul(&e1);

    let mut faces1 = AxisTracker::new();
    let mut faces2 = AxisTracker::new();
    let mut edges = AxisTracker::new();

    for i in 0..DIM {
        let s = t[i].abs() - (e1[i] + r2_on_faces1[i]);
        if faces1.track_face(SeparatingAxis::FaceA(i), s, obb1.axis(i)) {
            return None;
        }
    }

    for j in 0..DIM {
        let s = t2[j].abs() - (e2[j] + r1_on_faces2[j]);
        if faces2.track_face(SeparatingAxis::FaceB(j), s, obb2.axis(j)) {
            return None;
        }
    }

    if !parallel {
        for i in 0..DIM {
            let i1 = (i + 1) % DIM;
            let i2 = (i + 2) % DIM;

            for j in 0..DIM {
                let j1 = (j + 1) % DIM;
                let j2 = (j + 2) % DIM;

                let r1 = e1[i1] * abs_c[(i2, j)] + e1[i2] * abs_c[(i1, j)];
                let r2 = e2[j1] * abs_c[(i, j2)] + e2[j2] * abs_c[(i, j1)];
                let s = (t[i2] * c[(i1, j)] - t[i1] * c[(i2, j)]).abs() - (r1 + r2);

                // a_i × b_j, in obb1's frame.
                let mut local_normal = Vector::zeros();
                local_normal[i1] = -c[(i2, j)];
                local_normal[i2] = c[(i1, j)];

                if edges.track_edge(SeparatingAxis::Edge(i, j), s, local_normal, &obb1.rotation)
                {
                    return None;
                }
            }
        }
    }

    let best = match select_axis(
        faces1.separation(),
        faces2.separation(),
        edges.separation(),
        params,
    ) {
        AxisFamily::FaceA => faces1.best,
        AxisFamily::FaceB => faces2.best,
        AxisFamily::Edge => edges.best,
    }?;

    let normal = if best.normal.dot(&v) < 0.0 {
        -best.normal
    } else {
        best.normal
    };

    Some(SatQuery {
        axis: best.axis,
        separation: best.separation,
        normal,
    })
}

/// Tests whether two boxes overlap.
#[inline]
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb, params: &ContactParams) -> bool {
    obb_obb_find_separating_axis(obb1, obb2, params).is_some()
}
