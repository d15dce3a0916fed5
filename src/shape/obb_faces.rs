//! Reference and incident faces of an oriented box.

use crate::math::{Matrix, Point, Real, Vector, DIM};
use crate::shape::{FeatureId, Obb};

/// How to build the reference face of a box for one `(axis, sign)` case.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReferenceFaceCase {
    /// Edges bounding the face, in side plane order `+u`, `+v`, `-u`, `-v`.
    pub clip_edges: [u8; 4],
    /// Which half-extent of the box lies along each basis column.
    pub extents: [usize; DIM],
    /// Each basis column as a signed local axis of the box. The last one is the face normal.
    pub basis: [(usize, Real); DIM],
}

/// The four vertices of one face of a box, and the edges joining them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IncidentFaceCase {
    /// Vertex sign patterns, to be multiplied by the box half-extents.
    pub vertices: [[Real; DIM]; 4],
    /// `(in, out)` edges of each vertex. The `out` edge of a vertex is the `in` edge of the next.
    pub edges: [(u8, u8); 4],
}

const fn reference(
    clip_edges: [u8; 4],
    extents: [usize; DIM],
    basis: [(usize, Real); DIM],
) -> ReferenceFaceCase {
    ReferenceFaceCase {
        clip_edges,
        extents,
        basis,
    }
}

/// Reference face cases, indexed by `[axis][normal component > 0]`.
pub const REFERENCE_FACES: [[ReferenceFaceCase; 2]; DIM] = [
    [
        reference([11, 3, 10, 5], [2, 1, 0], [(2, 1.0), (1, 1.0), (0, -1.0)]),
        reference([1, 8, 7, 9], [1, 2, 0], [(1, 1.0), (2, 1.0), (0, 1.0)]),
    ],
    [
        reference([4, 5, 6, 7], [2, 0, 1], [(2, 1.0), (0, -1.0), (1, -1.0)]),
        reference([0, 1, 2, 3], [2, 0, 1], [(2, 1.0), (0, 1.0), (1, 1.0)]),
    ],
    [
        reference([6, 10, 2, 9], [1, 0, 2], [(1, -1.0), (0, -1.0), (2, -1.0)]),
        // NOTE: these labels are shifted by one plane with respect to the
        //       geometry. Contacts only need them to be stable.
        reference([11, 4, 8, 0], [1, 0, 2], [(1, -1.0), (0, 1.0), (2, 1.0)]),
    ],
];

/// Incident face cases, indexed by `[axis][normal component > 0]`.
pub const INCIDENT_FACES: [[IncidentFaceCase; 2]; DIM] = [
    [
        IncidentFaceCase {
            vertices: [
                [-1.0, -1.0, 1.0],
                [-1.0, 1.0, 1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, -1.0, -1.0],
            ],
            edges: [(5, 11), (11, 3), (3, 10), (10, 5)],
        },
        IncidentFaceCase {
            vertices: [
                [1.0, 1.0, -1.0],
                [1.0, 1.0, 1.0],
                [1.0, -1.0, 1.0],
                [1.0, -1.0, -1.0],
            ],
            edges: [(9, 1), (1, 8), (8, 7), (7, 9)],
        },
    ],
    [
        IncidentFaceCase {
            vertices: [
                [1.0, -1.0, 1.0],
                [-1.0, -1.0, 1.0],
                [-1.0, -1.0, -1.0],
                [1.0, -1.0, -1.0],
            ],
            edges: [(7, 4), (4, 5), (5, 6), (6, 7)],
        },
        IncidentFaceCase {
            vertices: [
                [-1.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 1.0, -1.0],
                [-1.0, 1.0, -1.0],
            ],
            edges: [(3, 0), (0, 1), (1, 2), (2, 3)],
        },
    ],
    [
        IncidentFaceCase {
            vertices: [
                [1.0, -1.0, -1.0],
                [-1.0, -1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [1.0, 1.0, -1.0],
            ],
            edges: [(9, 6), (6, 10), (10, 2), (2, 9)],
        },
        IncidentFaceCase {
            vertices: [
                [-1.0, 1.0, 1.0],
                [-1.0, -1.0, 1.0],
                [1.0, -1.0, 1.0],
                [1.0, 1.0, 1.0],
            ],
            edges: [(0, 11), (11, 4), (4, 8), (8, 0)],
        },
    ],
];

/// A vertex of the polygon being clipped, tagged with the features that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipVertex {
    /// The vertex position.
    pub point: Point<Real>,
    /// The features this vertex lies on.
    pub feature: FeatureId,
}

/// The face of a box that incident vertices are clipped against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReferenceFace {
    /// Center of the box owning the face.
    pub center: Point<Real>,
    /// World-space frame of the face: columns `u`, `v` span the face, column `2` is its outward normal.
    pub basis: Matrix<Real>,
    /// Half-extents of the box along each column of `basis`.
    pub extents: Vector<Real>,
    /// Edges bounding the face, in side plane order `+u`, `+v`, `-u`, `-v`.
    pub clip_edges: [u8; 4],
}

impl Obb {
    /// The face of this box whose normal is local axis `axis`, on the side pointed to by `dir`.
    ///
    /// `dir` is a world-space direction, normally the contact normal oriented
    /// away from this box. Only the sign of its component along `axis` matters.
    pub fn reference_face(&self, axis: usize, dir: &Vector<Real>) -> ReferenceFace {
        let local_dir = self.inverse_transform_vector(dir);
        let case = &REFERENCE_FACES[axis][usize::from(local_dir[axis] > 0.0)];

        let [(a0, s0), (a1, s1), (a2, s2)] = case.basis;
        let basis =
            Matrix::from_columns(&[self.axis(a0) * s0, self.axis(a1) * s1, self.axis(a2) * s2]);
        let extents = Vector::new(
            self.half_extents[case.extents[0]],
            self.half_extents[case.extents[1]],
            self.half_extents[case.extents[2]],
        );

        ReferenceFace {
            center: self.center,
            basis,
            extents,
            clip_edges: case.clip_edges,
        }
    }

    /// The face of this box most anti-parallel to `dir`, as four world-space vertices.
    ///
    /// Each vertex carries the two box edges meeting at it in the
    /// `in_incident`/`out_incident` slots of its feature id.
    pub fn incident_face(&self, dir: &Vector<Real>) -> [ClipVertex; 4] {
        let local_dir = -self.inverse_transform_vector(dir);
        let axis = dominant_axis(&local_dir);
        let case = &INCIDENT_FACES[axis][usize::from(local_dir[axis] > 0.0)];

        let vertex = |k: usize| {
            let signs = Vector::from(case.vertices[k]);
            let (in_edge, out_edge) = case.edges[k];
            ClipVertex {
                point: self.transform_point(&signs.component_mul(&self.half_extents).into()),
                feature: FeatureId::incident(in_edge, out_edge),
            }
        };

        [vertex(0), vertex(1), vertex(2), vertex(3)]
    }
}

// Ties go to the last axis.
fn dominant_axis(v: &Vector<Real>) -> usize {
    let abs = v.abs();

    if abs.x > abs.y && abs.x > abs.z {
        0
    } else if abs.y > abs.x && abs.y > abs.z {
        1
    } else {
        2
    }
}
