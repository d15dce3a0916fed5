use crate::math::{Real, Vector, DIM};

// NOTE: numbering of the 12 box edges. An edge runs along `axis` and is
//       located by the signs of the two other coordinates, taken in
//       increasing axis order. Index `(neg_first << 1) | neg_second`:
//
//       along x (y, z): (+,+) 0, (+,-) 2, (-,+) 4, (-,-) 6
//       along y (x, z): (+,+) 8, (+,-) 9, (-,+) 11, (-,-) 10
//       along z (x, y): (+,+) 1, (+,-) 7, (-,+) 3, (-,-) 5
//
//       The reference and incident face tables are written against this
//       numbering, so it must not change.
const CUBOID_EDGE_IDS: [[u8; 4]; DIM] = [[0, 2, 4, 6], [8, 9, 11, 10], [1, 7, 3, 5]];

/// Number of edges of a box.
pub const NUM_CUBOID_EDGES: usize = 12;

/// The id of the box edge parallel to `axis` that contains `local_pt`.
///
/// Only the signs of the two coordinates other than `axis` are read; a zero
/// coordinate counts as positive.
pub fn cuboid_edge_id(axis: usize, local_pt: &Vector<Real>) -> u8 {
    let first = (axis + 1) % DIM;
    let second = (axis + 2) % DIM;
    let (first, second) = if first < second {
        (first, second)
    } else {
        (second, first)
    };
    let neg_first = usize::from(local_pt[first] < 0.0);
    let neg_second = usize::from(local_pt[second] < 0.0);

    CUBOID_EDGE_IDS[axis][(neg_first << 1) | neg_second]
}

/// The axis and a sign pattern of the box edge with the given id.
///
/// The returned vector has a zero component along the edge's axis and `±1`
/// on the two other ones.
pub fn cuboid_edge(id: u8) -> Option<(usize, Vector<Real>)> {
    for (axis, ids) in CUBOID_EDGE_IDS.iter().enumerate() {
        if let Some(k) = ids.iter().position(|e| *e == id) {
            let first = if axis == 0 { 1 } else { 0 };
            let second = if axis == 2 { 1 } else { 2 };
            let mut signs = Vector::zeros();
            signs[first] = if k & 0b10 != 0 { -1.0 } else { 1.0 };
            signs[second] = if k & 0b01 != 0 { -1.0 } else { 1.0 };
            return Some((axis, signs));
        }
    }

    None
}
