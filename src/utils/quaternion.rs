use crate::math::{Matrix, Quaternion, Real};

/// Converts a quaternion to the rotation matrix it represents.
///
/// The quaternion is used as given: it is not renormalized, so a slightly
/// non-unit input yields the same slightly non-orthonormal matrix the
/// simulation would have built from it. Column `i` of the result is the
/// image of the `i`-th canonical axis.
#[inline]
pub fn quaternion_to_rotation_matrix(q: &Quaternion<Real>) -> Matrix<Real> {
    let (x, y, z, w) = (q.i, q.j, q.k, q.w);
    let x2 = x + x;
    let y2 = y + y;
    let z2 = z + z;
    let xx = x2 * x;
    let yy = y2 * y;
    let zz = z2 * z;
    let xy = x2 * y;
    let xz = x2 * z;
    let xw = x2 * w;
    let yz = y2 * z;
    let yw = y2 * w;
    let zw = z2 * w;

    Matrix::new(
        1.0 - yy - zz,
        xy - zw,
        xz + yw,
        xy + zw,
        1.0 - xx - zz,
        yz - xw,
        xz - yw,
        yz + xw,
        1.0 - xx - yy,
    )
}
