//! Various unsorted geometrical and logical operators.

pub use self::quaternion::quaternion_to_rotation_matrix;
pub use self::sorted_pair::SortedPair;

mod quaternion;
mod sorted_pair;
