//! Application of the Separating Axis Theorem (SAT) to pairs of oriented boxes.
//!
//! Two convex shapes are disjoint if and only if there exists an axis onto
//! which their projections do not overlap. For two boxes, only 15 axes need
//! to be tested: the three face normals of each box and the nine cross
//! products of one axis of each box.
//!
//! When none of them separates the boxes, the axis with the largest (least
//! negative) separation gives the contact normal and the penetration depth.

pub use self::sat_obb_obb::{
    intersection_test_obb_obb, obb_obb_find_separating_axis, select_axis, AxisFamily,
    SatQuery, SeparatingAxis,
};

mod sat_obb_obb;
