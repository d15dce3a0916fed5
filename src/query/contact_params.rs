use crate::math::{Real, DEFAULT_EPSILON};

/// Tolerance on `|cos(angle)|` above which two box axes are considered parallel.
pub const DEFAULT_COS_TOLERANCE: Real = 1.0e-6;
/// Relative weight applied to a challenger separation before it may replace a face axis.
pub const DEFAULT_RELATIVE_TOLERANCE: Real = 0.95;
/// Absolute margin a challenger separation must beat a face axis by.
pub const DEFAULT_ABSOLUTE_TOLERANCE: Real = 0.01;
/// Half-width of the band around a side plane treated as "in front" while clipping.
pub const DEFAULT_CLIP_EPSILON: Real = 0.005;

/// Tunable constants of the box-box contact generation.
///
/// These values change which axis wins the separating-axis test and which
/// clipped vertices survive, so they directly change the contacts a solver
/// sees. The defaults favour face contacts over edge contacts when both are
/// close, which keeps stacked boxes stable.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactParams {
    /// Two axes `a`, `b` are parallel when `|a·b| + cos_tolerance >= 1`. Edge axes are
    /// skipped entirely as soon as one such pair exists.
    pub cos_tolerance: Real,
    /// See [`crate::query::sat::select_axis`].
    pub relative_tolerance: Real,
    /// See [`crate::query::sat::select_axis`].
    pub absolute_tolerance: Real,
    /// Vertices closer than this to a side plane are kept while clipping.
    pub clip_epsilon: Real,
    /// Below this determinant, the edge-edge closest point system is treated as singular.
    pub parallel_edge_epsilon: Real,
}

impl Default for ContactParams {
    fn default() -> Self {
        Self {
            cos_tolerance: DEFAULT_COS_TOLERANCE,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            absolute_tolerance: DEFAULT_ABSOLUTE_TOLERANCE,
            clip_epsilon: DEFAULT_CLIP_EPSILON,
            parallel_edge_epsilon: DEFAULT_EPSILON,
        }
    }
}

impl ContactParams {
    /// Sets the parallel-axis tolerance.
    pub fn with_cos_tolerance(mut self, cos_tolerance: Real) -> Self {
        self.cos_tolerance = cos_tolerance;
        self
    }

    /// Sets the relative and absolute tolerances of the axis selection.
    pub fn with_axis_bias(mut self, relative_tolerance: Real, absolute_tolerance: Real) -> Self {
        self.relative_tolerance = relative_tolerance;
        self.absolute_tolerance = absolute_tolerance;
        self
    }

    /// Sets the clipping band half-width.
    pub fn with_clip_epsilon(mut self, clip_epsilon: Real) -> Self {
        self.clip_epsilon = clip_epsilon;
        self
    }

    /// Sets the singularity threshold of the edge-edge resolver.
    pub fn with_parallel_edge_epsilon(mut self, parallel_edge_epsilon: Real) -> Self {
        self.parallel_edge_epsilon = parallel_edge_epsilon;
        self
    }
}
