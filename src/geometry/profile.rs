use crate::error::{ProfileError, Result};
use crate::geometry::pchip::{self, SegmentCubic};
use crate::math::ordered;

/// A known (x, z) sample of a terrain profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub x: f64,
    pub z: f64,
}

impl ControlPoint {
    /// Creates a new control point.
    #[must_use]
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// An immutable elevation profile `z = f(x)` through validated control
/// points, interpolated with a shape-preserving monotone cubic.
///
/// Invariants established at construction: at least 2 control points, x
/// strictly increasing, first x exactly 0, all coordinates finite. The
/// per-segment interpolant cubics are precomputed.
#[derive(Debug, Clone)]
pub struct Profile {
    points: Vec<ControlPoint>,
    knots: Vec<f64>,
    segments: Vec<SegmentCubic>,
}

impl Profile {
    /// Creates a profile from its control points.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if fewer than 2 points are given, any
    /// coordinate is non-finite, the first x is not 0, or x values are not
    /// strictly increasing.
    pub fn new(points: Vec<ControlPoint>) -> Result<Self> {
        if points.len() < 2 {
            return Err(ProfileError::TooFewControlPoints(points.len()).into());
        }
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.z.is_finite() {
                return Err(ProfileError::NonFiniteCoordinate(i).into());
            }
        }
        if points[0].x != 0.0 {
            return Err(ProfileError::NonZeroOrigin(points[0].x).into());
        }
        for i in 1..points.len() {
            if points[i].x <= points[i - 1].x {
                return Err(ProfileError::NotStrictlyIncreasing {
                    index: i,
                    value: points[i].x,
                    previous: points[i - 1].x,
                }
                .into());
            }
        }

        let knots: Vec<f64> = points.iter().map(|p| p.x).collect();
        let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
        let segments = pchip::segment_cubics(&knots, &zs);
        Ok(Self {
            points,
            knots,
            segments,
        })
    }

    /// Convenience constructor from `(x, z)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Profile::new`].
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(x, z)| ControlPoint::new(x, z))
                .collect(),
        )
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Returns the knot vector (the x values of the control points).
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the per-segment interpolant cubics, in order.
    #[must_use]
    pub fn segments(&self) -> &[SegmentCubic] {
        &self.segments
    }

    /// Returns the number of segments (`control point count - 1`).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Evaluates the interpolant at global coordinate `x`.
    ///
    /// The containing segment is located by binary search; x outside the
    /// knot range is evaluated on the nearest boundary segment, so tiny
    /// round-off past the last knot extrapolates smoothly.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let idx = ordered::insertion_index(&self.knots, &x);
        let i = idx.saturating_sub(1).min(self.segments.len() - 1);
        self.segments[i].value(x - self.knots[i])
    }
}
