use crate::error::{QueryError, Result};
use crate::geometry::arc_length::{distance_to_local_x, segment_length};
use crate::geometry::Profile;
use crate::math::Point2;

/// Resolves distances measured along a profile curve to (x, z) points.
///
/// Distances are sorted ascending before resolution and the output is
/// aligned to that sorted order. Distances beyond the total curve length
/// yield `(NaN, NaN)` entries rather than an error, so a batch can
/// partially succeed.
#[derive(Debug, Clone)]
pub struct ResolveDistances {
    distances: Vec<f64>,
}

impl ResolveDistances {
    /// Creates a new `ResolveDistances` query from target distances
    /// (measured from the curve start, in any order).
    #[must_use]
    pub fn new(distances: Vec<f64>) -> Self {
        Self { distances }
    }

    /// Executes the query, returning one point per sorted target distance.
    ///
    /// A single cursor walks the segments while distances are consumed in
    /// ascending order; each advance subtracts the consumed segment length
    /// from the remaining distances, so every distance is compared to its
    /// current segment in segment-local terms. A distance exactly on a
    /// segment boundary resolves within the earlier segment (`<=`
    /// comparison).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidDistance`] for a negative or
    /// non-finite target distance, and propagates numerical failures from
    /// the quadrature or root finder.
    pub fn execute(&self, profile: &Profile) -> Result<Vec<Point2>> {
        for (index, &value) in self.distances.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(QueryError::InvalidDistance { index, value }.into());
            }
        }

        let mut distances = self.distances.clone();
        distances.sort_by(f64::total_cmp);

        let segments = profile.segments();
        let mut lengths = Vec::with_capacity(segments.len());
        for segment in segments {
            lengths.push(segment_length(segment, segment.span)?);
        }

        let knots = profile.knots();
        let mut points = vec![Point2::new(f64::NAN, f64::NAN); distances.len()];
        let mut i = 0;
        let mut j = 0;
        while i < distances.len() {
            if distances[i] <= lengths[j] {
                let local = distance_to_local_x(&segments[j], distances[i], distances[i])?;
                let x = knots[j] + local;
                points[i] = Point2::new(x, profile.evaluate(x));
                i += 1;
            } else if j < lengths.len() - 1 {
                // Re-express the remaining distances relative to the next
                // segment's start.
                let consumed = lengths[j];
                for d in &mut distances[i..] {
                    *d -= consumed;
                }
                j += 1;
            } else {
                // Past the end of the curve; the rest of the sorted batch
                // stays (NaN, NaN).
                break;
            }
        }
        Ok(points)
    }
}
