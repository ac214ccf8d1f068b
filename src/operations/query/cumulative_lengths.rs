use crate::error::Result;
use crate::geometry::arc_length::segment_length;
use crate::geometry::Profile;

/// Computes the cumulative arc length at each control point of a profile.
#[derive(Debug, Default)]
pub struct CumulativeLengths;

impl CumulativeLengths {
    /// Creates a new `CumulativeLengths` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    ///
    /// Returns one value per control point: 0 for the first, then the
    /// running sum of the segment arc lengths. The last value is the total
    /// curve length.
    ///
    /// # Errors
    ///
    /// Propagates quadrature failures; not expected for a valid profile.
    pub fn execute(&self, profile: &Profile) -> Result<Vec<f64>> {
        let mut lengths = Vec::with_capacity(profile.segment_count() + 1);
        lengths.push(0.0);
        let mut total = 0.0;
        for segment in profile.segments() {
            total += segment_length(segment, segment.span)?;
            lengths.push(total);
        }
        Ok(lengths)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    #[test]
    fn starts_at_zero_with_one_entry_per_point() {
        let profile = Profile::from_pairs(&[(0.0, 284.0), (58.0, 280.0), (152.0, 275.0)]).unwrap();
        let lengths = CumulativeLengths::new().execute(&profile).unwrap();
        assert_eq!(lengths.len(), 3);
        assert!((lengths[0] - 0.0).abs() < TOL);
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn collinear_points_sum_chord_lengths() {
        // Two 3-4-5 segments in a straight line.
        let profile = Profile::from_pairs(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]).unwrap();
        let lengths = CumulativeLengths::new().execute(&profile).unwrap();
        assert_relative_eq!(lengths[1], 5.0, epsilon = 1e-10);
        assert_relative_eq!(lengths[2], 10.0, epsilon = 1e-10);
    }

    #[test]
    fn length_exceeds_horizontal_extent() {
        let profile = Profile::from_pairs(&[(0.0, 284.0), (58.0, 280.0), (152.0, 275.0)]).unwrap();
        let lengths = CumulativeLengths::new().execute(&profile).unwrap();
        let total = *lengths.last().unwrap();
        assert!(total > 152.0);
        assert!(total < 154.0);
    }
}
