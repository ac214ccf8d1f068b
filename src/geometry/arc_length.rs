//! Arc length along one interpolated profile segment, and its inverse.

use crate::error::{NumericError, Result};
use crate::geometry::pchip::SegmentCubic;
use crate::math::quadrature;

/// Relative tolerance for the speed integral.
pub const LENGTH_EPSREL: f64 = 1e-3;

const MAX_NEWTON_ITERATIONS: usize = 50;
const NEWTON_STEP_TOL: f64 = 1e-12;

/// Computes the arc length of `z = f(t)` from local 0 to `x_end` by
/// integrating the speed `√(1 + f'(t)²)`.
///
/// `x_end` is usually the segment span but may be any point inside it.
///
/// # Errors
///
/// Returns a [`NumericError`] if the quadrature fails; not expected for
/// finite cubic coefficients.
pub fn segment_length(cubic: &SegmentCubic, x_end: f64) -> Result<f64> {
    quadrature::integrate(
        &|t| cubic.speed(t),
        0.0,
        x_end,
        quadrature::DEFAULT_EPSABS,
        LENGTH_EPSREL,
    )
}

/// Finds the local coordinate `t` at which the arc length from the segment
/// start equals `target_length`.
///
/// Newton iteration on `g(t) = target_length - segment_length(t)`, whose
/// derivative is `-speed(t)` with `speed ≥ 1`, starting from
/// `initial_guess` (arc length roughly tracks the abscissa for gently
/// curving segments, so the target itself is a good start).
///
/// Caller contract: `0 ≤ target_length ≤` total segment length.
///
/// # Errors
///
/// Returns [`NumericError::NoConvergence`] if the iteration does not
/// settle, and propagates quadrature errors.
pub fn distance_to_local_x(
    cubic: &SegmentCubic,
    target_length: f64,
    initial_guess: f64,
) -> Result<f64> {
    let mut t = initial_guess;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let residual = target_length - segment_length(cubic, t)?;
        let step = residual / cubic.speed(t);
        t += step;
        if step.abs() <= NEWTON_STEP_TOL * t.abs().max(1.0) {
            return Ok(t);
        }
    }
    Err(NumericError::NoConvergence {
        iterations: MAX_NEWTON_ITERATIONS,
    }
    .into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn straight(slope: f64, span: f64) -> SegmentCubic {
        SegmentCubic {
            c0: 0.0,
            c1: slope,
            c2: 0.0,
            c3: 0.0,
            span,
        }
    }

    #[test]
    fn flat_segment_length_is_span() {
        let c = straight(0.0, 7.5);
        let len = segment_length(&c, c.span).unwrap();
        assert!((len - 7.5).abs() < TOL);
    }

    #[test]
    fn sloped_segment_length_3_4_5() {
        // Rise 4 over run 3: arc length 5.
        let c = straight(4.0 / 3.0, 3.0);
        let len = segment_length(&c, c.span).unwrap();
        assert!((len - 5.0).abs() < TOL);
    }

    #[test]
    fn partial_length_scales_linearly_on_straight_segment() {
        let c = straight(4.0 / 3.0, 3.0);
        let len = segment_length(&c, 1.5).unwrap();
        assert!((len - 2.5).abs() < TOL);
    }

    #[test]
    fn inverse_recovers_abscissa() {
        let c = straight(4.0 / 3.0, 3.0);
        let t = distance_to_local_x(&c, 5.0, 5.0).unwrap();
        assert!((t - 3.0).abs() < 1e-10);
    }

    #[test]
    fn inverse_at_zero_is_zero() {
        let c = straight(0.3, 10.0);
        let t = distance_to_local_x(&c, 0.0, 0.0).unwrap();
        assert!(t.abs() < TOL);
    }

    #[test]
    fn inverse_roundtrips_on_curved_segment() {
        let c = SegmentCubic {
            c0: 1.0,
            c1: 0.5,
            c2: -0.2,
            c3: 0.01,
            span: 6.0,
        };
        let len = segment_length(&c, 4.0).unwrap();
        let t = distance_to_local_x(&c, len, len).unwrap();
        assert!((t - 4.0).abs() < 1e-9);
    }
}
