//! Shape-preserving monotone cubic interpolation (Fritsch-Carlson).
//!
//! Produces one cubic per knot interval, expressed in the interval-local
//! frame `t = x - x_start`, `t ∈ [0, span]`. The knot slopes are the
//! weighted harmonic means of the neighbouring secants, zeroed where the
//! secants change sign, which keeps each piece free of overshoot between
//! monotone samples.

/// A cubic `f(t) = c0 + c1·t + c2·t² + c3·t³` over the local interval
/// `[0, span]` of one profile segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCubic {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    /// Local-coordinate length of the segment (knot spacing), > 0.
    pub span: f64,
}

impl SegmentCubic {
    /// Evaluates the cubic at local coordinate `t`.
    #[must_use]
    pub fn value(&self, t: f64) -> f64 {
        ((self.c3 * t + self.c2) * t + self.c1) * t + self.c0
    }

    /// Evaluates the derivative `f'(t)`.
    #[must_use]
    pub fn slope(&self, t: f64) -> f64 {
        (3.0 * self.c3 * t + 2.0 * self.c2) * t + self.c1
    }

    /// Evaluates the speed `√(1 + f'(t)²)` of the curve `(t, f(t))`.
    ///
    /// Always ≥ 1.
    #[must_use]
    pub fn speed(&self, t: f64) -> f64 {
        let s = self.slope(t);
        (1.0 + s * s).sqrt()
    }
}

/// Computes monotonicity-preserving knot slopes for `z = f(x)`.
///
/// Interior knots use the weighted harmonic mean of the two secants
/// (`(w1 + w2) / (w1/m₀ + w2/m₁)` with `w1 = 2h₁ + h₀`, `w2 = h₁ + 2h₀`),
/// forced to zero where the secants vanish or change sign. Endpoints use a
/// one-sided three-point estimate limited to preserve shape. Two points
/// degenerate to the straight line.
///
/// Caller contract: `xs.len() == zs.len() >= 2`, `xs` strictly increasing.
#[must_use]
pub fn monotone_slopes(xs: &[f64], zs: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let m: Vec<f64> = h
        .iter()
        .enumerate()
        .map(|(i, hi)| (zs[i + 1] - zs[i]) / hi)
        .collect();

    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let m0 = m[k - 1];
        let m1 = m[k];
        if m0 == 0.0 || m1 == 0.0 || (m0 > 0.0) != (m1 > 0.0) {
            d[k] = 0.0;
        } else {
            let w1 = 2.0 * h[k] + h[k - 1];
            let w2 = h[k] + 2.0 * h[k - 1];
            d[k] = (w1 + w2) / (w1 / m0 + w2 / m1);
        }
    }
    d[0] = edge_slope(h[0], h[1], m[0], m[1]);
    d[n - 1] = edge_slope(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
    d
}

/// One-sided three-point slope estimate at a boundary knot, limited so the
/// interpolant stays shape-preserving next to the boundary.
fn edge_slope(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if sign(d) != sign(m0) {
        0.0
    } else if sign(m0) != sign(m1) && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Builds the per-segment local cubics of the monotone interpolant.
///
/// Caller contract as for [`monotone_slopes`].
#[must_use]
pub fn segment_cubics(xs: &[f64], zs: &[f64]) -> Vec<SegmentCubic> {
    let d = monotone_slopes(xs, zs);
    (0..xs.len() - 1)
        .map(|i| {
            let span = xs[i + 1] - xs[i];
            let secant = (zs[i + 1] - zs[i]) / span;
            let t = (d[i] + d[i + 1] - 2.0 * secant) / span;
            SegmentCubic {
                c0: zs[i],
                c1: d[i],
                c2: (secant - d[i]) / span - t,
                c3: t / span,
                span,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn two_points_give_straight_line() {
        let cubics = segment_cubics(&[0.0, 4.0], &[1.0, 9.0]);
        assert_eq!(cubics.len(), 1);
        let c = cubics[0];
        assert!((c.value(2.0) - 5.0).abs() < TOL);
        assert!((c.slope(2.0) - 2.0).abs() < TOL);
        assert!(c.c2.abs() < TOL && c.c3.abs() < TOL);
    }

    #[test]
    fn reproduces_knot_values() {
        let xs = [0.0, 1.0, 3.0, 4.5, 7.0];
        let zs = [0.0, 2.0, 2.5, 1.0, -3.0];
        let cubics = segment_cubics(&xs, &zs);
        for (i, c) in cubics.iter().enumerate() {
            assert!((c.value(0.0) - zs[i]).abs() < TOL);
            assert!((c.value(c.span) - zs[i + 1]).abs() < 1e-10);
        }
    }

    #[test]
    fn no_overshoot_between_monotone_samples() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let zs = [0.0, 0.1, 0.2, 5.0, 5.1];
        let cubics = segment_cubics(&xs, &zs);
        for (i, c) in cubics.iter().enumerate() {
            let (lo, hi) = (zs[i].min(zs[i + 1]), zs[i].max(zs[i + 1]));
            for k in 1..20 {
                let t = c.span * f64::from(k) / 20.0;
                let v = c.value(t);
                assert!(v >= lo - TOL && v <= hi + TOL, "overshoot at {t}: {v}");
            }
        }
    }

    #[test]
    fn flat_data_has_zero_slope() {
        let d = monotone_slopes(&[0.0, 1.0, 2.0], &[3.0, 3.0, 3.0]);
        assert!(d.iter().all(|s| s.abs() < TOL));
    }

    #[test]
    fn local_extremum_gets_zero_slope() {
        // Secants change sign at the middle knot.
        let d = monotone_slopes(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]);
        assert!(d[1].abs() < TOL);
    }

    #[test]
    fn speed_is_at_least_one() {
        let cubics = segment_cubics(&[0.0, 2.0, 5.0], &[0.0, 3.0, -1.0]);
        for c in &cubics {
            for k in 0..=10 {
                let t = c.span * f64::from(k) / 10.0;
                assert!(c.speed(t) >= 1.0);
            }
        }
    }
}
