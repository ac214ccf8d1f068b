use thiserror::Error;

/// Top-level error type for the topolis profile library.
#[derive(Debug, Error)]
pub enum TopolisError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Numeric(#[from] NumericError),
}

/// Errors related to profile construction.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile needs at least 2 control points, got {0}")]
    TooFewControlPoints(usize),

    #[error("control point x values must be strictly increasing: x[{index}] = {value} after {previous}")]
    NotStrictlyIncreasing {
        index: usize,
        value: f64,
        previous: f64,
    },

    #[error("first control point must be at x = 0, got x = {0}")]
    NonZeroOrigin(f64),

    #[error("non-finite coordinate in control point {0}")]
    NonFiniteCoordinate(usize),
}

/// Errors related to distance queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("target distance {value} at index {index} is negative or not finite")]
    InvalidDistance { index: usize, value: f64 },
}

/// Errors from the numerical routines (quadrature, root finding).
#[derive(Debug, Error)]
pub enum NumericError {
    #[error("integrand is not finite on [{a}, {b}]")]
    NonFiniteIntegrand { a: f64, b: f64 },

    #[error("quadrature did not converge within {limit} subdivisions")]
    SubdivisionLimit { limit: usize },

    #[error("root finder did not converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

/// Convenience type alias for results using [`TopolisError`].
pub type Result<T> = std::result::Result<T, TopolisError>;
