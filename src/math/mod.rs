pub mod ordered;
pub mod quadrature;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;
