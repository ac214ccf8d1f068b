pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, TopolisError};
