mod cumulative_lengths;
mod resolve;

pub use cumulative_lengths::CumulativeLengths;
pub use resolve::ResolveDistances;
