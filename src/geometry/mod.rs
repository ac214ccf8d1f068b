pub mod arc_length;
pub mod pchip;
pub mod profile;

pub use pchip::SegmentCubic;
pub use profile::{ControlPoint, Profile};
