pub mod descriptor;
pub mod point;
pub mod resample;

pub use descriptor::{directions, normalize};
pub use point::Point;
pub use resample::resample;
