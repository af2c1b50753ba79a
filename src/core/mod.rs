pub mod sample_data;
pub mod types;

pub use sample_data::sample_points;
pub use types::{Point, Viewport};
