pub mod distance;
pub mod matrix;
pub mod vector;

pub use distance::DistanceMetric;
pub use matrix::Matrix;
pub use vector::argmax;
