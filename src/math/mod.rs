pub mod matrix;
pub mod source;

pub use matrix::Matrix;
pub use source::UniformSource;
