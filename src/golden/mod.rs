pub mod spec;
pub mod vector;

pub use spec::GoldenSpec;
pub use vector::GoldenVector;
