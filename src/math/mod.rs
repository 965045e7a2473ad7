pub mod vector;
pub mod sampling;

pub use vector::Vec2;
pub use sampling::linspace;

pub const STANDARD_GRAVITY: f64 = 9.8;

/// Tolerance used when checking closed-form end conditions.
pub const END_TOLERANCE: f64 = 1e-6;
