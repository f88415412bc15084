use crate::util::gg_float::Float;

/// Tolerance used by [`AlmostEq`](crate::core::assert::AlmostEq) comparisons.
pub const EPSILON: Float = 1e-5;
/// Added to the length in [`Vec2::normed`](crate::util::linalg::Vec2::normed) so that the zero
/// vector normalises to (almost) zero instead of dividing by zero.
///
/// This is the smallest positive *normal* value: `1 / MIN_POSITIVE` is still finite, so
/// `0 * (1 / MIN_POSITIVE)` stays zero.
pub const NORMALISE_EPSILON: Float = Float::MIN_POSITIVE;
/// Below this angle (radians) slerp falls back to lerp.
pub const SLERP_LINEAR_THRESHOLD: Float = 1e-3;
