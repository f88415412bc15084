pub mod aabb;
pub mod linalg;
pub mod log;
pub mod transform;

/// Scalar type and elementary functions shared by every geometry type.
///
/// The wrappers are thin on purpose: they exist so that all geometry code goes through one
/// [`Float`] type and one set of NaN conventions, and so that switching the crate to `f64`
/// (cargo feature `f64`) is a single build-time decision.
pub mod gg_float {
    use crate::util::aabb::Aabb;
    use crate::util::linalg::Vec2;
    use crate::util::transform::Transform;
    use std::num::FpCategory;

    #[cfg(not(feature = "f64"))]
    pub type Float = f32;
    #[cfg(feature = "f64")]
    pub type Float = f64;

    #[cfg(not(feature = "f64"))]
    pub use std::f32::consts;
    #[cfg(feature = "f64")]
    pub use std::f64::consts;

    /// Sentinel for "no hit", see [`Aabb::segment_query`].
    pub const INFINITY: Float = Float::INFINITY;

    /// NaN and infinity predicates lifted to the geometry types.
    ///
    /// A value is finite if every component is finite, and NaN if any component is NaN.
    pub trait GgFloat {
        fn is_finite(&self) -> bool;
        fn is_nan(&self) -> bool;
    }

    impl GgFloat for Float {
        fn is_finite(&self) -> bool {
            !matches!(self.classify(), FpCategory::Nan | FpCategory::Infinite)
        }
        fn is_nan(&self) -> bool {
            matches!(self.classify(), FpCategory::Nan)
        }
    }

    impl GgFloat for Vec2 {
        fn is_finite(&self) -> bool {
            is_finite(self.x) && is_finite(self.y)
        }
        fn is_nan(&self) -> bool {
            is_nan(self.x) || is_nan(self.y)
        }
    }

    impl GgFloat for Aabb {
        fn is_finite(&self) -> bool {
            [self.left, self.bottom, self.right, self.top]
                .into_iter()
                .all(is_finite)
        }
        fn is_nan(&self) -> bool {
            [self.left, self.bottom, self.right, self.top]
                .into_iter()
                .any(is_nan)
        }
    }

    impl GgFloat for Transform {
        fn is_finite(&self) -> bool {
            [self.a, self.b, self.c, self.d, self.tx, self.ty]
                .into_iter()
                .all(is_finite)
        }
        fn is_nan(&self) -> bool {
            [self.a, self.b, self.c, self.d, self.tx, self.ty]
                .into_iter()
                .any(is_nan)
        }
    }

    pub fn is_finite(x: Float) -> bool {
        GgFloat::is_finite(&x)
    }
    pub fn is_nan(x: Float) -> bool {
        GgFloat::is_nan(&x)
    }

    pub fn sqrt(x: Float) -> Float {
        x.sqrt()
    }
    pub fn sin(x: Float) -> Float {
        x.sin()
    }
    pub fn cos(x: Float) -> Float {
        x.cos()
    }
    pub fn acos(x: Float) -> Float {
        x.acos()
    }
    /// Note the argument order: `atan2(y, x)` is the angle of the point `(x, y)`.
    pub fn atan2(y: Float, x: Float) -> Float {
        y.atan2(x)
    }
    /// Floating point remainder with the sign of the dividend (C `fmod`), *not* a Euclidean
    /// modulo.
    ///
    /// ```
    /// use glongge_math::util::gg_float;
    /// assert_eq!(gg_float::fmod(7.0, 3.0), 1.0);
    /// assert_eq!(gg_float::fmod(-7.0, 3.0), -1.0);
    /// ```
    pub fn fmod(x: Float, y: Float) -> Float {
        x % y
    }
    pub fn exp(x: Float) -> Float {
        x.exp()
    }
    pub fn pow(x: Float, y: Float) -> Float {
        x.powf(y)
    }
    pub fn floor(x: Float) -> Float {
        x.floor()
    }
    pub fn ceil(x: Float) -> Float {
        x.ceil()
    }

    /// Returns `a` if `a > b`, otherwise `b`.
    ///
    /// Unlike [`f32::max`], NaN is not ignored: a NaN in `a` yields `b`, and a NaN in `b` yields
    /// NaN.
    pub fn max(a: Float, b: Float) -> Float {
        if a > b {
            a
        } else {
            b
        }
    }
    /// Returns `a` if `a < b`, otherwise `b`. NaN behaves as in [`max`].
    pub fn min(a: Float, b: Float) -> Float {
        if a < b {
            a
        } else {
            b
        }
    }
    pub fn abs(x: Float) -> Float {
        x.abs()
    }

    /// Clamps `x` to `[lo, hi]`. Never panics, unlike [`f32::clamp`]: if `lo > hi` the result
    /// is `hi`.
    pub fn clamp(x: Float, lo: Float, hi: Float) -> Float {
        min(max(x, lo), hi)
    }
    pub fn clamp01(x: Float) -> Float {
        max(0.0, min(x, 1.0))
    }

    /// Linear interpolation between `a` and `b`. `t` is not clamped, so values outside `[0, 1]`
    /// extrapolate.
    ///
    /// # Examples
    /// ```
    /// use glongge_math::util::gg_float;
    /// assert_eq!(gg_float::lerp(0.0, 10.0, 0.5), 5.0);
    /// assert_eq!(gg_float::lerp(0.0, 10.0, 1.5), 15.0);
    /// ```
    pub fn lerp(a: Float, b: Float, t: Float) -> Float {
        a * (1.0 - t) + b * t
    }

    /// Moves from `a` towards `b` by at most `d`.
    ///
    /// # Examples
    /// ```
    /// use glongge_math::util::gg_float;
    /// assert_eq!(gg_float::lerp_const(0.0, 10.0, 3.0), 3.0);
    /// assert_eq!(gg_float::lerp_const(0.0, -10.0, 3.0), -3.0);
    /// assert_eq!(gg_float::lerp_const(0.0, 2.0, 3.0), 2.0);
    /// ```
    pub fn lerp_const(a: Float, b: Float, d: Float) -> Float {
        a + clamp(b - a, -d, d)
    }

    pub fn force_positive_zero(x: Float) -> Float {
        if x == 0.0 {
            0.0
        } else {
            x
        }
    }

}
