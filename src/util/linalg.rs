#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float::{self, Float};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector (or point) with [`Float`] coordinates.
///
/// [`Vec2`] has two API surfaces over the same value type:
/// - value-returning methods and operators (`a + b`, [`normed`](Vec2::normed),
///   [`clamped_len`](Vec2::clamped_len), ...), which leave their inputs untouched;
/// - in-place methods and assignment operators (`a += b`, [`normalise`](Vec2::normalise),
///   [`clamp_len`](Vec2::clamp_len), [`negate`](Vec2::negate), ...) for callers updating a
///   vector they own. These produce bit-identical results to their value-returning counterparts.
///
/// The coordinate system is y-up: [`Vec2::up`] is `(0, 1)` and [`Vec2::left_perp`] rotates
/// counter-clockwise.
///
/// # Examples
///
/// ```
/// use glongge_math::core::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2::new(1.0, 2.0);
///
/// assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
/// assert_eq!(v1.len(), 5.0);
/// assert_eq!(v1.dot(v2), 11.0);
/// ```
///
/// # Equality
/// [`PartialEq`] is exact, component-wise. Use [`AlmostEq`](crate::core::assert::AlmostEq) for a
/// tolerance-based comparison.
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Vec2 {
    pub x: Float,
    pub y: Float,
}

impl Vec2 {
    pub fn new(x: Float, y: Float) -> Vec2 {
        Vec2 { x, y }
    }

    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (positive y-axis).
    #[must_use]
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing downward (negative y-axis).
    #[must_use]
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let vec = Vec2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub fn splat(v: Float) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns the unit vector at the given angle (radians, counter-clockwise from the x-axis).
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// assert_eq!(Vec2::for_angle(0.0), Vec2::right());
    /// assert!(Vec2::for_angle(gg_float::consts::FRAC_PI_2).almost_eq(Vec2::up()));
    /// ```
    #[must_use]
    pub fn for_angle(radians: Float) -> Vec2 {
        Vec2 {
            x: gg_float::cos(radians),
            y: gg_float::sin(radians),
        }
    }

    /// Returns the angle this vector points in, in radians in `(-π, π]`.
    #[must_use]
    pub fn to_angle(&self) -> Float {
        gg_float::atan2(self.y, self.x)
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths to avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> Float {
        self.dot(*self)
    }

    #[must_use]
    pub fn len(&self) -> Float {
        gg_float::sqrt(self.len_squared())
    }

    /// Returns a unit vector in the same direction as this vector.
    ///
    /// The length has [`NORMALISE_EPSILON`](crate::core::config::NORMALISE_EPSILON) added before
    /// dividing, so the zero vector maps to the zero vector instead of NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let n = Vec2::new(3.0, 4.0).normed();
    /// assert!(n.almost_eq(Vec2::new(0.6, 0.8)));
    /// assert_eq!(Vec2::zero().normed(), Vec2::zero());
    /// ```
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        *self * (1.0 / (self.len() + NORMALISE_EPSILON))
    }

    #[must_use]
    pub fn dot(&self, other: Vec2) -> Float {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product of two vectors.
    ///
    /// This is the z-component of the 3D cross product, i.e. the signed area of the
    /// parallelogram formed by the two vectors. It is positive if `other` is counter-clockwise
    /// from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 0.0 };
    /// assert_eq!(v1.cross(Vec2 { x: 0.0, y: 3.0 }), 6.0);
    /// assert_eq!(v1.cross(Vec2 { x: 0.0, y: -3.0 }), -6.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> Float {
        self.x * other.y - self.y * other.x
    }

    /// Returns this vector rotated 90 degrees counter-clockwise.
    #[must_use]
    pub fn left_perp(&self) -> Vec2 {
        Vec2 {
            x: -self.y,
            y: self.x,
        }
    }
    /// Returns this vector rotated 90 degrees clockwise.
    #[must_use]
    pub fn right_perp(&self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: -self.x,
        }
    }

    /// Projects this vector onto `onto`. The result is NaN if `onto` is the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let v = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(v.project(Vec2 { x: 2.0, y: 0.0 }), Vec2 { x: 3.0, y: 0.0 });
    /// ```
    #[must_use]
    pub fn project(&self, onto: Vec2) -> Vec2 {
        onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Rotates this vector by `rotor` using complex multiplication.
    ///
    /// If `rotor` is a unit vector, this rotates by [`rotor.to_angle()`](Vec2::to_angle);
    /// otherwise the result is also scaled by `rotor.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let rotor = Vec2::up(); // 90 degrees
    /// assert_eq!(Vec2::new(2.0, 1.0).rotate(rotor), Vec2::new(-1.0, 2.0));
    /// ```
    #[must_use]
    pub fn rotate(&self, rotor: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * rotor.x - self.y * rotor.y,
            y: self.x * rotor.y + self.y * rotor.x,
        }
    }
    /// Inverse of [`rotate`](Vec2::rotate) for a unit `rotor`.
    #[must_use]
    pub fn unrotate(&self, rotor: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * rotor.x + self.y * rotor.y,
            y: self.y * rotor.x - self.x * rotor.y,
        }
    }

    #[must_use]
    pub fn dist(&self, other: Vec2) -> Float {
        (*self - other).len()
    }
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> Float {
        (*self - other).len_squared()
    }
    /// Returns true if `other` is strictly closer than `dist` to this point.
    #[must_use]
    pub fn near(&self, other: Vec2, dist: Float) -> bool {
        self.dist_squared(other) < dist * dist
    }

    /// Linearly interpolates between this vector and `to`. `t` is not clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let v1 = Vec2 { x: 0.0, y: 0.0 };
    /// let v2 = Vec2 { x: 10.0, y: 20.0 };
    /// assert_eq!(v1.lerp(v2, 0.5), Vec2 { x: 5.0, y: 10.0 });
    /// assert_eq!(v1.lerp(v2, 2.0), Vec2 { x: 20.0, y: 40.0 });
    /// ```
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: Float) -> Vec2 {
        *self * (1.0 - t) + to * t
    }

    /// Spherical linear interpolation from this vector to `to`.
    ///
    /// Interpolates along the arc between the two directions at a constant angular rate (and
    /// linearly in length). If the angle between them is below
    /// [`SLERP_LINEAR_THRESHOLD`](crate::core::config::SLERP_LINEAR_THRESHOLD) this is exactly
    /// [`lerp`](Vec2::lerp), since `sin(ω)` in the denominator would vanish.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let halfway = Vec2::right().slerp(Vec2::up(), 0.5);
    /// let expected = Vec2::splat(gg_float::consts::FRAC_1_SQRT_2);
    /// assert!(halfway.almost_eq(expected));
    /// ```
    #[must_use]
    pub fn slerp(&self, to: Vec2, t: Float) -> Vec2 {
        let omega = self.angle_to(to);
        if omega < SLERP_LINEAR_THRESHOLD {
            self.lerp(to, t)
        } else {
            let denom = 1.0 / gg_float::sin(omega);
            *self * (gg_float::sin((1.0 - t) * omega) * denom)
                + to * (gg_float::sin(t * omega) * denom)
        }
    }

    /// Spherical interpolation from this vector towards `to`, turning by at most `max_radians`.
    ///
    /// If both already point the same way, the result is `to` for any positive step and `self`
    /// otherwise, so the lengths behave as they do for near-parallel inputs.
    #[must_use]
    pub fn slerp_const(&self, to: Vec2, max_radians: Float) -> Vec2 {
        let omega = self.angle_to(to);
        if omega == 0.0 {
            return if max_radians > 0.0 { to } else { *self };
        }
        self.slerp(to, gg_float::min(max_radians, omega) / omega)
    }

    /// Unsigned angle between the two directions, in `[0, π]`.
    #[must_use]
    pub fn angle_to(&self, other: Vec2) -> Float {
        gg_float::acos(gg_float::clamp(self.normed().dot(other.normed()), -1.0, 1.0))
    }

    /// Returns this vector scaled down to length `max_len` if it is longer, otherwise returns it
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let v = Vec2::new(30.0, 40.0);
    /// assert!(v.clamped_len(5.0).almost_eq(Vec2::new(3.0, 4.0)));
    /// assert_eq!(v.clamped_len(100.0), v);
    /// ```
    #[must_use]
    pub fn clamped_len(&self, max_len: Float) -> Vec2 {
        if self.dot(*self) > max_len * max_len {
            self.normed() * max_len
        } else {
            *self
        }
    }

    /// Moves from this point towards `to` by at most `max_dist`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let start = Vec2::zero();
    /// let target = Vec2::new(10.0, 0.0);
    /// assert!(start.lerp_const(target, 3.0).almost_eq(Vec2::new(3.0, 0.0)));
    /// assert_eq!(start.lerp_const(target, 30.0), target);
    /// ```
    #[must_use]
    pub fn lerp_const(&self, to: Vec2, max_dist: Float) -> Vec2 {
        *self + (to - *self).clamped_len(max_dist)
    }

    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Compares two vectors by length.
    ///
    /// NaN lengths fall back to [`total_cmp()`](f32::total_cmp), with a warning.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec2) -> Ordering {
        let self_len = self.len_squared();
        let other_len = other.len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }

    /// Compares two points by distance from `origin`.
    ///
    /// NaN distances fall back to [`total_cmp()`](f32::total_cmp), with a warning.
    #[must_use]
    pub fn cmp_by_dist(&self, other: &Vec2, origin: Vec2) -> Ordering {
        let self_len = (*self - origin).len_squared();
        let other_len = (*other - origin).len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_dist() to {}: partial_cmp() failed: {} vs. {}",
                origin, self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

// In-place counterparts. Each must stay arithmetically identical to its value-returning
// version.
impl Vec2 {
    /// In-place `-self`.
    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    /// In-place [`normed`](Vec2::normed).
    pub fn normalise(&mut self) {
        *self *= 1.0 / (self.len() + NORMALISE_EPSILON);
    }

    /// In-place [`clamped_len`](Vec2::clamped_len).
    pub fn clamp_len(&mut self, max_len: Float) {
        if self.dot(*self) > max_len * max_len {
            self.normalise();
            *self *= max_len;
        }
    }
}

impl AlmostEq for Vec2 {
    fn almost_eq(&self, rhs: Vec2) -> bool {
        self.x.almost_eq(rhs.x) && self.y.almost_eq(rhs.y)
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[Float; 2]> for Vec2 {
    fn from(value: [Float; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [Float; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), |acc, v| acc + v)
    }
}

impl Mul<Float> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Float) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vec2> for Float {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<Float> for Vec2 {
    fn mul_assign(&mut self, rhs: Float) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<Float> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: Float) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<Float> for Vec2 {
    fn div_assign(&mut self, rhs: Float) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
