#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::aabb::{Aabb, AxisAlignedExtent};
use crate::util::gg_float::{self, Float};
use crate::util::linalg::Vec2;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Mul, MulAssign},
};

/// A 2D affine transform: a 2x2 linear part plus a translation.
///
/// The matrix is:
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
/// so `(a, b)` is the image of the x basis vector, `(c, d)` the image of the y basis vector, and
/// a point maps as `(a*x + c*y + tx, b*x + d*y + ty)`.
///
/// Nothing here checks for a singular linear part. Inverting a transform with zero determinant
/// produces infinities or NaN; use [`Transform::checked_inverse`] if that needs to be an error.
///
/// # Examples
///
/// ```
/// use glongge_math::core::prelude::*;
///
/// // Scale, then translate.
/// let t = Transform::translation(Vec2::new(2.0, 3.0)) * Transform::scale(4.0, 5.0);
/// assert_eq!(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(6.0, 8.0));
/// // Vectors ignore the translation.
/// assert_eq!(t.transform_vector(Vec2::new(1.0, 1.0)), Vec2::new(4.0, 5.0));
/// // Round trip.
/// let p = Vec2::new(-1.0, 8.0);
/// assert!(t.inverse().transform_point(t.transform_point(p)).almost_eq(p));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Transform {
    /// x-component of the x basis vector.
    pub a: Float,
    /// y-component of the x basis vector.
    pub b: Float,
    /// x-component of the y basis vector.
    pub c: Float,
    /// y-component of the y basis vector.
    pub d: Float,
    pub tx: Float,
    pub ty: Float,
}

impl Transform {
    /// Creates a transform from its basis vectors `(a, b)` and `(c, d)` and translation
    /// `(tx, ty)`.
    pub fn from_basis(a: Float, b: Float, c: Float, d: Float, tx: Float, ty: Float) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Creates a transform from the rows of its matrix, i.e. in the order it is written on paper.
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// assert_eq!(
    ///     Transform::from_rows(1.0, 2.0, 3.0, 4.0, 5.0, 6.0),
    ///     Transform::from_basis(1.0, 4.0, 2.0, 5.0, 3.0, 6.0),
    /// );
    /// ```
    pub fn from_rows(a: Float, c: Float, tx: Float, b: Float, d: Float, ty: Float) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn identity() -> Self {
        Self::from_rows(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    pub fn translation(by: Vec2) -> Self {
        Self::from_rows(1.0, 0.0, by.x, 0.0, 1.0, by.y)
    }

    pub fn scale(sx: Float, sy: Float) -> Self {
        Self::from_rows(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotation(radians: Float) -> Self {
        let rot = Vec2::for_angle(radians);
        Self::from_rows(rot.x, -rot.y, 0.0, rot.y, rot.x, 0.0)
    }

    /// Rotation followed by translation, without scale.
    pub fn rigid(translate: Vec2, radians: Float) -> Self {
        let rot = Vec2::for_angle(radians);
        Self::from_rows(rot.x, -rot.y, translate.x, rot.y, rot.x, translate.y)
    }

    /// Orthographic projection mapping `bb` onto `[-1, 1] x [-1, 1]`.
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let bb = Aabb::new(0.0, 0.0, 640.0, 512.0);
    /// let proj = Transform::ortho(&bb);
    /// assert_eq!(proj.transform_point(bb.bottom_left()), Vec2::new(-1.0, -1.0));
    /// assert_eq!(proj.transform_point(bb.top_right()), Vec2::new(1.0, 1.0));
    /// ```
    pub fn ortho(bb: &Aabb) -> Self {
        let width = bb.right - bb.left;
        let height = bb.top - bb.bottom;
        Self::from_rows(
            2.0 / width,
            0.0,
            -(bb.right + bb.left) / width,
            0.0,
            2.0 / height,
            -(bb.top + bb.bottom) / height,
        )
    }

    /// Maps the unit segment `(0, 0) -> (1, 0)` onto `v0 -> v1`, with the y basis the
    /// counter-clockwise perpendicular of `v1 - v0`.
    pub fn bone_scale(v0: Vec2, v1: Vec2) -> Self {
        let d = v1 - v0;
        Self::from_rows(d.x, -d.y, v0.x, d.y, d.x, v0.y)
    }

    /// Scales by `scale` along the unit vector `axis` through `pivot`, leaving the perpendicular
    /// direction unchanged.
    pub fn axial_scale(axis: Vec2, pivot: Vec2, scale: Float) -> Self {
        let shear = axis.x * axis.y * (scale - 1.0);
        let shift = axis.dot(pivot) * (1.0 - scale);
        Self::from_rows(
            scale * axis.x * axis.x + axis.y * axis.y,
            shear,
            axis.x * shift,
            shear,
            axis.x * axis.x + scale * axis.y * axis.y,
            axis.y * shift,
        )
    }

    /// Re-expresses `inner` in the frame of `outer`: `outer⁻¹ * inner * outer`.
    pub fn wrap(outer: &Transform, inner: &Transform) -> Self {
        outer.inverse() * (*inner * *outer)
    }

    /// Inverse of [`Transform::wrap`]: `outer * inner * outer⁻¹`.
    pub fn wrap_inverse(outer: &Transform, inner: &Transform) -> Self {
        *outer * (*inner * outer.inverse())
    }

    #[must_use]
    pub fn det(&self) -> Float {
        self.a * self.d - self.c * self.b
    }

    #[must_use]
    pub fn x_basis(&self) -> Vec2 {
        Vec2::new(self.a, self.b)
    }
    #[must_use]
    pub fn y_basis(&self) -> Vec2 {
        Vec2::new(self.c, self.d)
    }
    #[must_use]
    pub fn translation_part(&self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    /// Applies the full transform to a point.
    #[must_use]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: self.a * p.x + self.c * p.y + self.tx,
            y: self.b * p.x + self.d * p.y + self.ty,
        }
    }

    /// Applies only the linear part, e.g. to a direction or normal.
    #[must_use]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self.a * v.x + self.c * v.y,
            y: self.b * v.x + self.d * v.y,
        }
    }

    /// Same as `self.inverse().transform_point(p)`, without building the inverse.
    #[must_use]
    pub fn inverse_transform_point(&self, p: Vec2) -> Vec2 {
        let inv_det = 1.0 / self.det();
        Vec2 {
            x: (self.d * p.x - self.c * p.y + self.c * self.ty - self.tx * self.d) * inv_det,
            y: (self.a * p.y - self.b * p.x - self.a * self.ty + self.tx * self.b) * inv_det,
        }
    }

    /// General inverse. Not finite if [`det()`](Transform::det) is zero.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv_det = 1.0 / self.det();
        Self::from_rows(
            self.d * inv_det,
            -self.c * inv_det,
            (self.c * self.ty - self.tx * self.d) * inv_det,
            -self.b * inv_det,
            self.a * inv_det,
            (self.tx * self.b - self.a * self.ty) * inv_det,
        )
    }

    /// Like [`inverse`](Transform::inverse), but fails instead of producing a non-finite result.
    pub fn checked_inverse(&self) -> Result<Self> {
        let det = self.det();
        if det == 0.0 || !gg_float::is_finite(det) {
            bail!("Transform::checked_inverse(): singular transform (det = {det}): {self}");
        }
        let rv = self.inverse();
        if !rv.is_finite() {
            bail!("Transform::checked_inverse(): inverse not finite: {rv}");
        }
        Ok(rv)
    }

    /// Inverse of a transform whose linear part is a pure rotation, as built by
    /// [`Transform::rigid`]. Uses the transpose of the rotation; the result is wrong for any
    /// transform with scale or shear.
    #[must_use]
    pub fn rigid_inverse(&self) -> Self {
        Self::from_rows(
            self.d,
            -self.c,
            self.c * self.ty - self.tx * self.d,
            -self.b,
            self.a,
            self.tx * self.b - self.a * self.ty,
        )
    }

    /// The axis-aligned bounding box of `bb` after transforming it.
    ///
    /// This is exact (the same as transforming all four corners), but only transforms the centre
    /// and the half-extents.
    #[must_use]
    pub fn transform_aabb(&self, bb: &Aabb) -> Aabb {
        let centre = bb.centre();
        let half_width = (bb.right - bb.left) * 0.5;
        let half_height = (bb.top - bb.bottom) * 0.5;

        let (a, c) = (self.a * half_width, self.c * half_height);
        let (b, d) = (self.b * half_width, self.d * half_height);
        let half_width_max = gg_float::max(gg_float::abs(a + c), gg_float::abs(a - c));
        let half_height_max = gg_float::max(gg_float::abs(b + d), gg_float::abs(b - d));
        Aabb::from_extents(
            self.transform_point(centre),
            half_width_max,
            half_height_max,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl One for Transform {
    fn one() -> Self {
        Self::identity()
    }
}

impl AlmostEq for Transform {
    fn almost_eq(&self, rhs: Transform) -> bool {
        self.a.almost_eq(rhs.a)
            && self.b.almost_eq(rhs.b)
            && self.c.almost_eq(rhs.c)
            && self.d.almost_eq(rhs.d)
            && self.tx.almost_eq(rhs.tx)
            && self.ty.almost_eq(rhs.ty)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform([{}, {}, {}], [{}, {}, {}])",
            self.a, self.c, self.tx, self.b, self.d, self.ty
        )
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    /// Composes two transforms like matrix multiplication: `(t1 * t2)` applies `t2` first, then
    /// `t1`.
    fn mul(self, rhs: Transform) -> Self::Output {
        Self::from_rows(
            self.a * rhs.a + self.c * rhs.b,
            self.a * rhs.c + self.c * rhs.d,
            self.a * rhs.tx + self.c * rhs.ty + self.tx,
            self.b * rhs.a + self.d * rhs.b,
            self.b * rhs.c + self.d * rhs.d,
            self.b * rhs.tx + self.d * rhs.ty + self.ty,
        )
    }
}
impl MulAssign<Transform> for Transform {
    /// `t1 *= t2` is `t1 = t1 * t2`.
    fn mul_assign(&mut self, rhs: Transform) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gg_float::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};
    use itertools::iproduct;

    fn check_near(actual: Vec2, expected: Vec2) {
        let tolerance = 1e-4 * (1.0 + expected.len());
        assert!(
            actual.dist(expected) < tolerance,
            "{actual} vs. {expected}"
        );
    }

    fn samples() -> Vec<Transform> {
        vec![
            Transform::identity(),
            Transform::translation(Vec2::new(2.0, 3.0)),
            Transform::scale(4.0, 5.0),
            Transform::rotation(0.5),
            Transform::rigid(Vec2::new(-7.0, 1.5), 2.0),
            Transform::from_basis(1.0, 0.5, -0.25, 2.0, 3.0, -1.0),
            Transform::translation(Vec2::new(2.0, 3.0))
                * Transform::rotation(-1.0)
                * Transform::scale(0.5, 3.0),
        ]
    }

    fn points() -> Vec<Vec2> {
        vec![
            Vec2::zero(),
            Vec2::new(-1.0, 8.0),
            Vec2::new(3.5, -2.0),
            Vec2::new(10.0, 10.0),
        ]
    }

    // ==================== Construction ====================

    #[test]
    fn transform_identity() {
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(Transform::identity().transform_point(p), p);
        assert_eq!(Transform::default(), Transform::identity());
        assert_eq!(Transform::one(), Transform::identity());
        for t in samples() {
            assert_eq!(Transform::identity() * t, t);
            assert_eq!(t * Transform::identity(), t);
        }
    }

    #[test]
    fn transform_basis_and_rows_agree() {
        let t = Transform::from_basis(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(t, Transform::from_rows(1.0, 3.0, 5.0, 2.0, 4.0, 6.0));
        assert_eq!(t.x_basis(), Vec2::new(1.0, 2.0));
        assert_eq!(t.y_basis(), Vec2::new(3.0, 4.0));
        assert_eq!(t.translation_part(), Vec2::new(5.0, 6.0));
        assert_eq!(t.transform_point(Vec2::right()), Vec2::new(6.0, 8.0));
        assert_eq!(t.transform_vector(Vec2::up()), Vec2::new(3.0, 4.0));
        assert_eq!(t.det(), -2.0);
    }

    #[test]
    fn transform_named_builders() {
        let p = Vec2::new(1.0, 1.0);
        assert_eq!(
            Transform::translation(Vec2::new(2.0, 3.0)).transform_point(p),
            Vec2::new(3.0, 4.0)
        );
        assert_eq!(Transform::scale(4.0, 5.0).transform_point(p), Vec2::new(4.0, 5.0));
        check_almost_eq!(
            Transform::rotation(FRAC_PI_2).transform_point(Vec2::right()),
            Vec2::up()
        );
        check_almost_eq!(
            Transform::rotation(FRAC_PI_4).transform_vector(Vec2::right()),
            Vec2::splat(FRAC_1_SQRT_2)
        );
        check_almost_eq!(
            Transform::rigid(Vec2::new(10.0, 0.0), FRAC_PI_2).transform_point(Vec2::right()),
            Vec2::new(10.0, 1.0)
        );
    }

    #[test]
    fn transform_vector_ignores_translation() {
        let t = Transform::rigid(Vec2::new(100.0, -50.0), 0.3);
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(t.transform_vector(v), Transform::rotation(0.3).transform_vector(v));
    }

    #[test]
    fn transform_display() {
        assert_eq!(
            format!("{}", Transform::from_rows(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)),
            "transform([1, 2, 3], [4, 5, 6])"
        );
    }

    // ==================== Composition and inversion ====================

    #[test]
    fn transform_multiplication_order() {
        let translate = Transform::translation(Vec2::new(2.0, 3.0));
        let scale = Transform::scale(4.0, 5.0);
        let p = Vec2::new(1.0, 1.0);
        assert_eq!((translate * scale).transform_point(p), Vec2::new(6.0, 8.0));
        assert_eq!((scale * translate).transform_point(p), Vec2::new(12.0, 20.0));

        let mut t = translate;
        t *= scale;
        assert_eq!(t, translate * scale);
    }

    #[test]
    fn transform_multiplication_composes() {
        for (t1, t2) in iproduct!(samples(), samples()) {
            for p in points() {
                check_near(
                    (t1 * t2).transform_point(p),
                    t1.transform_point(t2.transform_point(p)),
                );
            }
        }
    }

    #[test]
    fn transform_inverse_round_trip() {
        for (t, p) in iproduct!(samples(), points()) {
            let inv = t.inverse();
            check_near(inv.transform_point(t.transform_point(p)), p);
            check_near((t * inv).transform_point(p), p);
            check_near((inv * t).transform_point(p), p);
            check_near(t.inverse_transform_point(p), inv.transform_point(p));
        }
    }

    #[test]
    fn transform_inverse_exact_cases() {
        let p = Vec2::new(-1.0, 8.0);
        let t = Transform::translation(Vec2::new(2.0, 3.0));
        assert_eq!(t.inverse(), Transform::translation(Vec2::new(-2.0, -3.0)));
        assert_eq!(t.inverse_transform_point(p), Vec2::new(-3.0, 5.0));
        let s = Transform::scale(4.0, 5.0);
        assert_eq!(s.inverse_transform_point(p), Vec2::new(-0.25, 1.6));
        assert_eq!(s.inverse().transform_point(p), Vec2::new(-0.25, 1.6));
    }

    #[test]
    fn transform_checked_inverse() {
        let t = Transform::rigid(Vec2::new(1.0, 2.0), 0.7);
        assert_eq!(t.checked_inverse().unwrap(), t.inverse());
        let err = Transform::scale(0.0, 1.0).checked_inverse().unwrap_err();
        assert!(err.to_string().contains("singular"), "{err}");
        assert!(Transform::from_basis(1.0, 2.0, 2.0, 4.0, 0.0, 0.0)
            .checked_inverse()
            .is_err());
        // The unchecked inverse is total but not finite.
        assert!(!Transform::scale(0.0, 1.0).inverse().is_finite());
    }

    #[test]
    fn transform_rigid_inverse() {
        for (angle, translate) in iproduct!(
            [0.0, 0.5, -2.0, 3.0],
            [Vec2::zero(), Vec2::new(2.0, 3.0), Vec2::new(-4.5, 1.0)]
        ) {
            let t = Transform::rigid(translate, angle);
            check_almost_eq!(t.rigid_inverse(), t.inverse());
        }
        // Not valid with scale.
        let scaled = Transform::scale(2.0, 2.0);
        assert_ne!(scaled.rigid_inverse(), scaled.inverse());
    }

    #[test]
    fn transform_wrap() {
        let outer = Transform::rigid(Vec2::new(3.0, -1.0), 0.4);
        let inner = Transform::scale(2.0, 0.5);
        let wrapped = Transform::wrap(&outer, &inner);
        for p in points() {
            let expected = outer
                .inverse()
                .transform_point(inner.transform_point(outer.transform_point(p)));
            check_near(wrapped.transform_point(p), expected);
        }
        check_almost_eq!(Transform::wrap_inverse(&outer, &wrapped), inner);
        check_almost_eq!(
            Transform::wrap(&outer, &Transform::wrap_inverse(&outer, &inner)),
            inner
        );
    }

    // ==================== Specialised builders ====================

    #[test]
    fn transform_ortho() {
        let bb = Aabb::new(-2.0, 1.0, 6.0, 5.0);
        let proj = Transform::ortho(&bb);
        assert_eq!(proj.transform_point(bb.bottom_left()), Vec2::new(-1.0, -1.0));
        assert_eq!(proj.transform_point(bb.top_right()), Vec2::new(1.0, 1.0));
        assert_eq!(proj.transform_point(bb.centre()), Vec2::zero());
        assert_eq!(proj.transform_aabb(&bb), Aabb::new(-1.0, -1.0, 1.0, 1.0));
    }

    #[test]
    fn transform_bone_scale() {
        let v0 = Vec2::new(1.0, 1.0);
        let v1 = Vec2::new(4.0, 5.0);
        let t = Transform::bone_scale(v0, v1);
        assert_eq!(t.transform_point(Vec2::zero()), v0);
        assert_eq!(t.transform_point(Vec2::right()), v1);
        assert_eq!(t.transform_point(Vec2::new(0.5, 0.0)), Vec2::new(2.5, 3.0));
        assert_eq!(t.transform_point(Vec2::up()), v0 + (v1 - v0).left_perp());
    }

    #[test]
    fn transform_axial_scale() {
        let t = Transform::axial_scale(Vec2::right(), Vec2::new(2.0, 0.0), 3.0);
        assert_eq!(t.transform_point(Vec2::new(2.0, 5.0)), Vec2::new(2.0, 5.0));
        assert_eq!(t.transform_point(Vec2::new(3.0, 1.0)), Vec2::new(5.0, 1.0));

        let axis = Vec2::for_angle(0.6);
        let pivot = Vec2::new(-1.0, 2.0);
        let t = Transform::axial_scale(axis, pivot, 0.25);
        check_near(t.transform_point(pivot), pivot);
        check_near(t.transform_vector(axis), axis * 0.25);
        check_near(t.transform_vector(axis.left_perp()), axis.left_perp());
        check_near(
            t.transform_point(pivot + axis * 2.0 + axis.right_perp()),
            pivot + axis * 0.5 + axis.right_perp(),
        );
    }

    #[test]
    fn transform_aabb_matches_corners() {
        let boxes = [
            Aabb::new(0.0, 0.0, 6.0, 6.0),
            Aabb::new(-1.0, -2.0, 3.0, 4.0),
            Aabb::new(2.0, 3.0, 2.5, 7.0),
        ];
        for (t, bb) in iproduct!(samples(), boxes) {
            let corners = [
                bb.bottom_left(),
                bb.bottom_right(),
                bb.top_left(),
                bb.top_right(),
            ];
            let expected = Aabb::from_points(corners.map(|p| t.transform_point(p))).unwrap();
            let actual = t.transform_aabb(&bb);
            for (lhs, rhs) in [
                (actual.bottom_left(), expected.bottom_left()),
                (actual.top_right(), expected.top_right()),
            ] {
                check_near(lhs, rhs);
            }
        }
    }

    #[test]
    fn transform_aabb_translation_and_scale() {
        let bb = Aabb::new(0.0, 0.0, 6.0, 4.0);
        assert_eq!(
            Transform::translation(Vec2::new(1.0, -1.0)).transform_aabb(&bb),
            Aabb::new(1.0, -1.0, 7.0, 3.0)
        );
        assert_eq!(
            Transform::scale(-2.0, 0.5).transform_aabb(&bb),
            Aabb::new(-12.0, 0.0, 0.0, 2.0)
        );
    }

    #[test]
    fn bincode_serialization() {
        let config = bincode::config::standard();
        let t = Transform::rigid(Vec2::new(1.0, 2.0), 0.3);
        let encoded = bincode::encode_to_vec(t, config).unwrap();
        let (decoded, _): (Transform, _) = bincode::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(t, decoded);
    }
}
