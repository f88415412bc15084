#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float::{self, Float};
use crate::util::linalg::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// Anything with an axis-aligned bounding box.
///
/// Implementors provide [`aabb()`](AxisAlignedExtent::aabb); corners, edges and sizes are derived
/// from it. The coordinate system is y-up, so `bottom <= top` for a well-formed box.
///
/// # Examples
///
/// ```
/// use glongge_math::core::prelude::*;
///
/// fn is_visible<T: AxisAlignedExtent>(object: &T, viewport: &T) -> bool {
///     object.aabb().intersects(&viewport.aabb())
/// }
/// let viewport = Aabb::new(0.0, 0.0, 640.0, 480.0);
/// assert!(is_visible(&Aabb::from_circle(Vec2::new(-1.0, 10.0), 2.0), &viewport));
/// ```
pub trait AxisAlignedExtent {
    fn aabb(&self) -> Aabb;

    fn left(&self) -> Float {
        self.aabb().left
    }
    fn bottom(&self) -> Float {
        self.aabb().bottom
    }
    fn right(&self) -> Float {
        self.aabb().right
    }
    fn top(&self) -> Float {
        self.aabb().top
    }

    fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }
    fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }
    fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }
    fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    fn width(&self) -> Float {
        self.right() - self.left()
    }
    fn height(&self) -> Float {
        self.top() - self.bottom()
    }
    fn extent(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
    fn half_widths(&self) -> Vec2 {
        self.extent() * 0.5
    }
    fn centre(&self) -> Vec2 {
        self.bottom_left().lerp(self.top_right(), 0.5)
    }

    /// Closed on all four edges.
    fn contains_point(&self, pos: Vec2) -> bool {
        self.left() <= pos.x
            && self.right() >= pos.x
            && self.bottom() <= pos.y
            && self.top() >= pos.y
    }
}

/// An axis-aligned bounding box `[left, right] x [bottom, top]`.
///
/// Callers are expected to keep `left <= right` and `bottom <= top`, but this is not enforced:
/// inverted boxes are representable, and the predicates below are plain comparisons on the raw
/// edges. [`Aabb::try_new`] is a validating alternative to [`Aabb::new`].
///
/// # Examples
///
/// ```
/// use glongge_math::core::prelude::*;
///
/// let a = Aabb::from_extents(Vec2::new(4.0, 4.0), 2.0, 1.0);
/// assert_eq!(a, Aabb::new(2.0, 3.0, 6.0, 5.0));
/// assert_eq!(a.centre(), Vec2::new(4.0, 4.0));
/// assert_eq!(a.area(), 8.0);
///
/// let b = Aabb::from_circle(Vec2::new(4.0, 4.0), 2.0);
/// assert!(a.intersects(&b));
/// assert!(b.contains(&a));
/// ```
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct Aabb {
    pub left: Float,
    pub bottom: Float,
    pub right: Float,
    pub top: Float,
}

impl Aabb {
    pub fn new(left: Float, bottom: Float, right: Float, top: Float) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Like [`Aabb::new`], but fails on NaN edges or an inverted box.
    pub fn try_new(left: Float, bottom: Float, right: Float, top: Float) -> Result<Self> {
        let rv = Self::new(left, bottom, right, top);
        if rv.is_nan() {
            bail!("Aabb::try_new(): NaN edge: {rv}");
        }
        if left > right || bottom > top {
            bail!("Aabb::try_new(): inverted box: {rv}");
        }
        Ok(rv)
    }

    /// Creates a box centred on `centre` with the given half-width and half-height.
    pub fn from_extents(centre: Vec2, half_width: Float, half_height: Float) -> Self {
        Self {
            left: centre.x - half_width,
            bottom: centre.y - half_height,
            right: centre.x + half_width,
            top: centre.y + half_height,
        }
    }

    /// Creates the tightest box around the circle.
    pub fn from_circle(centre: Vec2, radius: Float) -> Self {
        Self::from_extents(centre, radius, radius)
    }

    /// Smallest box containing every point, or `None` if there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first.x, first.y, first.x, first.y), |bb, p| {
            bb.expand(p)
        }))
    }

    /// Closed-interval overlap test: boxes that only share an edge or corner intersect.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.bottom <= other.top
            && other.bottom <= self.top
    }

    /// Returns true if `other` lies entirely within this box (edges may touch).
    #[must_use]
    pub fn contains(&self, other: &Aabb) -> bool {
        self.left <= other.left
            && self.right >= other.right
            && self.bottom <= other.bottom
            && self.top >= other.top
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn merge(&self, other: &Aabb) -> Aabb {
        Self {
            left: gg_float::min(self.left, other.left),
            bottom: gg_float::min(self.bottom, other.bottom),
            right: gg_float::max(self.right, other.right),
            top: gg_float::max(self.top, other.top),
        }
    }

    /// Smallest box containing this box and `p`.
    #[must_use]
    pub fn expand(&self, p: Vec2) -> Aabb {
        Self {
            left: gg_float::min(self.left, p.x),
            bottom: gg_float::min(self.bottom, p.y),
            right: gg_float::max(self.right, p.x),
            top: gg_float::max(self.top, p.y),
        }
    }

    /// Area; negative for a box inverted on exactly one axis.
    #[must_use]
    pub fn area(&self) -> Float {
        (self.right - self.left) * (self.top - self.bottom)
    }

    /// Same as `self.merge(other).area()` without building the merged box.
    #[must_use]
    pub fn merged_area(&self, other: &Aabb) -> Float {
        let width = gg_float::max(self.right, other.right) - gg_float::min(self.left, other.left);
        let height = gg_float::max(self.top, other.top) - gg_float::min(self.bottom, other.bottom);
        width * height
    }

    /// Returns the fraction `t` in `[0, 1]` along the segment `a -> b` at which it first enters
    /// this box, or [`gg_float::INFINITY`] if it does not hit.
    ///
    /// If `a` is already inside the box, the result is `0`. An axis along which the segment does
    /// not move constrains nothing, unless the segment lies outside the box on that axis: then it
    /// runs entirely to one side and can never hit, so the result is [`gg_float::INFINITY`]
    /// rather than a hit reported from the other axis alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    ///
    /// let bb = Aabb::new(0.0, 0.0, 6.0, 6.0);
    /// assert_eq!(bb.segment_query(Vec2::new(-1.0, 3.0), Vec2::new(7.0, 3.0)), 0.125);
    /// assert_eq!(
    ///     bb.segment_query(Vec2::new(-1.0, 7.0), Vec2::new(7.0, 7.0)),
    ///     gg_float::INFINITY
    /// );
    /// ```
    #[must_use]
    pub fn segment_query(&self, a: Vec2, b: Vec2) -> Float {
        let delta = b - a;
        let mut t_min = -gg_float::INFINITY;
        let mut t_max = gg_float::INFINITY;

        for (start, step, lo, hi) in [
            (a.x, delta.x, self.left, self.right),
            (a.y, delta.y, self.bottom, self.top),
        ] {
            if step == 0.0 {
                if start < lo || start > hi {
                    return gg_float::INFINITY;
                }
            } else {
                let t1 = (lo - start) / step;
                let t2 = (hi - start) / step;
                t_min = gg_float::max(t_min, gg_float::min(t1, t2));
                t_max = gg_float::min(t_max, gg_float::max(t1, t2));
            }
        }

        if t_min <= t_max && 0.0 <= t_max && t_min <= 1.0 {
            gg_float::max(t_min, 0.0)
        } else {
            gg_float::INFINITY
        }
    }

    #[must_use]
    pub fn intersects_segment(&self, a: Vec2, b: Vec2) -> bool {
        self.segment_query(a, b) != gg_float::INFINITY
    }

    /// Clamps `p` into the box, per axis.
    #[must_use]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: gg_float::clamp(p.x, self.left, self.right),
            y: gg_float::clamp(p.y, self.bottom, self.top),
        }
    }

    /// Wraps `p` into the box toroidally.
    ///
    /// Each coordinate ends up in `(min, min + size]`: a point exactly on the left (bottom) edge
    /// wraps to the right (top) edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use glongge_math::core::prelude::*;
    /// let bb = Aabb::new(0.0, 0.0, 10.0, 10.0);
    /// assert_eq!(bb.wrap_point(Vec2::new(12.0, -3.0)), Vec2::new(2.0, 7.0));
    /// ```
    #[must_use]
    pub fn wrap_point(&self, p: Vec2) -> Vec2 {
        // fmod keeps the sign of the dividend, so a non-positive remainder needs one more width.
        let wrap = |x: Float, lo: Float, hi: Float| {
            let size = gg_float::abs(hi - lo);
            let mut offset = gg_float::fmod(x - lo, size);
            if offset <= 0.0 {
                offset += size;
            }
            offset + lo
        };
        Vec2 {
            x: wrap(p.x, self.left, self.right),
            y: wrap(p.y, self.bottom, self.top),
        }
    }

    /// Returns this box translated by `by`.
    #[must_use]
    pub fn offset(&self, by: Vec2) -> Aabb {
        Self {
            left: self.left + by.x,
            bottom: self.bottom + by.y,
            right: self.right + by.x,
            top: self.top + by.y,
        }
    }

    /// The horizontal extent, `[left, right]`.
    #[must_use]
    pub fn to_bounds(&self) -> Bounds {
        Bounds::new(self.left, self.right)
    }
    /// The vertical extent, `[bottom, top]`.
    #[must_use]
    pub fn to_bounds_y(&self) -> Bounds {
        Bounds::new(self.bottom, self.top)
    }
}

impl AxisAlignedExtent for Aabb {
    fn aabb(&self) -> Aabb {
        *self
    }
}

impl AlmostEq for Aabb {
    fn almost_eq(&self, rhs: Aabb) -> bool {
        self.left.almost_eq(rhs.left)
            && self.bottom.almost_eq(rhs.bottom)
            && self.right.almost_eq(rhs.right)
            && self.top.almost_eq(rhs.top)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aabb({}, {}, {}, {})",
            self.left, self.bottom, self.right, self.top
        )
    }
}

/// A closed 1D interval `[min, max]`, e.g. one axis of an [`Aabb`].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct Bounds {
    pub min: Float,
    pub max: Float,
}

impl Bounds {
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }

    /// 1D analogue of [`Aabb::intersects`]; touching endpoints overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    #[must_use]
    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    #[must_use]
    pub fn length(&self) -> Float {
        self.max - self.min
    }
}

pub fn bounds_overlap(a: &Bounds, b: &Bounds) -> bool {
    a.overlaps(b)
}
