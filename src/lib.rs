//! A small 2D geometry kernel: [`Vec2`](util::linalg::Vec2),
//! [`Aabb`](util::aabb::Aabb) and [`Transform`](util::transform::Transform), plus the scalar
//! helpers in [`gg_float`](util::gg_float) they are built on.
//!
//! Everything is plain `Copy` data and every operation is a pure function. Degenerate input
//! (zero-length vectors, singular transforms) propagates IEEE-754 infinities and NaN rather than
//! failing; see [`GgFloat`](util::gg_float::GgFloat) for checking results.

pub mod core;
pub mod util;
