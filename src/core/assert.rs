#[allow(unused_imports)]
use crate::core::prelude::*;

pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

/// Approximate equality within [`EPSILON`](crate::core::config::EPSILON), per component.
///
/// [`PartialEq`] on the geometry types is exact; this is what [`check_almost_eq!`] uses.
pub trait AlmostEq {
    fn almost_eq(&self, rhs: Self) -> bool;
}

impl AlmostEq for Float {
    fn almost_eq(&self, rhs: Self) -> bool {
        if self.is_infinite() || rhs.is_infinite() {
            *self == rhs
        } else {
            (self - rhs).abs() < EPSILON
        }
    }
}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check {
    ($lhs:expr) => {{
        $crate::core::assert::assert_type::<bool>(&$lhs);
        if !$lhs {
            panic!(
                "check failed: {}: {}",
                $crate::core::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_false {
    ($lhs:expr) => {{
        $crate::core::assert::assert_type::<bool>(&$lhs);
        if $lhs {
            panic!(
                "check failed: {}: !{}",
                $crate::core::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_false;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr) => {{
        $crate::core::assert::assert_same_type(&$lhs, &$rhs);
        $crate::core::assert::assert_ord(&$lhs);
        if !($lhs <= $rhs) {
            panic!(
                "check failed: {}: {} <= {}: {:?} vs. {:?}",
                $crate::core::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_le;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_almost_eq {
    ($lhs:expr, $rhs:expr) => {{
        $crate::core::assert::assert_same_type(&$lhs, &$rhs);
        if !($crate::core::assert::AlmostEq::almost_eq(&$lhs, $rhs)) {
            panic!(
                "check failed: {}: {} ~= {}: {:?} vs. {:?}",
                $crate::core::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_almost_eq;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_almost_eq() {
        let one: Float = 1.0;
        check!(one.almost_eq(1.0 + EPSILON / 2.0));
        check_false!(one.almost_eq(1.0 + EPSILON * 2.0));
        check!(gg_float::INFINITY.almost_eq(gg_float::INFINITY));
        check_false!(gg_float::INFINITY.almost_eq(-gg_float::INFINITY));
        check_false!(Float::NAN.almost_eq(Float::NAN));
    }

    #[test]
    fn checks_pass() {
        check_le!(1.0, 2.0);
        check_le!(2.0, 2.0);
        check_almost_eq!(0.1 as Float + 0.2, 0.3 as Float);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn check_le_fails() {
        check_le!(2.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "~=")]
    fn check_almost_eq_fails() {
        check_almost_eq!(Vec2::one(), Vec2::zero());
    }
}
