#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{assert::*, config::*},
    util::{
        aabb::{bounds_overlap, Aabb, AxisAlignedExtent, Bounds},
        gg_float,
        gg_float::{Float, GgFloat},
        linalg,
        linalg::Vec2,
        transform::Transform,
    },
};
