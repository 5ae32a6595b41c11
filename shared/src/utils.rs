use crate::constants::{INPUT_DEADBAND, INPUT_EQ_EPS_SQ};
use crate::types::{Quat, Vec2, Vec3};

/// Yaw-only facing rotation from a planar move input, if the input carries
/// real intent.
///
/// Input convention: `x` is strafe, `y` is forward; the result faces the
/// direction of intended motion in the XZ plane. Returns `None` inside the
/// deadband so callers keep the current rotation as-is.
pub fn yaw_from_move_input(move_input: Vec2) -> Option<Quat> {
    if move_input.norm() <= INPUT_DEADBAND {
        return None;
    }
    let yaw = move_input.x.atan2(move_input.y);
    Some(Quat::from_axis_angle(&Vec3::y_axis(), yaw))
}

/// Do two input vectors differ beyond engine-level float tolerance?
///
/// Deliberately an any-difference check (no threshold band), in contrast to
/// the distance/angle thresholds used for transform fields.
#[inline]
pub fn inputs_differ(a: Vec2, b: Vec2) -> bool {
    (a - b).norm_squared() > INPUT_EQ_EPS_SQ
}
