/*!
Core math aliases and wire-facing value types shared by both sync roles.

This module intentionally contains no algorithms. It defines the data
exchanged between:
- the authority pipeline (kinematics, change gate, send snapshot)
- the replica pipeline (received target, interpolator)
- the delta field codec

Positions are meters, rotations are unit quaternions, input vectors are the
raw planar device axes.
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// World-space pose of a networked entity.
///
/// The authority computes the true value; a replica only ever holds an
/// interpolated approximation of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityTransform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl EntityTransform {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Identity pose, used as the pre-spawn placeholder.
    #[inline]
    pub fn identity() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl Default for EntityTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// One tick's worth of player intent.
///
/// Produced by the authority's local input source. Replicas mirror
/// `move_input` / `look` purely for animation; they never feed replica
/// kinematics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSample {
    /// Intended planar movement direction (device axes, not normalized).
    pub move_input: Vec2,
    /// Raw look axes.
    pub look: Vec2,
    /// Jump was requested this tick. Latched by the authority; currently a
    /// dead path (see `authority::kinematics`).
    pub jump: bool,
}
