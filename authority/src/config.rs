//! Per-entity kinematics tuning.

use shared::constants::{
    FALL_TIMEOUT, GRAVITY, GROUNDED_OFFSET, JUMP_HEIGHT, JUMP_TIMEOUT, MOVE_SPEED,
    SPEED_CHANGE_RATE, TERMINAL_VELOCITY,
};

/// Tunables for [`crate::AuthorityKinematics`].
///
/// Defaults mirror `shared::constants`; override per entity where game data
/// calls for it.
#[derive(Clone, Copy, Debug)]
pub struct KinematicsConfig {
    /// Walk speed in meters per second.
    pub move_speed: f32,
    /// Easing rate toward the target horizontal speed (per second).
    pub speed_change_rate: f32,
    /// Jump apex height in meters.
    pub jump_height: f32,
    /// Downward gravity in meters per second squared (negative = down).
    pub gravity: f32,
    /// Seconds after landing before another jump can fire.
    pub jump_timeout: f32,
    /// Coyote time before committing to the fall state, in seconds.
    pub fall_timeout: f32,
    /// Signed ground-probe anchor offset below the entity origin (meters).
    pub grounded_offset: f32,
    /// Magnitude cap on vertical speed (meters per second).
    pub terminal_velocity: f32,
    /// Whether the latched jump input actually applies a vertical impulse.
    ///
    /// Off by default: the latch and timeout bookkeeping still run so the
    /// wire format stays compatible with an authority that jumps, but no
    /// impulse is applied until this is flipped.
    pub jump_enabled: bool,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            speed_change_rate: SPEED_CHANGE_RATE,
            jump_height: JUMP_HEIGHT,
            gravity: GRAVITY,
            jump_timeout: JUMP_TIMEOUT,
            fall_timeout: FALL_TIMEOUT,
            grounded_offset: GROUNDED_OFFSET,
            terminal_velocity: TERMINAL_VELOCITY,
            jump_enabled: false,
        }
    }
}
