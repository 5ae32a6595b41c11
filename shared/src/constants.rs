/*!
Tunables for the sync core.

These constants centralize the parameters used by the authority kinematics,
the change gate, and the replica interpolator. Keeping them together makes
tuning easier and helps ensure deterministic behavior across platforms.

Notes
- Distances are in meters, time in seconds, latency in milliseconds.
- Favor practical world-space tolerances over machine epsilon for robust behavior.
- Per-entity customization goes through `authority::KinematicsConfig`; these
  are its defaults.
*/

/// Walk speed of an authority-controlled entity in meters per second.
pub const MOVE_SPEED: f32 = 2.0;

/// Acceleration/deceleration easing rate for horizontal speed (per second).
/// Higher values reach the target speed faster.
pub const SPEED_CHANGE_RATE: f32 = 10.0;

/// Band around the target speed inside which easing snaps instead of lerping
/// (meters per second). Avoids asymptotic crawl near the target.
pub const SPEED_SNAP_BAND: f32 = 0.1;

/// Planar input magnitude below which intent is treated as zero.
/// Suppresses residual animation-blend twitch from analog sticks.
pub const INPUT_DEADBAND: f32 = 0.01;

/// Jump apex height in meters. Only meaningful when jumping is re-enabled.
pub const JUMP_HEIGHT: f32 = 1.2;

/// Downward gravity in meters per second squared (negative = down).
pub const GRAVITY: f32 = -15.0;

/// Seconds that must pass after landing before another jump can latch.
pub const JUMP_TIMEOUT: f32 = 0.50;

/// Seconds of coyote time before the controller commits to the fall state.
pub const FALL_TIMEOUT: f32 = 0.15;

/// Magnitude cap on vertical speed (meters per second).
pub const TERMINAL_VELOCITY: f32 = 53.0;

/// Vertical velocity held while grounded (meters per second). Kept slightly
/// negative, not zero, so the ground ray stays latched on uneven surfaces.
pub const GROUND_STICK_VELOCITY: f32 = -2.0;

/// Signed offset of the ground probe anchor below the entity origin (meters).
pub const GROUNDED_OFFSET: f32 = -0.14;

/// How far above the entity origin the ground ray starts (meters).
pub const GROUND_RAY_LIFT: f32 = 0.1;

/// Extra ray length past `|GROUNDED_OFFSET|` (meters).
pub const GROUND_RAY_SLACK: f32 = 0.2;

/// Position must move strictly more than this from the last-sent value to be
/// worth transmitting (meters).
pub const POSITION_SEND_THRESHOLD: f32 = 0.1;

/// Rotation must differ strictly more than this from the last-sent value to
/// be worth transmitting (degrees).
pub const ROTATION_SEND_THRESHOLD_DEG: f32 = 5.0;

/// Squared distance below which two input vectors count as equal.
/// Engine-level float tolerance, deliberately looser than bit equality.
pub const INPUT_EQ_EPS_SQ: f32 = 1.0e-10;

/// Ping at or under this uses the minimum interpolation rate (milliseconds).
pub const PING_RATE_FLOOR_MS: f32 = 100.0;

/// Ping at or over this uses the maximum interpolation rate (milliseconds).
pub const PING_RATE_CEIL_MS: f32 = 200.0;

/// Replica blend speed at low latency (per second).
pub const MIN_LERP_RATE: f32 = 10.0;

/// Replica blend speed at high latency (per second).
pub const MAX_LERP_RATE: f32 = 20.0;
