pub mod codec;
pub mod command;
pub mod constants;
pub mod error;
pub mod flags;
pub mod types;
pub mod utils;

pub use codec::{SyncUpdate, decode, encode, encoded_payload_len};
pub use command::EffectCommand;
pub use constants::{
    FALL_TIMEOUT, GRAVITY, GROUND_RAY_LIFT, GROUND_RAY_SLACK, GROUND_STICK_VELOCITY,
    GROUNDED_OFFSET, INPUT_DEADBAND, INPUT_EQ_EPS_SQ, JUMP_HEIGHT, JUMP_TIMEOUT, MAX_LERP_RATE,
    MIN_LERP_RATE, MOVE_SPEED, PING_RATE_CEIL_MS, PING_RATE_FLOOR_MS, POSITION_SEND_THRESHOLD,
    ROTATION_SEND_THRESHOLD_DEG, SPEED_CHANGE_RATE, SPEED_SNAP_BAND, TERMINAL_VELOCITY,
};
pub use error::WireError;
pub use flags::{ChangeFlags, SyncField};
pub use types::{EntityTransform, InputSample, Quat, Vec2, Vec3};
pub use utils::{inputs_differ, yaw_from_move_input};
