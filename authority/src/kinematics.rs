/*!
Grounded / gravity / jump / horizontal-movement integration for the
locally-owned entity.

This is deliberately kinematic, not physical: the host's collision layer may
correct the resulting translation afterwards (see
[`AuthorityKinematics::set_translation`]); this module only shapes intent
into an authoritative transform each tick.
*/

use crate::config::KinematicsConfig;
use crate::ground::GroundProbe;
use shared::constants::{
    GROUND_RAY_LIFT, GROUND_RAY_SLACK, GROUND_STICK_VELOCITY, INPUT_DEADBAND, SPEED_SNAP_BAND,
};
use shared::{EntityTransform, InputSample, Vec3, yaw_from_move_input};

/// Two-state grounded machine plus the velocities it integrates.
#[derive(Clone, Copy, Debug)]
pub struct AuthorityKinematics {
    config: KinematicsConfig,
    transform: EntityTransform,
    grounded: bool,
    vertical_velocity: f32,
    horizontal_speed: f32,
    animation_blend: f32,
    jump_latched: bool,
    jump_timeout_remaining: f32,
    fall_timeout_remaining: f32,
}

impl AuthorityKinematics {
    pub fn new(spawn: EntityTransform, config: KinematicsConfig) -> Self {
        Self {
            config,
            transform: spawn,
            grounded: true,
            vertical_velocity: 0.0,
            horizontal_speed: 0.0,
            animation_blend: 0.0,
            jump_latched: false,
            jump_timeout_remaining: config.jump_timeout,
            fall_timeout_remaining: config.fall_timeout,
        }
    }

    /// Re-activate at a spawn pose, dropping all integrated state.
    pub fn reset(&mut self, spawn: EntityTransform) {
        *self = Self::new(spawn, self.config);
    }

    /// Advance one simulation tick.
    ///
    /// Behavior
    /// - Probes for ground below the entity; probe failure counts as no hit.
    /// - Maintains the jump latch and jump/fall timeouts. The jump impulse
    ///   branch is gated off by default (`KinematicsConfig::jump_enabled`).
    /// - Integrates gravity under the terminal cap, then sticks to the
    ///   ground with a small negative velocity while grounded.
    /// - Eases horizontal speed toward the input-scaled target and faces
    ///   the intended planar direction.
    pub fn tick(
        &mut self,
        input: &InputSample,
        probe: &mut impl GroundProbe,
        dt: f32,
    ) -> &EntityTransform {
        let dt = dt.max(0.0);

        // 1) Grounded check: short downward ray from slightly above the origin.
        self.grounded = self.probe_ground(probe);

        // 2) Jump latch and timeout bookkeeping.
        self.update_jump_and_fall_timers(input, dt);

        // 3) Vertical velocity: gravity under the terminal cap, then the
        //    ground-stick clamp. The clamp is -2, not 0, so the ground ray
        //    stays latched on uneven or floating surfaces.
        if self.vertical_velocity.abs() < self.config.terminal_velocity {
            self.vertical_velocity += self.config.gravity * dt;
        }
        if self.grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = GROUND_STICK_VELOCITY;
        }

        // 4) Horizontal speed easing and facing.
        self.update_horizontal_speed(input, dt);
        if let Some(facing) = yaw_from_move_input(input.move_input) {
            self.transform.rotation = facing;
        }

        // 5) Apply the displacement for this tick.
        let forward = self.transform.rotation * Vec3::z();
        self.transform.translation +=
            forward * (self.horizontal_speed * dt) + Vec3::y() * (self.vertical_velocity * dt);

        &self.transform
    }

    fn probe_ground(&self, probe: &mut impl GroundProbe) -> bool {
        let origin = self.transform.translation + Vec3::y() * GROUND_RAY_LIFT;
        let max_distance = self.config.grounded_offset.abs() + GROUND_RAY_SLACK;
        probe.cast_down(origin, max_distance).unwrap_or_else(|_| {
            log::debug!("ground probe failed; treating tick as airborne");
            false
        })
    }

    fn update_jump_and_fall_timers(&mut self, input: &InputSample, dt: f32) {
        if self.grounded {
            self.fall_timeout_remaining = self.config.fall_timeout;

            if input.jump {
                self.jump_latched = true;
            }
            // Dead path unless jump_enabled is flipped; the latch and the
            // countdown still run for wire compatibility.
            if self.config.jump_enabled && self.jump_latched && self.jump_timeout_remaining <= 0.0 {
                self.vertical_velocity = (self.config.jump_height * -2.0 * self.config.gravity).sqrt();
                self.jump_latched = false;
            }
            if self.jump_timeout_remaining >= 0.0 {
                self.jump_timeout_remaining -= dt;
            }
        } else {
            self.jump_timeout_remaining = self.config.jump_timeout;
            if self.fall_timeout_remaining >= 0.0 {
                self.fall_timeout_remaining -= dt;
            }
            // No jumping while airborne.
            self.jump_latched = false;
        }
    }

    fn update_horizontal_speed(&mut self, input: &InputSample, dt: f32) {
        let magnitude = input.move_input.norm();
        let target_speed = if magnitude < INPUT_DEADBAND {
            0.0
        } else {
            self.config.move_speed
        };
        let input_scale = if magnitude < INPUT_DEADBAND {
            1.0
        } else {
            magnitude.min(1.0)
        };

        if (self.horizontal_speed - target_speed).abs() > SPEED_SNAP_BAND {
            // Curved rather than linear easing gives an organic speed change.
            let eased = lerp(
                self.horizontal_speed,
                target_speed * input_scale,
                dt * self.config.speed_change_rate,
            );
            // Quantize to millimeters per second to keep the value stable
            // across platforms.
            self.horizontal_speed = (eased * 1000.0).round() / 1000.0;
        } else {
            self.horizontal_speed = target_speed;
        }

        self.animation_blend = lerp(
            self.animation_blend,
            target_speed,
            dt * self.config.speed_change_rate,
        );
        if self.animation_blend < INPUT_DEADBAND {
            self.animation_blend = 0.0;
        }
    }

    #[inline]
    pub fn transform(&self) -> &EntityTransform {
        &self.transform
    }

    /// Host override after its collision layer resolved the displacement.
    #[inline]
    pub fn set_translation(&mut self, translation: Vec3) {
        self.transform.translation = translation;
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_speed
    }

    /// Eased locomotion blend weight for the host's animation layer.
    #[inline]
    pub fn animation_blend(&self) -> f32 {
        self.animation_blend
    }

    #[cfg(test)]
    pub(crate) fn set_vertical_velocity(&mut self, v: f32) {
        self.vertical_velocity = v;
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
