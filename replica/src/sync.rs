/*!
Per-tick replica pipeline: drain the handoff slot, refresh the ping-derived
blend rate, and advance the displayed transform.
*/

use crate::interpolate::advance;
use crate::rate::interpolation_rate;
use crate::slot::UpdateSlot;
use crate::target::ReceivedTarget;
use shared::{EffectCommand, EntityTransform, Vec2, WireError};
use std::sync::Arc;

/// The replica role for one networked entity.
#[derive(Debug)]
pub struct Replica {
    transform: EntityTransform,
    target: ReceivedTarget,
    inbox: Arc<UpdateSlot>,
}

impl Replica {
    pub fn new(spawn: EntityTransform) -> Self {
        Self {
            transform: spawn,
            target: ReceivedTarget::from_spawn(&spawn),
            inbox: Arc::new(UpdateSlot::new()),
        }
    }

    /// Handle for the host's network delivery path. Messages decode and
    /// land in the slot from whatever thread delivery runs on; the tick
    /// loop consumes them here.
    pub fn inbox(&self) -> Arc<UpdateSlot> {
        Arc::clone(&self.inbox)
    }

    /// Re-activate at a spawn pose. Any unconsumed update is dropped; it
    /// described the entity's previous life.
    pub fn reset(&mut self, spawn: EntityTransform) {
        self.transform = spawn;
        self.target = ReceivedTarget::from_spawn(&spawn);
        let _ = self.inbox.take();
    }

    /// Advance one simulation tick.
    ///
    /// `ping_ms` is the transport's freshest round-trip sample (negative
    /// values clamp to zero); the blend rate is re-derived from it every
    /// tick rather than cached.
    pub fn tick(&mut self, ping_ms: f32, dt: f32) -> &EntityTransform {
        if let Some(update) = self.inbox.take() {
            self.target.apply(&update);
        }

        let rate = interpolation_rate(ping_ms);
        self.transform = advance(&self.transform, &self.target.transform(), rate, dt);
        &self.transform
    }

    /// Decode a one-shot command addressed to this entity.
    pub fn on_command(&self, bytes: &[u8]) -> Result<EffectCommand, WireError> {
        EffectCommand::decode(bytes).inspect_err(|err| {
            log::warn!("discarding command message: {err}");
        })
    }

    /// The displayed (interpolated) pose. Never authoritative.
    #[inline]
    pub fn transform(&self) -> &EntityTransform {
        &self.transform
    }

    /// Mirrored move input, for the host's animation layer only.
    #[inline]
    pub fn move_input(&self) -> Vec2 {
        self.target.move_input
    }

    /// Mirrored look input, for the host's animation layer only.
    #[inline]
    pub fn look(&self) -> Vec2 {
        self.target.look
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ChangeFlags, InputSample, Quat, Vec3, encode};

    fn message(z: f32, move_input: Vec2) -> Vec<u8> {
        let transform = EntityTransform::new(Vec3::new(0.0, 0.0, z), Quat::identity());
        let input = InputSample {
            move_input,
            ..InputSample::default()
        };
        encode(
            ChangeFlags {
                position: true,
                move_input: true,
                ..ChangeFlags::NONE
            },
            &transform,
            &input,
        )
    }

    #[test]
    fn tick_blends_halfway_at_saturation_half() {
        let mut replica = Replica::new(EntityTransform::identity());
        replica.inbox().receive(&message(0.2, Vec2::zeros())).unwrap();

        // rate 10 (low ping), dt 0.05 -> factor 0.5
        replica.tick(40.0, 0.05);

        assert!((replica.transform().translation.z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn update_is_consumed_at_the_next_tick_not_mid_tick() {
        let mut replica = Replica::new(EntityTransform::identity());
        replica.tick(40.0, 0.05);
        assert_eq!(replica.transform().translation.z, 0.0);

        replica.inbox().receive(&message(1.0, Vec2::zeros())).unwrap();
        // The target only moves once a tick runs.
        assert_eq!(replica.transform().translation.z, 0.0);
        replica.tick(40.0, 0.05);
        assert!(replica.transform().translation.z > 0.0);
    }

    #[test]
    fn mirrored_input_tracks_the_wire() {
        let mut replica = Replica::new(EntityTransform::identity());
        replica
            .inbox()
            .receive(&message(0.0, Vec2::new(0.0, 1.0)))
            .unwrap();
        replica.tick(40.0, 0.05);

        assert_eq!(replica.move_input(), Vec2::new(0.0, 1.0));
        assert_eq!(replica.look(), Vec2::zeros());
    }

    #[test]
    fn settled_replica_stays_put() {
        let mut replica = Replica::new(EntityTransform::identity());
        replica.inbox().receive(&message(0.2, Vec2::zeros())).unwrap();

        // Saturated factor lands on the target; further ticks must not drift.
        replica.tick(40.0, 1.0);
        let settled = *replica.transform();
        for _ in 0..10 {
            replica.tick(40.0, 1.0);
        }

        assert_eq!(replica.transform().translation, settled.translation);
        assert_eq!(replica.transform().rotation, settled.rotation);
    }

    #[test]
    fn reset_drops_any_pending_update() {
        let mut replica = Replica::new(EntityTransform::identity());
        replica.inbox().receive(&message(5.0, Vec2::zeros())).unwrap();

        let respawn = EntityTransform::new(Vec3::new(9.0, 0.0, 9.0), Quat::identity());
        replica.reset(respawn);
        replica.tick(40.0, 0.05);

        assert_eq!(replica.transform().translation, respawn.translation);
    }

    #[test]
    fn commands_decode_through_the_replica() {
        let replica = Replica::new(EntityTransform::identity());
        assert_eq!(
            replica.on_command(&[1]).unwrap(),
            EffectCommand::FireEffectOn
        );
        assert!(replica.on_command(&[0xEE]).is_err());
    }
}
