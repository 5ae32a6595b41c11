/*!
Per-tick authority pipeline: kinematics, change gate, delta encoding.

Sending is two-phase so the last-sent snapshot only advances for payloads
the transport actually accepted:

```text
tick(input, probe, dt)        integrate the authoritative transform
prepare_update()              gate + encode the changed fields, if any
  <host sends the payload>
commit_sent(flags)            fold the sent fields into the snapshot
```

[`Authority::sync_tick`] wraps the prepare/send/commit dance for hosts with
an infallible-enough send path.
*/

use crate::config::KinematicsConfig;
use crate::gate::evaluate_changes;
use crate::ground::GroundProbe;
use crate::kinematics::AuthorityKinematics;
use crate::snapshot::SentSnapshot;
use shared::{ChangeFlags, EffectCommand, EntityTransform, InputSample, encode};

/// The authority role for one networked entity.
#[derive(Clone, Debug)]
pub struct Authority {
    kinematics: AuthorityKinematics,
    last_sent: SentSnapshot,
    input: InputSample,
}

impl Authority {
    pub fn new(spawn: EntityTransform, config: KinematicsConfig) -> Self {
        Self {
            kinematics: AuthorityKinematics::new(spawn, config),
            last_sent: SentSnapshot::from_spawn(&spawn),
            input: InputSample::default(),
        }
    }

    /// Re-activate at a spawn pose; the snapshot resets with it and holds
    /// no meaning before the first tick.
    pub fn reset(&mut self, spawn: EntityTransform) {
        self.kinematics.reset(spawn);
        self.last_sent = SentSnapshot::from_spawn(&spawn);
        self.input = InputSample::default();
    }

    /// Run one simulation tick of the authoritative kinematics.
    pub fn tick(
        &mut self,
        input: InputSample,
        probe: &mut impl GroundProbe,
        dt: f32,
    ) -> &EntityTransform {
        self.input = input;
        self.kinematics.tick(&input, probe, dt)
    }

    /// Gate the current state against the last-sent snapshot and encode the
    /// changed fields. `None` when nothing crossed a threshold.
    pub fn prepare_update(&self) -> Option<(ChangeFlags, Vec<u8>)> {
        let flags = evaluate_changes(self.kinematics.transform(), &self.input, &self.last_sent);
        if !flags.any() {
            return None;
        }
        let payload = encode(flags, self.kinematics.transform(), &self.input);
        Some((flags, payload))
    }

    /// Record that the flagged fields went out on the wire.
    pub fn commit_sent(&mut self, flags: ChangeFlags) {
        self.last_sent
            .commit(flags, self.kinematics.transform(), &self.input);
    }

    /// One synchronization tick: gate, encode, send, commit.
    ///
    /// Returns `Ok(true)` if a payload went out, `Ok(false)` if nothing
    /// needed sending, and the transport error (without committing) if the
    /// send failed.
    pub fn sync_tick<E>(&mut self, send: impl FnOnce(&[u8]) -> Result<(), E>) -> Result<bool, E> {
        let Some((flags, payload)) = self.prepare_update() else {
            return Ok(false);
        };
        send(&payload)?;
        self.commit_sent(flags);
        Ok(true)
    }

    /// Encode a one-shot broadcast command for the reliable channel.
    ///
    /// Commands bypass the change gate entirely; they are not state.
    pub fn broadcast_effect(&self, command: EffectCommand) -> [u8; 1] {
        command.encode()
    }

    #[inline]
    pub fn transform(&self) -> &EntityTransform {
        self.kinematics.transform()
    }

    #[inline]
    pub fn kinematics(&self) -> &AuthorityKinematics {
        &self.kinematics
    }

    #[inline]
    pub fn kinematics_mut(&mut self) -> &mut AuthorityKinematics {
        &mut self.kinematics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ground::ProbeFailed;
    use shared::{Vec2, Vec3, decode};

    fn grounded() -> impl FnMut(Vec3, f32) -> Result<bool, ProbeFailed> {
        |_, _| Ok(true)
    }

    fn forward_input() -> InputSample {
        InputSample {
            move_input: Vec2::new(0.0, 1.0),
            ..InputSample::default()
        }
    }

    #[test]
    fn idle_authority_sends_nothing() {
        let authority = Authority::new(EntityTransform::identity(), KinematicsConfig::default());
        assert!(authority.prepare_update().is_none());
    }

    #[test]
    fn moving_past_threshold_sends_position_and_move() {
        let mut authority = Authority::new(EntityTransform::identity(), KinematicsConfig::default());
        authority.tick(forward_input(), &mut grounded(), 0.1);

        let (flags, payload) = authority.prepare_update().expect("0.2 m crossed the gate");
        assert!(flags.position);
        assert!(flags.move_input);
        assert!(!flags.look);

        let update = decode(&payload).unwrap();
        assert_eq!(
            update.position.unwrap(),
            authority.transform().translation
        );
        assert_eq!(update.move_input.unwrap(), Vec2::new(0.0, 1.0));
        assert_eq!(update.look, None);
    }

    #[test]
    fn commit_silences_the_gate_until_state_moves_again() {
        let mut authority = Authority::new(EntityTransform::identity(), KinematicsConfig::default());
        authority.tick(forward_input(), &mut grounded(), 0.1);

        let sent = authority.sync_tick(|_| Ok::<(), ()>(())).unwrap();
        assert!(sent);

        // Same state, same input: nothing further to send.
        assert!(authority.prepare_update().is_none());
    }

    #[test]
    fn failed_send_does_not_advance_the_snapshot() {
        let mut authority = Authority::new(EntityTransform::identity(), KinematicsConfig::default());
        authority.tick(forward_input(), &mut grounded(), 0.1);

        let result = authority.sync_tick(|_| Err::<(), &str>("transport down"));
        assert_eq!(result, Err("transport down"));

        // The update is still pending for the next sync tick.
        assert!(authority.prepare_update().is_some());
    }

    #[test]
    fn reset_rearms_the_snapshot_at_the_spawn_pose() {
        let mut authority = Authority::new(EntityTransform::identity(), KinematicsConfig::default());
        authority.tick(forward_input(), &mut grounded(), 0.1);
        let _ = authority.sync_tick(|_| Ok::<(), ()>(()));

        let respawn = EntityTransform::new(Vec3::new(5.0, 0.0, 5.0), shared::Quat::identity());
        authority.reset(respawn);

        assert_eq!(authority.transform(), &respawn);
        assert!(authority.prepare_update().is_none());
    }
}
