/*!
Change gate: decides which fields changed enough, since the *last-sent*
snapshot, to be worth transmitting this tick.

The asymmetry is intentional and load-bearing:
- position and rotation use world-space thresholds (0.1 m, 5 degrees),
  both strictly greater-than;
- move/look input uses an any-difference check at float tolerance, since
  replicas mirror input for animation and even small changes matter there.
*/

use crate::snapshot::SentSnapshot;
use shared::constants::{POSITION_SEND_THRESHOLD, ROTATION_SEND_THRESHOLD_DEG};
use shared::{ChangeFlags, EntityTransform, InputSample, inputs_differ};

/// Compare the current authoritative state against the last-sent snapshot.
pub fn evaluate_changes(
    current: &EntityTransform,
    input: &InputSample,
    last_sent: &SentSnapshot,
) -> ChangeFlags {
    let position_delta = (current.translation - last_sent.position).norm();
    let rotation_delta_deg = current.rotation.angle_to(&last_sent.rotation).to_degrees();

    ChangeFlags {
        position: position_delta > POSITION_SEND_THRESHOLD,
        rotation: rotation_delta_deg > ROTATION_SEND_THRESHOLD_DEG,
        move_input: inputs_differ(input.move_input, last_sent.move_input),
        look: inputs_differ(input.look, last_sent.look),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Quat, Vec2, Vec3};

    fn snapshot_at_origin() -> SentSnapshot {
        SentSnapshot::from_spawn(&EntityTransform::identity())
    }

    fn transform_at(z: f32) -> EntityTransform {
        EntityTransform::new(Vec3::new(0.0, 0.0, z), Quat::identity())
    }

    #[test]
    fn position_threshold_is_strictly_greater() {
        let last = snapshot_at_origin();
        let input = InputSample::default();

        // Exactly at the threshold: not worth sending.
        let flags = evaluate_changes(&transform_at(0.1), &input, &last);
        assert!(!flags.position);

        // Just past it: send.
        let flags = evaluate_changes(&transform_at(0.1001), &input, &last);
        assert!(flags.position);
    }

    #[test]
    fn rotation_threshold_is_five_degrees() {
        let last = snapshot_at_origin();
        let input = InputSample::default();

        let below = EntityTransform::new(
            Vec3::zeros(),
            Quat::from_axis_angle(&Vec3::y_axis(), 4.0_f32.to_radians()),
        );
        assert!(!evaluate_changes(&below, &input, &last).rotation);

        let above = EntityTransform::new(
            Vec3::zeros(),
            Quat::from_axis_angle(&Vec3::y_axis(), 6.0_f32.to_radians()),
        );
        assert!(evaluate_changes(&above, &input, &last).rotation);
    }

    #[test]
    fn input_gate_fires_on_any_real_difference() {
        let last = snapshot_at_origin();
        let current = EntityTransform::identity();

        // Well under the transform thresholds, but inputs still gate.
        let input = InputSample {
            move_input: Vec2::new(0.02, 0.0),
            ..InputSample::default()
        };
        let flags = evaluate_changes(&current, &input, &last);
        assert!(flags.move_input);
        assert!(!flags.look);
        assert!(!flags.position);
        assert!(!flags.rotation);
    }

    #[test]
    fn unchanged_state_raises_no_flags() {
        let last = snapshot_at_origin();
        let flags = evaluate_changes(&EntityTransform::identity(), &InputSample::default(), &last);
        assert_eq!(flags, ChangeFlags::NONE);
    }
}
