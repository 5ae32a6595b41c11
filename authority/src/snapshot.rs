//! The authority's record of what it last put on the wire.
//!
//! This is tracked independently of anything a replica holds: the gate
//! compares against last-*transmitted* values, never last-*received* ones.

use shared::{ChangeFlags, EntityTransform, InputSample, Quat, Vec2, Vec3};

/// Last-transmitted values, one per sync field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SentSnapshot {
    pub position: Vec3,
    pub rotation: Quat,
    pub move_input: Vec2,
    pub look: Vec2,
}

impl SentSnapshot {
    /// Snapshot as of (re)activation: the spawn pose with idle inputs.
    pub fn from_spawn(spawn: &EntityTransform) -> Self {
        Self {
            position: spawn.translation,
            rotation: spawn.rotation,
            move_input: Vec2::zeros(),
            look: Vec2::zeros(),
        }
    }

    /// Fold the flagged fields of the current state into the snapshot.
    ///
    /// Call only after the transport accepted the payload; unflagged fields
    /// are left untouched so the gate keeps measuring against the values
    /// actually on the wire.
    pub fn commit(&mut self, flags: ChangeFlags, current: &EntityTransform, input: &InputSample) {
        if flags.position {
            self.position = current.translation;
        }
        if flags.rotation {
            self.rotation = current.rotation;
        }
        if flags.move_input {
            self.move_input = input.move_input;
        }
        if flags.look {
            self.look = input.look;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_touches_only_flagged_fields() {
        let mut snapshot = SentSnapshot::from_spawn(&EntityTransform::identity());
        let current = EntityTransform::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_axis_angle(&Vec3::y_axis(), 1.0),
        );
        let input = InputSample {
            move_input: Vec2::new(0.0, 1.0),
            look: Vec2::new(0.5, -0.5),
            jump: false,
        };

        snapshot.commit(
            ChangeFlags {
                position: true,
                look: true,
                ..ChangeFlags::NONE
            },
            &current,
            &input,
        );

        assert_eq!(snapshot.position, current.translation);
        assert_eq!(snapshot.look, input.look);
        // Unflagged fields keep their last-sent values.
        assert_eq!(snapshot.rotation, Quat::identity());
        assert_eq!(snapshot.move_input, Vec2::zeros());
    }
}
