//! The replica's record of the freshest values received off the wire.

use shared::{EntityTransform, Quat, SyncUpdate, Vec2, Vec3};

/// Most recently decoded position / rotation / move / look.
///
/// Fields absent from a message keep their previous value: on the wire,
/// absence means "unchanged", never "zero". Holds the spawn pose until the
/// first message lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReceivedTarget {
    pub position: Vec3,
    pub rotation: Quat,
    pub move_input: Vec2,
    pub look: Vec2,
}

impl ReceivedTarget {
    pub fn from_spawn(spawn: &EntityTransform) -> Self {
        Self {
            position: spawn.translation,
            rotation: spawn.rotation,
            move_input: Vec2::zeros(),
            look: Vec2::zeros(),
        }
    }

    /// Fold a fully-decoded update in. Callers must only pass updates that
    /// decoded without error; a desynced message is discarded whole, never
    /// partially applied here.
    pub fn apply(&mut self, update: &SyncUpdate) {
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(rotation) = update.rotation {
            self.rotation = rotation;
        }
        if let Some(move_input) = update.move_input {
            self.move_input = move_input;
        }
        if let Some(look) = update.look {
            self.look = look;
        }
    }

    /// The pose the interpolator steers toward.
    #[inline]
    pub fn transform(&self) -> EntityTransform {
        EntityTransform::new(self.position, self.rotation)
    }
}
