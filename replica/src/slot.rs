/*!
Single-slot handoff between network delivery and the tick loop.

The host may deliver messages on a thread other than the one driving
simulation ticks. The contract is single-writer / single-reader with at
most one decoded update pending at a time: a newer update supersedes an
unconsumed older one, it never queues behind it. Decoded values are only
consumed at the top of the next tick, never applied mid-tick.
*/

use shared::{SyncUpdate, WireError, decode};
use std::sync::Mutex;

/// At-most-one pending decoded update.
#[derive(Debug, Default)]
pub struct UpdateSlot {
    pending: Mutex<Option<SyncUpdate>>,
}

impl UpdateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a state-sync message and publish it. A message that fails to
    /// decode is discarded whole; the slot keeps whatever it held before.
    pub fn receive(&self, bytes: &[u8]) -> Result<(), WireError> {
        match decode(bytes) {
            Ok(update) => {
                self.publish(update);
                Ok(())
            }
            Err(err) => {
                log::warn!("discarding sync message: {err}");
                Err(err)
            }
        }
    }

    /// Publish an already-decoded update. Newest wins.
    pub fn publish(&self, update: SyncUpdate) {
        let mut guard = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(update);
    }

    /// Consume the pending update, if any. Called once per tick by the
    /// simulation loop.
    pub fn take(&self) -> Option<SyncUpdate> {
        let mut guard = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        guard.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ChangeFlags, EntityTransform, InputSample, Vec3, encode};

    fn position_message(z: f32) -> Vec<u8> {
        let transform = EntityTransform::new(Vec3::new(0.0, 0.0, z), shared::Quat::identity());
        encode(
            ChangeFlags {
                position: true,
                ..ChangeFlags::NONE
            },
            &transform,
            &InputSample::default(),
        )
    }

    #[test]
    fn newer_update_supersedes_unconsumed_older_one() {
        let slot = UpdateSlot::new();
        slot.receive(&position_message(1.0)).unwrap();
        slot.receive(&position_message(2.0)).unwrap();

        let update = slot.take().unwrap();
        assert_eq!(update.position.unwrap().z, 2.0);
        // Only one update was pending.
        assert!(slot.take().is_none());
    }

    #[test]
    fn desynced_message_leaves_the_slot_untouched() {
        let slot = UpdateSlot::new();
        slot.receive(&position_message(1.0)).unwrap();

        let mut truncated = position_message(2.0);
        truncated.truncate(4);
        assert!(slot.receive(&truncated).is_err());

        let update = slot.take().unwrap();
        assert_eq!(update.position.unwrap().z, 1.0);
    }

    #[test]
    fn take_drains_the_slot() {
        let slot = UpdateSlot::new();
        assert!(slot.take().is_none());

        slot.receive(&position_message(3.0)).unwrap();
        assert!(slot.take().is_some());
        assert!(slot.take().is_none());
    }

    #[test]
    fn slot_is_shareable_across_threads() {
        use std::sync::Arc;

        let slot = Arc::new(UpdateSlot::new());
        let writer = Arc::clone(&slot);
        let handle = std::thread::spawn(move || {
            for i in 0..100 {
                writer.receive(&position_message(i as f32)).unwrap();
            }
        });
        handle.join().unwrap();

        assert_eq!(slot.take().unwrap().position.unwrap().z, 99.0);
    }
}
