/*!
Replica side of the sync relationship.

A process displaying an entity it does not own runs this pipeline:

- network delivery (possibly on another thread) decodes each message and
  publishes it into a single-slot handoff ([`slot::UpdateSlot`]);
- every simulation tick, [`sync::Replica`] drains the slot into the
  last-received target, derives a blend rate from the latest ping sample
  ([`rate::interpolation_rate`]), and advances the displayed transform
  toward the target ([`interpolate::advance`]).

The displayed transform is an approximation by construction; nothing here
is authoritative.
*/

pub mod interpolate;
pub mod rate;
pub mod slot;
pub mod sync;
pub mod target;

pub use interpolate::advance;
pub use rate::interpolation_rate;
pub use slot::UpdateSlot;
pub use sync::Replica;
pub use target::ReceivedTarget;
