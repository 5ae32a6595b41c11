/*!
Authority side of the sync relationship.

The process that owns an entity runs this pipeline every simulation tick:

1. [`kinematics::AuthorityKinematics`] integrates grounded / gravity / jump
   state and horizontal movement into the authoritative transform.
2. [`gate`] compares the result (and the tick's input sample) against the
   entity's own last-sent snapshot.
3. If anything changed enough to transmit, [`sync::Authority`] encodes
   exactly the changed fields and hands the payload to the host transport.

The host supplies time, input, a ground ray ([`ground::GroundProbe`]) and
the reliable channel; nothing here blocks or schedules sends.
*/

pub mod config;
pub mod gate;
pub mod ground;
pub mod kinematics;
pub mod snapshot;
pub mod sync;

pub use config::KinematicsConfig;
pub use gate::evaluate_changes;
pub use ground::{GroundProbe, ProbeFailed};
pub use kinematics::AuthorityKinematics;
pub use snapshot::SentSnapshot;
pub use sync::Authority;
