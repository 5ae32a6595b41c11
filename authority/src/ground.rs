//! Ground-surface query boundary.
//!
//! The sync core never owns a physics world; the host supplies the downward
//! ray against whatever it tags as ground.

use shared::Vec3;

/// The host's ground query hiccuped this tick (engine busy, scene loading,
/// query world rebuilding). Transient by definition; the caller treats the
/// tick as "no hit" and probes again next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeFailed;

/// A downward hit test against ground-tagged surfaces.
pub trait GroundProbe {
    /// Cast a ray straight down from `origin` over at most `max_distance`
    /// meters. `Ok(true)` means a ground-tagged surface is within range.
    fn cast_down(&mut self, origin: Vec3, max_distance: f32) -> Result<bool, ProbeFailed>;
}

/// Blanket impl so plain closures can serve as probes in hosts and tests.
impl<F> GroundProbe for F
where
    F: FnMut(Vec3, f32) -> Result<bool, ProbeFailed>,
{
    fn cast_down(&mut self, origin: Vec3, max_distance: f32) -> Result<bool, ProbeFailed> {
        self(origin, max_distance)
    }
}
