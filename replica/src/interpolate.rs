//! Per-tick transform blending toward the last-received target.

use shared::EntityTransform;

/// Advance `current` toward `target` by one tick.
///
/// The blend factor is `dt * rate`, clamped to [0, 1] so a large tick can
/// land exactly on the target but never overshoot it. Translation lerps,
/// rotation slerps by the same factor. Exactly idempotent when `current`
/// already equals `target`: each component is returned untouched rather
/// than re-derived, so repeated calls cannot drift.
pub fn advance(
    current: &EntityTransform,
    target: &EntityTransform,
    rate: f32,
    dt: f32,
) -> EntityTransform {
    let t = (dt * rate).clamp(0.0, 1.0);

    let translation = if current.translation == target.translation {
        current.translation
    } else {
        current.translation.lerp(&target.translation, t)
    };

    let rotation = if current.rotation == target.rotation {
        current.rotation
    } else {
        // try_slerp is None only when the two rotations are antipodal and
        // the path is ambiguous; either endpoint is a valid choice there.
        current
            .rotation
            .try_slerp(&target.rotation, t, 1.0e-9)
            .unwrap_or(if t < 0.5 {
                current.rotation
            } else {
                target.rotation
            })
    };

    EntityTransform {
        translation,
        rotation,
    }
}
