//! Latency-adaptive interpolation rate.
//!
//! Higher measured ping means the last-received target is staler, so the
//! replica blends toward it faster to avoid visibly lagging the authority.
//! Recomputed from the freshest ping sample every tick; never cached.

use shared::constants::{MAX_LERP_RATE, MIN_LERP_RATE, PING_RATE_CEIL_MS, PING_RATE_FLOOR_MS};

/// Map a round-trip-time sample (milliseconds) to a blend rate (per second).
///
/// At or under the 100 ms floor the rate is the fixed minimum. Above it the
/// ping maps linearly onto [0, 1] across the 100..200 ms span (clamped at
/// both ends) and interpolates between the minimum and maximum rates, so
/// the curve is continuous at the floor: 100 ms -> 10, 150 ms -> 15,
/// 200 ms and beyond -> 20. Negative samples clamp to zero first.
pub fn interpolation_rate(ping_ms: f32) -> f32 {
    let ping = ping_ms.max(0.0);
    if ping <= PING_RATE_FLOOR_MS {
        return MIN_LERP_RATE;
    }
    let factor =
        ((ping - PING_RATE_FLOOR_MS) / (PING_RATE_CEIL_MS - PING_RATE_FLOOR_MS)).clamp(0.0, 1.0);
    MIN_LERP_RATE + (MAX_LERP_RATE - MIN_LERP_RATE) * factor
}
