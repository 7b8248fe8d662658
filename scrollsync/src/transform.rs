//! The pure offset transform applied to the driving member's raw offsets.

use crate::options::SyncInterval;

/// Compute the value to broadcast for a raw offset reported by the driver.
///
/// `last` is the driver's previously recorded offset. In precedence order:
///
/// 1. The offset just crossed into the lower bound (`raw <= lo` while `last`
///    was above it): broadcast exactly `lo`, once.
/// 2. Same for the upper bound: broadcast exactly `hi`, once.
/// 3. The offset is still at or past a bound: broadcast nothing.
/// 4. Inside the open interval: broadcast the raw offset unchanged.
///
/// So a driver leaving the window produces a single clamp at the bound, then
/// silence, and live mirroring resumes as soon as it scrolls back inside.
/// With the default unbounded window only rule 4 ever applies.
pub fn broadcast_offset(raw: f64, last: f64, interval: SyncInterval) -> Option<f64> {
    let lo = interval.lo();
    let hi = interval.hi();

    if raw <= lo && last > lo {
        Some(lo)
    } else if raw >= hi && last < hi {
        Some(hi)
    } else if raw <= lo || raw >= hi {
        None
    } else {
        Some(raw)
    }
}
