//! Currency helpers.

/// Round a monetary value to 2 decimal places, half away from zero.
///
/// Returned as a number, not a formatted string; report sums depend on
/// the exact place this is applied (see `report::aggregate`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
