/// Rounds half toward positive infinity, matching JavaScript's `Math.round`:
/// `2.5 -> 3`, `-0.5 -> 0`, `-1.5 -> -1`.
///
/// `f64::round` rounds half away from zero and would disagree on negative halves.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();

    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Replaces NaN and infinities with `fallback`.
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Clamps a rounded rating into `[0, ceiling]` and converts it to an integer rating.
///
/// Unlike `f64::clamp` this never panics when `ceiling < 0`: the floor wins.
pub fn clamp_rating(value: f64, ceiling: f64) -> i32 {
    value.min(ceiling).max(0.0) as i32
}
