/// Round to the nearest integer with ties going towards positive infinity,
/// matching Java's `Math.round` (`0.5 -> 1`, `-0.5 -> 0`, `-1.5 -> -1`).
///
/// A negative-zero result is returned as `0.0`.
pub fn round_java(x: f64) -> f64 {
    let mut t = x.trunc();
    let negative_tie = x < 0.0 && t - x == 0.5;

    if !negative_tie && (x - t).abs() >= 0.5 {
        t += 1.0f64.copysign(x);
    }

    if t == 0.0 {
        0.0
    } else {
        t
    }
}

/// Round to one decimal place using [`round_java`] tie-breaking
pub fn round_to_tenth(x: f64) -> f64 {
    round_java(x * 10.0) / 10.0
}
