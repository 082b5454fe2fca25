/// Full turn in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Wraps an angle produced by `atan2` (in degrees) into `[0, 360)`.
///
/// Negative angles have a full turn added. A tiny negative angle can round to
/// exactly 360.0 after the addition, which is folded back to 0.0.
pub fn normalize_degrees(angle: f64) -> f64 {
    // `+ 0.0` turns -0.0 into 0.0
    let wrapped = if angle < 0.0 { angle + FULL_TURN } else { angle + 0.0 };
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Clamps an argument for `acos`/`asin` into `[-1, 1]`. NaN is passed through.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}
