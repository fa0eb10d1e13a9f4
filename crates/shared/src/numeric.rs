/// Restricts `value` to `[min, max]`. Total over every `f64`: a NaN input
/// collapses to `min`, so garbage can never reach a displayed field.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Rounds `value` to `precision` decimal digits, halves away from zero.
pub fn round(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale).round() / scale
}
