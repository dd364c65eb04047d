/// Convert a normalized `0..=1` channel into `0..=255` with rounding.
pub(crate) fn channel_to_u8(c: f64) -> u8 {
    if !c.is_finite() {
        return 0;
    }
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Round to two decimal places.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// `num / den`, or `None` when the result would be infinite or NaN.
pub(crate) fn finite_ratio(num: f64, den: f64) -> Option<f64> {
    if den == 0.0 {
        return None;
    }
    let r = num / den;
    r.is_finite().then_some(r)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
