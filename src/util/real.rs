//! floating point utilities

use num::{BigInt, BigRational, Signed, ToPrimitive};

/// Whether `x` lies in the closed interval `[-epsilon, epsilon]`.
pub(crate) fn approx_zero(x: f64, epsilon: f64) -> bool {
    -epsilon <= x && x <= epsilon
}

/// Strict sign change, zeros never count.
pub(crate) fn opposite_signs(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Format `x` with exactly `places` decimals, rounding ties away from zero.
///
/// The rounding is done on the exact binary value of `x`, so e.g.
/// `0.0078125` becomes `"0.007813"`. Non-finite values fall back to the
/// standard formatting.
pub(crate) fn fmt_half_up(x: f64, places: u32) -> String {
    let Some(exact) = BigRational::from_float(x) else {
        return format!("{x}");
    };
    let scale = BigInt::from(10u32).pow(places);
    // `Ratio::round` rounds half away from zero
    let scaled = (exact * BigRational::from_integer(scale.clone()))
        .round()
        .to_integer();

    let sign = if scaled.is_negative() { "-" } else { "" };
    let magnitude = scaled.abs();
    let whole = &magnitude / &scale;
    let frac = &magnitude % &scale;
    if places == 0 {
        return format!("{sign}{whole}");
    }
    let width = places.to_usize().unwrap_or(usize::MAX);
    format!("{sign}{whole}.{frac:0>width$}")
}
