// SPDX-License-Identifier: CC0-1.0

//! Float helpers that `core` does not provide.

/// 2^52, the smallest magnitude at which every `f64` is an integer.
const TO_INT: f64 = 1.0 / f64::EPSILON;

/// Rounds to the nearest integer, ties to even.
///
/// Same result as `f64::round_ties_even` from `std`. NaN and infinities are returned unchanged.
pub(crate) fn round_ties_even(x: f64) -> f64 {
    let negative = x.is_sign_negative();
    let magnitude = if negative { -x } else { x };

    if magnitude.is_nan() || magnitude >= TO_INT {
        return x;
    }

    let rounded = (magnitude + TO_INT) - TO_INT;
    if negative {
        -rounded
    } else {
        rounded
    }
}

/// Absolute value, also clearing the sign of `-0.0`.
pub(crate) fn abs(x: f64) -> f64 { f64::from_bits(x.to_bits() & !(1 << 63)) }
