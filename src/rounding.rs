//! Decimal rounding for tick computation.
//!
//! Tick values are rounded on a decimal basis so that repeated additions of
//! the tick step do not accumulate binary floating point drift into the
//! displayed labels.

use fastnum::decimal::D128;

/// Round `number` to `digits` decimal places using round-half-up.
///
/// Ties round away from zero on the decimal digit, not to even. Negative
/// `digits` round to tens, hundreds and so on. Non-finite input is returned
/// unchanged.
pub fn round_to_digits(number: f64, digits: i32) -> f64 {
    if !number.is_finite() {
        return number;
    }
    // Parse the shortest decimal form of the value so that ties land on the
    // printed digit rather than on the binary expansion.
    let decimal: D128 = match number.to_string().parse() {
        Ok(decimal) => decimal,
        Err(_) => return number,
    };
    decimal.round(digits as i16).to_f64()
}

/// Number of decimal places needed so a tick step of `step` does not alias
/// to zero after rounding: `round(-log10(0.5 * |step|))`.
///
/// `step` must be nonzero and finite; the caller special-cases degenerate
/// steps before asking for a digit count.
pub fn sig_digits_for(step: f64) -> i32 {
    debug_assert!(step != 0.0 && step.is_finite());
    round_half_up(-(0.5 * step.abs()).log10())
}

/// Round to the nearest integer with ties toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_on_the_decimal_digit() {
        assert_eq!(round_to_digits(0.25, 1), 0.3);
        assert_eq!(round_to_digits(0.35, 1), 0.4);
        assert_eq!(round_to_digits(-0.25, 1), -0.3);
        assert_eq!(round_to_digits(2.5, 0), 3.0);
        assert_eq!(round_to_digits(1.005, 2), 1.01);
    }

    #[test]
    fn negative_digits_round_to_powers_of_ten() {
        assert_eq!(round_to_digits(1234.0, -2), 1200.0);
        assert_eq!(round_to_digits(1250.0, -2), 1300.0);
        assert_eq!(round_to_digits(6.92, -1), 10.0);
        assert_eq!(round_to_digits(20.0, -1), 20.0);
    }

    #[test]
    fn rounding_is_idempotent() {
        for &(value, digits) in &[
            (0.123456, 3),
            (98765.4321, -2),
            (0.35, 1),
            (-7.77, 1),
            (1.0e-4, 5),
        ] {
            let once = round_to_digits(value, digits);
            assert_eq!(round_to_digits(once, digits), once);
        }
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_to_digits(f64::NAN, 2).is_nan());
        assert_eq!(round_to_digits(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn sig_digits_match_step_magnitude() {
        // A step of 20 needs rounding to tens, a step of 0.02 to millesimals.
        assert_eq!(sig_digits_for(20.0), -1);
        assert_eq!(sig_digits_for(2.0), 0);
        assert_eq!(sig_digits_for(0.2), 1);
        assert_eq!(sig_digits_for(0.02), 2);
        assert_eq!(sig_digits_for(-0.02), 2);
    }
}
