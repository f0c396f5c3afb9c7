//! Tick value generation and label formatting.
//!
//! Linear axes derive their tick step from a requested count, rounded to
//! the significant digits that keep labels stable. Logarithmic axes ignore
//! the count and enumerate every decade subdivision; the non-decade
//! multiples act as unlabeled minor marks.

use crate::rounding::{round_to_digits, sig_digits_for};
use crate::scale::{Limits, Scale};

/// A single axis tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Data value of the tick.
    pub value: f64,
    /// Mapped position in viewport units.
    pub position: f64,
    /// Display label; empty for minor marks.
    pub label: String,
    /// Whether the tick falls inside the viewport.
    pub inside: bool,
}

/// Log-space distance under which a tick counts as an exact decade.
const DECADE_TOLERANCE: f64 = 1e-4;

/// Decade exponents inside this open range render as plain numbers instead
/// of `1e<exp>` notation.
const PLAIN_EXPONENT_RANGE: (f64, f64) = (-3.1, 3.1);

/// Generate tick values for the given limits and scale.
///
/// `approx_count` is a hint for linear axes (zero yields no ticks) and is
/// ignored for logarithmic axes.
pub fn ticks_for(limits: Limits, scale: Scale, approx_count: u32) -> Vec<f64> {
    match scale {
        Scale::Linear => linear_ticks(limits, approx_count),
        Scale::Logarithmic => log_ticks(limits),
    }
}

/// Generate linear tick values.
///
/// The step is derived from `approx_count` and rounded to its significant
/// digits; if rounding collapses the step to zero or past the whole range,
/// one more digit is kept. The first tick is the rounded lower limit,
/// nudged one step inward when the rounding pushed it outside the range.
pub fn linear_ticks(limits: Limits, approx_count: u32) -> Vec<f64> {
    if approx_count == 0 {
        return Vec::new();
    }

    let (lo, hi) = (limits.lo(), limits.hi());
    let raw_step = (hi - lo) / approx_count as f64;
    let mut sig_digits = sig_digits_for(raw_step);
    let mut step = round_to_digits(raw_step, sig_digits);

    if step == 0.0 || step.abs() > (hi - lo).abs() {
        sig_digits += 1;
        step = round_to_digits(raw_step, sig_digits);
    }
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut first = round_to_digits(lo, sig_digits);

    // The rounded limit can land on the far side of both endpoints; step
    // one unit inward in that case.
    if (hi - first) * (lo - first) > 0.0 {
        first = round_to_digits(lo + step, sig_digits);
    }

    generate_from(first, step, sig_digits, hi)
}

/// Generate logarithmic tick values: nine multiples per decade plus the
/// closing decade, `(last_exp - first_exp) * 9 + 1` ticks in total.
///
/// The limits must both be strictly positive; the axis enforces this
/// before asking for ticks.
pub fn log_ticks(limits: Limits) -> Vec<f64> {
    let first_exp = limits.min().log10().floor() as i32;
    let last_exp = limits.max().log10().ceil() as i32;

    let mut ticks = Vec::with_capacity(((last_exp - first_exp) * 9 + 1).max(1) as usize);

    for exp in first_exp..last_exp {
        let base = round_to_digits(10.0_f64.powi(exp), -exp);
        for multiple in 1..=9 {
            ticks.push(multiple as f64 * base);
        }
    }
    ticks.push(round_to_digits(10.0_f64.powi(last_exp), -last_exp));

    // Tick order follows the limit direction.
    if limits.is_inverted() {
        ticks.reverse();
    }

    ticks
}

/// Shift an existing linear tick lattice to new limits without recomputing
/// the step, keeping the tick phase stable while panning.
///
/// The step is recovered from the first two old ticks (or the full span
/// when only one exists) and re-rounded with the same escalation rule as
/// generation. Logarithmic axes regenerate instead: the decade lattice is
/// absolute and cannot be phase-shifted.
pub fn moved_linear_ticks(old_ticks: &[f64], limits: Limits) -> Vec<f64> {
    if old_ticks.is_empty() {
        return Vec::new();
    }

    let (lo, hi) = (limits.lo(), limits.hi());
    let raw_step = if old_ticks.len() == 1 {
        hi - lo
    } else {
        old_ticks[1] - old_ticks[0]
    };
    let mut sig_digits = sig_digits_for(raw_step);
    let mut step = round_to_digits(raw_step, sig_digits);

    if step == 0.0 || step.abs() > (hi - lo).abs() {
        sig_digits += 1;
        step = round_to_digits(raw_step, sig_digits);
    }
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }
    step = if hi - lo > 0.0 { step.abs() } else { -step.abs() };

    // Nearest lattice point covering the new lower limit; fall back to the
    // next one down when rounding pushed it outside the range.
    let mut first = old_ticks[0] + step * ((lo - old_ticks[0]) / step).ceil();
    first = round_to_digits(first, sig_digits);

    if (hi - first) * (lo - first) > 0.0 {
        first = old_ticks[0] + step * ((lo - old_ticks[0]) / step).floor();
        first = round_to_digits(first, sig_digits);
    }

    generate_from(first, step, sig_digits, hi)
}

fn generate_from(first: f64, step: f64, sig_digits: i32, hi: f64) -> Vec<f64> {
    let count = ((hi - first) / step).abs().floor() as usize + 1;
    let mut ticks = Vec::with_capacity(count);
    ticks.push(first);
    for i in 1..count {
        // Re-round every step so the lattice does not drift.
        ticks.push(round_to_digits(ticks[i - 1] + step, sig_digits));
    }
    ticks
}

/// Format the label for a tick value.
///
/// Linear ticks render integers without a decimal point. Logarithmic ticks
/// are labeled only on exact decades; `exponential` forces `1e<exp>`
/// notation, which is otherwise reserved for decades outside `(-3.1, 3.1)`.
pub fn tick_label(value: f64, scale: Scale, exponential: bool) -> String {
    match scale {
        Scale::Linear => linear_label(value),
        Scale::Logarithmic => log_label(value, exponential),
    }
}

fn linear_label(value: f64) -> String {
    if value % 1.0 == 0.0 && value.abs() < 1e9 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn log_label(value: f64, exponential: bool) -> String {
    if value <= 0.0 {
        return String::new();
    }

    let log_value = value.log10();
    let rounded = log_value.round();
    if (log_value - rounded).abs() >= DECADE_TOLERANCE {
        // Minor tick: one of the 2x..9x multiples inside a decade.
        return String::new();
    }

    let exponent = rounded as i32;
    let plain = rounded > PLAIN_EXPONENT_RANGE.0 && rounded < PLAIN_EXPONENT_RANGE.1;
    if exponential || !plain {
        format!("1e{exponent}")
    } else if exponent >= 0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
