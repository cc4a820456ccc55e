//! # Significant-Figure Formatting
//!
//! The (magnitude, precision) → text half of the engine: render an `f64`
//! showing exactly the requested number of significant figures, switching to
//! scientific notation when fixed-point cannot display them.
//!
//! Rounding policy: ties round half away from zero (`f64::round` semantics),
//! applied once to the mantissa scaled into `[1, 10)`.
//!
//! ## Example
//!
//! ```rust
//! use sigfig_core::format::format_sig_figs;
//!
//! assert_eq!(format_sig_figs(115.5451, 3), "116");
//! assert_eq!(format_sig_figs(0.00456, 3), "4.56e-3");
//! assert_eq!(format_sig_figs(1234.0, 2), "1.2e+3");
//! ```

/// Round to `decimals` digits after the decimal point, ties away from zero.
pub(crate) fn round_to_decimals(x: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(400) as i32);
    if !factor.is_finite() {
        // Finer than f64 resolves; nothing to round
        return x;
    }
    (x * factor).round() / factor
}

/// Multiply by 10^exp in two steps when the power itself would under- or
/// overflow f64, as it does for subnormal orders like 10^-324.
fn scale_by_pow10(x: f64, exp: i32) -> f64 {
    if exp.abs() <= 307 {
        x * 10f64.powi(exp)
    } else {
        let half = exp / 2;
        x * 10f64.powi(half) * 10f64.powi(exp - half)
    }
}

/// Render `value` with exactly `sig_figs` significant figures.
///
/// Fixed-point is used when the leading significant digit sits at or above
/// the ones place and all significant digits fit before rounding spills into
/// placeholder zeros; otherwise scientific notation with a signed exponent
/// (`1.2e+3`, `4.56e-3`). A `sig_figs` of 0 is treated as 1.
pub fn format_sig_figs(value: f64, sig_figs: u32) -> String {
    format_number(value, sig_figs, None)
}

/// Formatting core shared with [`crate::number::SigFig`]'s `Display`.
///
/// `zero_scale` is the fractional digit count of the source literal; an exact
/// zero renders as `0.00...` with that many decimal zeros.
pub(crate) fn format_number(value: f64, sig_figs: u32, zero_scale: Option<u32>) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return match zero_scale {
            Some(frac) if frac > 0 => format!("0.{}", "0".repeat(frac as usize)),
            _ => "0".to_string(),
        };
    }

    let sig_figs = sig_figs.max(1);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let magnitude = value.abs();

    let mut order = magnitude.log10().floor() as i32;
    let mut scaled = round_to_decimals(scale_by_pow10(magnitude, -order), sig_figs - 1);
    // Rounding can carry the mantissa out of [1, 10), e.g. 9.99 -> 10.0
    if scaled >= 10.0 {
        scaled /= 10.0;
        order += 1;
    }

    if order >= 0 && (order as u32) < sig_figs {
        let decimals = (sig_figs - order as u32 - 1) as usize;
        format!("{}{:.*}", sign, decimals, scaled * 10f64.powi(order))
    } else {
        format!("{}{:.*}e{:+}", sign, (sig_figs - 1) as usize, scaled, order)
    }
}
