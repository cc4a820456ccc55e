//! # Literal Analysis
//!
//! Significant-figure counting from numeral text. This is the text → precision
//! half of the engine: given a decimal or scientific-notation literal, derive
//! how many of its digits carry measurement information.
//!
//! Counting rules (standard scientific convention):
//!
//! - Leading zeros never count (`0.00123` has 3 sig figs).
//! - Trailing zeros after a decimal point always count (`1.200` has 4).
//! - An exponent contributes nothing; only the mantissa is counted
//!   (`1.23e4` has 3).
//! - Trailing zeros in a bare integer (`1200`) are ambiguous. This crate does
//!   NOT count them, and reports an [`Advisory`] so callers can audit the
//!   assumption. Writing `1.200e3` or `"1200"` with an explicit precision
//!   override avoids the ambiguity entirely.
//! - An all-zero run of digits (`0`, `0.000`) counts as exactly 1.
//!
//! Only the ASCII `.` decimal separator is recognized.
//!
//! ## Example
//!
//! ```rust
//! use sigfig_core::literal::count_sig_figs;
//!
//! let counted = count_sig_figs("0.00456").unwrap();
//! assert_eq!(counted.sig_figs, 3);
//! assert!(counted.advisories.is_empty());
//!
//! let counted = count_sig_figs("1200").unwrap();
//! assert_eq!(counted.sig_figs, 2);
//! assert_eq!(counted.advisories.len(), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SigFigError, SigFigResult};

/// Non-fatal observation made while counting significant figures.
///
/// Advisories are returned alongside the parsed value rather than emitted
/// through a global log channel, so callers can inspect or ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "details")]
pub enum Advisory {
    /// A bare integer literal ends in zeros whose significance the notation
    /// cannot express. The trailing run was assumed NOT significant.
    AmbiguousTrailingZeros {
        literal: String,
        trailing_zeros: u32,
        assumed_sig_figs: u32,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::AmbiguousTrailingZeros {
                literal,
                trailing_zeros,
                assumed_sig_figs,
            } => write!(
                f,
                "'{}': {} trailing zero(s) are ambiguous; assuming {} significant figure(s)",
                literal, trailing_zeros, assumed_sig_figs
            ),
        }
    }
}

/// Outcome of counting significant figures in a literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counted {
    /// Significant figures in the mantissa, always >= 1
    pub sig_figs: u32,
    /// Non-fatal observations (trailing-zero ambiguity)
    pub advisories: Vec<Advisory>,
}

/// Count the significant figures in a numeral's text.
///
/// Accepts an optional sign, an optional fractional part, and an optional
/// `e`/`E` exponent. Fails with [`SigFigError::MalformedLiteral`] when the
/// text is not a finite numeral.
pub fn count_sig_figs(text: &str) -> SigFigResult<Counted> {
    let literal = analyze(text)?;
    Ok(Counted {
        sig_figs: literal.sig_figs,
        advisories: literal.advisories,
    })
}

/// Fully analyzed literal: magnitude, precision, and source scale.
#[derive(Debug, Clone)]
pub(crate) struct Literal {
    pub value: f64,
    pub sig_figs: u32,
    /// Digit count of the fractional part, when the mantissa had one.
    /// Consulted for decimal places when the magnitude is exactly zero.
    pub frac_digits: Option<u32>,
    pub advisories: Vec<Advisory>,
}

pub(crate) fn analyze(text: &str) -> SigFigResult<Literal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SigFigError::malformed(text, "empty literal"));
    }

    let (mantissa, exponent) = match trimmed.find(['e', 'E']) {
        Some(pos) => (&trimmed[..pos], Some(&trimmed[pos + 1..])),
        None => (trimmed, None),
    };

    let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return Err(SigFigError::malformed(text, "no digits in mantissa"));
    }
    if !is_all_digits(int_part) || !frac_part.map_or(true, is_all_digits) {
        return Err(SigFigError::malformed(text, "mantissa is not a decimal numeral"));
    }
    if let Some(exp) = exponent {
        let exp_digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if exp_digits.is_empty() || !is_all_digits(exp_digits) {
            return Err(SigFigError::malformed(text, "exponent is not an integer"));
        }
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| SigFigError::malformed(text, "does not parse as a number"))?;
    if !value.is_finite() {
        return Err(SigFigError::malformed(text, "magnitude overflows f64"));
    }

    let mut advisories = Vec::new();
    let sig_figs = count_mantissa(int_part, frac_part, trimmed, &mut advisories);

    Ok(Literal {
        value,
        sig_figs,
        frac_digits: frac_part.map(|f| f.len() as u32),
        advisories,
    })
}

fn is_all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Count significant figures in a validated, unsigned mantissa.
fn count_mantissa(
    int_part: &str,
    frac_part: Option<&str>,
    literal: &str,
    advisories: &mut Vec<Advisory>,
) -> u32 {
    match frac_part {
        Some(frac) => {
            let int_stripped = int_part.trim_start_matches('0');
            if !int_stripped.is_empty() {
                // Non-zero integer part: everything from its first digit on
                // is significant, including all fractional digits.
                (int_stripped.len() + frac.len()) as u32
            } else {
                // Leading zeros in the fraction are placeholders; trailing
                // zeros are significant. An all-zero fraction counts as 1.
                let frac_stripped = frac.trim_start_matches('0');
                if frac_stripped.is_empty() {
                    1
                } else {
                    frac_stripped.len() as u32
                }
            }
        }
        None => {
            let stripped = int_part.trim_start_matches('0');
            if stripped.is_empty() {
                return 1;
            }
            let no_trailing = stripped.trim_end_matches('0');
            if no_trailing.len() < stripped.len() {
                let assumed = no_trailing.len().max(1) as u32;
                advisories.push(Advisory::AmbiguousTrailingZeros {
                    literal: literal.to_string(),
                    trailing_zeros: (stripped.len() - no_trailing.len()) as u32,
                    assumed_sig_figs: assumed,
                });
                assumed
            } else {
                stripped.len() as u32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(text: &str) -> u32 {
        count_sig_figs(text).unwrap().sig_figs
    }

    #[test]
    fn test_count_plain_decimals() {
        assert_eq!(count("123"), 3);
        assert_eq!(count("123.45"), 5);
        assert_eq!(count("123.0"), 4);
        assert_eq!(count("1.200"), 4);
        assert_eq!(count("0.00123"), 3);
        assert_eq!(count("0.00456"), 3);
        assert_eq!(count("0.0045600"), 5);
    }

    #[test]
    fn test_count_signed() {
        assert_eq!(count("-123.45"), 5);
        assert_eq!(count("+0.012"), 2);
        assert_eq!(count("-0.0100"), 3);
    }

    #[test]
    fn test_count_scientific_notation() {
        assert_eq!(count("1.23e4"), 3);
        assert_eq!(count("1.20e3"), 3);
        assert_eq!(count("6.02e23"), 3);
        assert_eq!(count("1.66E-27"), 3);
        assert_eq!(count("-2.500e-3"), 4);
    }

    #[test]
    fn test_count_zeros() {
        assert_eq!(count("0"), 1);
        assert_eq!(count("000"), 1);
        assert_eq!(count("0.000"), 1);
        assert_eq!(count("0.0"), 1);
    }

    #[test]
    fn test_count_partial_mantissas() {
        assert_eq!(count(".5"), 1);
        assert_eq!(count("5."), 1);
        assert_eq!(count("12."), 2);
    }

    #[test]
    fn test_trailing_zero_integers_emit_advisory() {
        let counted = count_sig_figs("1200").unwrap();
        assert_eq!(counted.sig_figs, 2);
        assert_eq!(
            counted.advisories,
            vec![Advisory::AmbiguousTrailingZeros {
                literal: "1200".to_string(),
                trailing_zeros: 2,
                assumed_sig_figs: 2,
            }]
        );

        let counted = count_sig_figs("10").unwrap();
        assert_eq!(counted.sig_figs, 1);
        assert_eq!(counted.advisories.len(), 1);

        // No trailing run, no advisory
        let counted = count_sig_figs("1201").unwrap();
        assert_eq!(counted.sig_figs, 4);
        assert!(counted.advisories.is_empty());

        // All-zero literal is not ambiguous
        let counted = count_sig_figs("0").unwrap();
        assert!(counted.advisories.is_empty());
    }

    #[test]
    fn test_malformed_literals() {
        for bad in ["", "   ", "abc", "1.2.3", "1e", "e5", ".", "-", "1.2e4.5", "inf", "nan", "1x3"] {
            let err = count_sig_figs(bad).unwrap_err();
            assert_eq!(err.error_code(), "MALFORMED_LITERAL", "input: {:?}", bad);
        }
    }

    #[test]
    fn test_overflowing_magnitude() {
        let err = count_sig_figs("1e999").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_LITERAL");
    }

    #[test]
    fn test_analyze_records_fraction_length() {
        let literal = analyze("0.00").unwrap();
        assert_eq!(literal.value, 0.0);
        assert_eq!(literal.sig_figs, 1);
        assert_eq!(literal.frac_digits, Some(2));

        let literal = analyze("1200").unwrap();
        assert_eq!(literal.frac_digits, None);
    }

    #[test]
    fn test_advisory_display() {
        let advisory = Advisory::AmbiguousTrailingZeros {
            literal: "1200".to_string(),
            trailing_zeros: 2,
            assumed_sig_figs: 2,
        };
        let text = advisory.to_string();
        assert!(text.contains("1200"));
        assert!(text.contains("ambiguous"));
    }
}
