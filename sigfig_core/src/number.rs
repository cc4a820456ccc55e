//! # Precision-Tracked Number
//!
//! [`SigFig`] pairs an `f64` magnitude with a significant-figure count and
//! re-derives the correct precision for every arithmetic result:
//!
//! - multiplication, division, `sqrt`: minimum sig-fig rule;
//! - addition, subtraction: minimum decimal-place rule, with the result's
//!   sig figs re-counted from the rounded magnitude;
//! - `log10`/`ln` and `exp`: the logarithm convention (decimal places of the
//!   result equal sig figs of the argument, and vice versa for `exp`).
//!
//! Instances are immutable `Copy` values; every operation returns a new one.
//!
//! Constructors reject non-finite magnitudes, but arithmetic can still leave
//! the f64 range: the magnitude then propagates as IEEE `inf`/`NaN` and
//! `Display` renders it as such. Multiplicative results keep the minimum
//! sig-fig rule; an additive result that overflows has no digit positions
//! left to count and falls back to precision 1.
//!
//! ## Example
//!
//! ```rust
//! use sigfig_core::SigFig;
//!
//! let a: SigFig = "25.3".parse().unwrap();   // 3 sig figs
//! let b: SigFig = "4.567".parse().unwrap();  // 4 sig figs
//!
//! let product = a * b;
//! assert_eq!(product.sig_figs(), 3);
//! assert_eq!(product.to_string(), "116");
//!
//! let c: SigFig = "123.4".parse().unwrap();  // 1 decimal place
//! let d: SigFig = "5.678".parse().unwrap();  // 3 decimal places
//! assert_eq!((c + d).to_string(), "129.1");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{SigFigError, SigFigResult};
use crate::format::{format_number, round_to_decimals};
use crate::literal::{self, Advisory};

/// Significant figures carried by a bare `f64` coerced into a binary
/// operation: the decimal precision of the f64 format itself.
pub const F64_SIG_FIGS: u32 = 15;

/// Relative tolerance for the equality closeness test.
const EQ_REL_TOLERANCE: f64 = 1e-9;

/// A floating magnitude paired with the number of its digits that carry
/// measurement information.
///
/// Construct from text with [`SigFig::parse`] (or `str::parse`), or from a
/// magnitude with an explicit precision via [`SigFig::from_parts`]. There is
/// deliberately no constructor from a bare magnitude alone: precision is
/// never guessed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawSigFig")]
pub struct SigFig {
    value: f64,
    sig_figs: u32,
    /// Fractional digit count of the source literal, kept only so an exact
    /// zero remembers its decimal places (`"0.00"` formats back as `0.00`
    /// and contributes 2 decimal places to addition).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zero_scale: Option<u32>,
}

/// Unvalidated mirror of [`SigFig`]; deserialization goes through it so the
/// `sig_figs >= 1` and finite-magnitude invariants hold for every instance.
#[derive(Deserialize)]
struct RawSigFig {
    value: f64,
    sig_figs: u32,
    #[serde(default)]
    zero_scale: Option<u32>,
}

impl TryFrom<RawSigFig> for SigFig {
    type Error = SigFigError;

    fn try_from(raw: RawSigFig) -> SigFigResult<SigFig> {
        if !raw.value.is_finite() {
            return Err(SigFigError::non_finite(raw.value));
        }
        if raw.sig_figs == 0 {
            return Err(SigFigError::InvalidPrecision { sig_figs: 0 });
        }
        Ok(SigFig {
            value: raw.value,
            sig_figs: raw.sig_figs,
            zero_scale: raw.zero_scale,
        })
    }
}

/// A parsed [`SigFig`] together with any non-fatal advisories raised while
/// counting its significant figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub number: SigFig,
    pub advisories: Vec<Advisory>,
}

impl SigFig {
    /// Parse a decimal or scientific-notation literal, deriving the
    /// significant-figure count from its digit pattern.
    ///
    /// Trailing zeros in a bare integer literal are not counted and raise an
    /// [`Advisory`] in the outcome; see [`crate::literal`].
    pub fn parse(text: &str) -> SigFigResult<ParseOutcome> {
        let literal = literal::analyze(text)?;
        Ok(ParseOutcome {
            number: SigFig {
                value: literal.value,
                sig_figs: literal.sig_figs,
                zero_scale: literal.frac_digits,
            },
            advisories: literal.advisories,
        })
    }

    /// Parse a literal but override the counted precision.
    ///
    /// Resolves trailing-zero ambiguity explicitly, e.g.
    /// `SigFig::parse_with_sig_figs("1200", 4)` when all four digits are
    /// known to be measured.
    pub fn parse_with_sig_figs(text: &str, sig_figs: u32) -> SigFigResult<SigFig> {
        if sig_figs == 0 {
            return Err(SigFigError::InvalidPrecision { sig_figs });
        }
        let literal = literal::analyze(text)?;
        Ok(SigFig {
            value: literal.value,
            sig_figs,
            zero_scale: literal.frac_digits,
        })
    }

    /// Construct from a magnitude and an explicit significant-figure count.
    ///
    /// Fails on a non-finite magnitude or a zero precision.
    pub fn from_parts(value: f64, sig_figs: u32) -> SigFigResult<SigFig> {
        if !value.is_finite() {
            return Err(SigFigError::non_finite(value));
        }
        if sig_figs == 0 {
            return Err(SigFigError::InvalidPrecision { sig_figs });
        }
        Ok(SigFig {
            value,
            sig_figs,
            zero_scale: None,
        })
    }

    /// The raw magnitude as a plain `f64`.
    pub fn value(self) -> f64 {
        self.value
    }

    /// Count of significant figures, always >= 1.
    pub fn sig_figs(self) -> u32 {
        self.sig_figs
    }

    /// Decimal places this value is meaningful to: the position of its least
    /// significant digit relative to the decimal point, floored at 0.
    ///
    /// An exact zero reports the fractional digit count of its source
    /// literal (`"0.00"` has 2), or 0 when constructed without one.
    pub fn decimal_places(self) -> u32 {
        if !self.value.is_finite() {
            return 0;
        }
        if self.value == 0.0 {
            return self.zero_scale.unwrap_or(0);
        }
        let order = self.value.abs().log10().floor() as i64;
        let least_position = order - self.sig_figs as i64 + 1;
        (-least_position).clamp(0, u32::MAX as i64) as u32
    }

    /// Absolute value; precision is unchanged.
    pub fn abs(self) -> SigFig {
        SigFig {
            value: self.value.abs(),
            ..self
        }
    }

    /// Division with the zero-divisor check surfaced as a `Result`.
    ///
    /// Result precision is the minimum of the operands' sig figs.
    pub fn checked_div(self, rhs: SigFig) -> SigFigResult<SigFig> {
        if rhs.value == 0.0 {
            return Err(SigFigError::DivisionByZero);
        }
        Ok(SigFig {
            value: self.value / rhs.value,
            sig_figs: self.sig_figs.min(rhs.sig_figs),
            zero_scale: None,
        })
    }

    /// Base-10 logarithm. Defined only for a strictly positive magnitude.
    ///
    /// Propagation convention: the result carries as many decimal places as
    /// the argument has significant figures.
    pub fn log10(self) -> SigFigResult<SigFig> {
        if self.value <= 0.0 {
            return Err(SigFigError::domain(
                "log10",
                self.value,
                "argument must be positive",
            ));
        }
        Ok(SigFig::from_rounded(self.value.log10(), self.sig_figs))
    }

    /// Natural logarithm. Defined only for a strictly positive magnitude.
    ///
    /// Same propagation convention as [`SigFig::log10`].
    pub fn ln(self) -> SigFigResult<SigFig> {
        if self.value <= 0.0 {
            return Err(SigFigError::domain(
                "ln",
                self.value,
                "argument must be positive",
            ));
        }
        Ok(SigFig::from_rounded(self.value.ln(), self.sig_figs))
    }

    /// Exponential. Inverse convention to the logarithms: the result carries
    /// as many significant figures as the argument has decimal places,
    /// floored at 1.
    pub fn exp(self) -> SigFig {
        let value = self.value.exp();
        let sig_figs = self.decimal_places().max(1);
        if value == 0.0 {
            // exp underflowed; an exact zero always reports precision 1
            SigFig {
                value: 0.0,
                sig_figs: 1,
                zero_scale: None,
            }
        } else {
            SigFig {
                value,
                sig_figs,
                zero_scale: None,
            }
        }
    }

    /// Square root. Defined only for a non-negative magnitude; precision is
    /// unchanged, consistent with `sqrt(x) = x^0.5` under the
    /// multiplicative rule.
    pub fn sqrt(self) -> SigFigResult<SigFig> {
        if self.value < 0.0 {
            return Err(SigFigError::domain(
                "sqrt",
                self.value,
                "argument must be non-negative",
            ));
        }
        Ok(SigFig {
            value: self.value.sqrt(),
            ..self
        })
    }

    /// Coerce a bare `f64` operand for a binary operation.
    ///
    /// The f64 is treated as carrying the full decimal precision of the
    /// format ([`F64_SIG_FIGS`]), so the tracked operand's precision governs
    /// the result. Non-finite values pass through and propagate IEEE
    /// semantics in the magnitude.
    fn coerce(value: f64) -> SigFig {
        SigFig {
            value,
            sig_figs: F64_SIG_FIGS,
            zero_scale: None,
        }
    }

    /// Additive propagation: round `raw` to the operands' shared
    /// decimal-place budget, then re-derive the sig-fig count from the
    /// rounded magnitude.
    fn additive(self, rhs: SigFig, raw: f64) -> SigFig {
        let places = self.decimal_places().min(rhs.decimal_places());
        SigFig::from_rounded(raw, places)
    }

    /// Round `raw` to `places` decimal places and count the significant
    /// figures of the formatted result. A zero result reports precision 1
    /// and remembers the decimal-place budget for display.
    fn from_rounded(raw: f64, places: u32) -> SigFig {
        let value = round_to_decimals(raw, places);
        if !value.is_finite() {
            // Overflowed the f64 range; no digit positions remain to count
            return SigFig {
                value,
                sig_figs: 1,
                zero_scale: None,
            };
        }
        if value == 0.0 {
            return SigFig {
                value: 0.0,
                sig_figs: 1,
                zero_scale: Some(places),
            };
        }
        // Counting digits in the fixed-point rendering of `value` with
        // `places` decimals: integer digits from the first non-zero one,
        // plus every fractional digit.
        let order = value.abs().log10().floor() as i64;
        let sig_figs = (order + 1 + places as i64).clamp(1, u32::MAX as i64) as u32;
        SigFig {
            value,
            sig_figs,
            zero_scale: None,
        }
    }
}

impl FromStr for SigFig {
    type Err = SigFigError;

    /// Parse, discarding advisories. Use [`SigFig::parse`] to inspect them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SigFig::parse(s)?.number)
    }
}

impl fmt::Display for SigFig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.value, self.sig_figs, self.zero_scale))
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl Mul for SigFig {
    type Output = SigFig;
    fn mul(self, rhs: SigFig) -> SigFig {
        SigFig {
            value: self.value * rhs.value,
            sig_figs: self.sig_figs.min(rhs.sig_figs),
            zero_scale: None,
        }
    }
}

impl Add for SigFig {
    type Output = SigFig;
    fn add(self, rhs: SigFig) -> SigFig {
        self.additive(rhs, self.value + rhs.value)
    }
}

impl Sub for SigFig {
    type Output = SigFig;
    fn sub(self, rhs: SigFig) -> SigFig {
        self.additive(rhs, self.value - rhs.value)
    }
}

impl Div for SigFig {
    type Output = SigFigResult<SigFig>;
    fn div(self, rhs: SigFig) -> SigFigResult<SigFig> {
        self.checked_div(rhs)
    }
}

impl Neg for SigFig {
    type Output = SigFig;
    fn neg(self) -> SigFig {
        SigFig {
            value: -self.value,
            ..self
        }
    }
}

// Bare f64 operands on either side coerce through `SigFig::coerce`, so the
// reflected forms are identical to the tracked-value-on-the-left forms.

impl Mul<f64> for SigFig {
    type Output = SigFig;
    fn mul(self, rhs: f64) -> SigFig {
        self * SigFig::coerce(rhs)
    }
}

impl Mul<SigFig> for f64 {
    type Output = SigFig;
    fn mul(self, rhs: SigFig) -> SigFig {
        SigFig::coerce(self) * rhs
    }
}

impl Add<f64> for SigFig {
    type Output = SigFig;
    fn add(self, rhs: f64) -> SigFig {
        self + SigFig::coerce(rhs)
    }
}

impl Add<SigFig> for f64 {
    type Output = SigFig;
    fn add(self, rhs: SigFig) -> SigFig {
        SigFig::coerce(self) + rhs
    }
}

impl Sub<f64> for SigFig {
    type Output = SigFig;
    fn sub(self, rhs: f64) -> SigFig {
        self - SigFig::coerce(rhs)
    }
}

impl Sub<SigFig> for f64 {
    type Output = SigFig;
    fn sub(self, rhs: SigFig) -> SigFig {
        SigFig::coerce(self) - rhs
    }
}

impl Div<f64> for SigFig {
    type Output = SigFigResult<SigFig>;
    fn div(self, rhs: f64) -> SigFigResult<SigFig> {
        self.checked_div(SigFig::coerce(rhs))
    }
}

impl Div<SigFig> for f64 {
    type Output = SigFigResult<SigFig>;
    fn div(self, rhs: SigFig) -> SigFigResult<SigFig> {
        SigFig::coerce(self).checked_div(rhs)
    }
}

// ============================================================================
// Comparisons
// ============================================================================

/// Closeness test used for equality: relative tolerance on the larger
/// magnitude, so exact zeros still compare equal to each other. Non-finite
/// values never compare equal.
fn approx_eq(a: f64, b: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= EQ_REL_TOLERANCE * a.abs().max(b.abs())
}

impl PartialEq for SigFig {
    fn eq(&self, other: &SigFig) -> bool {
        approx_eq(self.value, other.value)
    }
}

impl PartialEq<f64> for SigFig {
    fn eq(&self, other: &f64) -> bool {
        approx_eq(self.value, *other)
    }
}

impl PartialEq<SigFig> for f64 {
    fn eq(&self, other: &SigFig) -> bool {
        approx_eq(*self, other.value)
    }
}

impl PartialOrd for SigFig {
    fn partial_cmp(&self, other: &SigFig) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.value.partial_cmp(&other.value)
    }
}

impl PartialOrd<f64> for SigFig {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.value.partial_cmp(other)
    }
}

impl PartialOrd<SigFig> for f64 {
    fn partial_cmp(&self, other: &SigFig) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.partial_cmp(&other.value)
    }
}
