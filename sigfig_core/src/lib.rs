//! # sigfig_core - Significant-Figure Arithmetic Engine
//!
//! `sigfig_core` implements measurement-precision tracking for scientific
//! calculations: every value carries a significant-figure count alongside its
//! magnitude, and every operation re-derives the precision of its result per
//! standard error-propagation convention (minimum sig figs for `×`/`÷`,
//! minimum decimal places for `+`/`−`).
//!
//! ## Design Philosophy
//!
//! - **Values, not state**: [`SigFig`] is an immutable `Copy` type; every
//!   operation returns a new instance and no global state exists.
//! - **JSON-First**: public types implement Serialize/Deserialize.
//! - **Rich Errors**: structured error types, not just strings.
//! - **Explicit diagnostics**: ambiguous precision (trailing zeros in `1200`)
//!   is returned as an advisory next to the value, never logged globally.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigfig_core::SigFig;
//!
//! let mass: SigFig = "25.3".parse().unwrap();    // 3 sig figs
//! let factor: SigFig = "4.567".parse().unwrap(); // 4 sig figs
//!
//! let product = mass * factor;
//! assert_eq!(product.to_string(), "116"); // min(3, 4) = 3 sig figs
//! ```
//!
//! ## Modules
//!
//! - [`number`] - The [`SigFig`] value type, operators, and math functions
//! - [`literal`] - Significant-figure counting from numeral text
//! - [`format`] - Rendering a magnitude to a fixed significant-figure count
//! - [`errors`] - Structured error types

pub mod errors;
pub mod format;
pub mod literal;
pub mod number;

// Re-export commonly used types at crate root for convenience
pub use errors::{SigFigError, SigFigResult};
pub use format::format_sig_figs;
pub use literal::{count_sig_figs, Advisory, Counted};
pub use number::{ParseOutcome, SigFig, F64_SIG_FIGS};
