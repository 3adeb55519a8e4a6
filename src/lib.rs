//! The Strtox crate converts text into numbers with the exact semantics of the
//! C library's `strtol()`/`strtoul()`/`strtod()` family, over sequences of
//! code units of any width.
//! 
//! Conversion is locale-independent, and generic over both the width of the
//! input (bytes, UTF-16 units, 32-bit code points, or [`char`]s) and the
//! target numeric type (any primitive integer, signed or unsigned, or
//! [`f32`]/[`f64`]).
//! 
//! # Layers
//! 
//!   - [`scan_integral()`] and [`scan_float()`] are the scanners. They return
//!     a [`ScanResult`] carrying the value, where the number starts and ends,
//!     and whether it overflowed.
//!   - [`strtol()`], [`atoi()`], [`strtod()`] and friends clamp out-of-range
//!     values and raise a thread-local [`range_error()`] flag, as the C
//!     functions do with `errno`.
//!   - [`stoi()`], [`stol()`], [`stod()`] and friends fail with a
//!     [`ParseError`], as the C++ `std::stoX()` functions throw.
//! 
//! # Example
//! 
//! ```
//! use strtox::{ParseError, scan_integral, stoi, strtol};
//! 
//! let result = scan_integral::<i32, u8>(b"  -0x1fZ", 0);
//! assert_eq!(result.value,      -31);
//! assert_eq!(result.end,        7);
//! assert_eq!(result.consumed(), 5);
//! 
//! assert_eq!(strtol("0x212121G".as_bytes(), 16), (0x21_2121, 8));
//! assert_eq!(stoi(b"xyz", 10), Err(ParseError::NoConversion));
//! ```
//! 



//		Global configuration

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::missing_panics_doc,
	clippy::panic,
	clippy::unreadable_literal,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod base;
mod checked;
mod classify;
mod errno;
mod errors;
mod float;
mod input;
mod num;
mod scan;



//		Packages

pub use base::Base;
pub use checked::{parse_checked, parse_float_checked, stod, stof, stoi, stol, stoll, stoul, stoull};
pub use classify::{Ascii, Classify, Unicode};
pub use errno::{
	atof,
	atoi,
	atol,
	atoll,
	clear_range_error,
	parse_float_or_clamp,
	parse_or_clamp,
	range_error,
	strto,
	strto_float,
	strtod,
	strtof,
	strtoi,
	strtol,
	strtoll,
	strtoul,
	strtoull,
};
pub use errors::{InvalidBase, ParseError};
pub use float::{scan_float, scan_float_with};
pub use input::CodeUnit;
pub use num::{Accumulator, Floating, Integral};
pub use scan::{ScanResult, scan_integral, scan_integral_with};
