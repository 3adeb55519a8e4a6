//! Clamp-and-flag conversions, in the manner of C's `atoX()` and `strtoX()`.
//! 
//! These conversions never fail. When nothing is recognised they return zero;
//! when the value is out of range they return the extremal value for the
//! type and raise the range-error flag, which plays the part of `errno`
//! being set to `ERANGE`.
//! 
//! The flag is thread-local and sticky: a conversion only ever raises it, and
//! it stays raised until [`clear_range_error()`] is called. Callers that need
//! to attribute a range error to one particular conversion should clear the
//! flag first. Callers that do not need the flag at all can use
//! [`scan_integral()`](crate::scan_integral()) and
//! [`scan_float()`](crate::scan_float()), which report overflow in their
//! result instead.



//		Modules

#[cfg(test)]
#[path = "tests/errno.rs"]
mod tests;



//		Packages

use crate::{
	float::scan_float,
	input::CodeUnit,
	num::{Floating, Integral},
	scan::{ScanResult, scan_integral},
};
use core::cell::Cell;
use tracing::debug;



//		Statics

thread_local! {
	/// The range-error flag for the current thread.
	static RANGE_ERROR: Cell<bool> = const { Cell::new(false) };
}



//		Public functions

//		range_error																
/// Whether a conversion on this thread has been out of range since the flag
/// was last cleared.
#[must_use]
pub fn range_error() -> bool {
	RANGE_ERROR.with(Cell::get)
}

//		clear_range_error														
/// Lowers the range-error flag for this thread.
pub fn clear_range_error() {
	RANGE_ERROR.with(|flag| flag.set(false));
}

//		strto																	
/// Converts the start of the input to an integer, reporting where it ended.
/// 
/// Returns the value and the end offset, counted in code units from the
/// start of the input, including any leading whitespace. When nothing is
/// recognised the value is zero and the end offset is `0`, and the flag is
/// left untouched.
/// 
/// # Parameters
/// 
/// * `input` - The text to convert.
/// * `base`  - `0` to detect the base, or `2` to `36`. Any other value
///             matches nothing.
/// 
#[must_use]
pub fn strto<T, U>(input: &[U], base: u32) -> (T, usize)
where
	T: Integral,
	U: CodeUnit,
{
	let result = flag_overflow(scan_integral(input, base));
	(result.value, result.end)
}

//		strto_float																
/// Converts the start of the input to a floating-point number, reporting
/// where it ended.
#[must_use]
pub fn strto_float<T, U>(input: &[U]) -> (T, usize)
where
	T: Floating,
	U: CodeUnit,
{
	let result = flag_overflow(scan_float(input));
	(result.value, result.end)
}

//		parse_or_clamp															
/// Converts the start of the input to an integer, discarding the end offset.
/// 
/// # Parameters
/// 
/// * `input` - The text to convert.
/// * `base`  - `0` to detect the base, or `2` to `36`.
/// 
#[must_use]
pub fn parse_or_clamp<T, U>(input: &[U], base: u32) -> T
where
	T: Integral,
	U: CodeUnit,
{
	strto(input, base).0
}

//		parse_float_or_clamp													
/// Converts the start of the input to a floating-point number, discarding
/// the end offset.
#[must_use]
pub fn parse_float_or_clamp<T, U>(input: &[U]) -> T
where
	T: Floating,
	U: CodeUnit,
{
	strto_float(input).0
}

//		atoi																	
/// C's `atoi()`: a decimal `int`.
#[must_use]
pub fn atoi<U: CodeUnit>(input: &[U]) -> i32 {
	parse_or_clamp(input, 10)
}

//		atol																	
/// C's `atol()`: a decimal `long`.
#[must_use]
pub fn atol<U: CodeUnit>(input: &[U]) -> i64 {
	parse_or_clamp(input, 10)
}

//		atoll																	
/// C's `atoll()`: a decimal `long long`.
#[must_use]
pub fn atoll<U: CodeUnit>(input: &[U]) -> i64 {
	parse_or_clamp(input, 10)
}

//		strtoi																	
/// An `int` counterpart of `strtol()`.
#[must_use]
pub fn strtoi<U: CodeUnit>(input: &[U], base: u32) -> (i32, usize) {
	strto(input, base)
}

//		strtol																	
/// C's `strtol()`.
#[must_use]
pub fn strtol<U: CodeUnit>(input: &[U], base: u32) -> (i64, usize) {
	strto(input, base)
}

//		strtoul																	
/// C's `strtoul()`.
#[must_use]
pub fn strtoul<U: CodeUnit>(input: &[U], base: u32) -> (u64, usize) {
	strto(input, base)
}

//		strtoll																	
/// C's `strtoll()`.
#[must_use]
pub fn strtoll<U: CodeUnit>(input: &[U], base: u32) -> (i64, usize) {
	strto(input, base)
}

//		strtoull																
/// C's `strtoull()`.
#[must_use]
pub fn strtoull<U: CodeUnit>(input: &[U], base: u32) -> (u64, usize) {
	strto(input, base)
}

//		atof																	
/// C's `atof()`: a `double`.
#[must_use]
pub fn atof<U: CodeUnit>(input: &[U]) -> f64 {
	parse_float_or_clamp(input)
}

//		strtof																	
/// C's `strtof()`.
#[must_use]
pub fn strtof<U: CodeUnit>(input: &[U]) -> (f32, usize) {
	strto_float(input)
}

//		strtod																	
/// C's `strtod()`.
#[must_use]
pub fn strtod<U: CodeUnit>(input: &[U]) -> (f64, usize) {
	strto_float(input)
}



//		Crate functions

//		raise_range_error														
/// Raises the range-error flag for this thread.
pub(crate) fn raise_range_error() {
	RANGE_ERROR.with(|flag| flag.set(true));
}



//		Private functions

//		flag_overflow															
/// Raises the range-error flag if the scan overflowed, and passes the result
/// through.
fn flag_overflow<T>(result: ScanResult<T>) -> ScanResult<T> {
	if result.overflowed {
		debug!(end = result.end, consumed = result.consumed(), "Conversion out of range");
		raise_range_error();
	}
	result
}
