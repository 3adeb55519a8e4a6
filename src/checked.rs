//! Fail-fast conversions, in the manner of C++'s `stoX()`.
//! 
//! These conversions fail with a [`ParseError`] when nothing is recognised or
//! when the value is out of range, and otherwise return the value together
//! with the index just past the number, counted from the start of the input
//! (so any leading whitespace that was skipped is included).



//		Modules

#[cfg(test)]
#[path = "tests/checked.rs"]
mod tests;



//		Packages

use crate::{
	errno::raise_range_error,
	errors::ParseError,
	float::scan_float,
	input::CodeUnit,
	num::{Floating, Integral},
	scan::{ScanResult, scan_integral},
};
use tracing::debug;



//		Public functions

//		parse_checked															
/// Converts the start of the input to an integer, or fails.
/// 
/// # Parameters
/// 
/// * `input` - The text to convert.
/// * `base`  - `0` to detect the base, or `2` to `36`. Any other value
///             matches nothing, and so fails with
///             [`NoConversion`](ParseError::NoConversion).
/// 
/// # Errors
/// 
///   - [`ParseError::NoConversion`] if no number was recognised.
///   - [`ParseError::OutOfRange`] if the number does not fit in `T`. The
///     range-error flag is also raised, as the clamp-and-flag conversions
///     would.
/// 
pub fn parse_checked<T, U>(input: &[U], base: u32) -> Result<(T, usize), ParseError>
where
	T: Integral,
	U: CodeUnit,
{
	check(scan_integral(input, base))
}

//		parse_float_checked														
/// Converts the start of the input to a floating-point number, or fails.
/// 
/// # Errors
/// 
/// As for [`parse_checked()`].
/// 
pub fn parse_float_checked<T, U>(input: &[U]) -> Result<(T, usize), ParseError>
where
	T: Floating,
	U: CodeUnit,
{
	check(scan_float(input))
}

//		stoi																	
/// C++'s `std::stoi()`.
/// 
/// # Errors
/// 
/// As for [`parse_checked()`].
/// 
pub fn stoi<U: CodeUnit>(input: &[U], base: u32) -> Result<(i32, usize), ParseError> {
	parse_checked(input, base)
}

//		stol																	
/// C++'s `std::stol()`.
/// 
/// # Errors
/// 
/// As for [`parse_checked()`].
/// 
pub fn stol<U: CodeUnit>(input: &[U], base: u32) -> Result<(i64, usize), ParseError> {
	parse_checked(input, base)
}

//		stoul																	
/// C++'s `std::stoul()`.
/// 
/// # Errors
/// 
/// As for [`parse_checked()`].
/// 
pub fn stoul<U: CodeUnit>(input: &[U], base: u32) -> Result<(u64, usize), ParseError> {
	parse_checked(input, base)
}

//		stoll																	
/// C++'s `std::stoll()`.
/// 
/// # Errors
/// 
/// As for [`parse_checked()`].
/// 
pub fn stoll<U: CodeUnit>(input: &[U], base: u32) -> Result<(i64, usize), ParseError> {
	parse_checked(input, base)
}

//		stoull																	
/// C++'s `std::stoull()`.
/// 
/// # Errors
/// 
/// As for [`parse_checked()`].
/// 
pub fn stoull<U: CodeUnit>(input: &[U], base: u32) -> Result<(u64, usize), ParseError> {
	parse_checked(input, base)
}

//		stof																	
/// C++'s `std::stof()`.
/// 
/// # Errors
/// 
/// As for [`parse_float_checked()`].
/// 
pub fn stof<U: CodeUnit>(input: &[U]) -> Result<(f32, usize), ParseError> {
	parse_float_checked(input)
}

//		stod																	
/// C++'s `std::stod()`.
/// 
/// # Errors
/// 
/// As for [`parse_float_checked()`].
/// 
pub fn stod<U: CodeUnit>(input: &[U]) -> Result<(f64, usize), ParseError> {
	parse_float_checked(input)
}



//		Private functions

//		check																	
/// Turns a scan result into a value and end index, or the error it stands
/// for.
/// 
/// The decision is made from the scan's own overflow state, never from the
/// thread's range-error flag, so a flag left raised by an earlier conversion
/// cannot make this one fail.
/// 
fn check<T>(result: ScanResult<T>) -> Result<(T, usize), ParseError> {
	if !result.is_match() {
		debug!("No conversion could be performed");
		return Err(ParseError::NoConversion);
	}
	if result.overflowed {
		debug!(end = result.end, consumed = result.consumed(), "Conversion out of range");
		raise_range_error();
		return Err(ParseError::OutOfRange);
	}
	Ok((result.value, result.end))
}
