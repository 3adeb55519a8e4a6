//! Floating-point composer.
//! 
//! A floating number is put together from pieces the integral scanner reads:
//! the integral digits, the fractional digits, and the exponent. Decimal and
//! hexadecimal notation share the whole of the composition, and differ only
//! in the radix of the digits, the letter that introduces the exponent, the
//! base the exponent scales by, and the exponent bounds.



//		Modules

#[cfg(test)]
#[path = "tests/float.rs"]
mod tests;



//		Packages

use crate::{
	base::Base,
	classify::{Ascii, Classify},
	input::{CodeUnit, Cursor},
	num::Floating,
	scan::{ScanResult, ZERO, is_hex_marker, read_sign, scan_digits, scan_signed, skip_whitespace},
};



//		Constants

/// `.`
const DECIMAL_POINT: u32 = 0x2E;

/// Single-letter suffixes that may trail a number without changing it.
const SUFFIXES: [u8; 2] = [b'f', b'l'];



//		Structs

//		Notation																
/// The parameters that distinguish decimal from hexadecimal notation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Notation {
	/// Radix of the integral and fractional digits.
	radix:        u32,
	
	/// Letter introducing the exponent, matched in either case.
	marker:       u8,
	
	/// Base that each unit of the exponent scales the value by.
	scale:        u32,
	
	/// Smallest exponent accepted without a range error.
	min_exponent: i32,
	
	/// Largest exponent accepted without a range error.
	max_exponent: i32,
}

//󰭅		Notation																
impl Notation {
	//		decimal																
	/// Decimal digits, with a power-of-ten exponent after `e`.
	const fn decimal<T: Floating>() -> Self {
		Self {
			radix:        10,
			marker:       b'e',
			scale:        10,
			min_exponent: T::MIN_EXPONENT10,
			max_exponent: T::MAX_EXPONENT10,
		}
	}
	
	//		hexadecimal															
	/// Hexadecimal digits, with a power-of-two exponent after `p`.
	const fn hexadecimal<T: Floating>() -> Self {
		Self {
			radix:        16,
			marker:       b'p',
			scale:        2,
			min_exponent: T::MIN_EXPONENT,
			max_exponent: T::MAX_EXPONENT,
		}
	}
}



//		Public functions

//		scan_float																
/// Scans a floating-point number, in the manner of C's `strtod()` family.
/// 
/// After leading whitespace and an optional sign, the number is one of:
/// 
///   - Decimal digits, optionally with a fractional part after `.`, and an
///     optional exponent after `e` or `E` scaling by powers of ten.
///   - `0x` or `0X`, then hexadecimal digits, optionally with a fractional
///     part, and an optional exponent after `p` or `P` scaling by powers of
///     two. The exponent digits are decimal.
///   - `INF` or `INFINITY`, in any case, which gives `T`'s maximum.
///   - `NAN`, in any case, which gives a quiet NaN.
/// 
/// A single trailing `f`, `F`, `l` or `L` is consumed after a numeric form,
/// and has no effect on the value.
/// 
/// The exponent is applied by repeated multiplication or division, one step
/// per unit of exponent. If the integral part alone does not fit in `T`, the
/// scan stops there and returns `T`'s maximum with the sign applied. An
/// exponent above the upper bound also clamps to the maximum; one below the
/// lower bound keeps the computed value. Both set
/// [`overflowed`](ScanResult::overflowed). A zero value never overflows.
/// 
/// # Parameters
/// 
/// * `input` - The text to scan. Scanning stops at the end of the slice or
///             at the first null code point.
/// 
/// # See also
/// 
/// * [`scan_float_with()`]
/// 
#[must_use]
pub fn scan_float<T, U>(input: &[U]) -> ScanResult<T>
where
	T: Floating,
	U: CodeUnit,
{
	scan_float_with(input, &Ascii)
}

//		scan_float_with															
/// Scans a floating-point number using the given classifier.
/// 
/// # Parameters
/// 
/// * `input`    - The text to scan.
/// * `classify` - Decides what counts as whitespace and as a digit.
/// 
/// # See also
/// 
/// * [`scan_float()`]
/// 
#[must_use]
pub fn scan_float_with<T, U, C>(input: &[U], classify: &C) -> ScanResult<T>
where
	T: Floating,
	U: CodeUnit,
	C: Classify + ?Sized,
{
	let mut cursor = Cursor::new(input);
	skip_whitespace(&mut cursor, classify);
	let start      = cursor.pos();
	let negative   = read_sign(&mut cursor);
	let sign       = |value: T| if negative { -value } else { value };
	
	let hex        = cursor.peek() == Some(ZERO) && cursor.peek_nth(1).is_some_and(is_hex_marker);
	let notation   = if hex { Notation::hexadecimal::<T>() } else { Notation::decimal::<T>() };
	let body       = cursor.pos();
	if hex {
		cursor.advance_by(2);
	}
	
	let integral   = scan_digits(&mut cursor, classify, notation.radix, T::max_value());
	if integral.overflowed {
		return ScanResult { value: sign(T::max_value()), start, end: cursor.pos(), overflowed: true };
	}
	let mut value  = integral.value;
	let mut digits = integral.digits;
	
	let point      = cursor.pos();
	if cursor.eat(DECIMAL_POINT) {
		let fraction = scan_digits(&mut cursor, classify, notation.radix, T::max_value());
		if digits == 0 && fraction.digits == 0 {
			cursor.rewind(point);
		} else {
			value  = value + normalise_fraction(fraction.value, notation.radix, fraction.accumulated);
			digits = digits.saturating_add(fraction.digits);
		}
	}
	
	if digits == 0 {
		if hex {
			//	Without hex digits, the prefix is just a zero and an x
			return ScanResult { value: sign(T::zero()), start, end: body.saturating_add(1), overflowed: false };
		}
		return scan_special(&mut cursor).map_or_else(ScanResult::no_match, |special| ScanResult {
			value:      sign(special),
			start,
			end:        cursor.pos(),
			overflowed: false,
		});
	}
	
	let mut overflowed = false;
	let marker         = cursor.pos();
	if cursor.eat_ignore_case(notation.marker) {
		match scan_signed::<i32, U, C>(&mut cursor, Base::DECIMAL, classify) {
			Some(exponent) => {
				let mantissa_is_zero = value.is_zero();
				value = scale_by_exponent(value, notation.scale, exponent.value);
				if !mantissa_is_zero {
					if exponent.value > notation.max_exponent {
						overflowed = true;
						value      = T::max_value();
					} else if exponent.value < notation.min_exponent {
						overflowed = true;
					}
				}
			}
			None           => cursor.rewind(marker),
		}
	}
	if value.is_infinite() {
		overflowed = true;
		value      = T::max_value();
	}
	
	for suffix in SUFFIXES {
		if cursor.eat_ignore_case(suffix) {
			break;
		}
	}
	
	ScanResult { value: sign(value), start, end: cursor.pos(), overflowed }
}



//		Private functions

//		normalise_fraction														
/// Turns the accumulated fractional digits into a value below one.
/// 
/// The fraction is divided by the radix once per digit that was accumulated,
/// so leading zeros keep their weight: `05` becomes `0.05`, not `0.5`.
/// Digits beyond the accumulator's range were not accumulated and carry no
/// weight.
/// 
fn normalise_fraction<T: Floating>(fraction: T, radix: u32, accumulated: usize) -> T {
	let radix     = T::from_u32(radix);
	let mut value = fraction;
	for _ in 0..accumulated {
		if value.is_zero() {
			break;
		}
		value = value / radix;
	}
	value
}

//		scale_by_exponent														
/// Multiplies or divides by `scale` once per unit of the exponent.
/// 
/// Stops early once the value reaches zero or infinity, as further steps
/// cannot change it.
/// 
fn scale_by_exponent<T: Floating>(mut value: T, scale: u32, exponent: i32) -> T {
	let scale = T::from_u32(scale);
	for _ in 0..exponent.unsigned_abs() {
		if value.is_zero() || value.is_infinite() {
			break;
		}
		value = if exponent < 0 { value / scale } else { value * scale };
	}
	value
}

//		scan_special															
/// Reads `INFINITY`, `INF` or `NAN`, in any case.
fn scan_special<T, U>(cursor: &mut Cursor<'_, U>) -> Option<T>
where
	T: Floating,
	U: CodeUnit,
{
	if cursor.matches_ignore_case(b"infinity") {
		cursor.advance_by(8);
		Some(T::max_value())
	} else if cursor.matches_ignore_case(b"inf") {
		cursor.advance_by(3);
		Some(T::max_value())
	} else if cursor.matches_ignore_case(b"nan") {
		cursor.advance_by(3);
		Some(T::nan())
	} else {
		None
	}
}
