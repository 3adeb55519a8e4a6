//! Integral scanner.
//! 
//! This is the base-generic, cutoff-based digit scanner that the floating
//! composer and both conversion wrappers are built on. It reports the value,
//! where the number starts and ends, and whether it overflowed, and never
//! touches any shared state.



//		Modules

#[cfg(test)]
#[path = "tests/scan.rs"]
mod tests;



//		Packages

use crate::{
	base::Base,
	classify::{Ascii, Classify},
	input::{CodeUnit, Cursor},
	num::{Accumulator, Integral},
};
use num_traits::Zero;
use serde::{Deserialize, Serialize};



//		Constants

/// `+`
pub(crate) const PLUS:  u32 = 0x2B;

/// `-`
pub(crate) const MINUS: u32 = 0x2D;

/// `0`
pub(crate) const ZERO:  u32 = 0x30;



//		Structs

//		ScanResult																
/// The outcome of a scan.
/// 
/// Positions are offsets into the input, counted in code units from the
/// first unit of the input. Two lengths can be derived from them:
/// 
///   - [`end`](Self::end) is the C end-pointer convention: how far into the
///     input the number reaches, including any leading whitespace that was
///     skipped. This is what the `strtoX` and `stoX` entry points report.
///   - [`consumed()`](Self::consumed()) is the length of the number itself,
///     counted from its first significant code point. The sign and any base
///     prefix count; leading whitespace does not.
/// 
/// When nothing was recognised, both `start` and `end` are `0` and the value
/// is zero, regardless of any sign or prefix that was tentatively read.
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScanResult<T> {
	/// The converted value. On overflow, the extremal value in the direction
	/// of the sign.
	pub value:      T,
	
	/// Offset of the first significant code point, after leading whitespace.
	pub start:      usize,
	
	/// Offset one past the last code point of the number.
	pub end:        usize,
	
	/// Whether the exact value lies outside the range of `T`.
	pub overflowed: bool,
}

//󰭅		ScanResult																
impl<T> ScanResult<T> {
	//		Constructors														
	
	//		no_match															
	/// A result recognising nothing.
	pub(crate) fn no_match() -> Self
	where
		T: Zero,
	{
		Self { value: T::zero(), start: 0, end: 0, overflowed: false }
	}
	
	//		Public methods														
	
	//		consumed															
	/// Length of the number, from its first significant code point.
	#[must_use]
	pub const fn consumed(&self) -> usize {
		self.end.saturating_sub(self.start)
	}
	
	//		is_match															
	/// Whether a number was recognised at all.
	#[must_use]
	pub const fn is_match(&self) -> bool {
		self.end > self.start
	}
	
	//		map																	
	/// Converts the value, keeping the positions and overflow state.
	pub fn map<R, F>(self, f: F) -> ScanResult<R>
	where
		F: FnOnce(T) -> R,
	{
		ScanResult {
			value:      f(self.value),
			start:      self.start,
			end:        self.end,
			overflowed: self.overflowed,
		}
	}
}

//		DigitRun																
/// A run of digits read by [`scan_digits()`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct DigitRun<M> {
	/// Accumulated value of the digits that fit under the limit.
	pub(crate) value:       M,
	
	/// Number of digits read, including any past the limit.
	pub(crate) digits:      usize,
	
	/// Number of digits that went into the value.
	pub(crate) accumulated: usize,
	
	/// Whether a digit would have taken the value past the limit.
	pub(crate) overflowed:  bool,
}

//		Signed																	
/// A signed number read by [`scan_signed()`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Signed<T> {
	/// The converted value, clamped on overflow.
	pub(crate) value:      T,
	
	/// Whether the magnitude overflowed.
	pub(crate) overflowed: bool,
}



//		Public functions

//		scan_integral															
/// Scans an integer, in the manner of C's `strtol()` family.
/// 
/// Leading whitespace is skipped, then an optional sign is read, then the
/// digits. With a base of `0` the base is detected from the prefix: `0x` or
/// `0X` selects 16, a leading `0` selects 8, and anything else selects 10.
/// With a base of 16 an `0x` prefix is allowed but not required. Letters are
/// digits for bases above 10, in either case.
/// 
/// An unsigned `T` still accepts a `-`, and negates the result with
/// wraparound, as `strtoul()` does.
/// 
/// If the value does not fit in `T`, the result is clamped to `T`'s minimum
/// (for a negative number in a signed type) or maximum (otherwise), and
/// [`overflowed`](ScanResult::overflowed) is set. The end position still
/// lies after every digit valid in the base.
/// 
/// # Parameters
/// 
/// * `input` - The text to scan. Scanning stops at the end of the slice or
///             at the first null code point.
/// * `base`  - `0` to detect the base, or `2` to `36`. Any other value
///             matches nothing.
/// 
/// # See also
/// 
/// * [`scan_integral_with()`]
/// 
#[must_use]
pub fn scan_integral<T, U>(input: &[U], base: u32) -> ScanResult<T>
where
	T: Integral,
	U: CodeUnit,
{
	scan_integral_with(input, base, &Ascii)
}

//		scan_integral_with														
/// Scans an integer using the given classifier.
/// 
/// # Parameters
/// 
/// * `input`    - The text to scan.
/// * `base`     - `0` to detect the base, or `2` to `36`.
/// * `classify` - Decides what counts as whitespace and as a digit.
/// 
/// # See also
/// 
/// * [`scan_integral()`]
/// 
#[must_use]
pub fn scan_integral_with<T, U, C>(input: &[U], base: u32, classify: &C) -> ScanResult<T>
where
	T: Integral,
	U: CodeUnit,
	C: Classify + ?Sized,
{
	let Some(base) = Base::new(base) else {
		return ScanResult::no_match();
	};
	let mut cursor = Cursor::new(input);
	skip_whitespace(&mut cursor, classify);
	let start      = cursor.pos();
	scan_signed::<T, U, C>(&mut cursor, base, classify).map_or_else(ScanResult::no_match, |number| ScanResult {
		value:      number.value,
		start,
		end:        cursor.pos(),
		overflowed: number.overflowed,
	})
}



//		Crate functions

//		skip_whitespace															
/// Moves the cursor past any whitespace.
pub(crate) fn skip_whitespace<U, C>(cursor: &mut Cursor<'_, U>, classify: &C)
where
	U: CodeUnit,
	C: Classify + ?Sized,
{
	while cursor.peek().is_some_and(|cp| classify.is_whitespace(cp)) {
		cursor.advance();
	}
}

//		read_sign																
/// Reads an optional sign, returning whether it was `-`.
pub(crate) fn read_sign<U: CodeUnit>(cursor: &mut Cursor<'_, U>) -> bool {
	if cursor.eat(MINUS) {
		return true;
	}
	cursor.eat(PLUS);
	false
}

//		scan_signed																
/// Reads a sign, an optional base prefix, and digits, without skipping any
/// leading whitespace.
/// 
/// On success the cursor is left just after the number. If no digits were
/// found, the cursor is put back where it started and [`None`] is returned,
/// so a tentatively read sign or prefix is never part of the result.
/// 
/// A leading `0` is itself a valid number. When it is followed by an `x` that
/// is not followed by a digit, the number is just the `0`, and the cursor is
/// left pointing at the `x`.
/// 
pub(crate) fn scan_signed<T, U, C>(cursor: &mut Cursor<'_, U>, base: Base, classify: &C) -> Option<Signed<T>>
where
	T: Integral,
	U: CodeUnit,
	C: Classify + ?Sized,
{
	let origin    = cursor.pos();
	let negative  = read_sign(cursor);
	let mut end   = None;
	let mut radix = base.as_u32();
	
	if cursor.eat(ZERO) {
		//	A lone leading zero is a complete number
		end = Some(cursor.pos());
		let hex_prefix = cursor.peek().is_some_and(is_hex_marker);
		match base.radix() {
			Some(16) if hex_prefix => cursor.advance(),
			None     if hex_prefix => {
				radix = 16;
				cursor.advance();
			}
			None                   => radix = 8,
			Some(_)                => {}
		}
	} else if base.is_auto() {
		radix = 10;
	}
	
	let run = scan_digits(cursor, classify, radix, T::magnitude_limit(negative));
	if run.digits > 0 {
		end = Some(cursor.pos());
	}
	let Some(end) = end else {
		cursor.rewind(origin);
		return None;
	};
	cursor.rewind(end);
	
	let value = if run.overflowed {
		T::saturated(negative)
	} else {
		T::from_magnitude(run.value, negative)
	};
	Some(Signed { value, overflowed: run.overflowed })
}

//		scan_digits																
/// Reads a run of digits in `radix`, accumulating them up to `limit`.
/// 
/// The scan has two phases. While the value stays within the limit, each
/// digit is checked against the cutoff and cutlimit and then accumulated.
/// Once a digit would take the value past the limit, the run is marked as
/// overflowed and the remaining digits are only consumed, so that the cursor
/// still ends up after every digit valid in the radix.
/// 
pub(crate) fn scan_digits<U, C, M>(cursor: &mut Cursor<'_, U>, classify: &C, radix: u32, limit: M) -> DigitRun<M>
where
	U: CodeUnit,
	C: Classify + ?Sized,
	M: Accumulator,
{
	let cutoff   = M::cutoff(limit, radix);
	let cutlimit = M::cutlimit(limit, radix);
	let mut run  = DigitRun { value: M::zero(), digits: 0, accumulated: 0, overflowed: false };
	
	//	Accumulate while the value stays within the limit
	while let Some(digit) = next_digit(cursor, classify, radix) {
		cursor.advance();
		run.digits = run.digits.saturating_add(1);
		if run.value > cutoff || (run.value == cutoff && M::from_u32(digit) > cutlimit) {
			run.overflowed = true;
			break;
		}
		run.value       = run.value.push_digit(radix, digit);
		run.accumulated = run.accumulated.saturating_add(1);
	}
	
	//	Past the limit, only consume
	if run.overflowed {
		while next_digit(cursor, classify, radix).is_some() {
			cursor.advance();
			run.digits = run.digits.saturating_add(1);
		}
	}
	
	run
}

//		is_hex_marker															
/// Whether the code point is `x` or `X`.
pub(crate) const fn is_hex_marker(cp: u32) -> bool {
	matches!(cp, 0x58 | 0x78)
}



//		Private functions

//		next_digit																
/// The value of the next code point as a digit in `radix`, if it is one.
/// 
/// A classifier value that is not below `radix` is not a digit.
/// 
fn next_digit<U, C>(cursor: &Cursor<'_, U>, classify: &C, radix: u32) -> Option<u32>
where
	U: CodeUnit,
	C: Classify + ?Sized,
{
	cursor.peek().and_then(|cp| classify.digit_value(cp, radix)).filter(|&digit| digit < radix)
}
