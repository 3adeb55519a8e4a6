//! Numeric capabilities the scanners are generic over.
//! 
//! Everything here is resolved at compile time: the signedness of a target
//! type, the unsigned type its magnitude is accumulated in, and the limits
//! used to detect overflow one digit early.



//		Modules

#[cfg(test)]
#[path = "tests/num.rs"]
mod tests;



//		Packages

use num_traits::{Float, PrimInt, Unsigned, WrappingNeg, Zero};



//		Traits

//		Accumulator																
/// A type that digits can be accumulated into without ever computing an
/// out-of-range intermediate value.
/// 
/// The scanner works against a `limit`: the largest magnitude the result may
/// take. Before each step it compares the running value against the
/// [`cutoff`](Accumulator::cutoff) and [`cutlimit`](Accumulator::cutlimit)
/// derived from that limit, and stops accumulating as soon as the next digit
/// would take it past the limit.
/// 
pub trait Accumulator: Copy + PartialOrd + Zero {
	//		from_u32															
	/// Converts a small value (a digit or a radix) into the accumulator.
	fn from_u32(value: u32) -> Self;
	
	//		cutoff																
	/// `limit / radix`: the largest value that can still take another digit.
	fn cutoff(limit: Self, radix: u32) -> Self;
	
	//		cutlimit															
	/// `limit % radix`: the largest digit that can follow a value equal to
	/// the cutoff.
	fn cutlimit(limit: Self, radix: u32) -> Self;
	
	//		push_digit															
	/// Returns `self * radix + digit`.
	/// 
	/// Callers must have checked the value against the cutoff first.
	/// 
	fn push_digit(self, radix: u32, digit: u32) -> Self;
}

//		Integral																
/// An integer type that can be the target of an integral scan.
/// 
/// The magnitude of the number is accumulated in the unsigned counterpart of
/// the type, and only converted (and negated, if required) once the scan has
/// finished. This lets the most negative value of a signed type be parsed
/// exactly, as its magnitude is one more than the type's maximum.
/// 
pub trait Integral: PrimInt {
	/// Unsigned type of the same width, used to accumulate the magnitude.
	type Magnitude: Accumulator + PrimInt + Unsigned + WrappingNeg;
	
	/// Whether the type can hold negative values.
	const SIGNED: bool;
	
	//		magnitude_limit														
	/// The largest magnitude representable in the direction of the sign.
	/// 
	/// This is the type's maximum, except for a negative number in a signed
	/// type, where it is the magnitude of the type's minimum. Unsigned types
	/// accept a leading `-` but wrap the result, so their limit is always the
	/// maximum.
	/// 
	fn magnitude_limit(negative: bool) -> Self::Magnitude;
	
	//		from_magnitude														
	/// Converts an in-range magnitude into the type, applying the sign.
	/// 
	/// Unsigned types negate with wraparound, so `-1` becomes the maximum.
	/// 
	fn from_magnitude(magnitude: Self::Magnitude, negative: bool) -> Self;
	
	//		saturated															
	/// The extremal value an overflowing scan clamps to.
	/// 
	/// The minimum for a negative number in a signed type, and the maximum in
	/// every other case.
	/// 
	fn saturated(negative: bool) -> Self {
		if negative && Self::SIGNED {
			Self::min_value()
		} else {
			Self::max_value()
		}
	}
}

//		Floating																
/// A floating-point type that can be the target of a floating scan.
pub trait Floating: Accumulator + Float {
	/// Smallest decimal exponent that yields a normal value.
	const MIN_EXPONENT10: i32;
	
	/// Largest decimal exponent that yields a finite value.
	const MAX_EXPONENT10: i32;
	
	/// One more than the smallest binary exponent of a normal value.
	const MIN_EXPONENT:   i32;
	
	/// One more than the largest binary exponent of a finite value.
	const MAX_EXPONENT:   i32;
}



//		Macros

macro_rules! accumulator_int {
	($($t:ty),*) => {$(
		impl Accumulator for $t {
			#[allow(clippy::cast_possible_truncation, reason = "Only digits and radixes up to 36 are passed")]
			fn from_u32(value: u32) -> Self {
				value as Self
			}
			
			#[allow(clippy::arithmetic_side_effects, clippy::integer_division, reason = "Radix is never zero, and truncation is intended")]
			fn cutoff(limit: Self, radix: u32) -> Self {
				limit / Self::from_u32(radix)
			}
			
			#[allow(clippy::arithmetic_side_effects, reason = "Radix is never zero")]
			fn cutlimit(limit: Self, radix: u32) -> Self {
				limit % Self::from_u32(radix)
			}
			
			#[allow(clippy::arithmetic_side_effects, reason = "Guarded by the cutoff check")]
			fn push_digit(self, radix: u32, digit: u32) -> Self {
				self * Self::from_u32(radix) + Self::from_u32(digit)
			}
		}
	)*};
}

macro_rules! accumulator_float {
	($($t:ty),*) => {$(
		impl Accumulator for $t {
			#[allow(clippy::cast_precision_loss, reason = "Exact for the small values passed")]
			fn from_u32(value: u32) -> Self {
				value as Self
			}
			
			fn cutoff(limit: Self, radix: u32) -> Self {
				limit / Self::from_u32(radix)
			}
			
			fn cutlimit(limit: Self, radix: u32) -> Self {
				limit % Self::from_u32(radix)
			}
			
			fn push_digit(self, radix: u32, digit: u32) -> Self {
				self * Self::from_u32(radix) + Self::from_u32(digit)
			}
		}
	)*};
}

macro_rules! integral_signed {
	($($t:ty => $u:ty),*) => {$(
		impl Integral for $t {
			type Magnitude = $u;
			
			const SIGNED: bool = true;
			
			fn magnitude_limit(negative: bool) -> $u {
				if negative {
					<$t>::MIN.unsigned_abs()
				} else {
					<$t>::MAX.unsigned_abs()
				}
			}
			
			#[allow(clippy::cast_possible_wrap, reason = "Two's complement reinterpretation is intended")]
			fn from_magnitude(magnitude: $u, negative: bool) -> Self {
				if negative {
					magnitude.wrapping_neg() as Self
				} else {
					magnitude as Self
				}
			}
		}
	)*};
}

macro_rules! integral_unsigned {
	($($t:ty),*) => {$(
		impl Integral for $t {
			type Magnitude = $t;
			
			const SIGNED: bool = false;
			
			fn magnitude_limit(_negative: bool) -> Self {
				<$t>::MAX
			}
			
			fn from_magnitude(magnitude: Self, negative: bool) -> Self {
				if negative {
					magnitude.wrapping_neg()
				} else {
					magnitude
				}
			}
		}
	)*};
}



//		Implementations

accumulator_int!(u8, u16, u32, u64, u128, usize);
accumulator_float!(f32, f64);

integral_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
integral_unsigned!(u8, u16, u32, u64, u128, usize);

//󰭅		Floating: f32															
impl Floating for f32 {
	const MIN_EXPONENT10: i32 = Self::MIN_10_EXP;
	const MAX_EXPONENT10: i32 = Self::MAX_10_EXP;
	const MIN_EXPONENT:   i32 = Self::MIN_EXP;
	const MAX_EXPONENT:   i32 = Self::MAX_EXP;
}

//󰭅		Floating: f64															
impl Floating for f64 {
	const MIN_EXPONENT10: i32 = Self::MIN_10_EXP;
	const MAX_EXPONENT10: i32 = Self::MAX_10_EXP;
	const MIN_EXPONENT:   i32 = Self::MIN_EXP;
	const MAX_EXPONENT:   i32 = Self::MAX_EXP;
}
