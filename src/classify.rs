//! Code point classification consumed by the scanners.
//! 
//! The scanners need exactly two questions answered about a code point: is
//! it whitespace, and what digit (if any) does it stand for. Anything richer
//! (case tables, charsets, Unicode categories) lives outside the parser.



//		Modules

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;



//		Traits

//		Classify																
/// A source of whitespace and digit classification.
pub trait Classify {
	//		is_whitespace														
	/// Whether the code point is skipped as leading whitespace.
	fn is_whitespace(&self, cp: u32) -> bool;
	
	//		digit_value															
	/// The value of the code point as a digit in `radix`.
	/// 
	/// Letters stand for the values `10` to `35` regardless of case, so
	/// `'A'` and `'a'` are both `10`. Returns [`None`] for anything that is
	/// not a digit, or whose value is not strictly less than `radix`.
	/// 
	/// # Parameters
	/// 
	/// * `cp`    - The code point to classify.
	/// * `radix` - The base in effect, which must lie in `2..=36`.
	/// 
	fn digit_value(&self, cp: u32, radix: u32) -> Option<u32> {
		if !(2..=36).contains(&radix) {
			return None;
		}
		char::from_u32(cp)?.to_digit(radix)
	}
}



//		Structs

//		Ascii																	
/// Classification matching the C locale.
/// 
/// Whitespace is the six characters `isspace()` accepts in the `"C"` locale:
/// space, `\t`, `\n`, `\v`, `\f` and `\r`.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Ascii;

//󰭅		Classify																
impl Classify for Ascii {
	//		is_whitespace														
	fn is_whitespace(&self, cp: u32) -> bool {
		matches!(cp, 0x20 | 0x09..=0x0D)
	}
}

//		Unicode																	
/// Classification that skips any Unicode `White_Space` code point.
/// 
/// Digits are still the ASCII digits and letters only.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Unicode;

//󰭅		Classify																
impl Classify for Unicode {
	//		is_whitespace														
	fn is_whitespace(&self, cp: u32) -> bool {
		char::from_u32(cp).is_some_and(char::is_whitespace)
	}
}
