//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Structs

//		InvalidBase																
/// A raw base value outside `0` and `2..=36`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ThisError)]
#[error("Invalid base: {0}")]
pub struct InvalidBase(pub u32);



//		Enums

//		ParseError																
/// Represents the ways a checked conversion can fail.
/// 
/// The two conditions are mutually exclusive: a parse that recognised nothing
/// is never also out of range.
/// 
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ParseError {
	/// No number could be recognised at the start of the input, after any
	/// leading whitespace.
	#[error("No conversion could be performed")]
	NoConversion,
	
	/// A number was recognised, but its magnitude does not fit in the
	/// destination type.
	#[error("Value out of range")]
	OutOfRange,
}
