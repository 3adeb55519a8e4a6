//! Numeric base selection.



//		Modules

#[cfg(test)]
#[path = "tests/base.rs"]
mod tests;



//		Packages

use crate::errors::InvalidBase;
use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};



//		Structs

//		Base																	
/// The base a number is read in.
/// 
/// Only `0` (auto-detect) and `2` to `36` inclusive are valid. The value is
/// private, so a `Base` can only be obtained through [`new()`](Self::new()),
/// [`TryFrom`], deserialisation, or the constants, and always holds a valid
/// base. Entry points that accept a raw `u32` treat every other value as "no
/// digits matched" rather than as a separate error.
/// 
/// When serialised, the base is written as its raw integer, so a
/// configuration can carry e.g. `"base": 16`.
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Base(u32);

//󰭅		Base																	
impl Base {
	//		Public constants													
	/// Detect the base from the prefix: `0x`/`0X` selects 16, a leading `0`
	/// selects 8, and anything else selects 10.
	pub const AUTO:        Self = Self(0);
	
	/// Base 2.
	pub const BINARY:      Self = Self(2);
	
	/// Base 8.
	pub const OCTAL:       Self = Self(8);
	
	/// Base 10.
	pub const DECIMAL:     Self = Self(10);
	
	/// Base 16.
	pub const HEXADECIMAL: Self = Self(16);
	
	//		Constructors														
	
	//		new																	
	/// Validates a raw base value.
	/// 
	/// Returns [`None`] for anything other than `0` or `2..=36`.
	/// 
	/// # Parameters
	/// 
	/// * `base` - The raw base, where `0` means auto-detect.
	/// 
	#[must_use]
	pub const fn new(base: u32) -> Option<Self> {
		match base {
			0 | 2..=36 => Some(Self(base)),
			_          => None,
		}
	}
	
	//		Public methods														
	
	//		as_u32																
	/// Returns the raw base value, with `0` for [`AUTO`](Self::AUTO).
	#[must_use]
	pub const fn as_u32(self) -> u32 {
		self.0
	}
	
	//		is_auto																
	/// Whether the base is detected from the input.
	#[must_use]
	pub const fn is_auto(self) -> bool {
		self.0 == 0
	}
	
	//		radix																
	/// Returns the fixed radix, or [`None`] when the base is detected from the
	/// input.
	#[must_use]
	pub const fn radix(self) -> Option<u32> {
		if self.is_auto() { None } else { Some(self.0) }
	}
}

//󰭅		Display																	
impl Display for Base {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.radix() {
			None        => write!(f, "auto"),
			Some(radix) => write!(f, "{radix}"),
		}
	}
}

//󰭅		From: Base -> u32														
impl From<Base> for u32 {
	//		from																
	fn from(base: Base) -> Self {
		base.as_u32()
	}
}

//󰭅		TryFrom: u32 -> Base													
impl TryFrom<u32> for Base {
	type Error = InvalidBase;
	
	//		try_from															
	fn try_from(base: u32) -> Result<Self, Self::Error> {
		Self::new(base).ok_or(InvalidBase(base))
	}
}
