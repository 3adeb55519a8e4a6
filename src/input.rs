//! Scan input: code unit abstraction and a read-only cursor.



//		Modules

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;



//		Traits

//		CodeUnit																
/// A fixed-width unit of text that can be read as a code point.
/// 
/// The scanners are generic over the width of the input, so the same parse
/// can run over bytes, UTF-16 units, raw 32-bit code points, or [`char`]s. A
/// unit whose code point is `0` acts as a null terminator: nothing at or
/// after it is ever read.
/// 
/// Byte input is read one byte at a time, so a multi-byte UTF-8 sequence is
/// seen as a run of values above `0x7F`. None of those are digits or ASCII
/// whitespace, which is all the default classifier cares about.
/// 
pub trait CodeUnit: Copy {
	//		code_point															
	/// Returns the code point value of this unit.
	fn code_point(self) -> u32;
}

//󰭅		CodeUnit: u8															
impl CodeUnit for u8 {
	//		code_point															
	fn code_point(self) -> u32 {
		u32::from(self)
	}
}

//󰭅		CodeUnit: u16															
impl CodeUnit for u16 {
	//		code_point															
	fn code_point(self) -> u32 {
		u32::from(self)
	}
}

//󰭅		CodeUnit: u32															
impl CodeUnit for u32 {
	//		code_point															
	fn code_point(self) -> u32 {
		self
	}
}

//󰭅		CodeUnit: char															
impl CodeUnit for char {
	//		code_point															
	fn code_point(self) -> u32 {
		u32::from(self)
	}
}



//		Structs

//		Cursor																	
/// A read-only position within a sequence of code units.
/// 
/// The cursor never mutates the underlying text. It stops at whichever comes
/// first of the end of the slice or a null code point, and reports positions
/// as offsets from the first unit of the slice.
/// 
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a, U> {
	/// The text being scanned.
	text: &'a [U],
	
	/// Offset of the next unit to read.
	pos:  usize,
}

//󰭅		Cursor																	
impl<'a, U: CodeUnit> Cursor<'a, U> {
	//		Constructors														
	
	//		new																	
	/// Creates a cursor positioned at the start of the text.
	pub(crate) const fn new(text: &'a [U]) -> Self {
		Self { text, pos: 0 }
	}
	
	//		Public methods														
	
	//		advance																
	/// Moves past the next code point. Does nothing at the end of input.
	pub(crate) fn advance(&mut self) {
		if self.peek().is_some() {
			self.pos = self.pos.saturating_add(1);
		}
	}
	
	//		advance_by															
	/// Moves past the next `n` code points, stopping early at the end of
	/// input.
	pub(crate) fn advance_by(&mut self, n: usize) {
		for _ in 0..n {
			self.advance();
		}
	}
	
	//		eat																	
	/// Moves past the next code point if it is `expected`.
	pub(crate) fn eat(&mut self, expected: u32) -> bool {
		if self.peek() == Some(expected) {
			self.advance();
			true
		} else {
			false
		}
	}
	
	//		eat_ignore_case														
	/// Moves past the next code point if it is the given ASCII letter in
	/// either case.
	pub(crate) fn eat_ignore_case(&mut self, letter: u8) -> bool {
		let lower = u32::from(letter.to_ascii_lowercase());
		let upper = u32::from(letter.to_ascii_uppercase());
		match self.peek() {
			Some(cp) if cp == lower || cp == upper => {
				self.advance();
				true
			}
			_ => false,
		}
	}
	
	//		matches_ignore_case													
	/// Checks whether the upcoming code points spell `word`, ignoring ASCII
	/// case. Does not move the cursor.
	pub(crate) fn matches_ignore_case(&self, word: &[u8]) -> bool {
		word.iter().enumerate().all(|(offset, &letter)| {
			self.peek_nth(offset).is_some_and(|cp| {
				u8::try_from(cp).is_ok_and(|byte| byte.eq_ignore_ascii_case(&letter))
			})
		})
	}
	
	//		peek																
	/// Returns the next code point without consuming it.
	pub(crate) fn peek(&self) -> Option<u32> {
		self.peek_nth(0)
	}
	
	//		peek_nth															
	/// Returns the code point `n` places ahead without consuming anything.
	/// 
	/// Returns [`None`] if the end of the slice or a null terminator lies at
	/// or before that position.
	/// 
	pub(crate) fn peek_nth(&self, n: usize) -> Option<u32> {
		let end = self.pos.checked_add(n)?;
		let ahead = self.text.get(self.pos..=end)?;
		let mut code_points = ahead.iter().map(|unit| unit.code_point());
		if code_points.any(|cp| cp == 0) {
			return None;
		}
		ahead.last().map(|unit| unit.code_point())
	}
	
	//		pos																	
	/// Returns the offset of the next unit to read.
	pub(crate) const fn pos(&self) -> usize {
		self.pos
	}
	
	//		rewind																
	/// Moves the cursor back to an earlier offset.
	pub(crate) const fn rewind(&mut self, pos: usize) {
		self.pos = pos;
	}
}
