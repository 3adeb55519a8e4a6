//		Packages

use super::*;
use crate::classify::Unicode;
use proptest::prelude::*;
use rubedo::sugar::s;
use serde_json::json;



//		Helpers

//		u32s																	
/// Converts a string into 32-bit code points.
fn u32s(s: &str) -> Vec<u32> {
	s.chars().map(u32::from).collect()
}

//		to_radix																
/// Formats a magnitude in the given radix, lowercase.
fn to_radix(mut value: u128, radix: u32) -> String {
	if value == 0 {
		return s!("0");
	}
	let mut digits = Vec::new();
	while value > 0 {
		digits.push(char::from_digit((value % u128::from(radix)) as u32, radix).unwrap());
		value /= u128::from(radix);
	}
	digits.iter().rev().collect()
}

//		Lenient																	
/// A classifier that reads every letter as a base-36 digit, whatever the
/// radix.
struct Lenient;

//󰭅		Classify																
impl Classify for Lenient {
	//		is_whitespace														
	fn is_whitespace(&self, cp: u32) -> bool {
		Ascii.is_whitespace(cp)
	}
	
	//		digit_value															
	fn digit_value(&self, cp: u32, _radix: u32) -> Option<u32> {
		char::from_u32(cp)?.to_digit(36)
	}
}



//		Tests

mod scan_result {
	use super::*;
	
	//		consumed															
	#[test]
	fn consumed__excludes_whitespace() {
		let result = ScanResult { value: 1_i32, start: 3, end: 7, overflowed: false };
		assert_eq!(result.consumed(), 4);
	}
	#[test]
	fn consumed__no_match() {
		assert_eq!(ScanResult::<i32>::no_match().consumed(), 0);
	}
	
	//		is_match															
	#[test]
	fn is_match__true() {
		assert!(ScanResult { value: 0_u8, start: 0, end: 1, overflowed: false }.is_match());
	}
	#[test]
	fn is_match__false() {
		assert!(!ScanResult::<u8>::no_match().is_match());
	}
	
	//		map																	
	#[test]
	fn map__keeps_positions() {
		let result = ScanResult { value: 7_i32, start: 2, end: 4, overflowed: true }.map(i64::from);
		assert_eq!(result, ScanResult { value: 7_i64, start: 2, end: 4, overflowed: true });
	}
	
	//		serialize															
	#[test]
	fn serialize() {
		let result = ScanResult { value: 255_u8, start: 1, end: 5, overflowed: false };
		assert_eq!(serde_json::to_value(result).unwrap(), json!({
			"value":      255,
			"start":      1,
			"end":        5,
			"overflowed": false,
		}));
	}
	#[test]
	fn deserialize() {
		let result: ScanResult<i16> = serde_json::from_str(r#"{"value":-3,"start":0,"end":2,"overflowed":false}"#).unwrap();
		assert_eq!(result, ScanResult { value: -3, start: 0, end: 2, overflowed: false });
	}
}

mod fixtures {
	use super::*;
	
	//		whitespace															
	#[test]
	fn whitespace__skipped_but_counted_in_end() {
		let input  = u32s("  \t\n\r123456 123232");
		let result = scan_integral::<i32, _>(&input, 10);
		assert_eq!(result.value,      123_456);
		assert_eq!(result.start,      5);
		assert_eq!(result.end,        11);
		assert_eq!(result.consumed(), 6);
		assert!(!result.overflowed);
	}
	#[test]
	fn whitespace__unsigned() {
		let result = scan_integral::<u64, _>(&u32s("  \t\n\r123456 123232"), 10);
		assert_eq!(result.value, 123_456);
		assert_eq!(result.end,   11);
	}
	
	//		decimal																
	#[test]
	fn decimal__stops_at_letter() {
		let result = scan_integral::<i64, _>(&u32s("212121A 32323232"), 10);
		assert_eq!(result.value, 212_121);
		assert_eq!(result.end,   6);
	}
	
	//		binary																
	#[test]
	fn binary__stops_at_invalid_digit() {
		let result = scan_integral::<i32, _>(&u32s("10101012 101010111"), 2);
		assert_eq!(result.value, 0x55);
		assert_eq!(result.end,   7);
	}
	
	//		octal																
	#[test]
	fn octal__explicit() {
		let result = scan_integral::<u64, _>(&u32s("01234567888"), 8);
		assert_eq!(result.value, 0o1_234_567);
		assert_eq!(result.end,   8);
	}
	#[test]
	fn octal__detected() {
		let result = scan_integral::<i64, _>(&u32s("01234567888"), 0);
		assert_eq!(result.value, 0o1_234_567);
		assert_eq!(result.end,   8);
	}
	
	//		decimal_detected													
	#[test]
	fn decimal__detected() {
		let result = scan_integral::<i32, _>(&u32s("12348889AA"), 0);
		assert_eq!(result.value, 12_348_889);
		assert_eq!(result.end,   8);
	}
	
	//		hexadecimal															
	#[test]
	fn hexadecimal__explicit() {
		let result = scan_integral::<i32, _>(&u32s("0x212121G 32323232"), 16);
		assert_eq!(result.value, 0x21_2121);
		assert_eq!(result.end,   8);
	}
	#[test]
	fn hexadecimal__detected_matches_explicit() {
		let input = u32s("0x212121G 32323232");
		assert_eq!(scan_integral::<i32, _>(&input, 0), scan_integral::<i32, _>(&input, 16));
	}
	#[test]
	fn hexadecimal__without_prefix() {
		let result = scan_integral::<u32, _>(b"ff", 16);
		assert_eq!(result.value, 255);
		assert_eq!(result.end,   2);
	}
	#[test]
	fn hexadecimal__upper_case_prefix() {
		let result = scan_integral::<u32, _>(b"0XaB", 0);
		assert_eq!(result.value, 0xAB);
		assert_eq!(result.end,   4);
	}
	
	//		overflow															
	#[test]
	fn overflow__positive_signed() {
		let result = scan_integral::<i32, _>(&u32s("2000000000000000000000000000000000000 "), 10);
		assert_eq!(result.value, i32::MAX);
		assert_eq!(result.end,   37);
		assert!(result.overflowed);
	}
	#[test]
	fn overflow__positive_unsigned() {
		let result = scan_integral::<u64, _>(&u32s("2000000000000000000000000000000000000 "), 10);
		assert_eq!(result.value, u64::MAX);
		assert_eq!(result.end,   37);
		assert!(result.overflowed);
	}
	#[test]
	fn overflow__negative_signed() {
		let result = scan_integral::<i64, _>(&u32s("-2000000000000000000000000000000000000 "), 10);
		assert_eq!(result.value, i64::MIN);
		assert_eq!(result.end,   38);
		assert!(result.overflowed);
	}
	#[test]
	fn overflow__negative_unsigned() {
		let result = scan_integral::<u64, _>(&u32s("-2000000000000000000000000000000000000 "), 10);
		assert_eq!(result.value, u64::MAX);
		assert_eq!(result.end,   38);
		assert!(result.overflowed);
	}
	
	//		no_match															
	#[test]
	fn no_match__letters() {
		assert_eq!(scan_integral::<i32, _>(&u32s("xxxxxx"), 10), ScanResult::no_match());
	}
	#[test]
	fn no_match__whitespace_then_letters() {
		let result = scan_integral::<u64, _>(&u32s("  xxxxxx"), 10);
		assert_eq!(result.value, 0);
		assert_eq!(result.end,   0);
		assert!(!result.overflowed);
	}
}

mod boundaries {
	use super::*;
	
	//		i8																	
	#[test]
	fn i8__max() {
		let result = scan_integral::<i8, _>(b"127", 10);
		assert_eq!(result.value, i8::MAX);
		assert!(!result.overflowed);
	}
	#[test]
	fn i8__max_plus_one() {
		let result = scan_integral::<i8, _>(b"128", 10);
		assert_eq!(result.value, i8::MAX);
		assert_eq!(result.end,   3);
		assert!(result.overflowed);
	}
	#[test]
	fn i8__min() {
		let result = scan_integral::<i8, _>(b"-128", 10);
		assert_eq!(result.value, i8::MIN);
		assert!(!result.overflowed);
	}
	#[test]
	fn i8__min_minus_one() {
		let result = scan_integral::<i8, _>(b"-129", 10);
		assert_eq!(result.value, i8::MIN);
		assert_eq!(result.end,   4);
		assert!(result.overflowed);
	}
	
	//		u8																	
	#[test]
	fn u8__max() {
		let result = scan_integral::<u8, _>(b"255", 10);
		assert_eq!(result.value, u8::MAX);
		assert!(!result.overflowed);
	}
	#[test]
	fn u8__max_plus_one() {
		let result = scan_integral::<u8, _>(b"256", 10);
		assert_eq!(result.value, u8::MAX);
		assert!(result.overflowed);
	}
	#[test]
	fn u8__negative_wraps() {
		assert_eq!(scan_integral::<u8, _>(b"-1",   10).value, u8::MAX);
		assert_eq!(scan_integral::<u8, _>(b"-255", 10).value, 1);
		assert!(!scan_integral::<u8, _>(b"-255", 10).overflowed);
	}
	#[test]
	fn u8__negative_overflow_clamps_to_max() {
		let result = scan_integral::<u8, _>(b"-256", 10);
		assert_eq!(result.value, u8::MAX);
		assert!(result.overflowed);
	}
	
	//		i64																	
	#[test]
	fn i64__extremes() {
		assert_eq!(scan_integral::<i64, _>(b"9223372036854775807",  10).value, i64::MAX);
		assert_eq!(scan_integral::<i64, _>(b"-9223372036854775808", 10).value, i64::MIN);
		assert!(!scan_integral::<i64, _>(b"-9223372036854775808", 10).overflowed);
		assert!(scan_integral::<i64, _>(b"9223372036854775808",   10).overflowed);
	}
	#[test]
	fn i64__hex_min() {
		let result = scan_integral::<i64, _>(b"-0x8000000000000000", 0);
		assert_eq!(result.value, i64::MIN);
		assert!(!result.overflowed);
	}
	
	//		u64																	
	#[test]
	fn u64__extremes() {
		assert_eq!(scan_integral::<u64, _>(b"18446744073709551615", 10).value, u64::MAX);
		assert!(scan_integral::<u64, _>(b"18446744073709551616", 10).overflowed);
	}
	#[test]
	fn u64__hex_overflow_consumes_all_digits() {
		let result = scan_integral::<u64, _>(b"0xFFFFFFFFFFFFFFFFFFz", 16);
		assert_eq!(result.value, u64::MAX);
		assert_eq!(result.end,   20);
		assert!(result.overflowed);
	}
	
	//		i128																
	#[test]
	fn i128__extremes() {
		assert_eq!(scan_integral::<i128, _>(b"170141183460469231731687303715884105727",  10).value, i128::MAX);
		assert_eq!(scan_integral::<i128, _>(b"-170141183460469231731687303715884105728", 10).value, i128::MIN);
		assert!(scan_integral::<i128, _>(b"170141183460469231731687303715884105728", 10).overflowed);
	}
	
	//		overflow_magnitude													
	#[test]
	fn overflow_magnitude__irrelevant() {
		let short = scan_integral::<i32, _>(b"99999999999", 10);
		let long  = scan_integral::<i32, _>(b"99999999999999999999999999999", 10);
		assert_eq!(short.value, long.value);
		assert!(short.overflowed && long.overflowed);
		assert_eq!(short.end, 11);
		assert_eq!(long.end,  29);
	}
}

mod prefixes {
	use super::*;
	
	//		leading_zero														
	#[test]
	fn leading_zero__alone() {
		let result = scan_integral::<i32, _>(b"0", 10);
		assert_eq!(result.value, 0);
		assert_eq!(result.end,   1);
		assert!(result.is_match());
	}
	#[test]
	fn leading_zero__followed_by_non_digit() {
		let result = scan_integral::<i32, _>(b"0;", 0);
		assert_eq!(result.value, 0);
		assert_eq!(result.end,   1);
	}
	#[test]
	fn leading_zero__is_a_digit_in_base_10() {
		let result = scan_integral::<i32, _>(b"0332378", 10);
		assert_eq!(result.value, 332_378);
		assert_eq!(result.end,   7);
	}
	#[test]
	fn leading_zero__octal_stops_at_8() {
		let result = scan_integral::<i32, _>(b"08", 0);
		assert_eq!(result.value, 0);
		assert_eq!(result.end,   1);
	}
	#[test]
	fn leading_zero__negative() {
		let result = scan_integral::<i32, _>(b"-0", 10);
		assert_eq!(result.value, 0);
		assert_eq!(result.end,   2);
	}
	
	//		hex_prefix															
	#[test]
	fn hex_prefix__without_digits_ends_at_x() {
		for base in [0, 16] {
			let result = scan_integral::<i32, _>(b"0x", base);
			assert_eq!(result.value, 0);
			assert_eq!(result.end,   1);
		}
	}
	#[test]
	fn hex_prefix__followed_by_non_hex_digit() {
		let result = scan_integral::<i32, _>(b" 0xZ", 16);
		assert_eq!(result.value, 0);
		assert_eq!(result.end,   2);
	}
	#[test]
	fn hex_prefix__not_recognised_in_base_10() {
		let result = scan_integral::<i32, _>(b"0x2299AAG", 10);
		assert_eq!(result.value, 0);
		assert_eq!(result.end,   1);
	}
	#[test]
	fn hex_prefix__with_sign() {
		let result = scan_integral::<i32, _>(b"-0x10", 0);
		assert_eq!(result.value, -16);
		assert_eq!(result.end,   5);
	}
	#[test]
	fn hex_prefix__no_binary_detection() {
		let result = scan_integral::<i32, _>(b"0b101", 0);
		assert_eq!(result.value, 0);
		assert_eq!(result.end,   1);
	}
	
	//		sign																
	#[test]
	fn sign__plus() {
		assert_eq!(scan_integral::<i32, _>(b"+12345678", 10).value, 12_345_678);
	}
	#[test]
	fn sign__minus() {
		assert_eq!(scan_integral::<i32, _>(b"-12345678", 10).value, -12_345_678);
	}
	#[test]
	fn sign__alone_is_no_match() {
		assert_eq!(scan_integral::<i32, _>(b"+",  10), ScanResult::no_match());
		assert_eq!(scan_integral::<i32, _>(b" -", 10), ScanResult::no_match());
	}
	#[test]
	fn sign__not_followed_by_whitespace() {
		assert!(!scan_integral::<i32, _>(b"- 1", 10).is_match());
	}
	#[test]
	fn sign__only_one_allowed() {
		assert!(!scan_integral::<i32, _>(b"+-1", 10).is_match());
	}
}

mod bases {
	use super::*;
	
	//		base_36																
	#[test]
	fn base_36__letters_in_either_case() {
		let result = scan_integral::<u32, _>(b"zZ", 36);
		assert_eq!(result.value, 35 * 36 + 35);
		assert_eq!(result.end,   2);
	}
	
	//		letters																
	#[test]
	fn letters__only_below_base() {
		let result = scan_integral::<u32, _>(b"19ab", 11);
		assert_eq!(result.value, 1 * 11 * 11 + 9 * 11 + 10);
		assert_eq!(result.end,   3);
	}
	
	//		invalid																
	#[test]
	fn invalid__no_match() {
		for base in [1, 37, 100, u32::MAX] {
			assert_eq!(scan_integral::<i32, _>(b"123", base), ScanResult::no_match());
		}
	}
}

mod inputs {
	use super::*;
	
	//		null_terminator														
	#[test]
	fn null_terminator__stops_scan() {
		let result = scan_integral::<i32, u32>(&[0x31, 0x32, 0, 0x33], 10);
		assert_eq!(result.value, 12);
		assert_eq!(result.end,   2);
	}
	#[test]
	fn null_terminator__at_start() {
		assert!(!scan_integral::<i32, u8>(&[0, b'1'], 10).is_match());
	}
	
	//		empty																
	#[test]
	fn empty() {
		assert_eq!(scan_integral::<i32, u8>(&[], 10), ScanResult::no_match());
	}
	
	//		widths																
	#[test]
	fn widths__u16() {
		let input: Vec<u16> = "  -42".encode_utf16().collect();
		assert_eq!(scan_integral::<i16, _>(&input, 10).value, -42);
	}
	#[test]
	fn widths__char() {
		let input: Vec<char> = "0x7fffffff".chars().collect();
		assert_eq!(scan_integral::<i32, _>(&input, 0).value, i32::MAX);
	}
	#[test]
	fn widths__non_ascii_is_not_a_digit() {
		let result = scan_integral::<i32, _>(&u32s("12\u{0661}"), 10);
		assert_eq!(result.value, 12);
		assert_eq!(result.end,   2);
	}
	
	//		classifier															
	#[test]
	fn classifier__unicode_whitespace() {
		let input  = u32s("\u{3000}\u{00A0}42");
		let result = scan_integral_with::<i32, _, _>(&input, 10, &Unicode);
		assert_eq!(result.value, 42);
		assert_eq!(result.start, 2);
		assert_eq!(result.end,   4);
		assert!(!scan_integral::<i32, _>(&input, 10).is_match());
	}
	#[test]
	fn classifier__digit_not_below_radix_ends_the_number() {
		let result = scan_integral_with::<u8, u8, _>(b"24Z", 10, &Lenient);
		assert_eq!(result.value, 24);
		assert_eq!(result.end,   2);
		assert!(!result.overflowed);
		let at_limit = scan_integral_with::<u8, u8, _>(b"255Z", 10, &Lenient);
		assert_eq!(at_limit.value, u8::MAX);
		assert_eq!(at_limit.end,   3);
		assert!(!at_limit.overflowed);
	}
	#[test]
	fn classifier__digit_not_below_detected_radix() {
		let result = scan_integral_with::<i32, u8, _>(b"017", 0, &Lenient);
		assert_eq!(result.value, 0o17);
		assert_eq!(result.end,   3);
		assert_eq!(scan_integral_with::<i32, u8, _>(b"019", 0, &Lenient).end, 2);
	}
}

mod properties {
	use super::*;
	
	proptest! {
		//		decimal_runs													
		#[test]
		fn decimal_runs__parse_exactly(value in any::<u64>()) {
			let text   = value.to_string();
			let result = scan_integral::<u64, u8>(text.as_bytes(), 10);
			prop_assert_eq!(result.value,      value);
			prop_assert_eq!(result.consumed(), text.len());
			prop_assert!(!result.overflowed);
		}
		
		//		explicit_base													
		#[test]
		fn explicit_base__reproduces_value(value in any::<u64>(), radix in 2_u32..=36) {
			let text   = to_radix(u128::from(value), radix);
			let result = scan_integral::<u64, u8>(text.as_bytes(), radix);
			prop_assert_eq!(result.value, value);
			prop_assert_eq!(result.end,   text.len());
		}
		
		//		round_trip														
		#[test]
		fn round_trip__signed(value in any::<i64>(), radix in 2_u32..=36) {
			let sign   = if value < 0 { "-" } else { "" };
			let text   = format!("{sign}{}", to_radix(u128::from(value.unsigned_abs()), radix));
			let result = scan_integral::<i64, u8>(text.as_bytes(), radix);
			prop_assert_eq!(result.value, value);
			prop_assert!(!result.overflowed);
		}
		#[test]
		fn round_trip__narrow(value in any::<i16>()) {
			let text = value.to_string();
			prop_assert_eq!(scan_integral::<i16, u8>(text.as_bytes(), 10).value, value);
		}
		
		//		overflow														
		#[test]
		fn overflow__clamps_whatever_the_magnitude(text in "[1-9][0-9]{20,60}") {
			let result = scan_integral::<u64, u8>(text.as_bytes(), 10);
			prop_assert_eq!(result.value, u64::MAX);
			prop_assert_eq!(result.end,   text.len());
			prop_assert!(result.overflowed);
		}
		
		//		no_match														
		#[test]
		fn no_match__letters_only(text in "[g-z]{1,20}") {
			prop_assert_eq!(scan_integral::<i32, u8>(text.as_bytes(), 16), ScanResult::no_match());
		}
	}
}
