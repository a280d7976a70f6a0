//! HTML escaping for attribute values and tag content.

use std::borrow::Cow;

/// Escapes a value for use inside a double-quoted attribute.
///
/// Replaces `&`, `<`, `>` and `"`. Everything else, including newlines and
/// tabs, is kept verbatim. Returns a borrowed reference if no escaping is
/// needed.
///
/// # Example
///
/// ```
/// use vellum_attributes::escape;
///
/// assert_eq!(escape("Test \"quoted\" value"), "Test &quot;quoted&quot; value");
/// assert_eq!(escape("line\nbreak"), "line\nbreak");
/// ```
pub fn escape(value: &str) -> Cow<'_, str> {
	if value.contains(['&', '<', '>', '"']) {
		let mut escaped = String::with_capacity(value.len() + 8);
		for c in value.chars() {
			push_escaped(&mut escaped, c);
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(value)
	}
}

/// Encodes text for the content buffer of a tag.
///
/// With `double_encode` set to `false`, an `&` that already starts a
/// character reference (`&amp;`, `&#39;`, `&#x27;`) is left intact.
pub fn encode_content(value: &str, double_encode: bool) -> Cow<'_, str> {
	if double_encode {
		return escape(value);
	}
	if !value.contains(['&', '<', '>', '"']) {
		return Cow::Borrowed(value);
	}

	let mut escaped = String::with_capacity(value.len() + 8);
	for (index, c) in value.char_indices() {
		if c == '&' && starts_with_reference(&value[index..]) {
			escaped.push('&');
		} else {
			push_escaped(&mut escaped, c);
		}
	}
	Cow::Owned(escaped)
}

fn push_escaped(out: &mut String, c: char) {
	match c {
		'&' => out.push_str("&amp;"),
		'<' => out.push_str("&lt;"),
		'>' => out.push_str("&gt;"),
		'"' => out.push_str("&quot;"),
		_ => out.push(c),
	}
}

/// Returns `true` if `s` (which begins with `&`) starts with a named, decimal
/// or hexadecimal character reference terminated by `;`.
fn starts_with_reference(s: &str) -> bool {
	let Some(rest) = s.strip_prefix('&') else {
		return false;
	};
	let Some(end) = rest.find(';') else {
		return false;
	};
	let body = &rest[..end];

	if let Some(numeric) = body.strip_prefix('#') {
		return match numeric.strip_prefix(['x', 'X']) {
			Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
			None => !numeric.is_empty() && numeric.chars().all(|c| c.is_ascii_digit()),
		};
	}

	let mut chars = body.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_no_special_chars() {
		assert_eq!(escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("\"test\"", "&quot;test&quot;")]
	#[case("it's", "it's")]
	#[case("tab\there", "tab\there")]
	fn test_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape(input), expected);
	}

	#[rstest]
	#[case("a &amp; b", false, "a &amp; b")]
	#[case("a &amp; b", true, "a &amp;amp; b")]
	#[case("&#39; &#x27; &copy;", false, "&#39; &#x27; &copy;")]
	#[case("fish & chips", false, "fish &amp; chips")]
	#[case("&#; &x; &;", false, "&amp;#; &x; &amp;;")]
	#[case("<b>&nbsp</b>", false, "&lt;b&gt;&amp;nbsp&lt;/b&gt;")]
	fn test_encode_content(#[case] input: &str, #[case] double_encode: bool, #[case] expected: &str) {
		assert_eq!(encode_content(input, double_encode), expected);
	}
}
