//! Inline `style` declarations.

use crate::normalize::{AttrEntry, BoolStyle, normalize, resolve};
use indexmap::IndexMap;
use vellum_exception::{Result, value_type_invalid};
use vellum_types::AttrValue;

const STYLE: &str = "style";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StyleInput {
	Remove,
	Flag,
	/// A string kept as written.
	Verbatim(String),
	/// `property -> value` pairs.
	Declarations(IndexMap<String, String>),
}

impl StyleInput {
	/// Declarations of this input, parsing verbatim strings.
	pub(crate) fn into_declarations(self) -> IndexMap<String, String> {
		match self {
			StyleInput::Verbatim(text) => parse_declarations(&text),
			StyleInput::Declarations(declarations) => declarations,
			StyleInput::Remove | StyleInput::Flag => IndexMap::new(),
		}
	}
}

pub(crate) fn style_input(value: AttrValue) -> Result<StyleInput> {
	match resolve(value) {
		AttrValue::Map(properties) => {
			let mut declarations = IndexMap::with_capacity(properties.len());
			for (property, value) in properties {
				match normalize(STYLE, value, BoolStyle::Flag)? {
					Some(AttrEntry::Text(text)) => {
						declarations.insert(property, text);
					}
					Some(AttrEntry::Flag) => return Err(value_type_invalid(STYLE, "bool")),
					None => {}
				}
			}
			Ok(StyleInput::Declarations(declarations))
		}
		scalar => Ok(match normalize(STYLE, scalar, BoolStyle::Flag)? {
			None => StyleInput::Remove,
			Some(AttrEntry::Flag) => StyleInput::Flag,
			Some(AttrEntry::Text(text)) => StyleInput::Verbatim(text),
		}),
	}
}

/// Parses `prop: value; prop: value` into ordered declarations.
///
/// Segments without a `:` are dropped.
pub(crate) fn parse_declarations(text: &str) -> IndexMap<String, String> {
	text.split(';')
		.filter_map(|segment| segment.split_once(':'))
		.map(|(property, value)| (property.trim(), value.trim()))
		.filter(|(property, _)| !property.is_empty())
		.map(|(property, value)| (property.to_string(), value.to_string()))
		.collect()
}

/// Renders declarations as `prop: value;` pairs joined by a single space.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use vellum_attributes::render_declarations;
///
/// let mut declarations = IndexMap::new();
/// declarations.insert("color".to_string(), "red".to_string());
/// declarations.insert("width".to_string(), "10px".to_string());
/// assert_eq!(render_declarations(&declarations), "color: red; width: 10px;");
/// ```
pub fn render_declarations(declarations: &IndexMap<String, String>) -> String {
	declarations
		.iter()
		.map(|(property, value)| format!("{property}: {value};"))
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_style_map_input() {
		// Arrange
		let value = AttrValue::map([
			("color", AttrValue::from("red")),
			("margin", AttrValue::Null),
			("z-index", AttrValue::from(3)),
		]);

		// Act
		let input = style_input(value).unwrap();

		// Assert
		let declarations = input.into_declarations();
		assert_eq!(render_declarations(&declarations), "color: red; z-index: 3;");
	}

	#[rstest]
	fn test_style_string_is_verbatim() {
		let input = style_input(AttrValue::from("color:red;;")).unwrap();
		assert_eq!(input, StyleInput::Verbatim("color:red;;".to_string()));
	}

	#[rstest]
	#[case("color: red; width: 10px", &[("color", "red"), ("width", "10px")])]
	#[case(" color :red ;; junk ; ", &[("color", "red")])]
	#[case("background: url(a:b)", &[("background", "url(a:b)")])]
	fn test_parse_declarations(#[case] text: &str, #[case] expected: &[(&str, &str)]) {
		let parsed = parse_declarations(text);
		let pairs: Vec<(&str, &str)> = parsed.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
		assert_eq!(pairs, expected);
	}

	#[rstest]
	fn test_style_rejects_list() {
		let err = style_input(AttrValue::list(["a"])).unwrap_err();
		assert!(err.to_string().contains("style"));
	}
}
