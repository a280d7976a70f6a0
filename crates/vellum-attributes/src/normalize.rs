//! Reduction of raw [`AttrValue`]s to stored attribute entries.

use vellum_exception::{Result, value_type_invalid};
use vellum_types::AttrValue;

/// How a boolean value is stored.
///
/// The caller-facing setter decides; the normalizer never looks at the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoolStyle {
	/// `true` stores a bare flag, `false` removes the attribute.
	#[default]
	Flag,
	/// `true` and `false` store the literal strings `"true"` and `"false"`.
	Text,
}

/// A normalized attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrEntry {
	/// Rendered as the bare attribute name.
	Flag,
	/// Rendered as `name="escaped value"`.
	Text(String),
}

impl AttrEntry {
	/// The string value, or `None` for a bare flag.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			AttrEntry::Flag => None,
			AttrEntry::Text(text) => Some(text),
		}
	}

	pub fn is_flag(&self) -> bool {
		matches!(self, AttrEntry::Flag)
	}
}

/// Evaluates lazy values until a non-lazy value is reached.
pub fn resolve(value: AttrValue) -> AttrValue {
	match value {
		AttrValue::Lazy(lazy) => resolve(lazy.evaluate()),
		other => other,
	}
}

/// Normalizes a scalar attribute value.
///
/// Returns `None` when the attribute must be removed. Lists and maps are
/// rejected with [`ValueTypeInvalid`](vellum_exception::Error::ValueTypeInvalid)
/// naming `attribute`.
///
/// # Example
///
/// ```
/// use vellum_attributes::{AttrEntry, BoolStyle, normalize};
/// use vellum_types::AttrValue;
///
/// assert_eq!(normalize("hidden", true.into(), BoolStyle::Flag).unwrap(), Some(AttrEntry::Flag));
/// assert_eq!(normalize("hidden", false.into(), BoolStyle::Flag).unwrap(), None);
/// assert_eq!(
/// 	normalize("aria-pressed", true.into(), BoolStyle::Text).unwrap(),
/// 	Some(AttrEntry::Text("true".to_string()))
/// );
/// assert_eq!(normalize("alt", AttrValue::Null, BoolStyle::Flag).unwrap(), None);
/// ```
pub fn normalize(attribute: &str, value: AttrValue, style: BoolStyle) -> Result<Option<AttrEntry>> {
	match resolve(value) {
		AttrValue::Null => Ok(None),
		AttrValue::Bool(flag) => Ok(match style {
			BoolStyle::Flag => flag.then_some(AttrEntry::Flag),
			BoolStyle::Text => Some(AttrEntry::Text(flag.to_string())),
		}),
		value @ (AttrValue::List(_) | AttrValue::Map(_)) => {
			Err(value_type_invalid(attribute, value.type_name()))
		}
		value => Ok(value
			.scalar_str()
			.map(|text| AttrEntry::Text(text.into_owned()))),
	}
}

/// Converts a value into JSON, evaluating lazies along the way.
///
/// Used for `data-*` values that carry structured data.
pub fn to_json(attribute: &str, value: AttrValue) -> Result<serde_json::Value> {
	use serde_json::Value;

	Ok(match resolve(value) {
		AttrValue::Null => Value::Null,
		AttrValue::Bool(flag) => Value::Bool(flag),
		AttrValue::Int(i) => Value::from(i),
		AttrValue::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
		AttrValue::List(items) => Value::Array(
			items
				.into_iter()
				.map(|item| to_json(attribute, item))
				.collect::<Result<_>>()?,
		),
		AttrValue::Map(map) => Value::Object(
			map.into_iter()
				.map(|(key, item)| Ok((key, to_json(attribute, item)?)))
				.collect::<Result<_>>()?,
		),
		value => match value.scalar_str() {
			Some(text) => Value::String(text.into_owned()),
			None => return Err(value_type_invalid(attribute, value.type_name())),
		},
	})
}
