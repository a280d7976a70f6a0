//! Static table of global attributes.
//!
//! The table tells the convenience setters how each attribute treats booleans
//! and which values it accepts. Attributes not listed here are unconstrained
//! text.

use crate::normalize::BoolStyle;
use vellum_exception::{Error, Result, value_type_invalid};
use vellum_types::{ContentEditable, Direction, Draggable, Role, Translate};

/// Value shape of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Bare boolean attribute.
	Flag,
	/// Boolean rendered as `"true"` / `"false"`.
	BoolText,
	/// One of a fixed set of strings.
	Enumerated,
	/// Free text.
	Text,
	/// Integer.
	Integer,
}

/// One row of [`GLOBAL_ATTRIBUTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
	pub name: &'static str,
	pub kind: ValueKind,
	/// Accepted values for `BoolText` and `Enumerated` attributes.
	pub allowed: &'static [&'static str],
}

const BOOL_TEXT: &[&str] = &["true", "false"];

const fn spec(name: &'static str, kind: ValueKind) -> AttributeSpec {
	AttributeSpec {
		name,
		kind,
		allowed: &[],
	}
}

const fn enumerated(name: &'static str, allowed: &'static [&'static str]) -> AttributeSpec {
	AttributeSpec {
		name,
		kind: ValueKind::Enumerated,
		allowed,
	}
}

/// Global attributes recognized by the convenience setters.
pub static GLOBAL_ATTRIBUTES: &[AttributeSpec] = &[
	spec("accesskey", ValueKind::Text),
	enumerated(
		"autocapitalize",
		&["off", "none", "on", "sentences", "words", "characters"],
	),
	spec("autofocus", ValueKind::Flag),
	enumerated("contenteditable", ContentEditable::PAYLOADS),
	enumerated("dir", Direction::PAYLOADS),
	enumerated("draggable", Draggable::PAYLOADS),
	enumerated(
		"enterkeyhint",
		&["enter", "done", "go", "next", "previous", "search", "send"],
	),
	spec("hidden", ValueKind::Flag),
	spec("id", ValueKind::Text),
	spec("inert", ValueKind::Flag),
	enumerated(
		"inputmode",
		&["none", "text", "decimal", "numeric", "tel", "search", "email", "url"],
	),
	spec("is", ValueKind::Text),
	spec("itemid", ValueKind::Text),
	spec("itemprop", ValueKind::Text),
	spec("itemref", ValueKind::Text),
	spec("itemscope", ValueKind::Flag),
	spec("itemtype", ValueKind::Text),
	spec("lang", ValueKind::Text),
	spec("nonce", ValueKind::Text),
	spec("popover", ValueKind::Text),
	enumerated("role", Role::PAYLOADS),
	spec("slot", ValueKind::Text),
	AttributeSpec {
		name: "spellcheck",
		kind: ValueKind::BoolText,
		allowed: BOOL_TEXT,
	},
	spec("tabindex", ValueKind::Integer),
	spec("title", ValueKind::Text),
	enumerated("translate", Translate::PAYLOADS),
];

impl AttributeSpec {
	/// Boolean style used when this attribute receives a `bool`.
	///
	/// Enumerations whose allowed set contains `"true"` take the text form.
	pub fn bool_style(&self) -> BoolStyle {
		match self.kind {
			ValueKind::BoolText => BoolStyle::Text,
			ValueKind::Enumerated if self.allowed.contains(&"true") => BoolStyle::Text,
			_ => BoolStyle::Flag,
		}
	}

	/// Checks a normalized text value against this attribute's constraints.
	pub fn validate(&self, value: &str) -> Result<()> {
		match self.kind {
			ValueKind::BoolText | ValueKind::Enumerated => {
				if self.allowed.iter().any(|allowed| *allowed == value) {
					Ok(())
				} else {
					Err(Error::EnumValueNotAllowed {
						attribute: self.name.to_string(),
						value: value.to_string(),
						allowed: self.allowed.iter().map(|v| (*v).to_string()).collect(),
					})
				}
			}
			ValueKind::Integer => value
				.trim()
				.parse::<i64>()
				.map(|_| ())
				.map_err(|_| value_type_invalid(self.name, "non-integer string")),
			ValueKind::Flag | ValueKind::Text => Ok(()),
		}
	}
}

/// Looks up an attribute in [`GLOBAL_ATTRIBUTES`].
pub fn lookup(name: &str) -> Option<&'static AttributeSpec> {
	GLOBAL_ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Validates `value` for a constrained attribute.
///
/// Attributes without constraints accept any value.
///
/// # Example
///
/// ```
/// use vellum_attributes::validate_enumerated;
///
/// assert!(validate_enumerated("dir", "rtl").is_ok());
/// assert!(validate_enumerated("dir", "sideways").is_err());
/// assert!(validate_enumerated("data-x", "anything").is_ok());
/// ```
pub fn validate_enumerated(name: &str, value: &str) -> Result<()> {
	match lookup(name) {
		Some(spec) => spec.validate(value),
		None => Ok(()),
	}
}

/// Boolean style for a key written through the generic setter.
///
/// `aria-*` and `data-*` attributes always take the text form.
pub fn bool_style_for(name: &str) -> BoolStyle {
	if name.starts_with("aria-") || name.starts_with("data-") {
		return BoolStyle::Text;
	}
	lookup(name).map_or(BoolStyle::Flag, AttributeSpec::bool_style)
}
