//! The ordered attribute map and its rendering.

use crate::class::{ClassInput, MergeMode, class_input, merge_tokens, without_tokens};
use crate::escape::escape;
use crate::key::{validate_event_key, validate_key};
use crate::normalize::{AttrEntry, BoolStyle, normalize, resolve, to_json};
use crate::style::{StyleInput, parse_declarations, render_declarations, style_input};
use crate::table;
use indexmap::IndexMap;
use indexmap::map::Iter;
use vellum_exception::{Result, key_invalid, value_type_invalid};
use vellum_types::{AttrKey, AttrValue};

const CLASS: &str = "class";
const STYLE: &str = "style";

/// Prefixed attribute groups that accept a map of short keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
	/// `data-*`
	Data,
	/// `aria-*`
	Aria,
}

impl Namespace {
	pub const fn name(&self) -> &'static str {
		match self {
			Namespace::Data => "data",
			Namespace::Aria => "aria",
		}
	}

	pub const fn prefix(&self) -> &'static str {
		match self {
			Namespace::Data => "data-",
			Namespace::Aria => "aria-",
		}
	}

	/// Prefixes a short key. Keys that already carry the prefix are kept.
	pub fn qualify(&self, key: &str) -> String {
		if key.starts_with(self.prefix()) {
			key.to_string()
		} else {
			format!("{}{key}", self.prefix())
		}
	}

	fn from_key(key: &str) -> Option<Self> {
		match key {
			"data" => Some(Namespace::Data),
			"aria" => Some(Namespace::Aria),
			_ => None,
		}
	}
}

/// Ordered mapping of attribute name to normalized entry.
///
/// Every write goes through the normalizer, so the map only ever holds bare
/// flags and strings. Re-setting a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
	entries: IndexMap<String, AttrEntry>,
}

impl AttributeMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, name: &str) -> Option<&AttrEntry> {
		self.entries.get(name)
	}

	/// The string value of `name`, or `None` if absent or a bare flag.
	pub fn get_text(&self, name: &str) -> Option<&str> {
		self.entries.get(name).and_then(AttrEntry::as_text)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> Iter<'_, String, AttrEntry> {
		self.entries.iter()
	}

	/// Writes an attribute through the generic path.
	///
	/// The boolean style comes from the attribute table. `class` and `style`
	/// replace their current value; `data` and `aria` given a map expand into
	/// prefixed siblings.
	pub fn set(&mut self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) -> Result<()> {
		let key = key.into();
		let style = table::bool_style_for(key.as_str());
		self.set_with(key, value, style)
	}

	/// Writes an attribute with an explicit boolean style.
	pub fn set_with(
		&mut self,
		key: impl Into<AttrKey>,
		value: impl Into<AttrValue>,
		style: BoolStyle,
	) -> Result<()> {
		let key = key.into();
		let name = validate_key(key.as_str())?;
		let value = resolve(value.into());

		match name {
			CLASS => return self.set_class(value, MergeMode::Override),
			STYLE => return self.set_style(value, MergeMode::Override),
			_ => {}
		}
		let namespace = Namespace::from_key(name).filter(|_| matches!(value, AttrValue::Map(_)));
		if let Some(namespace) = namespace {
			return self.set_namespace(namespace, value);
		}

		let entry = normalize(name, value, style)?;
		if let Some(AttrEntry::Text(text)) = &entry {
			table::validate_enumerated(name, text)?;
		}
		self.store(name, entry);
		Ok(())
	}

	/// Writes every pair in order, stopping at the first error.
	pub fn set_all<I, K, V>(&mut self, attributes: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<AttrKey>,
		V: Into<AttrValue>,
	{
		for (key, value) in attributes {
			self.set(key, value)?;
		}
		Ok(())
	}

	/// Removes an attribute. Returns `true` if anything was removed.
	///
	/// `data` and `aria` also remove every attribute of their prefixed group.
	pub fn remove(&mut self, name: &str) -> bool {
		let mut removed = self.entries.shift_remove(name).is_some();
		if let Some(namespace) = Namespace::from_key(name) {
			let before = self.entries.len();
			self.entries.retain(|key, _| !key.starts_with(namespace.prefix()));
			removed |= self.entries.len() != before;
		}
		if removed {
			tracing::trace!(attribute = name, "attribute removed");
		}
		removed
	}

	/// Writes `class`, merging with or replacing the current tokens.
	pub fn set_class(&mut self, value: impl Into<AttrValue>, mode: MergeMode) -> Result<()> {
		let entry = match class_input(value.into())? {
			ClassInput::Remove => None,
			ClassInput::Flag => Some(AttrEntry::Flag),
			ClassInput::Tokens(tokens) => self.joined_class(tokens.iter().map(String::as_str), mode),
		};
		self.store(CLASS, entry);
		Ok(())
	}

	/// Writes whitespace-separated class tokens. Never fails.
	pub fn add_class_tokens(&mut self, tokens: &str, mode: MergeMode) {
		let entry = self.joined_class(tokens.split_whitespace(), mode);
		self.store(CLASS, entry);
	}

	/// Removes whitespace-separated class tokens. Never fails.
	pub fn remove_class_tokens(&mut self, tokens: &str) {
		let tokens: Vec<String> = tokens.split_whitespace().map(str::to_string).collect();
		self.drop_class_tokens(&tokens);
	}

	fn joined_class<'a>(
		&'a self,
		tokens: impl IntoIterator<Item = &'a str>,
		mode: MergeMode,
	) -> Option<AttrEntry> {
		let existing = match mode {
			MergeMode::Merge => self.get_text(CLASS),
			MergeMode::Override => None,
		};
		let joined = merge_tokens(existing, tokens);
		(!joined.is_empty()).then_some(AttrEntry::Text(joined))
	}

	fn drop_class_tokens(&mut self, tokens: &[String]) {
		let Some(existing) = self.get_text(CLASS) else {
			return;
		};
		let remaining = without_tokens(existing, tokens);
		let entry = (!remaining.is_empty()).then_some(AttrEntry::Text(remaining));
		self.store(CLASS, entry);
	}

	/// Removes class tokens. The attribute is dropped once no token remains.
	pub fn remove_class(&mut self, value: impl Into<AttrValue>) -> Result<()> {
		if let ClassInput::Tokens(tokens) = class_input(value.into())? {
			self.drop_class_tokens(&tokens);
		}
		Ok(())
	}

	/// Writes `style`, overlaying or replacing the current declarations.
	pub fn set_style(&mut self, value: impl Into<AttrValue>, mode: MergeMode) -> Result<()> {
		let input = style_input(value.into())?;
		let entry = match (input, mode) {
			(StyleInput::Remove, _) => None,
			(StyleInput::Flag, _) => Some(AttrEntry::Flag),
			(StyleInput::Verbatim(text), MergeMode::Override) => Some(AttrEntry::Text(text)),
			(input, mode) => {
				let mut declarations = match mode {
					MergeMode::Merge => self.get_text(STYLE).map(parse_declarations).unwrap_or_default(),
					MergeMode::Override => IndexMap::new(),
				};
				declarations.extend(input.into_declarations());
				let rendered = render_declarations(&declarations);
				(!rendered.is_empty()).then_some(AttrEntry::Text(rendered))
			}
		};
		self.store(STYLE, entry);
		Ok(())
	}

	/// Writes a `data-*` or `aria-*` group.
	///
	/// A map expands each short key into a prefixed sibling. `Null` removes
	/// every attribute of the namespace. Booleans render as `"true"` /
	/// `"false"`. Structured `data-*` values are JSON-encoded; `aria-*` lists
	/// become space-separated token lists.
	pub fn set_namespace(&mut self, namespace: Namespace, value: impl Into<AttrValue>) -> Result<()> {
		match resolve(value.into()) {
			AttrValue::Null => {
				self.entries.retain(|name, _| !name.starts_with(namespace.prefix()));
				Ok(())
			}
			AttrValue::Map(map) => {
				for (key, value) in map {
					self.set_namespaced(namespace, &key, value)?;
				}
				Ok(())
			}
			other => Err(value_type_invalid(namespace.name(), other.type_name())),
		}
	}

	/// Writes a single `data-*` or `aria-*` attribute from a short key.
	pub fn set_namespaced(
		&mut self,
		namespace: Namespace,
		key: &str,
		value: impl Into<AttrValue>,
	) -> Result<()> {
		let short = key.strip_prefix(namespace.prefix()).unwrap_or(key);
		if short.trim().is_empty() {
			return Err(key_invalid(key, "attribute name is empty"));
		}
		let name = namespace.qualify(key);
		validate_key(&name)?;

		let entry = match (namespace, resolve(value.into())) {
			(Namespace::Data, value @ (AttrValue::List(_) | AttrValue::Map(_))) => {
				Some(AttrEntry::Text(to_json(&name, value)?.to_string()))
			}
			(Namespace::Aria, AttrValue::List(items)) => {
				let mut tokens = Vec::with_capacity(items.len());
				for item in items {
					if let Some(AttrEntry::Text(text)) = normalize(&name, item, BoolStyle::Text)? {
						tokens.push(text);
					}
				}
				(!tokens.is_empty()).then(|| AttrEntry::Text(tokens.join(" ")))
			}
			(_, value) => normalize(&name, value, BoolStyle::Text)?,
		};
		self.store(&name, entry);
		Ok(())
	}

	/// Writes an event handler attribute. The key must start with `on`.
	pub fn set_event(&mut self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) -> Result<()> {
		let key = key.into();
		let name = validate_event_key(key.as_str())?;
		let entry = normalize(name, value.into(), BoolStyle::Flag)?;
		self.store(name, entry);
		Ok(())
	}

	/// Writes an already normalized entry under a well-known attribute name.
	///
	/// `None` removes the attribute. No key or value validation is performed.
	pub fn put(&mut self, name: &'static str, entry: Option<AttrEntry>) {
		debug_assert!(validate_key(name).is_ok(), "invalid attribute name {name:?}");
		self.store(name, entry);
	}

	fn store(&mut self, name: &str, entry: Option<AttrEntry>) {
		match entry {
			Some(entry) => {
				tracing::trace!(attribute = name, value = ?entry, "attribute set");
				self.entries.insert(name.to_string(), entry);
			}
			None => {
				self.remove(name);
			}
		}
	}

	/// Renders the attribute fragment that follows a tag name.
	///
	/// Each entry contributes a leading space, then either the bare name or
	/// `name="escaped value"`.
	///
	/// # Example
	///
	/// ```
	/// use vellum_attributes::AttributeMap;
	///
	/// let mut attributes = AttributeMap::new();
	/// attributes.set("title", "Test \"quoted\" value").unwrap();
	/// attributes.set("disabled", true).unwrap();
	/// assert_eq!(attributes.render(), r#" title="Test &quot;quoted&quot; value" disabled"#);
	/// ```
	pub fn render(&self) -> String {
		let mut out = String::new();
		for (name, entry) in &self.entries {
			out.push(' ');
			out.push_str(name);
			if let AttrEntry::Text(value) = entry {
				out.push_str("=\"");
				out.push_str(&escape(value));
				out.push('"');
			}
		}
		out
	}
}

impl<'a> IntoIterator for &'a AttributeMap {
	type Item = (&'a String, &'a AttrEntry);
	type IntoIter = Iter<'a, String, AttrEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vellum_exception::{Error, ErrorKind};
	use vellum_types::{Attribute, Direction, Event};

	#[rstest]
	fn test_reset_keeps_position() {
		// Arrange
		let mut attributes = AttributeMap::new();
		attributes.set("id", "a").unwrap();
		attributes.set("title", "t").unwrap();

		// Act
		attributes.set("id", "b").unwrap();

		// Assert
		assert_eq!(attributes.render(), r#" id="b" title="t""#);
	}

	#[rstest]
	fn test_null_removes_key() {
		let mut attributes = AttributeMap::new();
		attributes.set("alt", "x").unwrap();
		attributes.set("alt", AttrValue::Null).unwrap();
		assert!(!attributes.contains("alt"));
		assert_eq!(attributes.render(), "");
	}

	#[rstest]
	#[case("disabled", true, " disabled")]
	#[case("disabled", false, "")]
	#[case("aria-pressed", true, r#" aria-pressed="true""#)]
	#[case("aria-pressed", false, r#" aria-pressed="false""#)]
	#[case("spellcheck", false, r#" spellcheck="false""#)]
	fn test_boolean_rendering(#[case] key: &str, #[case] value: bool, #[case] expected: &str) {
		let mut attributes = AttributeMap::new();
		attributes.set(key, value).unwrap();
		assert_eq!(attributes.render(), expected);
	}

	#[rstest]
	fn test_explicit_bool_style_overrides_table() {
		let mut attributes = AttributeMap::new();
		attributes.set_with("aria-hidden", true, BoolStyle::Flag).unwrap();
		assert_eq!(attributes.render(), " aria-hidden");
	}

	#[rstest]
	fn test_catalog_key_and_value() {
		let mut attributes = AttributeMap::new();
		attributes.set(Attribute::Dir, Direction::Rtl).unwrap();
		assert_eq!(attributes.render(), r#" dir="rtl""#);
	}

	#[rstest]
	fn test_enumerated_value_validated() {
		let mut attributes = AttributeMap::new();
		let err = attributes.set("dir", "sideways").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::EnumValueNotAllowed);
		assert!(attributes.is_empty());
	}

	#[rstest]
	fn test_class_merge_and_override() {
		// Arrange
		let mut attributes = AttributeMap::new();
		attributes.set_class("btn", MergeMode::Merge).unwrap();

		// Act
		attributes.set_class(vec!["btn", "active"], MergeMode::Merge).unwrap();
		let merged = attributes.render();
		attributes.set("class", "reset").unwrap();

		// Assert
		assert_eq!(merged, r#" class="btn active""#);
		assert_eq!(attributes.render(), r#" class="reset""#);
	}

	#[rstest]
	fn test_remove_class_drops_empty_attribute() {
		let mut attributes = AttributeMap::new();
		attributes.set("class", "a b").unwrap();
		attributes.remove_class("a").unwrap();
		assert_eq!(attributes.get_text("class"), Some("b"));
		attributes.remove_class(vec!["b"]).unwrap();
		assert!(!attributes.contains("class"));
	}

	#[rstest]
	fn test_style_merge_overlays_properties() {
		// Arrange
		let mut attributes = AttributeMap::new();
		attributes.set("style", "color: red; width: 10px").unwrap();

		// Act
		attributes
			.set_style(AttrValue::map([("width", "20px"), ("height", "5px")]), MergeMode::Merge)
			.unwrap();

		// Assert
		assert_eq!(
			attributes.get_text("style"),
			Some("color: red; width: 20px; height: 5px;")
		);
	}

	#[rstest]
	fn test_data_map_expansion() {
		// Arrange
		let mut attributes = AttributeMap::new();

		// Act
		attributes
			.set(
				"data",
				AttrValue::map([
					("id", AttrValue::from(5)),
					("data-open", AttrValue::from(true)),
					("skip", AttrValue::Null),
					("config", AttrValue::map([("a", 1)])),
				]),
			)
			.unwrap();

		// Assert
		assert_eq!(
			attributes.render(),
			r#" data-id="5" data-open="true" data-config="{&quot;a&quot;:1}""#
		);
	}

	#[rstest]
	#[case(Namespace::Data, "")]
	#[case(Namespace::Data, "  ")]
	#[case(Namespace::Data, "data-")]
	#[case(Namespace::Aria, "")]
	#[case(Namespace::Aria, "aria- ")]
	fn test_empty_short_key_rejected(#[case] namespace: Namespace, #[case] key: &str) {
		// Arrange
		let mut attributes = AttributeMap::new();

		// Act
		let result = attributes.set_namespace(namespace, AttrValue::map([(key, "x")]));

		// Assert
		assert_eq!(
			result,
			Err(Error::KeyInvalid {
				key: key.to_string(),
				reason: "attribute name is empty",
			})
		);
		assert!(attributes.is_empty());
	}

	#[rstest]
	#[case("data", vec!["aria-label", "id"])]
	#[case("aria", vec!["data-a", "id"])]
	fn test_remove_group(#[case] group: &str, #[case] remaining: Vec<&str>) {
		// Arrange
		let mut attributes = AttributeMap::new();
		attributes.set("data-a", "1").unwrap();
		attributes.set("aria-label", "l").unwrap();
		attributes.set("id", "x").unwrap();

		// Act
		let removed = attributes.remove(group);

		// Assert
		assert!(removed);
		assert_eq!(attributes.keys().collect::<Vec<_>>(), remaining);
		assert!(!attributes.remove(group));
	}

	#[rstest]
	fn test_aria_list_value() {
		let mut attributes = AttributeMap::new();
		attributes
			.set_namespaced(Namespace::Aria, "labelledby", vec!["name", "hint"])
			.unwrap();
		assert_eq!(attributes.get_text("aria-labelledby"), Some("name hint"));
	}

	#[rstest]
	fn test_namespace_null_clears_group() {
		let mut attributes = AttributeMap::new();
		attributes.set("data-a", "1").unwrap();
		attributes.set("id", "x").unwrap();
		attributes.set("data-b", "2").unwrap();
		attributes.set_namespace(Namespace::Data, AttrValue::Null).unwrap();
		assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["id"]);
	}

	#[rstest]
	fn test_namespace_rejects_scalar() {
		let mut attributes = AttributeMap::new();
		assert_eq!(
			attributes.set_namespace(Namespace::Aria, "x"),
			Err(Error::ValueTypeInvalid {
				attribute: "aria".to_string(),
				found: "string",
			})
		);
	}

	#[rstest]
	fn test_event_prefix_enforced() {
		// Arrange
		let mut attributes = AttributeMap::new();

		// Act
		let missing = attributes.set_event("click", "go()");
		attributes.set_event(Event::Click, "go()").unwrap();

		// Assert
		assert_eq!(
			missing,
			Err(Error::EventKeyPrefixMissing {
				key: "click".to_string()
			})
		);
		assert_eq!(attributes.render(), r#" onclick="go()""#);
	}

	#[rstest]
	fn test_invalid_key_rejected() {
		let mut attributes = AttributeMap::new();
		let err = attributes.set("", "x").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::KeyInvalid);
	}

	#[rstest]
	fn test_newlines_and_tabs_preserved() {
		let mut attributes = AttributeMap::new();
		attributes.set("title", "a\nb\tc").unwrap();
		assert_eq!(attributes.render(), " title=\"a\nb\tc\"");
	}
}
