//! The tag value object and its fluent, copy-on-write setters.

use crate::factory::Definitions;
use crate::lifecycle;
use crate::render;
use crate::state::{TagState, VoidStyle};
use std::any::type_name;
use vellum_attributes::{AttrEntry, AttributeMap, BoolStyle, MergeMode, Namespace, encode_content};
use vellum_exception::Result;
use vellum_types::{AttrKey, AttrValue, Direction, TagName, Translate};

/// An HTML tag value.
///
/// Implementors are plain values wrapping a [`TagState`]. The fluent API lives
/// in [`TagExt`], which every `Tag` gets for free.
///
/// # Example
///
/// ```
/// use vellum_tags::{Tag, TagExt, TagState};
/// use vellum_types::{BlockTag, TagName};
///
/// #[derive(Debug, Clone)]
/// struct Card(TagState);
///
/// impl Tag for Card {
/// 	const NAME: Option<TagName> = Some(TagName::Block(BlockTag::Section));
///
/// 	fn from_state(state: TagState) -> Self {
/// 		Card(state)
/// 	}
/// 	fn state(&self) -> &TagState {
/// 		&self.0
/// 	}
/// 	fn state_mut(&mut self) -> &mut TagState {
/// 		&mut self.0
/// 	}
/// 	fn after_render(&self, markup: String) -> String {
/// 		markup.to_uppercase()
/// 	}
/// }
///
/// let card = Card::from_state(TagState::new(Card::NAME.unwrap())).class("card");
/// assert_eq!(card.render(), "<SECTION CLASS=\"CARD\">\n</SECTION>");
/// ```
pub trait Tag: Clone + Send + 'static {
	/// Tag name of this type. `None` marks an abstract type the factory
	/// refuses to construct.
	const NAME: Option<TagName>;

	fn from_state(state: TagState) -> Self;

	fn state(&self) -> &TagState;

	fn state_mut(&mut self) -> &mut TagState;

	/// Defaults every instance of this type starts with.
	fn default_definitions() -> Definitions {
		Definitions::new()
	}

	/// Returning `false` skips rendering; the output is an empty string.
	fn before_render(&self) -> bool {
		true
	}

	/// Post-processes rendered markup.
	fn after_render(&self, markup: String) -> String {
		markup
	}
}

/// Short type name used in lifecycle diagnostics.
pub(crate) fn type_label<T: ?Sized>() -> &'static str {
	let full = type_name::<T>();
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

/// Fluent setters, rendering and `begin()` for every [`Tag`].
///
/// Setters never modify `self`; they return a modified copy.
pub trait TagExt: Tag {
	/// Returns a copy with `f` applied to its state.
	fn with_state(&self, f: impl FnOnce(&mut TagState)) -> Self {
		let mut next = self.clone();
		f(next.state_mut());
		next
	}

	/// Returns a copy with `f` applied to its state, or the first error.
	fn try_with_state(&self, f: impl FnOnce(&mut TagState) -> Result<()>) -> Result<Self> {
		let mut next = self.clone();
		f(next.state_mut())?;
		Ok(next)
	}

	fn tag_name(&self) -> TagName {
		self.state().tag()
	}

	/// Normalized attributes in render order.
	fn attributes(&self) -> &AttributeMap {
		self.state().attributes()
	}

	/// Sets one attribute through the generic path.
	fn set_attribute(&self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) -> Result<Self> {
		self.try_with_state(|state| state.attributes.set(key, value))
	}

	/// Sets one attribute with an explicit boolean style.
	fn set_attribute_with(
		&self,
		key: impl Into<AttrKey>,
		value: impl Into<AttrValue>,
		style: BoolStyle,
	) -> Result<Self> {
		self.try_with_state(|state| state.attributes.set_with(key, value, style))
	}

	/// Sets several attributes in order.
	fn set_attributes<I, K, V>(&self, attributes: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<AttrKey>,
		V: Into<AttrValue>,
	{
		self.try_with_state(|state| state.attributes.set_all(attributes))
	}

	fn remove_attribute(&self, key: impl Into<AttrKey>) -> Self {
		let key = key.into();
		self.with_state(|state| {
			state.attributes.remove(key.as_str());
		})
	}

	/// Adds class tokens, keeping existing ones.
	fn class(&self, tokens: &str) -> Self {
		self.with_state(|state| state.attributes.add_class_tokens(tokens, MergeMode::Merge))
	}

	/// Replaces all class tokens.
	fn class_override(&self, tokens: &str) -> Self {
		self.with_state(|state| state.attributes.add_class_tokens(tokens, MergeMode::Override))
	}

	/// Adds class tokens from a list or a `{token: condition}` map.
	fn class_with(&self, value: impl Into<AttrValue>, mode: MergeMode) -> Result<Self> {
		self.try_with_state(|state| state.attributes.set_class(value, mode))
	}

	fn remove_class(&self, tokens: &str) -> Self {
		self.with_state(|state| state.attributes.remove_class_tokens(tokens))
	}

	/// Sets `id`. An empty id removes the attribute.
	fn id(&self, id: impl Into<String>) -> Self {
		self.with_state(|state| state.attributes.put("id", non_empty(id.into())))
	}

	/// Sets `title`. An empty title removes the attribute.
	fn title(&self, title: impl Into<String>) -> Self {
		self.with_state(|state| state.attributes.put("title", non_empty(title.into())))
	}

	/// Sets `lang`. An empty language removes the attribute.
	fn lang(&self, lang: impl Into<String>) -> Self {
		self.with_state(|state| state.attributes.put("lang", non_empty(lang.into())))
	}

	fn dir(&self, dir: Direction) -> Self {
		self.with_state(|state| {
			state
				.attributes
				.put("dir", Some(AttrEntry::Text(dir.as_str().to_string())))
		})
	}

	fn hidden(&self, hidden: bool) -> Self {
		self.with_state(|state| state.attributes.put("hidden", hidden.then_some(AttrEntry::Flag)))
	}

	fn tabindex(&self, index: i32) -> Self {
		self.with_state(|state| {
			state
				.attributes
				.put("tabindex", Some(AttrEntry::Text(index.to_string())))
		})
	}

	fn spellcheck(&self, enabled: bool) -> Self {
		self.with_state(|state| {
			state
				.attributes
				.put("spellcheck", Some(AttrEntry::Text(enabled.to_string())))
		})
	}

	fn translate(&self, translate: Translate) -> Self {
		self.with_state(|state| {
			state
				.attributes
				.put("translate", Some(AttrEntry::Text(translate.as_str().to_string())))
		})
	}

	/// Sets `role` from a [`Role`](vellum_types::Role) or a role string.
	fn role(&self, role: impl Into<AttrValue>) -> Result<Self> {
		self.set_attribute_with("role", role, BoolStyle::Flag)
	}

	/// Sets `contenteditable`; booleans render as `"true"` / `"false"`.
	fn contenteditable(&self, value: impl Into<AttrValue>) -> Result<Self> {
		self.set_attribute_with("contenteditable", value, BoolStyle::Text)
	}

	/// Sets `draggable`; booleans render as `"true"` / `"false"`.
	fn draggable(&self, value: impl Into<AttrValue>) -> Result<Self> {
		self.set_attribute_with("draggable", value, BoolStyle::Text)
	}

	/// Merges inline style declarations.
	fn style(&self, value: impl Into<AttrValue>) -> Result<Self> {
		self.try_with_state(|state| state.attributes.set_style(value, MergeMode::Merge))
	}

	/// Sets `data-*` attributes from a map of short keys.
	fn data(&self, value: impl Into<AttrValue>) -> Result<Self> {
		self.try_with_state(|state| state.attributes.set_namespace(Namespace::Data, value))
	}

	/// Sets `aria-*` attributes from a map of short keys.
	fn aria(&self, value: impl Into<AttrValue>) -> Result<Self> {
		self.try_with_state(|state| state.attributes.set_namespace(Namespace::Aria, value))
	}

	/// Sets one event handler. The key must start with `on`.
	fn on(&self, event: impl Into<AttrKey>, handler: impl Into<AttrValue>) -> Result<Self> {
		self.try_with_state(|state| state.attributes.set_event(event, handler))
	}

	/// Sets several event handlers in order.
	fn events<I, K, V>(&self, handlers: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<AttrKey>,
		V: Into<AttrValue>,
	{
		self.try_with_state(|state| {
			handlers
				.into_iter()
				.try_for_each(|(event, handler)| state.attributes.set_event(event, handler))
		})
	}

	/// Replaces the content with encoded text.
	fn content(&self, text: &str) -> Self {
		self.with_state(|state| {
			state.content = encode_content(text, state.double_encode).into_owned();
		})
	}

	/// Replaces the content with raw markup.
	fn html(&self, markup: impl Into<String>) -> Self {
		self.with_state(|state| state.set_content(markup))
	}

	/// Controls whether [`content`](TagExt::content) re-encodes existing
	/// character references.
	fn double_encode(&self, double_encode: bool) -> Self {
		self.with_state(|state| state.set_double_encode(double_encode))
	}

	/// Raw markup placed before the tag.
	fn prefix(&self, markup: impl Into<String>) -> Self {
		self.with_state(|state| state.set_prefix(markup))
	}

	/// Raw markup placed after the tag.
	fn suffix(&self, markup: impl Into<String>) -> Self {
		self.with_state(|state| state.set_suffix(markup))
	}

	/// Decoration template with `{prefix}`, `{tag}` and `{suffix}` tokens.
	fn template(&self, template: impl Into<String>) -> Self {
		self.with_state(|state| state.set_template(template))
	}

	fn void_style(&self, void_style: VoidStyle) -> Self {
		self.with_state(|state| state.set_void_style(void_style))
	}

	/// Renders the tag.
	///
	/// Runs [`Tag::before_render`] first and returns an empty string if it
	/// declines. A tag opened with `begin()` renders only its closing
	/// fragment.
	fn render(&self) -> String {
		if !self.before_render() {
			tracing::trace!(tag = self.tag_name().as_str(), "render skipped by before_render");
			return String::new();
		}

		let state = self.state();
		let markup = if state.begun {
			render::decorate(&state.template, "", &render::close_tag(state), &state.suffix)
		} else {
			render::decorate(&state.template, &state.prefix, &render::element(state), &state.suffix)
		};
		let markup = self.after_render(markup);
		tracing::trace!(tag = state.tag.as_str(), begun = state.begun, "tag rendered");
		markup
	}

	/// Opens the tag: returns its opening fragment and pushes a copy onto the
	/// current context's stack. Close it with [`end`](crate::end).
	fn begin(&self) -> Result<String> {
		lifecycle::begin(self)
	}
}

impl<T: Tag> TagExt for T {}

fn non_empty(value: String) -> Option<AttrEntry> {
	(!value.is_empty()).then_some(AttrEntry::Text(value))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::{Div, Element};
	use rstest::rstest;

	#[rstest]
	fn test_type_label() {
		assert_eq!(type_label::<Div>(), "Div");
		assert_eq!(type_label::<Element>(), "Element");
		assert_eq!(type_label::<Vec<Div>>(), "Vec");
	}

	#[rstest]
	fn test_setters_return_new_values() {
		// Arrange
		let original = Div::new().id("a");

		// Act
		let changed = original.id("b").class("x");

		// Assert
		assert_eq!(original.attributes().get_text("id"), Some("a"));
		assert!(!original.attributes().contains("class"));
		assert_eq!(changed.attributes().get_text("id"), Some("b"));
	}

	#[rstest]
	fn test_empty_text_setter_removes() {
		let div = Div::new().title("t").title("");
		assert!(!div.attributes().contains("title"));
	}

	#[rstest]
	fn test_failed_setter_leaves_original_untouched() {
		let div = Div::new().id("keep");
		assert!(div.set_attribute("bad key", "x").is_err());
		assert_eq!(div.render(), "<div id=\"keep\">\n</div>");
	}
}
