//! Tag construction with layered defaults
//!
//! [`TagFactory::create`] builds a tag and applies, lowest priority first:
//!
//! 1. defaults registered for the tag name
//! 2. defaults registered for the tag type
//! 3. definitions from the selected theme
//! 4. the type's own [`Tag::default_definitions`]
//! 5. caller overrides
//!
//! Later layers win. The [`DefaultsRegistry`] is an explicit object handed to
//! the factory; register everything before the factory is shared.

use crate::state::{TagState, VoidStyle};
use crate::tag::{Tag, type_label};
use crate::tags::Element;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use vellum_attributes::{MergeMode, encode_content};
use vellum_exception::{Error, Result};
use vellum_types::{AttrValue, TagName};

/// One default operation applied to a fresh tag.
#[derive(Debug, Clone)]
pub enum Definition {
	/// Generic attribute write.
	Attribute(String, AttrValue),
	/// Class tokens merged into the current ones.
	Class(AttrValue),
	/// Class tokens replacing the current ones.
	ClassOverride(AttrValue),
	/// Encoded text content.
	Content(String),
	/// Raw markup content.
	Html(String),
	Prefix(String),
	Suffix(String),
	Template(String),
}

impl Definition {
	fn apply(&self, state: &mut TagState) -> Result<()> {
		match self {
			Definition::Attribute(key, value) => state.attributes.set(key.as_str(), value.clone()),
			Definition::Class(value) => state.attributes.set_class(value.clone(), MergeMode::Merge),
			Definition::ClassOverride(value) => {
				state.attributes.set_class(value.clone(), MergeMode::Override)
			}
			Definition::Content(text) => {
				state.content = encode_content(text, state.double_encode).into_owned();
				Ok(())
			}
			Definition::Html(markup) => {
				state.set_content(markup.as_str());
				Ok(())
			}
			Definition::Prefix(markup) => {
				state.set_prefix(markup.as_str());
				Ok(())
			}
			Definition::Suffix(markup) => {
				state.set_suffix(markup.as_str());
				Ok(())
			}
			Definition::Template(template) => {
				state.set_template(template.as_str());
				Ok(())
			}
		}
	}
}

/// Ordered list of [`Definition`]s.
///
/// # Example
///
/// ```
/// use vellum_tags::Definitions;
///
/// let defaults = Definitions::new()
/// 	.class("btn")
/// 	.attribute("type", "button");
/// assert_eq!(defaults.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Definitions(Vec<Definition>);

impl Definitions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(mut self, definition: Definition) -> Self {
		self.0.push(definition);
		self
	}

	pub fn attribute(self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.push(Definition::Attribute(key.into(), value.into()))
	}

	pub fn attributes<I, K, V>(self, attributes: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttrValue>,
	{
		attributes
			.into_iter()
			.fold(self, |defs, (key, value)| defs.attribute(key, value))
	}

	/// Adds class tokens. Tokens from earlier layers are kept.
	pub fn class(self, value: impl Into<AttrValue>) -> Self {
		self.push(Definition::Class(value.into()))
	}

	/// Replaces every class token set by earlier layers.
	pub fn class_override(self, value: impl Into<AttrValue>) -> Self {
		self.push(Definition::ClassOverride(value.into()))
	}

	pub fn content(self, text: impl Into<String>) -> Self {
		self.push(Definition::Content(text.into()))
	}

	pub fn html(self, markup: impl Into<String>) -> Self {
		self.push(Definition::Html(markup.into()))
	}

	pub fn prefix(self, markup: impl Into<String>) -> Self {
		self.push(Definition::Prefix(markup.into()))
	}

	pub fn suffix(self, markup: impl Into<String>) -> Self {
		self.push(Definition::Suffix(markup.into()))
	}

	pub fn template(self, template: impl Into<String>) -> Self {
		self.push(Definition::Template(template.into()))
	}

	/// Appends all of `other` after the current definitions.
	pub fn extend(mut self, other: Definitions) -> Self {
		self.0.extend(other.0);
		self
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
		self.0.iter()
	}

	/// Applies every definition in order.
	pub fn apply(&self, state: &mut TagState) -> Result<()> {
		self.0.iter().try_for_each(|definition| definition.apply(state))
	}
}

impl FromIterator<Definition> for Definitions {
	fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for Definitions {
	type Item = Definition;
	type IntoIter = std::vec::IntoIter<Definition>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Defaults registered per tag type and per tag name.
#[derive(Debug, Clone, Default)]
pub struct DefaultsRegistry {
	by_type: HashMap<TypeId, Definitions>,
	by_name: HashMap<TagName, Definitions>,
}

impl DefaultsRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers defaults for the tag type `T`, appending to earlier ones.
	pub fn register<T: Tag>(&mut self, definitions: Definitions) -> &mut Self {
		let entry = self.by_type.entry(TypeId::of::<T>()).or_default();
		*entry = std::mem::take(entry).extend(definitions);
		self
	}

	/// Registers defaults for every tag named `name`, appending to earlier
	/// ones.
	pub fn register_name(&mut self, name: TagName, definitions: Definitions) -> &mut Self {
		let entry = self.by_name.entry(name).or_default();
		*entry = std::mem::take(entry).extend(definitions);
		self
	}

	pub fn for_type<T: Tag>(&self) -> Option<&Definitions> {
		self.by_type.get(&TypeId::of::<T>())
	}

	pub fn for_name(&self, name: TagName) -> Option<&Definitions> {
		self.by_name.get(&name)
	}

	/// Tag names with registered defaults, in no particular order.
	pub fn names(&self) -> impl Iterator<Item = TagName> + '_ {
		self.by_name.keys().copied()
	}

	pub fn is_empty(&self) -> bool {
		self.by_type.is_empty() && self.by_name.is_empty()
	}
}

/// Supplies definitions for a named theme.
pub trait ThemeProvider: Send + Sync {
	/// Definitions for `tag` under `theme`. Unknown combinations return an
	/// empty list.
	fn definitions(&self, tag: TagName, theme: &str) -> Definitions;
}

/// Render options applied to every tag a factory creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	pub void_style: VoidStyle,
}

/// Builds tags with layered defaults.
///
/// # Example
///
/// ```
/// use vellum_tags::{Button, Definitions, DefaultsRegistry, TagExt, TagFactory};
///
/// let mut registry = DefaultsRegistry::new();
/// registry.register::<Button>(Definitions::new().attribute("type", "button"));
/// let factory = TagFactory::new(registry);
///
/// let button: Button = factory.create(Definitions::new().content("Save")).unwrap();
/// assert_eq!(button.render(), r#"<button type="button">Save</button>"#);
/// ```
#[derive(Clone, Default)]
pub struct TagFactory {
	registry: DefaultsRegistry,
	theme: Option<(Arc<dyn ThemeProvider>, String)>,
	render: RenderSettings,
}

impl TagFactory {
	pub fn new(registry: DefaultsRegistry) -> Self {
		Self {
			registry,
			..Self::default()
		}
	}

	/// Selects `theme` from `provider` for every tag created afterwards.
	pub fn with_theme(mut self, provider: impl ThemeProvider + 'static, theme: impl Into<String>) -> Self {
		self.theme = Some((Arc::new(provider), theme.into()));
		self
	}

	pub fn with_render_settings(mut self, render: RenderSettings) -> Self {
		self.render = render;
		self
	}

	pub fn registry(&self) -> &DefaultsRegistry {
		&self.registry
	}

	pub fn render_settings(&self) -> RenderSettings {
		self.render
	}

	/// Creates a `T` with defaults and `overrides` applied.
	///
	/// Fails with [`Error::AbstractInstantiation`] for types without a tag
	/// name, or with the first error raised by a definition.
	pub fn create<T: Tag>(&self, overrides: Definitions) -> Result<T> {
		let name = T::NAME.ok_or(Error::AbstractInstantiation {
			tag_type: type_label::<T>(),
		})?;
		let state = self.build(
			name,
			self.registry.for_type::<T>(),
			&T::default_definitions(),
			&overrides,
		)?;
		Ok(T::from_state(state))
	}

	/// Creates an [`Element`] named `name`.
	///
	/// Name defaults, `Element` type defaults and the theme apply as for
	/// [`create`](Self::create).
	pub fn create_named(&self, name: TagName, overrides: Definitions) -> Result<Element> {
		let state = self.build(
			name,
			self.registry.for_type::<Element>(),
			&Element::default_definitions(),
			&overrides,
		)?;
		Ok(Element::from_state(state))
	}

	fn build(
		&self,
		name: TagName,
		by_type: Option<&Definitions>,
		own: &Definitions,
		overrides: &Definitions,
	) -> Result<TagState> {
		let mut state = TagState::new(name);
		state.set_void_style(self.render.void_style);

		let theme = self
			.theme
			.as_ref()
			.map(|(provider, theme)| provider.definitions(name, theme));
		let layers = [
			self.registry.for_name(name),
			by_type,
			theme.as_ref(),
			Some(own),
			Some(overrides),
		];

		let mut applied = 0;
		for definitions in layers.into_iter().flatten() {
			definitions.apply(&mut state)?;
			applied += definitions.len();
		}
		tracing::debug!(
			tag = name.as_str(),
			theme = self.theme.as_ref().map(|(_, theme)| theme.as_str()),
			applied,
			"tag defaults applied"
		);
		Ok(state)
	}
}

impl std::fmt::Debug for TagFactory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TagFactory")
			.field("registry", &self.registry)
			.field("theme", &self.theme.as_ref().map(|(_, theme)| theme))
			.field("render", &self.render)
			.finish()
	}
}
