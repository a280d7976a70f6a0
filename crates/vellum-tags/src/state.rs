//! Data owned by every tag value.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use vellum_attributes::AttributeMap;
use vellum_types::TagName;

/// Default decoration template.
pub const DEFAULT_TEMPLATE: &str = "{prefix}\n{tag}\n{suffix}";

/// How void elements are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoidStyle {
	/// `<img src="a.png">`
	#[default]
	Html,
	/// `<img src="a.png" />`
	Xhtml,
}

/// Attributes, content and decoration of a tag.
///
/// Concrete tag types wrap a `TagState` and expose it through
/// [`Tag`](crate::Tag). All fluent setters clone the state before writing to
/// it, so a state reachable from a shared tag is never altered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagState {
	pub(crate) tag: TagName,
	pub(crate) attributes: AttributeMap,
	pub(crate) content: String,
	pub(crate) prefix: String,
	pub(crate) suffix: String,
	pub(crate) template: Cow<'static, str>,
	pub(crate) begun: bool,
	pub(crate) double_encode: bool,
	pub(crate) void_style: VoidStyle,
}

impl TagState {
	pub fn new(tag: TagName) -> Self {
		Self {
			tag,
			attributes: AttributeMap::new(),
			content: String::new(),
			prefix: String::new(),
			suffix: String::new(),
			template: Cow::Borrowed(DEFAULT_TEMPLATE),
			begun: false,
			double_encode: true,
			void_style: VoidStyle::default(),
		}
	}

	pub fn tag(&self) -> TagName {
		self.tag
	}

	pub fn attributes(&self) -> &AttributeMap {
		&self.attributes
	}

	pub fn attributes_mut(&mut self) -> &mut AttributeMap {
		&mut self.attributes
	}

	/// Encoded content buffer.
	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn suffix(&self) -> &str {
		&self.suffix
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	/// Whether this state belongs to a tag opened with `begin()`.
	pub fn is_begun(&self) -> bool {
		self.begun
	}

	pub fn double_encode(&self) -> bool {
		self.double_encode
	}

	pub fn void_style(&self) -> VoidStyle {
		self.void_style
	}

	pub fn set_content(&mut self, content: impl Into<String>) {
		self.content = content.into();
	}

	pub fn set_prefix(&mut self, prefix: impl Into<String>) {
		self.prefix = prefix.into();
	}

	pub fn set_suffix(&mut self, suffix: impl Into<String>) {
		self.suffix = suffix.into();
	}

	pub fn set_template(&mut self, template: impl Into<String>) {
		self.template = Cow::Owned(template.into());
	}

	pub fn set_double_encode(&mut self, double_encode: bool) {
		self.double_encode = double_encode;
	}

	pub fn set_void_style(&mut self, void_style: VoidStyle) {
		self.void_style = void_style;
	}
}
