//! # Vellum Conf
//!
//! Settings that seed a [`TagFactory`] at start-up.
//!
//! ```toml
//! [render]
//! void_style = "xhtml"
//!
//! [defaults.div]
//! class = "container"
//! data = { role = "panel" }
//! ```
//!
//! Keys inside a `[defaults.<tag>]` table keep their document order, which
//! becomes the attribute order of every created tag.
//!
//! ## Example
//!
//! ```
//! use vellum_conf::Settings;
//! use vellum_tags::{Div, Definitions, TagExt};
//!
//! let settings = Settings::from_toml_str(
//! 	r#"
//! [defaults.div]
//! class = "container"
//! "#,
//! )
//! .unwrap();
//! let factory = settings.into_factory().unwrap();
//! let div: Div = factory.create(Definitions::new()).unwrap();
//! assert_eq!(div.render(), "<div class=\"container\">\n</div>");
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use vellum_tags::{Definition, Definitions, DefaultsRegistry, RenderSettings, TagFactory};
use vellum_types::{AttrValue, TagName};

/// Errors raised while loading settings.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Unknown tag name in defaults: {0}")]
	UnknownTag(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),

	#[error(transparent)]
	Attribute(#[from] vellum_exception::Error),
}

/// Default attributes per tag name, in document order.
pub type TagDefaults = IndexMap<String, IndexMap<String, serde_json::Value>>;

/// Library settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub render: RenderSettings,
	pub defaults: TagDefaults,
}

impl Settings {
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	pub fn from_json_str(source: &str) -> Result<Self, SettingsError> {
		Ok(serde_json::from_str(source)?)
	}

	/// Loads settings from a `.toml` or `.json` file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let extension = path.extension().and_then(|ext| ext.to_str());
		let settings = match extension {
			Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
			Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(format!(
					"{}: supported formats are .toml and .json",
					path.display()
				)));
			}
		};
		tracing::debug!(
			path = %path.display(),
			tags = settings.defaults.len(),
			"settings loaded"
		);
		Ok(settings)
	}

	/// Builds a name-keyed [`DefaultsRegistry`] from `[defaults.*]`.
	///
	/// A `class` key adds class tokens; every other key goes through the
	/// generic attribute path, so `data` and `aria` tables expand into
	/// prefixed attributes.
	pub fn into_registry(self) -> Result<DefaultsRegistry, SettingsError> {
		let mut registry = DefaultsRegistry::new();
		for (tag, attributes) in self.defaults {
			let name: TagName = tag
				.parse()
				.map_err(|_| SettingsError::UnknownTag(tag.clone()))?;
			let definitions: Definitions = attributes
				.into_iter()
				.map(|(key, value)| definition(key, value))
				.collect();
			registry.register_name(name, definitions);
		}
		Ok(registry)
	}

	/// Builds a [`TagFactory`] carrying the registry and render settings.
	///
	/// Every default is tried once on an empty tag of its name, so a bad key
	/// or value fails here rather than on first use.
	pub fn into_factory(self) -> Result<TagFactory, SettingsError> {
		let render = self.render;
		let registry = self.into_registry()?;
		let factory = TagFactory::new(registry).with_render_settings(render);
		for name in factory.registry().names() {
			factory.create_named(name, Definitions::new())?;
		}
		Ok(factory)
	}
}

fn definition(key: String, value: serde_json::Value) -> Definition {
	let value = AttrValue::from(value);
	match key.as_str() {
		"class" => Definition::Class(value),
		_ => Definition::Attribute(key, value),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vellum_tags::VoidStyle;
	use vellum_types::BlockTag;

	#[rstest]
	fn test_empty_settings() {
		let settings = Settings::from_toml_str("").unwrap();
		assert_eq!(settings, Settings::default());
		assert!(settings.into_registry().unwrap().is_empty());
	}

	#[rstest]
	#[case(r#"[render]
void_style = "xhtml""#)]
	#[case(r#"{"render": {"void_style": "xhtml"}}"#)]
	fn test_render_settings(#[case] source: &str) {
		let settings = if source.starts_with('{') {
			Settings::from_json_str(source)
		} else {
			Settings::from_toml_str(source)
		}
		.unwrap();
		assert_eq!(settings.render.void_style, VoidStyle::Xhtml);
	}

	#[rstest]
	fn test_defaults_keep_document_order() {
		let settings = Settings::from_toml_str(
			r#"
[defaults.div]
title = "t"
id = "x"
class = "a"
"#,
		)
		.unwrap();
		let keys: Vec<&str> = settings.defaults["div"].keys().map(String::as_str).collect();
		assert_eq!(keys, ["title", "id", "class"]);
	}

	#[rstest]
	fn test_unknown_tag_rejected() {
		let settings = Settings::from_toml_str("[defaults.blink]\nid = \"x\"").unwrap();
		let err = settings.into_registry().unwrap_err();
		assert!(matches!(err, SettingsError::UnknownTag(ref tag) if tag == "blink"));
	}

	#[rstest]
	fn test_class_key_becomes_class_definition() {
		let registry = Settings::from_toml_str("[defaults.div]\nclass = \"a b\"")
			.unwrap()
			.into_registry()
			.unwrap();
		let definitions = registry.for_name(TagName::Block(BlockTag::Div)).unwrap();
		assert!(matches!(definitions.iter().next(), Some(Definition::Class(_))));
	}

	#[rstest]
	fn test_invalid_default_fails_factory() {
		let settings = Settings::from_toml_str("[defaults.div]\ndir = \"sideways\"").unwrap();
		let err = settings.into_factory().unwrap_err();
		assert!(matches!(err, SettingsError::Attribute(_)));
	}

	#[rstest]
	fn test_malformed_toml() {
		let err = Settings::from_toml_str("[render").unwrap_err();
		assert!(matches!(err, SettingsError::Toml(_)));
	}
}
