//! Tag factory integration tests

use rstest::*;
use vellum_exception::{Error, ErrorKind};
use vellum_tags::{
	A, Button, Definitions, DefaultsRegistry, Div, Element, Img, RenderSettings, Tag, TagExt,
	TagFactory, TagState, ThemeProvider, VoidStyle,
};
use vellum_types::{AttrValue, BlockTag, InlineTag, TagName, VoidTag};

/// Theme with one definition set per tag name.
struct Bootstrap;

impl ThemeProvider for Bootstrap {
	fn definitions(&self, tag: TagName, theme: &str) -> Definitions {
		match (tag, theme) {
			(TagName::Inline(InlineTag::Button), "bootstrap5") => {
				Definitions::new().class("btn btn-primary").attribute("title", "theme")
			}
			_ => Definitions::new(),
		}
	}
}

/// Button type whose instances default to `type="submit"`.
#[derive(Debug, Clone)]
struct SubmitButton(TagState);

impl Tag for SubmitButton {
	const NAME: Option<TagName> = Some(TagName::Inline(InlineTag::Button));

	fn from_state(state: TagState) -> Self {
		SubmitButton(state)
	}

	fn state(&self) -> &TagState {
		&self.0
	}

	fn state_mut(&mut self) -> &mut TagState {
		&mut self.0
	}

	fn default_definitions() -> Definitions {
		Definitions::new()
			.attribute("type", "submit")
			.attribute("title", "own")
	}
}

#[fixture]
fn registry() -> DefaultsRegistry {
	let mut registry = DefaultsRegistry::new();
	registry
		.register_name(
			TagName::Inline(InlineTag::Button),
			Definitions::new()
				.attribute("type", "button")
				.attribute("title", "name")
				.class("ui"),
		)
		.register::<SubmitButton>(Definitions::new().attribute("title", "type"));
	registry
}

#[rstest]
fn test_layers_apply_in_priority_order(registry: DefaultsRegistry) {
	// Arrange
	let factory = TagFactory::new(registry).with_theme(Bootstrap, "bootstrap5");

	// Act
	let button: SubmitButton = factory
		.create(Definitions::new().attribute("title", "caller").content("Send"))
		.unwrap();

	// Assert
	assert_eq!(
		button.render(),
		"<button type=\"submit\" title=\"caller\" class=\"ui btn btn-primary\">Send</button>"
	);
}

#[rstest]
#[case(None, "own")]
#[case(Some("caller"), "caller")]
fn test_own_defaults_beat_theme(
	registry: DefaultsRegistry,
	#[case] override_title: Option<&str>,
	#[case] expected: &str,
) {
	// Arrange
	let factory = TagFactory::new(registry).with_theme(Bootstrap, "bootstrap5");
	let overrides = match override_title {
		Some(title) => Definitions::new().attribute("title", title),
		None => Definitions::new(),
	};

	// Act
	let button: SubmitButton = factory.create(overrides).unwrap();

	// Assert
	assert_eq!(button.attributes().get_text("title"), Some(expected));
}

#[rstest]
fn test_name_defaults_shared_by_types(registry: DefaultsRegistry) {
	// Arrange
	let factory = TagFactory::new(registry);

	// Act
	let button: Button = factory.create(Definitions::new()).unwrap();

	// Assert
	assert_eq!(
		button.render(),
		"<button type=\"button\" title=\"name\" class=\"ui\"></button>"
	);
}

#[rstest]
fn test_unknown_theme_adds_nothing(registry: DefaultsRegistry) {
	let factory = TagFactory::new(registry).with_theme(Bootstrap, "material");
	let button: Button = factory.create(Definitions::new()).unwrap();
	assert_eq!(button.attributes().get_text("class"), Some("ui"));
}

#[rstest]
fn test_abstract_element_rejected() {
	// Arrange
	let factory = TagFactory::default();

	// Act
	let err = factory.create::<Element>(Definitions::new()).unwrap_err();

	// Assert
	assert_eq!(err.kind(), ErrorKind::AbstractInstantiation);
	assert_eq!(err, Error::AbstractInstantiation { tag_type: "Element" });
}

#[rstest]
fn test_create_named_uses_name_defaults() {
	// Arrange
	let mut registry = DefaultsRegistry::new();
	registry.register_name(
		TagName::Block(BlockTag::Nav),
		Definitions::new().attribute("aria", AttrValue::map([("label", "main")])),
	);
	let factory = TagFactory::new(registry);

	// Act
	let nav = factory
		.create_named(TagName::Block(BlockTag::Nav), Definitions::new())
		.unwrap();

	// Assert
	assert_eq!(nav.render(), "<nav aria-label=\"main\">\n</nav>");
}

#[rstest]
fn test_render_settings_apply_to_created_tags() {
	// Arrange
	let factory = TagFactory::default().with_render_settings(RenderSettings {
		void_style: VoidStyle::Xhtml,
	});

	// Act
	let img: Img = factory
		.create(Definitions::new().attribute("src", "a.png"))
		.unwrap();
	let hr = factory
		.create_named(TagName::Void(VoidTag::Hr), Definitions::new())
		.unwrap();

	// Assert
	assert_eq!(img.render(), "<img src=\"a.png\" />");
	assert_eq!(hr.render(), "<hr />");
}

#[rstest]
fn test_invalid_default_surfaces_error() {
	let factory = TagFactory::default();
	let err = factory
		.create::<Div>(Definitions::new().attribute("bad key", "x"))
		.unwrap_err();
	assert_eq!(err.kind(), ErrorKind::KeyInvalid);
}

#[rstest]
fn test_decoration_definitions() {
	let factory = TagFactory::default();
	let link: A = factory
		.create(
			Definitions::new()
				.attribute("href", "/")
				.html("<b>Home</b>")
				.prefix("<nav>")
				.suffix("</nav>")
				.template("{prefix}{tag}{suffix}"),
		)
		.unwrap();
	assert_eq!(link.render(), "<nav><a href=\"/\"><b>Home</b></a></nav>");
}

#[rstest]
#[case(Definitions::new().class("wide"), "ui wide")]
#[case(Definitions::new().class_override("wide"), "wide")]
#[case(Definitions::new().class_override(AttrValue::Null), "")]
fn test_caller_class_merges_or_replaces(
	registry: DefaultsRegistry,
	#[case] overrides: Definitions,
	#[case] expected: &str,
) {
	// Arrange
	let factory = TagFactory::new(registry);

	// Act
	let button: Button = factory.create(overrides).unwrap();

	// Assert
	assert_eq!(button.attributes().get_text("class").unwrap_or(""), expected);
}
