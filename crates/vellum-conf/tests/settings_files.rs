//! Loading settings from files and building factories from them.

use rstest::rstest;
use std::io::Write;
use tempfile::Builder;
use vellum_conf::{Settings, SettingsError};
use vellum_tags::{Definitions, Div, Img, TagExt};

fn write_settings(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
	let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[rstest]
fn test_toml_file_configures_factory() {
	// Arrange
	let file = write_settings(
		".toml",
		r#"
[render]
void_style = "xhtml"

[defaults.div]
class = "container"
data = { role = "panel", open = false }

[defaults.img]
alt = ""
"#,
	);

	// Act
	let factory = Settings::from_file(file.path())
		.unwrap()
		.into_factory()
		.unwrap();
	let div: Div = factory.create(Definitions::new().attribute("id", "main")).unwrap();
	let img: Img = factory.create(Definitions::new().attribute("src", "a.png")).unwrap();

	// Assert
	assert_eq!(
		div.render(),
		"<div class=\"container\" data-role=\"panel\" data-open=\"false\" id=\"main\">\n</div>"
	);
	assert_eq!(img.render(), "<img alt=\"\" src=\"a.png\" />");
}

#[rstest]
fn test_json_file_matches_toml_file() {
	// Arrange
	let toml = write_settings(".toml", "[defaults.span]\ntitle = \"hint\"\nlang = \"en\"");
	let json = write_settings(
		".json",
		r#"{"defaults": {"span": {"title": "hint", "lang": "en"}}}"#,
	);

	// Act
	let from_toml = Settings::from_file(toml.path()).unwrap();
	let from_json = Settings::from_file(json.path()).unwrap();

	// Assert
	assert_eq!(from_toml, from_json);
}

#[rstest]
fn test_unsupported_extension() {
	let file = write_settings(".yaml", "render: {}");
	let err = Settings::from_file(file.path()).unwrap_err();
	assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
}

#[rstest]
fn test_missing_file() {
	let err = Settings::from_file("/nonexistent/vellum.toml").unwrap_err();
	assert!(matches!(err, SettingsError::Io(_)));
}
