//! End-to-end checks through the facade crate.

use rstest::*;
use vellum::prelude::*;

#[rstest]
fn test_settings_to_markup() {
	// Arrange
	let factory = Settings::from_toml_str(
		r#"
[render]
void_style = "xhtml"

[defaults.input]
type = "text"
aria = { required = true }
"#,
	)
	.unwrap()
	.into_factory()
	.unwrap();

	// Act
	let field: Input = factory
		.create(Definitions::new().attribute("name", "email"))
		.unwrap();
	let form: Form = factory.create(Definitions::new()).unwrap();
	let mut html = form.begin().unwrap();
	html.push_str(&field.render());
	html.push_str(&end::<Form>().unwrap());

	// Assert
	assert_eq!(
		html,
		"<form><input type=\"text\" aria-required=\"true\" name=\"email\" /></form>"
	);
}

#[rstest]
#[tokio::test]
async fn test_scoped_rendering_through_facade() {
	let html = with_tag_scope(async {
		let mut html = Section::new().id("s").begin().unwrap();
		tokio::task::yield_now().await;
		html.push_str(&end::<Section>().unwrap());
		html
	})
	.await;
	assert_eq!(html, "<section id=\"s\"></section>");
}
