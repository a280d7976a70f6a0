//! Markup assembly for a single tag.
//!
//! These functions never apply hooks; [`TagExt::render`](crate::TagExt::render)
//! and the lifecycle engine wrap them.

use crate::state::{TagState, VoidStyle};
use vellum_types::Layout;

/// Opening tag with attributes, e.g. `<div class="a">`.
pub(crate) fn open_tag(state: &TagState) -> String {
	let name = state.tag.as_str();
	let attributes = state.attributes.render();
	match (state.tag.layout(), state.void_style) {
		(Layout::Void, VoidStyle::Xhtml) => format!("<{name}{attributes} />"),
		_ => format!("<{name}{attributes}>"),
	}
}

/// Closing tag, empty for void elements.
pub(crate) fn close_tag(state: &TagState) -> String {
	match state.tag.layout() {
		Layout::Void => String::new(),
		Layout::Block | Layout::Inline => format!("</{}>", state.tag.as_str()),
	}
}

/// Complete markup without decoration.
///
/// Block tags put content on its own line; an empty block tag still renders
/// its closing tag on the next line.
pub(crate) fn element(state: &TagState) -> String {
	let open = open_tag(state);
	match state.tag.layout() {
		Layout::Void => open,
		Layout::Inline => format!("{open}{}{}", state.content, close_tag(state)),
		Layout::Block if state.content.is_empty() => format!("{open}\n{}", close_tag(state)),
		Layout::Block => format!("{open}\n{}\n{}", state.content, close_tag(state)),
	}
}

/// Opening fragment emitted by `begin()`: the opening tag and any content.
pub(crate) fn begin_fragment(state: &TagState) -> String {
	let open = open_tag(state);
	match state.tag.layout() {
		_ if state.content.is_empty() => open,
		Layout::Block => format!("{open}\n{}", state.content),
		Layout::Inline | Layout::Void => format!("{open}{}", state.content),
	}
}

/// Substitutes `{prefix}`, `{tag}` and `{suffix}` in `template`.
///
/// A line that only became empty because its tokens were empty is dropped.
/// Lines that were empty in the template are kept.
pub(crate) fn decorate(template: &str, prefix: &str, tag: &str, suffix: &str) -> String {
	template
		.split('\n')
		.filter_map(|line| {
			let rendered = line
				.replace("{prefix}", prefix)
				.replace("{tag}", tag)
				.replace("{suffix}", suffix);
			(line.is_empty() || !rendered.is_empty()).then_some(rendered)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::state::DEFAULT_TEMPLATE;
	use rstest::rstest;
	use vellum_types::{BlockTag, InlineTag, TagName, VoidTag};

	fn state(tag: impl Into<TagName>) -> TagState {
		TagState::new(tag.into())
	}

	#[rstest]
	fn test_block_without_content() {
		assert_eq!(element(&state(BlockTag::Div)), "<div>\n</div>");
	}

	#[rstest]
	fn test_block_with_content() {
		let mut div = state(BlockTag::Div);
		div.set_content("body");
		assert_eq!(element(&div), "<div>\nbody\n</div>");
	}

	#[rstest]
	fn test_inline() {
		let mut span = state(InlineTag::Span);
		span.set_content("x");
		assert_eq!(element(&span), "<span>x</span>");
	}

	#[rstest]
	#[case(VoidStyle::Html, "<br>")]
	#[case(VoidStyle::Xhtml, "<br />")]
	fn test_void(#[case] style: VoidStyle, #[case] expected: &str) {
		let mut br = state(VoidTag::Br);
		br.set_void_style(style);
		assert_eq!(element(&br), expected);
		assert_eq!(close_tag(&br), "");
	}

	#[rstest]
	#[case("", "<p>", "", "<p>")]
	#[case("<!-- a -->", "<p>", "", "<!-- a -->\n<p>")]
	#[case("", "<p>", "<hr>", "<p>\n<hr>")]
	#[case("pre", "<p>", "post", "pre\n<p>\npost")]
	fn test_decorate_default_template(
		#[case] prefix: &str,
		#[case] tag: &str,
		#[case] suffix: &str,
		#[case] expected: &str,
	) {
		assert_eq!(decorate(DEFAULT_TEMPLATE, prefix, tag, suffix), expected);
	}

	#[rstest]
	fn test_decorate_keeps_literal_blank_lines() {
		let rendered = decorate("{prefix}\n\n{tag}|{suffix}", "", "<b>", "!");
		assert_eq!(rendered, "\n<b>|!");
	}
}
