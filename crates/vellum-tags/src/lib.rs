//! # Vellum Tags
//!
//! Immutable HTML tag values.
//!
//! Every setter on [`TagExt`] returns a modified copy; the receiver is never
//! altered. A tag renders in one shot with [`TagExt::render`] (or `Display`),
//! or in two halves with [`TagExt::begin`] and [`end`], which may be nested
//! and interleaved across tasks.
//!
//! ## Example
//!
//! ```
//! use vellum_tags::{Div, Img, Span, TagExt};
//! use vellum_types::{AttrValue, Role};
//!
//! let div = Div::new().class("container").id("main");
//! assert_eq!(div.render(), "<div class=\"container\" id=\"main\">\n</div>");
//!
//! let span = Span::new()
//! 	.set_attributes([("role", AttrValue::from(Role::Alert)), ("aria-live", "polite".into())])
//! 	.unwrap()
//! 	.content("Saved");
//! assert_eq!(span.render(), "<span role=\"alert\" aria-live=\"polite\">Saved</span>");
//!
//! let img = Img::new()
//! 	.set_attributes([("src", AttrValue::from("a.png")), ("alt", AttrValue::Null)])
//! 	.unwrap();
//! assert_eq!(img.to_string(), "<img src=\"a.png\">");
//! ```

pub mod factory;
pub mod lifecycle;
mod render;
pub mod state;
pub mod tag;
pub mod tags;

pub use factory::{
	Definition, Definitions, DefaultsRegistry, RenderSettings, TagFactory, ThemeProvider,
};
pub use lifecycle::{
	ContextKind, current_context, end, open_tag_depth, with_tag_scope, with_tag_scope_sync,
};
pub use state::{DEFAULT_TEMPLATE, TagState, VoidStyle};
pub use tag::{Tag, TagExt};
pub use tags::*;
