//! # Vellum
//!
//! Immutable HTML tag values for server-side rendering.
//!
//! A tag is a plain value: every setter returns a modified copy, attributes are
//! validated and normalized when they are set, and rendering is a pure function
//! of the value. Tags render in one shot or in two halves through
//! `begin()` / `end()`, which nest and stay separate per task.
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `core` - error taxonomy and value types
//! - `attributes` - the attribute normalizer and renderer
//! - `tags` - tag values, lifecycle engine and factory
//! - `conf` - TOML / JSON settings for the factory
//!
//! ## Quick Example
//!
//! ```rust
//! use vellum::prelude::*;
//!
//! let card = Div::new().class("card").id("main");
//! let mut html = card.begin().unwrap();
//! html.push_str(&Span::new().role(Role::Status).unwrap().content("Saved").render());
//! html.push_str(&end::<Div>().unwrap());
//!
//! assert_eq!(
//! 	html,
//! 	"<div class=\"card\" id=\"main\"><span role=\"status\">Saved</span></div>"
//! );
//! ```

#[cfg(feature = "attributes")]
pub mod attributes;
#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "tags")]
pub mod tags;

#[cfg(feature = "core")]
pub use vellum_core::{AttrKey, AttrValue, Error, ErrorKind, Result, TagName};

#[cfg(feature = "tags")]
pub use vellum_tags::{Tag, TagExt, TagFactory, end, with_tag_scope, with_tag_scope_sync};

#[cfg(feature = "conf")]
pub use vellum_conf::{Settings, SettingsError};

/// Common imports.
///
/// ```rust
/// use vellum::prelude::*;
///
/// let img = Img::new().set_attribute("src", "a.png").unwrap();
/// assert_eq!(img.to_string(), "<img src=\"a.png\">");
/// ```
pub mod prelude {
	#[cfg(feature = "core")]
	pub use crate::{AttrKey, AttrValue, Error, ErrorKind, Result, TagName};

	#[cfg(feature = "core")]
	pub use vellum_core::types::{
		Attribute, AttributeEnum, ContentEditable, Direction, Draggable, Event, Role, Translate,
	};

	#[cfg(feature = "attributes")]
	pub use vellum_attributes::{AttributeMap, BoolStyle, MergeMode};

	#[cfg(feature = "tags")]
	pub use vellum_tags::tags::*;
	#[cfg(feature = "tags")]
	pub use vellum_tags::{
		Definitions, DefaultsRegistry, Tag, TagExt, TagFactory, TagState, ThemeProvider, VoidStyle,
		end, with_tag_scope, with_tag_scope_sync,
	};

	#[cfg(feature = "conf")]
	pub use vellum_conf::Settings;
}
