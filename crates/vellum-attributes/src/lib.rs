//! # Vellum Attributes
//!
//! Normalization and rendering of HTML attributes.
//!
//! Raw [`AttrValue`](vellum_types::AttrValue)s written into an
//! [`AttributeMap`] are reduced to either a bare flag or a string; `null`
//! (and `false` for flag attributes) removes the key. Rendering walks the map
//! in insertion order and escapes every value.
//!
//! ## Composite attributes
//!
//! - `class`: whitespace-separated tokens, merged without duplicates or
//!   overridden, see [`MergeMode`]
//! - `style`: a verbatim string or a map of declarations
//! - `data` / `aria`: maps expanded into prefixed siblings, see [`Namespace`]
//! - events: keys must start with `on`
//!
//! ## Example
//!
//! ```
//! use vellum_attributes::{AttributeMap, MergeMode};
//! use vellum_types::AttrValue;
//!
//! let mut attributes = AttributeMap::new();
//! attributes.set_class("card", MergeMode::Merge).unwrap();
//! attributes.set("data", AttrValue::map([("id", 7)])).unwrap();
//! attributes.set("alt", AttrValue::Null).unwrap();
//! assert_eq!(attributes.render(), r#" class="card" data-id="7""#);
//! ```

pub mod class;
pub mod escape;
pub mod key;
pub mod map;
pub mod normalize;
pub mod style;
pub mod table;

pub use class::MergeMode;
pub use escape::{encode_content, escape};
pub use key::{validate_event_key, validate_key};
pub use map::{AttributeMap, Namespace};
pub use normalize::{AttrEntry, BoolStyle, normalize, resolve, to_json};
pub use style::render_declarations;
pub use table::{
	AttributeSpec, GLOBAL_ATTRIBUTES, ValueKind, bool_style_for, validate_enumerated,
};
