//! # Vellum Types
//!
//! Value and name types shared by the attribute normalizer and the tag
//! engine:
//!
//! - [`AttrValue`]: the raw union accepted by every attribute setter
//! - [`AttrKey`]: an attribute key from a string or a catalog
//! - [`AttributeEnum`] catalogs such as [`Direction`] and [`Role`]
//! - [`TagName`]: tag names partitioned into categories with a [`Layout`]
//!
//! ## Example
//!
//! ```
//! use vellum_types::{AttrValue, BlockTag, Layout, Role, TagName};
//!
//! let role = AttrValue::from(Role::Alert);
//! assert_eq!(role.scalar_str().as_deref(), Some("alert"));
//! assert_eq!(TagName::from(BlockTag::Div).layout(), Layout::Block);
//! ```

pub mod enums;
pub mod key;
pub mod tag_name;
pub mod value;

pub use enums::{
	Attribute, AttributeEnum, ContentEditable, Direction, Draggable, EnumValue, Event, Role,
	Translate,
};
pub use key::AttrKey;
pub use tag_name::{
	BlockTag, InlineTag, Layout, ListTag, RootTag, TableTag, TagCategory, TagName, UnknownTagName,
	VoidTag,
};
pub use value::{AttrValue, LazyValue};
