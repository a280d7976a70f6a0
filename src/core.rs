//! Error taxonomy and value types.
//!
//! # Examples
//!
//! ```rust
//! use vellum::core::{AttrValue, ErrorKind};
//!
//! assert_eq!(AttrValue::from(Some(3)).type_name(), "int");
//! assert_ne!(ErrorKind::KeyInvalid, ErrorKind::ValueTypeInvalid);
//! ```

pub use vellum_core::*;
