//! # Vellum Core
//!
//! Fundamental building blocks shared by the Vellum crates: the error
//! taxonomy and the attribute value and tag name types.

#[cfg(feature = "exception")]
pub use vellum_exception as exception;

#[cfg(feature = "types")]
pub use vellum_types as types;

// Common re-exports
#[cfg(feature = "exception")]
pub use vellum_exception::{Error, ErrorKind, Result};

#[cfg(feature = "types")]
pub use vellum_types::{AttrKey, AttrValue, AttributeEnum, Layout, TagName};
