//! # Vellum Exception
//!
//! Error taxonomy shared by the attribute normalizer and the tag lifecycle
//! engine.
//!
//! Every error is raised synchronously at the offending call and is never
//! recovered internally. Validation errors carry the attribute or tag name and
//! the offending value (or its type name) so the message is actionable on its
//! own.
//!
//! ## Example
//!
//! ```
//! use vellum_exception::{Error, ErrorKind};
//!
//! let err = Error::EventKeyPrefixMissing {
//! 	key: "click".to_string(),
//! };
//! assert_eq!(err.kind(), ErrorKind::EventKeyPrefixMissing);
//! assert!(err.to_string().contains("click"));
//! ```

use thiserror::Error;

/// Errors raised while building or rendering tags
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// Attribute key is empty or not a valid attribute name
	#[error("Invalid attribute key '{key}': {reason}")]
	KeyInvalid {
		/// The key as supplied by the caller
		key: String,
		/// Why the key was rejected
		reason: &'static str,
	},

	/// Attribute value has a type the attribute cannot hold
	#[error("Invalid value for attribute '{attribute}': {found} is not a scalar, stringable, enum or lazy value")]
	ValueTypeInvalid {
		/// Attribute being written
		attribute: String,
		/// Name of the offending value type
		found: &'static str,
	},

	/// Event handler key does not start with `on`
	#[error("Event attribute '{key}' must start with 'on'")]
	EventKeyPrefixMissing {
		/// The rejected event key
		key: String,
	},

	/// Value outside the allowed set of a constrained attribute
	#[error("Value '{value}' is not allowed for attribute '{attribute}'; allowed: {}", .allowed.join(", "))]
	EnumValueNotAllowed {
		/// Constrained attribute name
		attribute: String,
		/// Rejected value
		value: String,
		/// Values the attribute accepts
		allowed: Vec<String>,
	},

	/// `end()` called while the current context has no open tag
	#[error("No open tag to end for {tag_type}: end() called without a matching begin()")]
	NoMatchingBegin {
		/// Tag type `end()` was invoked against
		tag_type: &'static str,
	},

	/// `end()` called against a different tag type than the innermost open tag
	#[error("Tag type mismatch: end() called for {expected} but the innermost open tag is {found}")]
	TagTypeMismatch {
		/// Tag type `end()` was invoked against
		expected: &'static str,
		/// Tag type found on top of the stack
		found: &'static str,
	},

	/// Factory asked to construct a tag type that has no tag name
	#[error("Cannot instantiate abstract tag type {tag_type}")]
	AbstractInstantiation {
		/// The abstract tag type
		tag_type: &'static str,
	},

	/// `begin()` called on a void element, which has no closing tag
	#[error("Void element <{tag}> cannot be opened with begin()")]
	VoidElementBlock {
		/// Tag name of the void element
		tag: &'static str,
	},
}

/// Fieldless discriminant of [`Error`], convenient for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	KeyInvalid,
	ValueTypeInvalid,
	EventKeyPrefixMissing,
	EnumValueNotAllowed,
	NoMatchingBegin,
	TagTypeMismatch,
	AbstractInstantiation,
	VoidElementBlock,
}

impl Error {
	/// Returns the kind of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::KeyInvalid { .. } => ErrorKind::KeyInvalid,
			Error::ValueTypeInvalid { .. } => ErrorKind::ValueTypeInvalid,
			Error::EventKeyPrefixMissing { .. } => ErrorKind::EventKeyPrefixMissing,
			Error::EnumValueNotAllowed { .. } => ErrorKind::EnumValueNotAllowed,
			Error::NoMatchingBegin { .. } => ErrorKind::NoMatchingBegin,
			Error::TagTypeMismatch { .. } => ErrorKind::TagTypeMismatch,
			Error::AbstractInstantiation { .. } => ErrorKind::AbstractInstantiation,
			Error::VoidElementBlock { .. } => ErrorKind::VoidElementBlock,
		}
	}

	/// Returns `true` for lifecycle stack-discipline violations.
	///
	/// These always indicate a bug in the calling code.
	pub fn is_stack_violation(&self) -> bool {
		matches!(
			self,
			Error::NoMatchingBegin { .. } | Error::TagTypeMismatch { .. }
		)
	}
}

/// Builds a [`Error::KeyInvalid`].
pub fn key_invalid(key: impl Into<String>, reason: &'static str) -> Error {
	Error::KeyInvalid {
		key: key.into(),
		reason,
	}
}

/// Builds a [`Error::ValueTypeInvalid`].
pub fn value_type_invalid(attribute: impl Into<String>, found: &'static str) -> Error {
	Error::ValueTypeInvalid {
		attribute: attribute.into(),
		found,
	}
}

/// Result type for tag operations
pub type Result<T> = std::result::Result<T, Error>;
