use crate::enums::{Attribute, Event};
use std::borrow::Cow;
use std::fmt;

/// An attribute key as supplied by the caller.
///
/// Keys are accepted from plain strings or from the [`Attribute`] and
/// [`Event`] catalogs. Syntax validation happens when the key is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttrKey(Cow<'static, str>);

impl AttrKey {
	pub const fn from_static(key: &'static str) -> Self {
		Self(Cow::Borrowed(key))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0.into_owned()
	}
}

impl fmt::Display for AttrKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for AttrKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for AttrKey {
	fn from(key: &str) -> Self {
		Self(Cow::Owned(key.to_string()))
	}
}

impl From<String> for AttrKey {
	fn from(key: String) -> Self {
		Self(Cow::Owned(key))
	}
}

impl From<&String> for AttrKey {
	fn from(key: &String) -> Self {
		Self(Cow::Owned(key.clone()))
	}
}

impl From<Attribute> for AttrKey {
	fn from(key: Attribute) -> Self {
		Self::from_static(key.as_str())
	}
}

impl From<Event> for AttrKey {
	fn from(key: Event) -> Self {
		Self::from_static(key.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(AttrKey::from("data-id"), "data-id")]
	#[case(AttrKey::from(String::from("title")), "title")]
	#[case(AttrKey::from(Attribute::Tabindex), "tabindex")]
	#[case(AttrKey::from(Event::Click), "onclick")]
	fn test_key_sources(#[case] key: AttrKey, #[case] expected: &str) {
		assert_eq!(key.as_str(), expected);
	}
}
