//! `class` token lists.

use crate::normalize::{AttrEntry, BoolStyle, normalize, resolve};
use indexmap::IndexSet;
use vellum_exception::{Result, value_type_invalid};
use vellum_types::AttrValue;

const CLASS: &str = "class";

/// Whether a write combines with or replaces the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeMode {
	/// Combine with the existing value.
	#[default]
	Merge,
	/// Replace the existing value.
	Override,
}

/// A `class` value after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClassInput {
	Remove,
	Flag,
	Tokens(Vec<String>),
}

/// Normalizes a raw `class` value.
///
/// Strings are split on whitespace. Lists contribute each scalar item. Maps of
/// `{token: condition}` contribute the tokens whose condition is truthy.
pub(crate) fn class_input(value: AttrValue) -> Result<ClassInput> {
	match resolve(value) {
		AttrValue::List(items) => {
			let mut tokens = Vec::new();
			for item in items {
				match normalize(CLASS, item, BoolStyle::Flag)? {
					Some(AttrEntry::Text(text)) => tokens.extend(split(&text)),
					Some(AttrEntry::Flag) => return Err(value_type_invalid(CLASS, "bool")),
					None => {}
				}
			}
			Ok(ClassInput::Tokens(tokens))
		}
		AttrValue::Map(conditions) => {
			let mut tokens = Vec::new();
			for (token, condition) in conditions {
				let enabled = match normalize(CLASS, condition, BoolStyle::Flag)? {
					Some(AttrEntry::Flag) => true,
					Some(AttrEntry::Text(text)) => !text.is_empty(),
					None => false,
				};
				if enabled {
					tokens.extend(split(&token));
				}
			}
			Ok(ClassInput::Tokens(tokens))
		}
		scalar => Ok(match normalize(CLASS, scalar, BoolStyle::Flag)? {
			None => ClassInput::Remove,
			Some(AttrEntry::Flag) => ClassInput::Flag,
			Some(AttrEntry::Text(text)) => ClassInput::Tokens(split(&text)),
		}),
	}
}

fn split(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_string).collect()
}

/// Joins `existing` and `incoming` tokens, dropping duplicates while keeping
/// the first position of each token.
pub(crate) fn merge_tokens<'a, I>(existing: Option<&'a str>, incoming: I) -> String
where
	I: IntoIterator<Item = &'a str>,
{
	let tokens: IndexSet<&str> = existing
		.into_iter()
		.flat_map(str::split_whitespace)
		.chain(incoming)
		.collect();
	tokens.into_iter().collect::<Vec<_>>().join(" ")
}

/// Removes `tokens` from `existing`.
pub(crate) fn without_tokens(existing: &str, tokens: &[String]) -> String {
	existing
		.split_whitespace()
		.filter(|token| !tokens.iter().any(|t| t == token))
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn tokens(items: &[&str]) -> ClassInput {
		ClassInput::Tokens(items.iter().map(|s| s.to_string()).collect())
	}

	#[rstest]
	#[case(AttrValue::from("btn  btn-primary"), tokens(&["btn", "btn-primary"]))]
	#[case(AttrValue::from(vec!["a b", "c"]), tokens(&["a", "b", "c"]))]
	#[case(AttrValue::list([AttrValue::from("a"), AttrValue::Null, AttrValue::from(false)]), tokens(&["a"]))]
	#[case(AttrValue::map([("active", true), ("disabled", false)]), tokens(&["active"]))]
	#[case(AttrValue::Null, ClassInput::Remove)]
	#[case(AttrValue::from(false), ClassInput::Remove)]
	#[case(AttrValue::from(true), ClassInput::Flag)]
	#[case(AttrValue::lazy(|| "late"), tokens(&["late"]))]
	fn test_class_input(#[case] value: AttrValue, #[case] expected: ClassInput) {
		assert_eq!(class_input(value).unwrap(), expected);
	}

	#[rstest]
	fn test_class_list_rejects_nested_list() {
		let err = class_input(AttrValue::list([AttrValue::list(["a"])])).unwrap_err();
		assert!(err.to_string().contains("class"));
		assert!(err.to_string().contains("list"));
	}

	#[rstest]
	#[case(Some("a b"), &["b", "c"], "a b c")]
	#[case(None, &["x", "x"], "x")]
	#[case(Some(""), &["y"], "y")]
	fn test_merge_tokens(#[case] existing: Option<&str>, #[case] incoming: &[&str], #[case] expected: &str) {
		assert_eq!(merge_tokens(existing, incoming.iter().copied()), expected);
	}

	#[rstest]
	fn test_without_tokens() {
		let remaining = without_tokens("a b c", &["b".to_string(), "z".to_string()]);
		assert_eq!(remaining, "a c");
	}
}
