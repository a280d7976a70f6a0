//! Raw attribute values.
//!
//! [`AttrValue`] is the union a caller may hand to any attribute setter. The
//! normalizer in `vellum-attributes` reduces it to either "omit", a bare flag,
//! or a string; nothing in this module performs that reduction.

use crate::enums::EnumValue;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A value that is computed when the attribute is written.
///
/// The closure is invoked once per setter call. The result is never memoized
/// across calls, so the same `LazyValue` set twice runs twice.
#[derive(Clone)]
pub struct LazyValue(Arc<dyn Fn() -> AttrValue + Send + Sync>);

impl LazyValue {
	/// Wraps a zero-argument closure.
	pub fn new<F, V>(f: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: Into<AttrValue>,
	{
		Self(Arc::new(move || f().into()))
	}

	/// Invokes the closure.
	pub fn evaluate(&self) -> AttrValue {
		(self.0)()
	}
}

impl fmt::Debug for LazyValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("LazyValue(<closure>)")
	}
}

/// Raw attribute value before normalization.
#[derive(Clone)]
pub enum AttrValue {
	/// Removes the attribute.
	Null,
	/// Bare flag (`true`), removal (`false`), or `"true"`/`"false"` text,
	/// depending on the boolean style requested by the setter.
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
	/// Enumerated constant, resolved to its string payload.
	Enum(EnumValue),
	/// Any value with a string conversion.
	Display(Arc<dyn fmt::Display + Send + Sync>),
	/// Closure evaluated once at normalization time.
	Lazy(LazyValue),
	/// Token list, only meaningful for composite attributes such as `class`.
	List(Vec<AttrValue>),
	/// Associative structure, only meaningful for `class`, `style`, `data`
	/// and `aria`.
	Map(IndexMap<String, AttrValue>),
}

impl AttrValue {
	/// Creates a lazily evaluated value.
	///
	/// # Example
	///
	/// ```
	/// use vellum_types::AttrValue;
	///
	/// let value = AttrValue::lazy(|| "computed");
	/// assert_eq!(value.type_name(), "lazy");
	/// ```
	pub fn lazy<F, V>(f: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: Into<AttrValue>,
	{
		AttrValue::Lazy(LazyValue::new(f))
	}

	/// Wraps a stringable object.
	pub fn display<D>(value: D) -> Self
	where
		D: fmt::Display + Send + Sync + 'static,
	{
		AttrValue::Display(Arc::new(value))
	}

	/// Builds an associative value from key/value pairs, keeping their order.
	///
	/// # Example
	///
	/// ```
	/// use vellum_types::AttrValue;
	///
	/// let style = AttrValue::map([("color", "red"), ("width", "10px")]);
	/// assert_eq!(style.type_name(), "map");
	/// ```
	pub fn map<K, V, I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttrValue>,
	{
		AttrValue::Map(
			entries
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}

	/// Builds a list value.
	pub fn list<V, I>(items: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<AttrValue>,
	{
		AttrValue::List(items.into_iter().map(Into::into).collect())
	}

	/// Name of the variant, used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			AttrValue::Null => "null",
			AttrValue::Bool(_) => "bool",
			AttrValue::Int(_) => "int",
			AttrValue::Float(_) => "float",
			AttrValue::Str(_) => "string",
			AttrValue::Enum(_) => "enum",
			AttrValue::Display(_) => "stringable",
			AttrValue::Lazy(_) => "lazy",
			AttrValue::List(_) => "list",
			AttrValue::Map(_) => "map",
		}
	}

	/// Returns `true` for `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, AttrValue::Null)
	}

	/// Returns the string form of a scalar value without evaluating lazies.
	///
	/// `Null`, `Bool`, `Lazy`, `List` and `Map` have no scalar string form.
	pub fn scalar_str(&self) -> Option<Cow<'_, str>> {
		match self {
			AttrValue::Int(i) => Some(Cow::Owned(i.to_string())),
			AttrValue::Float(f) => Some(Cow::Owned(f.to_string())),
			AttrValue::Str(s) => Some(Cow::Borrowed(s.as_str())),
			AttrValue::Enum(e) => Some(Cow::Borrowed(e.value())),
			AttrValue::Display(d) => Some(Cow::Owned(d.to_string())),
			AttrValue::Null
			| AttrValue::Bool(_)
			| AttrValue::Lazy(_)
			| AttrValue::List(_)
			| AttrValue::Map(_) => None,
		}
	}
}

impl fmt::Debug for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrValue::Null => f.write_str("Null"),
			AttrValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
			AttrValue::Int(i) => f.debug_tuple("Int").field(i).finish(),
			AttrValue::Float(v) => f.debug_tuple("Float").field(v).finish(),
			AttrValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
			AttrValue::Enum(e) => f.debug_tuple("Enum").field(e).finish(),
			AttrValue::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
			AttrValue::Lazy(l) => l.fmt(f),
			AttrValue::List(items) => f.debug_tuple("List").field(items).finish(),
			AttrValue::Map(map) => f.debug_tuple("Map").field(map).finish(),
		}
	}
}

impl Default for AttrValue {
	fn default() -> Self {
		AttrValue::Null
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for AttrValue {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(v) => AttrValue::Int(v),
			Err(_) => AttrValue::Str(value.to_string()),
		}
	}
}

impl From<usize> for AttrValue {
	fn from(value: usize) -> Self {
		match i64::try_from(value) {
			Ok(v) => AttrValue::Int(v),
			Err(_) => AttrValue::Str(value.to_string()),
		}
	}
}

impl From<f32> for AttrValue {
	fn from(value: f32) -> Self {
		AttrValue::Float(f64::from(value))
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		AttrValue::Float(value)
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Str(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Str(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Str(value.clone())
	}
}

impl From<Cow<'_, str>> for AttrValue {
	fn from(value: Cow<'_, str>) -> Self {
		AttrValue::Str(value.into_owned())
	}
}

impl From<EnumValue> for AttrValue {
	fn from(value: EnumValue) -> Self {
		AttrValue::Enum(value)
	}
}

impl From<LazyValue> for AttrValue {
	fn from(value: LazyValue) -> Self {
		AttrValue::Lazy(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Null, Into::into)
	}
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
	fn from(items: Vec<T>) -> Self {
		AttrValue::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<AttrValue>, const N: usize> From<[T; N]> for AttrValue {
	fn from(items: [T; N]) -> Self {
		AttrValue::List(items.into_iter().map(Into::into).collect())
	}
}

impl From<IndexMap<String, AttrValue>> for AttrValue {
	fn from(map: IndexMap<String, AttrValue>) -> Self {
		AttrValue::Map(map)
	}
}

impl From<serde_json::Value> for AttrValue {
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value;
		match value {
			Value::Null => AttrValue::Null,
			Value::Bool(b) => AttrValue::Bool(b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => AttrValue::Int(i),
				None => n
					.as_f64()
					.map_or_else(|| AttrValue::Str(n.to_string()), AttrValue::Float),
			},
			Value::String(s) => AttrValue::Str(s),
			Value::Array(items) => AttrValue::List(items.into_iter().map(Into::into).collect()),
			Value::Object(map) => {
				AttrValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	#[case(AttrValue::from(true), "bool")]
	#[case(AttrValue::from(3_i32), "int")]
	#[case(AttrValue::from(1.5_f64), "float")]
	#[case(AttrValue::from("x"), "string")]
	#[case(AttrValue::from(None::<&str>), "null")]
	#[case(AttrValue::from(vec!["a", "b"]), "list")]
	#[case(AttrValue::map([("a", 1)]), "map")]
	#[case(AttrValue::display(42), "stringable")]
	#[case(AttrValue::lazy(|| 1), "lazy")]
	fn test_type_name(#[case] value: AttrValue, #[case] expected: &str) {
		assert_eq!(value.type_name(), expected);
	}

	#[rstest]
	fn test_lazy_value_evaluates_on_every_call() {
		// Arrange
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();
		let lazy = LazyValue::new(move || {
			counter.fetch_add(1, Ordering::SeqCst);
			"value"
		});

		// Act
		lazy.evaluate();
		lazy.evaluate();

		// Assert
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[rstest]
	fn test_scalar_str() {
		assert_eq!(AttrValue::from(7).scalar_str().as_deref(), Some("7"));
		assert_eq!(AttrValue::from(1.0).scalar_str().as_deref(), Some("1"));
		assert_eq!(AttrValue::display("shown").scalar_str().as_deref(), Some("shown"));
		assert!(AttrValue::from(true).scalar_str().is_none());
		assert!(AttrValue::Null.scalar_str().is_none());
	}

	#[rstest]
	fn test_from_json_keeps_object_order() {
		// Arrange
		let json = serde_json::json!({ "zeta": 1, "alpha": [true, null], "mid": "x" });

		// Act
		let value = AttrValue::from(json);

		// Assert
		let AttrValue::Map(map) = value else {
			panic!("expected map");
		};
		let keys: Vec<&str> = map.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
		assert!(matches!(map["alpha"], AttrValue::List(ref items) if items.len() == 2));
	}

	#[rstest]
	fn test_large_unsigned_falls_back_to_string() {
		let value = AttrValue::from(u64::MAX);
		assert_eq!(value.scalar_str().as_deref(), Some("18446744073709551615"));
	}
}
