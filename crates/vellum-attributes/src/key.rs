//! Attribute name validation.

use vellum_exception::{Error, Result, key_invalid};

/// Characters that may not appear in an attribute name.
const FORBIDDEN: &[char] = &['"', '\'', '>', '/', '=', '<'];

/// Validates an attribute name and returns it unchanged.
///
/// # Example
///
/// ```
/// use vellum_attributes::validate_key;
///
/// assert!(validate_key("data-id").is_ok());
/// assert!(validate_key("").is_err());
/// assert!(validate_key("on click").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<&str> {
	if key.trim().is_empty() {
		return Err(key_invalid(key, "attribute name is empty"));
	}
	if key.chars().any(|c| c.is_ascii_whitespace()) {
		return Err(key_invalid(key, "attribute name contains whitespace"));
	}
	if key.chars().any(char::is_control) {
		return Err(key_invalid(key, "attribute name contains a control character"));
	}
	if key.contains(FORBIDDEN) {
		return Err(key_invalid(key, "attribute name contains a forbidden character"));
	}
	Ok(key)
}

/// Validates an event handler key: it must be `on` followed by at least one
/// character and otherwise be a valid attribute name.
pub fn validate_event_key(key: &str) -> Result<&str> {
	match key.strip_prefix("on") {
		Some(event) if !event.is_empty() => validate_key(key),
		_ => Err(Error::EventKeyPrefixMissing {
			key: key.to_string(),
		}),
	}
}
