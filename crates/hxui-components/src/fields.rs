//! Named-field construction.
//!
//! Components can be built from a JSON object of named fields, the same
//! names their typed constructors use. [`FieldReader`] walks that object,
//! records every rejected field instead of stopping at the first, and
//! reports fields nobody asked for as unknown.

use crate::document::KIND_FIELD;
use crate::error::{FieldError, FieldErrorKind, ValidationErrors};
use crate::interaction::Interaction;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Named fields of one component.
pub type Fields = Map<String, Value>;

/// JSON type name used in error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

pub(crate) struct FieldReader<'a> {
	component: &'static str,
	fields: &'a Fields,
	seen: HashSet<&'a str>,
	errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
	/// The document discriminator is never reported as unknown.
	pub(crate) fn new(component: &'static str, fields: &'a Fields) -> Self {
		Self {
			component,
			fields,
			seen: HashSet::from([KIND_FIELD]),
			errors: Vec::new(),
		}
	}

	/// Marks `name` as consumed and returns its value, treating `null` as
	/// absent.
	pub(crate) fn value(&mut self, name: &str) -> Option<&'a Value> {
		let (key, value) = self.fields.get_key_value(name)?;
		self.seen.insert(key.as_str());
		(!value.is_null()).then_some(value)
	}

	pub(crate) fn error(&mut self, error: FieldError) {
		self.errors.push(error);
	}

	pub(crate) fn required_str(&mut self, name: &str) -> Option<String> {
		match self.value(name) {
			Some(_) => self.optional_str(name),
			None => {
				self.error(FieldError::new(name, FieldErrorKind::Missing));
				None
			}
		}
	}

	pub(crate) fn optional_str(&mut self, name: &str) -> Option<String> {
		match self.value(name)? {
			Value::String(s) => Some(s.clone()),
			other => {
				let found = type_name(other);
				self.error(FieldError::new(
					name,
					FieldErrorKind::WrongType {
						expected: "string",
						found,
					},
				));
				None
			}
		}
	}

	pub(crate) fn str_or(&mut self, name: &str, default: &str) -> String {
		self.optional_str(name)
			.unwrap_or_else(|| default.to_string())
	}

	/// Reads a string restricted to `allowed`.
	pub(crate) fn choice(
		&mut self,
		name: &str,
		allowed: &'static [&'static str],
	) -> Option<String> {
		let value = self.optional_str(name)?;
		if allowed.contains(&value.as_str()) {
			Some(value)
		} else {
			self.error(FieldError::new(
				name,
				FieldErrorKind::NotAllowed { value, allowed },
			));
			None
		}
	}

	/// Reads every interaction field that is present.
	pub(crate) fn interaction(&mut self) -> Interaction {
		let mut interaction = Interaction::default();
		for field in Interaction::FIELD_NAMES {
			if let Some(value) = self.optional_str(field) {
				interaction.set(field, Some(value));
			}
		}
		interaction
	}

	/// Merges a nested component's errors under `path`.
	pub(crate) fn nested(&mut self, path: &str, errors: ValidationErrors) {
		self.errors
			.extend(errors.errors.into_iter().map(|e| e.nested_under(path)));
	}

	/// Reports unconsumed fields as unknown, then yields the collected
	/// errors, if any.
	pub(crate) fn finish(mut self) -> Result<(), ValidationErrors> {
		for key in self.fields.keys() {
			if !self.seen.contains(key.as_str()) {
				self.errors
					.push(FieldError::new(key.as_str(), FieldErrorKind::Unknown));
			}
		}
		if self.errors.is_empty() {
			return Ok(());
		}
		tracing::debug!(
			component = self.component,
			errors = self.errors.len(),
			"rejected component fields"
		);
		Err(ValidationErrors::new(self.component, self.errors))
	}
}
