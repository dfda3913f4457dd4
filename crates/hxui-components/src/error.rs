//! Error types for hxui-components

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error type for component operations
#[derive(Debug, Error)]
pub enum ComponentError {
	/// Named-field construction rejected one or more fields
	#[error(transparent)]
	Validation(#[from] ValidationErrors),

	/// Card content held a value that is not text, a component, or a
	/// sequence of components
	#[error("Composition error: {0}")]
	Composition(String),

	/// Invalid HTML attribute
	#[error("Invalid HTML attribute: {0}")]
	InvalidAttribute(String),

	/// Invalid HTML tag name
	#[error("Invalid HTML tag: {0:?}")]
	InvalidTag(String),

	/// Malformed JSON component document
	#[error("Invalid JSON component document: {0}")]
	Json(#[from] serde_json::Error),

	/// Malformed TOML component document
	#[cfg(feature = "toml")]
	#[error("Invalid TOML component document: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;

/// What is wrong with a single named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldErrorKind {
	/// A required field was not supplied
	Missing,
	/// The value has the wrong JSON type
	WrongType {
		expected: &'static str,
		found: &'static str,
	},
	/// The value is outside a fixed set of choices
	NotAllowed {
		value: String,
		allowed: &'static [&'static str],
	},
	/// The component has no field with this name
	Unknown,
	/// A descriptor named a component kind that does not exist
	UnknownComponent { name: String },
}

/// A rejected field, addressed by name (or by path for nested content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
	pub field: String,
	#[serde(flatten)]
	pub kind: FieldErrorKind,
}

impl FieldError {
	pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
		Self {
			field: field.into(),
			kind,
		}
	}

	/// Re-addresses the error below a parent path, e.g. `label` under
	/// `content[1]` becomes `content[1].label`.
	pub(crate) fn nested_under(mut self, parent: &str) -> Self {
		self.field = format!("{parent}.{}", self.field);
		self
	}
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.kind {
			FieldErrorKind::Missing => write!(f, "{}: field required", self.field),
			FieldErrorKind::WrongType { expected, found } => {
				write!(f, "{}: expected {expected}, found {found}", self.field)
			}
			FieldErrorKind::NotAllowed { value, allowed } => write!(
				f,
				"{}: '{value}' is not one of {}",
				self.field,
				allowed.join(", ")
			),
			FieldErrorKind::Unknown => write!(f, "{}: unknown field", self.field),
			FieldErrorKind::UnknownComponent { name } => {
				write!(f, "{}: unknown component '{name}'", self.field)
			}
		}
	}
}

/// Every field a component constructor rejected, in the order they were
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
	pub component: &'static str,
	pub errors: Vec<FieldError>,
}

impl ValidationErrors {
	pub fn new(component: &'static str, errors: Vec<FieldError>) -> Self {
		Self { component, errors }
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	/// Returns the error reported for `field`, if any.
	pub fn field(&self, field: &str) -> Option<&FieldError> {
		self.errors.iter().find(|e| e.field == field)
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} validation error(s) for {}",
			self.errors.len(),
			self.component
		)?;
		for error in &self.errors {
			write!(f, "\n  {error}")?;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationErrors {}
