//! Component documents.
//!
//! A component can be declared as data: an object with a `component`
//! discriminator plus that component's named fields. Cards nest further
//! descriptors in their `content`.
//!
//! ```toml
//! component = "card"
//! title = "Interactive Card"
//! hx_get = "/card/refresh"
//! hx_trigger = "click"
//!
//! [[content]]
//! component = "text"
//! value = "Click this card to refresh."
//! ```

use crate::button::Button;
use crate::card::Card;
use crate::component::Component;
use crate::error::{FieldError, FieldErrorKind, Result, ValidationErrors};
use crate::fields::{Fields, type_name};
use crate::text::Text;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Key holding a descriptor's component kind.
pub const KIND_FIELD: &str = "component";

/// The component kinds a descriptor may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
	Button,
	Text,
	Card,
}

impl ComponentKind {
	pub const ALLOWED: &'static [&'static str] = &["button", "text", "card"];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Button => "button",
			Self::Text => "text",
			Self::Card => "card",
		}
	}

	/// Builds a component of this kind from its named fields. A
	/// `component` key among them is ignored.
	pub fn build(
		&self,
		fields: &Fields,
	) -> std::result::Result<Box<dyn Component>, ValidationErrors> {
		Ok(match self {
			Self::Button => Box::new(Button::from_fields(fields)?),
			Self::Text => Box::new(Text::from_fields(fields)?),
			Self::Card => Box::new(Card::from_fields(fields)?),
		})
	}
}

impl FromStr for ComponentKind {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"button" => Ok(Self::Button),
			"text" => Ok(Self::Text),
			"card" => Ok(Self::Card),
			other => Err(format!("unknown component: {other}")),
		}
	}
}

impl fmt::Display for ComponentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

fn kind_error(kind: FieldErrorKind) -> ValidationErrors {
	ValidationErrors::new("Component", vec![FieldError::new(KIND_FIELD, kind)])
}

/// Builds the component a descriptor object declares.
pub fn from_descriptor(
	descriptor: &Fields,
) -> std::result::Result<Box<dyn Component>, ValidationErrors> {
	let kind = match descriptor.get(KIND_FIELD) {
		None | Some(Value::Null) => return Err(kind_error(FieldErrorKind::Missing)),
		Some(Value::String(name)) => name
			.parse::<ComponentKind>()
			.map_err(|_| kind_error(FieldErrorKind::UnknownComponent { name: name.clone() }))?,
		Some(other) => {
			return Err(kind_error(FieldErrorKind::WrongType {
				expected: "string",
				found: type_name(other),
			}));
		}
	};

	kind.build(descriptor)
}

/// Builds a component from a descriptor value.
pub fn from_value(value: &Value) -> Result<Box<dyn Component>> {
	match value {
		Value::Object(descriptor) => Ok(from_descriptor(descriptor)?),
		other => Err(ValidationErrors::new(
			"Component",
			vec![FieldError::new(
				"$",
				FieldErrorKind::WrongType {
					expected: "object",
					found: type_name(other),
				},
			)],
		)
		.into()),
	}
}

/// Builds a component from a JSON document.
pub fn from_json_str(document: &str) -> Result<Box<dyn Component>> {
	let value: Value = serde_json::from_str(document)?;
	from_value(&value)
}

/// Builds a component from a TOML document.
#[cfg(feature = "toml")]
pub fn from_toml_str(document: &str) -> Result<Box<dyn Component>> {
	let table: toml::Table = toml::from_str(document)?;
	let value = serde_json::to_value(table)?;
	from_value(&value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ComponentError;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!({"component": "button", "label": "Go"}), "Button")]
	#[case(json!({"component": "text", "value": "hi"}), "Text")]
	#[case(json!({"component": "card", "title": "t", "content": "c"}), "Card")]
	fn test_from_value_dispatches(#[case] value: Value, #[case] name: &str) {
		assert_eq!(from_value(&value).unwrap().name(), name);
	}

	#[rstest]
	fn test_missing_kind() {
		let err = from_value(&json!({"label": "Go"})).unwrap_err();
		let ComponentError::Validation(errors) = err else {
			panic!("expected validation error");
		};
		assert_eq!(errors.field("component").unwrap().kind, FieldErrorKind::Missing);
	}

	#[rstest]
	fn test_unknown_kind() {
		let err = from_value(&json!({"component": "modal"})).unwrap_err();
		let ComponentError::Validation(errors) = err else {
			panic!("expected validation error");
		};
		assert_eq!(
			errors.field("component").unwrap().kind,
			FieldErrorKind::UnknownComponent {
				name: "modal".into()
			}
		);
	}

	#[rstest]
	fn test_non_object_document() {
		let err = from_value(&json!("button")).unwrap_err();
		assert!(matches!(err, ComponentError::Validation(e) if e.field("$").is_some()));
	}

	#[rstest]
	fn test_kind_is_not_an_unknown_field() {
		let component = from_value(&json!({"component": "text", "value": "v"})).unwrap();
		assert_eq!(
			component.render().unwrap().as_str(),
			r#"<p class="text-gray-600">v</p>"#
		);
	}

	#[rstest]
	fn test_from_json_str() {
		let component = from_json_str(
			r#"{"component": "button", "label": "Save", "type": "submit", "hx_post": "/save"}"#,
		)
		.unwrap();
		let html = component.render().unwrap();
		assert!(html.as_str().starts_with(r#"<button hx-post="/save" class=""#));
		assert!(html.as_str().ends_with(r#" type="submit">Save</button>"#));
	}

	#[rstest]
	fn test_from_json_str_malformed() {
		assert!(matches!(
			from_json_str("{not json"),
			Err(ComponentError::Json(_))
		));
	}

	#[cfg(feature = "toml")]
	#[rstest]
	fn test_from_toml_str() {
		let component = from_toml_str(
			r#"
component = "card"
title = "Interactive Card"
hx_get = "/card/refresh"
hx_trigger = "click"
hx_swap = "outerHTML"

[[content]]
component = "text"
value = "Click this card to refresh."
"#,
		)
		.unwrap();

		assert_eq!(component.name(), "Card");
		let html = component.render().unwrap();
		assert!(html.as_str().starts_with(
			r#"<div hx-get="/card/refresh" hx-trigger="click" hx-swap="outerHTML" class="#
		));
		assert!(
			html.as_str()
				.contains(r#"<p class="text-gray-600">Click this card to refresh.</p>"#)
		);
	}

	#[cfg(feature = "toml")]
	#[rstest]
	fn test_from_toml_str_malformed() {
		assert!(matches!(
			from_toml_str("component = "),
			Err(ComponentError::Toml(_))
		));
	}
}
