//! Text component

use crate::attributes::Attributes;
use crate::component::Component;
use crate::error::{Result, ValidationErrors};
use crate::fields::{FieldReader, Fields};
use crate::html::{Element, Markup};
use crate::interaction::{HxBuilder, Interaction};

/// Classes a [`Text`] carries unless told otherwise.
pub const DEFAULT_TEXT_CLASSES: &str = "text-gray-600";

/// A paragraph of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
	value: String,
	classes: String,
	hx: Interaction,
}

impl Text {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			classes: DEFAULT_TEXT_CLASSES.to_string(),
			hx: Interaction::default(),
		}
	}

	/// Builds a text from named fields: `value` (required), `classes`, and
	/// any interaction field.
	pub fn from_fields(fields: &Fields) -> std::result::Result<Self, ValidationErrors> {
		let mut reader = FieldReader::new("Text", fields);
		let value = reader.required_str("value");
		let classes = reader.str_or("classes", DEFAULT_TEXT_CLASSES);
		let hx = reader.interaction();
		reader.finish()?;

		Ok(Self {
			value: value.unwrap_or_default(),
			classes,
			hx,
		})
	}

	pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
		self.classes = classes.into();
		self
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn classes(&self) -> &str {
		&self.classes
	}
}

impl HxBuilder for Text {
	fn interaction_mut(&mut self) -> &mut Interaction {
		&mut self.hx
	}
}

impl Component for Text {
	fn name(&self) -> &'static str {
		"Text"
	}

	fn interaction(&self) -> &Interaction {
		&self.hx
	}

	fn custom_attributes(&self) -> Attributes {
		Attributes::new().with("class", self.classes())
	}

	fn render(&self) -> Result<Markup> {
		tracing::trace!(component = "Text", "rendering");
		Element::new("p")
			.attrs(self.combined_attributes())
			.text(self.value.as_str())
			.render()
	}
}
