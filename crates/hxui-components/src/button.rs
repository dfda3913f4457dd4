//! Button component

use crate::attributes::Attributes;
use crate::component::Component;
use crate::error::{Result, ValidationErrors};
use crate::fields::{FieldReader, Fields};
use crate::html::{Element, Markup};
use crate::interaction::{HxBuilder, Interaction};
use crate::presets::{PresetTable, resolve};
use std::fmt;
use std::str::FromStr;

/// Classes every button carries, ahead of its size and variant classes.
pub const BASE_CLASSES: &str =
	"box-border font-medium leading-5 rounded-lg shadow-sm focus:outline-none transition-colors";

/// Size presets
pub const SIZE_PRESETS: &PresetTable = &[
	("xs", "text-xs px-2 py-1"),
	("sm", "text-xs px-3 py-1.5"),
	("md", "text-sm px-4 py-2.5"),
	("lg", "text-base px-5 py-3"),
	("xl", "text-lg px-6 py-4"),
];

/// Variant presets
pub const VARIANT_PRESETS: &PresetTable = &[
	(
		"default",
		"text-white bg-blue-600 border border-transparent hover:bg-blue-700 focus:ring-4 focus:ring-blue-300",
	),
	(
		"secondary",
		"text-gray-700 bg-gray-200 border border-gray-300 hover:bg-gray-300 hover:text-gray-900 focus:ring-4 focus:ring-gray-100",
	),
	(
		"tertiary",
		"text-gray-600 bg-gray-100 border border-gray-200 hover:bg-gray-200 hover:text-gray-900 focus:ring-4 focus:ring-gray-100",
	),
	(
		"success",
		"text-white bg-green-600 border border-transparent hover:bg-green-700 focus:ring-4 focus:ring-green-300",
	),
	(
		"danger",
		"text-white bg-red-600 border border-transparent hover:bg-red-700 focus:ring-4 focus:ring-red-300",
	),
	(
		"warning",
		"text-white bg-yellow-500 border border-transparent hover:bg-yellow-600 focus:ring-4 focus:ring-yellow-300",
	),
	(
		"dark",
		"text-white bg-gray-800 border border-transparent hover:bg-gray-900 focus:ring-4 focus:ring-gray-500",
	),
	(
		"ghost",
		"text-gray-700 bg-transparent border border-transparent hover:bg-gray-100 focus:ring-4 focus:ring-gray-200",
	),
];

/// Size preset keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
	/// Extra small
	Xs,
	/// Small
	Sm,
	/// Medium (default)
	#[default]
	Md,
	/// Large
	Lg,
	/// Extra large
	Xl,
}

impl ButtonSize {
	/// Convert size to its preset key
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Xs => "xs",
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
			Self::Xl => "xl",
		}
	}
}

impl From<ButtonSize> for String {
	fn from(size: ButtonSize) -> Self {
		size.as_str().to_string()
	}
}

/// Variant preset keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
	/// Blue call to action (default)
	#[default]
	Default,
	Secondary,
	Tertiary,
	Success,
	Danger,
	Warning,
	Dark,
	Ghost,
}

impl ButtonVariant {
	/// Convert variant to its preset key
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Secondary => "secondary",
			Self::Tertiary => "tertiary",
			Self::Success => "success",
			Self::Danger => "danger",
			Self::Warning => "warning",
			Self::Dark => "dark",
			Self::Ghost => "ghost",
		}
	}
}

impl From<ButtonVariant> for String {
	fn from(variant: ButtonVariant) -> Self {
		variant.as_str().to_string()
	}
}

/// The HTML `type` of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonType {
	#[default]
	Button,
	Submit,
	Reset,
}

impl ButtonType {
	pub const ALLOWED: &'static [&'static str] = &["button", "submit", "reset"];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Button => "button",
			Self::Submit => "submit",
			Self::Reset => "reset",
		}
	}
}

impl FromStr for ButtonType {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"button" => Ok(Self::Button),
			"submit" => Ok(Self::Submit),
			"reset" => Ok(Self::Reset),
			other => Err(format!("unknown button type: {other}")),
		}
	}
}

impl fmt::Display for ButtonType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Button component
///
/// `size` and `variant` take a preset key or any raw class string:
///
/// ```
/// use hxui_components::prelude::*;
///
/// let html = Button::new("Delete")
///     .variant(ButtonVariant::Danger)
///     .hx_delete("/items/7")
///     .hx_confirm("Delete item 7?")
///     .render()
///     .unwrap();
/// assert!(html.as_str().starts_with(r#"<button hx-delete="/items/7" hx-confirm="Delete item 7?" class="#));
///
/// let custom = Button::new("Gradient").variant("bg-gradient-to-r from-purple-500 to-pink-500");
/// assert!(custom.classes().ends_with("from-purple-500 to-pink-500"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Button {
	label: String,
	size: String,
	variant: String,
	button_type: ButtonType,
	hx: Interaction,
}

impl Button {
	/// Creates a medium, default-variant `type="button"` button.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			size: ButtonSize::default().into(),
			variant: ButtonVariant::default().into(),
			button_type: ButtonType::default(),
			hx: Interaction::default(),
		}
	}

	/// Builds a button from named fields: `label` (required), `size`,
	/// `variant`, `type`, and any interaction field.
	pub fn from_fields(fields: &Fields) -> std::result::Result<Self, ValidationErrors> {
		let mut reader = FieldReader::new("Button", fields);
		let label = reader.required_str("label");
		let size = reader.str_or("size", ButtonSize::default().as_str());
		let variant = reader.str_or("variant", ButtonVariant::default().as_str());
		let button_type = reader
			.choice("type", ButtonType::ALLOWED)
			.and_then(|t| t.parse().ok())
			.unwrap_or_default();
		let hx = reader.interaction();
		reader.finish()?;

		Ok(Self {
			label: label.unwrap_or_default(),
			size,
			variant,
			button_type,
			hx,
		})
	}

	/// Sets the size: a [`ButtonSize`], a preset key, or raw classes.
	pub fn size(mut self, size: impl Into<String>) -> Self {
		self.size = size.into();
		self
	}

	/// Sets the variant: a [`ButtonVariant`], a preset key, or raw classes.
	pub fn variant(mut self, variant: impl Into<String>) -> Self {
		self.variant = variant.into();
		self
	}

	pub fn button_type(mut self, button_type: ButtonType) -> Self {
		self.button_type = button_type;
		self
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn size_key(&self) -> &str {
		&self.size
	}

	pub fn variant_key(&self) -> &str {
		&self.variant
	}

	pub fn kind(&self) -> ButtonType {
		self.button_type
	}

	/// Base, size and variant classes, space-joined in that order.
	pub fn classes(&self) -> String {
		format!(
			"{BASE_CLASSES} {} {}",
			resolve(&self.size, SIZE_PRESETS),
			resolve(&self.variant, VARIANT_PRESETS)
		)
	}
}

impl HxBuilder for Button {
	fn interaction_mut(&mut self) -> &mut Interaction {
		&mut self.hx
	}
}

impl Component for Button {
	fn name(&self) -> &'static str {
		"Button"
	}

	fn interaction(&self) -> &Interaction {
		&self.hx
	}

	fn custom_attributes(&self) -> Attributes {
		Attributes::new()
			.with("class", self.classes())
			.with("type", self.button_type.as_str())
	}

	fn render(&self) -> Result<Markup> {
		tracing::trace!(component = "Button", "rendering");
		Element::new("button")
			.attrs(self.combined_attributes())
			.text(self.label.as_str())
			.render()
	}
}
