//! Card component
//!
//! A card owns its content: plain text, one nested component, or an
//! ordered list of components. Nested components are rendered first and
//! embedded as trusted [`Markup`], so their output is never escaped twice.

use crate::attributes::Attributes;
use crate::button::Button;
use crate::component::Component;
use crate::document;
use crate::error::{ComponentError, FieldError, FieldErrorKind, Result, ValidationErrors};
use crate::fields::{FieldReader, Fields, type_name};
use crate::html::{Element, Markup};
use crate::interaction::{HxBuilder, Interaction};
use crate::text::Text;
use serde_json::Value;

/// Default classes for the title heading.
pub const DEFAULT_TITLE_CLASSES: &str =
	"mb-3 text-2xl font-semibold tracking-tight text-gray-900 leading-8";

/// Default classes for text content.
pub const DEFAULT_CONTENT_CLASSES: &str = "text-gray-600 leading-relaxed";

const CONTENT_SHAPE: &str = "content must be string, Component, or ordered sequence of Component";
const CONTENT_ITEM_SHAPE: &str = "all items in content list must be Components";

/// One of the ten container style roles of a card, in class order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
	Display,
	Width,
	Padding,
	Background,
	Border,
	Radius,
	Shadow,
	HoverShadow,
	HoverBackground,
	Transitions,
}

impl StyleRole {
	/// Every role, in the order its classes appear in `class`.
	pub const ALL: [StyleRole; 10] = [
		Self::Display,
		Self::Width,
		Self::Padding,
		Self::Background,
		Self::Border,
		Self::Radius,
		Self::Shadow,
		Self::HoverShadow,
		Self::HoverBackground,
		Self::Transitions,
	];

	/// Field name used for named-field construction.
	pub fn field(&self) -> &'static str {
		match self {
			Self::Display => "display",
			Self::Width => "width",
			Self::Padding => "padding",
			Self::Background => "background",
			Self::Border => "border",
			Self::Radius => "radius",
			Self::Shadow => "shadow",
			Self::HoverShadow => "hover_shadow",
			Self::HoverBackground => "hover_background",
			Self::Transitions => "transitions",
		}
	}

	pub fn default_classes(&self) -> &'static str {
		match self {
			Self::Display => "block",
			Self::Width => "max-w-sm",
			Self::Padding => "p-6",
			Self::Background => "bg-white",
			Self::Border => "border border-gray-200",
			Self::Radius => "rounded-xl",
			Self::Shadow => "shadow-sm",
			Self::HoverShadow => "hover:shadow-md",
			Self::HoverBackground => "hover:bg-gray-50",
			Self::Transitions => "transition-all duration-150",
		}
	}

	fn index(&self) -> usize {
		*self as usize
	}
}

/// Content that named-field construction accepted but a card cannot
/// render.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedContent {
	value: Value,
	reason: &'static str,
}

impl UnsupportedContent {
	/// The value as it was supplied.
	pub fn value(&self) -> &Value {
		&self.value
	}
}

/// What a card shows below its title.
#[derive(Debug)]
pub enum CardContent {
	/// A paragraph of escaped text
	Text(String),
	/// One nested component
	Single(Box<dyn Component>),
	/// Nested components, rendered in order
	Many(Vec<Box<dyn Component>>),
	/// A value of no supported shape; rendering it fails
	Unsupported(UnsupportedContent),
}

impl CardContent {
	pub fn single(component: impl Component + 'static) -> Self {
		Self::Single(Box::new(component))
	}

	pub fn many(components: impl IntoIterator<Item = Box<dyn Component>>) -> Self {
		Self::Many(components.into_iter().collect())
	}

	/// Reads content given as a named field.
	///
	/// Shape problems are kept for render time; invalid nested
	/// descriptors are reported immediately.
	fn from_value(
		value: &Value,
		reader: &mut FieldReader<'_>,
	) -> Option<Self> {
		match value {
			Value::String(text) => Some(Self::Text(text.clone())),
			Value::Object(fields) => match document::from_descriptor(fields) {
				Ok(component) => Some(Self::Single(component)),
				Err(errors) => {
					reader.nested("content", errors);
					None
				}
			},
			Value::Array(items) if items.iter().all(Value::is_object) => {
				let mut components = Vec::with_capacity(items.len());
				for (i, item) in items.iter().enumerate() {
					let Value::Object(fields) = item else {
						continue;
					};
					match document::from_descriptor(fields) {
						Ok(component) => components.push(component),
						Err(errors) => reader.nested(&format!("content[{i}]"), errors),
					}
				}
				(components.len() == items.len()).then_some(Self::Many(components))
			}
			Value::Array(_) => Some(Self::Unsupported(UnsupportedContent {
				value: value.clone(),
				reason: CONTENT_ITEM_SHAPE,
			})),
			other => {
				tracing::debug!(
					found = type_name(other),
					"card content deferred as unsupported"
				);
				Some(Self::Unsupported(UnsupportedContent {
					value: other.clone(),
					reason: CONTENT_SHAPE,
				}))
			}
		}
	}
}

impl From<&str> for CardContent {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for CardContent {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<Box<dyn Component>> for CardContent {
	fn from(component: Box<dyn Component>) -> Self {
		Self::Single(component)
	}
}

impl From<Vec<Box<dyn Component>>> for CardContent {
	fn from(components: Vec<Box<dyn Component>>) -> Self {
		Self::Many(components)
	}
}

impl From<Button> for CardContent {
	fn from(button: Button) -> Self {
		Self::single(button)
	}
}

impl From<Text> for CardContent {
	fn from(text: Text) -> Self {
		Self::single(text)
	}
}

impl From<Card> for CardContent {
	fn from(card: Card) -> Self {
		Self::single(card)
	}
}

/// Card component
///
/// ```
/// use hxui_components::prelude::*;
///
/// let card = Card::new("Interactive Card", "Click this card to refresh.")
///     .hx_get("/card/refresh")
///     .hx_trigger("click")
///     .hx_swap("outerHTML");
/// let html = card.render().unwrap();
/// assert!(html.as_str().starts_with(
///     r#"<div hx-get="/card/refresh" hx-trigger="click" hx-swap="outerHTML" class="block max-w-sm"#
/// ));
/// ```
#[derive(Debug)]
pub struct Card {
	title: String,
	content: CardContent,
	styles: [String; 10],
	title_classes: String,
	content_classes: String,
	hx: Interaction,
}

macro_rules! style_setters {
	($( $method:ident => $role:ident ),+ $(,)?) => {
		impl Card {
			$(
				#[doc = concat!("Overrides the `", stringify!($method), "` style classes.")]
				pub fn $method(self, classes: impl Into<String>) -> Self {
					self.style(StyleRole::$role, classes)
				}
			)+
		}
	};
}

style_setters! {
	display => Display,
	width => Width,
	padding => Padding,
	background => Background,
	border => Border,
	radius => Radius,
	shadow => Shadow,
	hover_shadow => HoverShadow,
	hover_background => HoverBackground,
	transitions => Transitions,
}

impl Card {
	pub fn new(title: impl Into<String>, content: impl Into<CardContent>) -> Self {
		Self {
			title: title.into(),
			content: content.into(),
			styles: StyleRole::ALL.map(|role| role.default_classes().to_string()),
			title_classes: DEFAULT_TITLE_CLASSES.to_string(),
			content_classes: DEFAULT_CONTENT_CLASSES.to_string(),
			hx: Interaction::default(),
		}
	}

	/// Builds a card from named fields: `title` and `content` (required),
	/// the style roles, `title_classes`, `content_classes`, and any
	/// interaction field.
	///
	/// `content` may be a string, a component descriptor object, or an
	/// array of descriptors. Any other value is accepted here and fails
	/// when the card is rendered.
	pub fn from_fields(fields: &Fields) -> std::result::Result<Self, ValidationErrors> {
		let mut reader = FieldReader::new("Card", fields);
		let title = reader.required_str("title");
		let content = match reader.value("content") {
			Some(value) => CardContent::from_value(value, &mut reader),
			None => {
				reader.error(FieldError::new("content", FieldErrorKind::Missing));
				None
			}
		};
		let styles = StyleRole::ALL.map(|role| reader.str_or(role.field(), role.default_classes()));
		let title_classes = reader.str_or("title_classes", DEFAULT_TITLE_CLASSES);
		let content_classes = reader.str_or("content_classes", DEFAULT_CONTENT_CLASSES);
		let hx = reader.interaction();
		reader.finish()?;

		Ok(Self {
			title: title.unwrap_or_default(),
			content: content.unwrap_or_else(|| CardContent::Text(String::new())),
			styles,
			title_classes,
			content_classes,
			hx,
		})
	}

	/// Overrides one style role.
	pub fn style(mut self, role: StyleRole, classes: impl Into<String>) -> Self {
		self.styles[role.index()] = classes.into();
		self
	}

	pub fn title_classes(mut self, classes: impl Into<String>) -> Self {
		self.title_classes = classes.into();
		self
	}

	pub fn content_classes(mut self, classes: impl Into<String>) -> Self {
		self.content_classes = classes.into();
		self
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn content(&self) -> &CardContent {
		&self.content
	}

	pub fn style_classes(&self, role: StyleRole) -> &str {
		&self.styles[role.index()]
	}

	/// The container classes: every style role, space-joined in role order.
	pub fn classes(&self) -> String {
		self.styles.join(" ")
	}
}

impl HxBuilder for Card {
	fn interaction_mut(&mut self) -> &mut Interaction {
		&mut self.hx
	}
}

impl Component for Card {
	fn name(&self) -> &'static str {
		"Card"
	}

	fn interaction(&self) -> &Interaction {
		&self.hx
	}

	fn custom_attributes(&self) -> Attributes {
		Attributes::new().with("class", self.classes())
	}

	fn render(&self) -> Result<Markup> {
		tracing::trace!(component = "Card", "rendering");
		let card = Element::new("div").attrs(self.combined_attributes()).child(
			Element::new("h5")
				.attr("class", self.title_classes.as_str())
				.text(self.title.as_str()),
		);

		let card = match &self.content {
			CardContent::Text(text) => card.child(
				Element::new("p")
					.attr("class", self.content_classes.as_str())
					.text(text.as_str()),
			),
			CardContent::Single(component) => card.markup(component.render()?),
			CardContent::Many(components) => components
				.iter()
				.try_fold(card, |card, component| Ok::<_, ComponentError>(card.markup(component.render()?)))?,
			CardContent::Unsupported(unsupported) => {
				tracing::warn!(
					title = %self.title,
					found = type_name(&unsupported.value),
					"card content has no renderable shape"
				);
				return Err(ComponentError::Composition(unsupported.reason.to_string()));
			}
		};

		card.render()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	const DEFAULT_CLASSES: &str = "block max-w-sm p-6 bg-white border border-gray-200 rounded-xl shadow-sm hover:shadow-md hover:bg-gray-50 transition-all duration-150";

	fn fields(value: Value) -> Fields {
		value.as_object().cloned().unwrap()
	}

	#[rstest]
	fn test_default_class_order() {
		let card = Card::new("t", "c");
		assert_eq!(card.classes(), DEFAULT_CLASSES);
		assert_eq!(card.custom_attributes().get("class"), Some(DEFAULT_CLASSES));
	}

	#[rstest]
	fn test_style_override_keeps_order() {
		let card = Card::new("t", "c").shadow("shadow-lg").display("flex");
		assert_eq!(
			card.classes(),
			"flex max-w-sm p-6 bg-white border border-gray-200 rounded-xl shadow-lg hover:shadow-md hover:bg-gray-50 transition-all duration-150"
		);
		assert_eq!(card.style_classes(StyleRole::Shadow), "shadow-lg");
	}

	#[rstest]
	fn test_text_content() {
		let html = Card::new("Static Card", "hello").render().unwrap();
		assert_eq!(
			html.as_str(),
			format!(
				r#"<div class="{DEFAULT_CLASSES}"><h5 class="{DEFAULT_TITLE_CLASSES}">Static Card</h5><p class="{DEFAULT_CONTENT_CLASSES}">hello</p></div>"#
			)
		);
	}

	#[rstest]
	fn test_single_component_content() {
		let html = Card::new("Actions", Button::new("Go")).render().unwrap();
		let button = Button::new("Go").render().unwrap();
		assert!(html.as_str().ends_with(&format!("</h5>{button}</div>")));
	}

	#[rstest]
	fn test_many_components_in_order() {
		let content: Vec<Box<dyn Component>> =
			vec![Box::new(Text::new("first")), Box::new(Text::new("second"))];
		let html = Card::new("List", content).render().unwrap();
		let expected_tail = format!(
			"</h5>{}{}</div>",
			Text::new("first").render().unwrap(),
			Text::new("second").render().unwrap()
		);
		assert!(html.as_str().ends_with(&expected_tail));
	}

	#[rstest]
	fn test_empty_list_renders_title_only() {
		let html = Card::new("Empty", CardContent::many(Vec::new()))
			.render()
			.unwrap();
		assert!(html.as_str().ends_with("Empty</h5></div>"));
	}

	#[rstest]
	fn test_nested_content_not_double_escaped() {
		let html = Card::new("Q&A", Text::new("a & b")).render().unwrap();
		assert!(html.as_str().contains(">Q&amp;A</h5>"));
		assert!(html.as_str().contains(">a &amp; b</p>"));
		assert!(!html.as_str().contains("&amp;amp;"));
	}

	#[rstest]
	fn test_nested_card() {
		let inner = Card::new("Inner", "x").radius("rounded-none");
		let html = Card::new("Outer", inner).render().unwrap();
		assert_eq!(html.as_str().matches("<div ").count(), 2);
		assert!(html.as_str().contains("rounded-none"));
	}

	#[rstest]
	fn test_from_fields_text_content() {
		let card = Card::from_fields(&fields(json!({
			"title": "Updated!",
			"content": "Random value: 42",
			"hx_get": "/card/refresh",
			"shadow": "shadow-none",
		})))
		.unwrap();

		assert!(matches!(card.content(), CardContent::Text(t) if t == "Random value: 42"));
		assert_eq!(card.style_classes(StyleRole::Shadow), "shadow-none");
		assert_eq!(card.interaction().hx_get.as_deref(), Some("/card/refresh"));
	}

	#[rstest]
	fn test_from_fields_object_content_is_single() {
		let card = Card::from_fields(&fields(json!({
			"title": "Actions",
			"content": {"component": "button", "label": "Save", "hx_post": "/save"},
		})))
		.unwrap();

		let CardContent::Single(component) = card.content() else {
			panic!("expected a single component");
		};
		assert_eq!(component.name(), "Button");
		assert!(
			card.render()
				.unwrap()
				.as_str()
				.contains(r#"<button hx-post="/save""#)
		);
	}

	#[rstest]
	fn test_from_fields_null_content_is_missing() {
		let errors = Card::from_fields(&fields(json!({"title": "t", "content": null}))).unwrap_err();
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.field("content").unwrap().kind, FieldErrorKind::Missing);
	}

	#[rstest]
	fn test_from_fields_nested_components() {
		let card = Card::from_fields(&fields(json!({
			"title": "Mixed",
			"content": [
				{"component": "text", "value": "one"},
				{"component": "button", "label": "two"},
			],
		})))
		.unwrap();

		let CardContent::Many(items) = card.content() else {
			panic!("expected a list of components");
		};
		assert_eq!(
			items.iter().map(|c| c.name()).collect::<Vec<_>>(),
			vec!["Text", "Button"]
		);
	}

	#[rstest]
	fn test_from_fields_nested_errors_have_paths() {
		let errors = Card::from_fields(&fields(json!({
			"title": "Broken",
			"content": [
				{"component": "text", "value": "ok"},
				{"component": "text"},
				{"component": "button", "label": 5},
			],
		})))
		.unwrap_err();

		assert_eq!(errors.len(), 2);
		assert_eq!(
			errors.field("content[1].value").unwrap().kind,
			FieldErrorKind::Missing
		);
		assert!(errors.field("content[2].label").is_some());
	}

	#[rstest]
	fn test_from_fields_missing_title_and_content() {
		let errors = Card::from_fields(&fields(json!({"padding": "p-2"}))).unwrap_err();
		assert_eq!(errors.len(), 2);
		assert!(errors.field("title").is_some());
		assert!(errors.field("content").is_some());
	}

	#[rstest]
	#[case(json!(42))]
	#[case(json!(true))]
	#[case(json!(["text", {"component": "text", "value": "x"}]))]
	fn test_unsupported_content_fails_at_render(#[case] content: Value) {
		let card = Card::from_fields(&fields(json!({"title": "t", "content": content.clone()})))
			.unwrap();
		assert!(matches!(card.content(), CardContent::Unsupported(u) if *u.value() == content));
		assert!(matches!(card.render(), Err(ComponentError::Composition(_))));
	}

	#[rstest]
	fn test_unsupported_nested_content_aborts_outer_render() {
		let inner = Card::from_fields(&fields(json!({"title": "t", "content": 1}))).unwrap();
		let outer = Card::new("outer", inner);
		assert!(matches!(outer.render(), Err(ComponentError::Composition(_))));
	}
}
