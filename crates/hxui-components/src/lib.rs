//! # hxui-components
//!
//! Typed, immutable UI components that render to escape-safe HTML and carry
//! [htmx](https://htmx.org) interaction attributes.
//!
//! ## Architecture
//!
//! - **Interaction**: the closed vocabulary of `hx-*` attributes every
//!   component shares
//! - **Component**: the trait that merges interaction and custom attributes
//!   and renders one element
//! - **Variants**: [`Button`], [`Text`] and [`Card`]; cards compose other
//!   components
//! - **Documents**: components declared as JSON or TOML data
//!
//! Rendering never touches global state: a component renders to the same
//! bytes every time, and nested output is embedded as trusted [`Markup`]
//! rather than re-escaped.
//!
//! ## Example
//!
//! ```
//! use hxui_components::prelude::*;
//!
//! let card = Card::new(
//!     "Actions",
//!     CardContent::many([
//!         Box::new(Text::new("Pick one.")) as Box<dyn Component>,
//!         Box::new(Button::new("Save").variant(ButtonVariant::Success).hx_post("/save")),
//!     ]),
//! );
//!
//! let html = card.render().unwrap();
//! assert!(html.as_str().contains(r#"<button hx-post="/save""#));
//! ```
//!
//! ## Feature Flags
//!
//! - `toml` (default) - [`document::from_toml_str`]

pub mod attributes;
pub mod button;
pub mod card;
pub mod component;
pub mod document;
pub mod error;
pub mod fields;
pub mod html;
pub mod interaction;
pub mod presets;
pub mod text;

pub use attributes::Attributes;
pub use button::{Button, ButtonSize, ButtonType, ButtonVariant};
pub use card::{Card, CardContent, StyleRole};
pub use component::Component;
pub use error::{ComponentError, FieldError, FieldErrorKind, Result, ValidationErrors};
pub use html::{Element, Markup};
pub use interaction::{HxBuilder, Interaction};
pub use presets::resolve;
pub use text::Text;

/// Commonly used types
pub mod prelude {
	pub use crate::attributes::Attributes;
	pub use crate::button::{Button, ButtonSize, ButtonType, ButtonVariant};
	pub use crate::card::{Card, CardContent, StyleRole};
	pub use crate::component::Component;
	pub use crate::error::{ComponentError, ValidationErrors};
	pub use crate::html::{Element, Markup};
	pub use crate::interaction::{HxBuilder, Interaction};
	pub use crate::text::Text;
}
