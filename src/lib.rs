//! # hxui
//!
//! Typed UI components that render to HTML strings with
//! [htmx](https://htmx.org) interaction attributes.
//!
//! hxui follows Rust's composition patterns instead of inheritance: every
//! component embeds the same [`Interaction`] fields and implements the
//! [`Component`] trait, whose provided methods resolve and merge its
//! attributes. Rendering is a pure, one-shot transformation; there is no
//! virtual DOM and no client-side state.
//!
//! ## Feature Flags
//!
//! - `toml` (default) - Declare components in TOML documents
//!
//! ## Quick Example
//!
//! ```rust
//! use hxui::prelude::*;
//!
//! // A card that swaps itself for a fresh copy when clicked
//! let card = Card::new("Interactive Card", "Click this card to refresh.")
//!     .hx_get("/card/refresh")
//!     .hx_trigger("click")
//!     .hx_swap("outerHTML");
//!
//! // Hand the string to whatever serves the response
//! let html: String = card.render()?.into_string();
//! assert!(html.starts_with(r#"<div hx-get="/card/refresh""#));
//! # Ok::<(), hxui::ComponentError>(())
//! ```
//!
//! Components can also be declared as data:
//!
//! ```rust
//! use hxui::prelude::*;
//!
//! let button = hxui::document::from_json_str(
//!     r#"{"component": "button", "label": "Delete", "variant": "danger", "hx_delete": "/items/7"}"#,
//! )?;
//! assert!(button.render()?.as_str().contains(">Delete</button>"));
//! # Ok::<(), hxui::ComponentError>(())
//! ```

pub use hxui_components::{
	attributes, button, card, component, document, error, fields, html, interaction, presets,
	text,
};

pub use hxui_components::{
	Attributes, Button, ButtonSize, ButtonType, ButtonVariant, Card, CardContent, Component,
	ComponentError, Element, FieldError, FieldErrorKind, HxBuilder, Interaction, Markup, Result,
	StyleRole, Text, ValidationErrors, resolve,
};

/// Commonly used types
pub mod prelude {
	pub use hxui_components::prelude::*;
}
