//! Core component trait

use crate::attributes::Attributes;
use crate::error::Result;
use crate::html::Markup;
use crate::interaction::Interaction;
use std::fmt;

/// Component trait - base interface for all UI components
///
/// A component is an immutable value. Rendering is a pure function of its
/// fields: the same value always renders the same bytes.
///
/// Implementors supply their interaction fields, their own attributes and
/// the element they emit. Attribute resolution is shared:
///
/// ```
/// use hxui_components::{Result, prelude::*};
///
/// #[derive(Debug)]
/// struct Badge {
///     label: String,
///     hx: Interaction,
/// }
///
/// impl Component for Badge {
///     fn name(&self) -> &'static str {
///         "Badge"
///     }
///
///     fn interaction(&self) -> &Interaction {
///         &self.hx
///     }
///
///     fn custom_attributes(&self) -> Attributes {
///         Attributes::new().with("class", "badge")
///     }
///
///     fn render(&self) -> Result<Markup> {
///         Element::new("span")
///             .attrs(self.combined_attributes())
///             .text(self.label.as_str())
///             .render()
///     }
/// }
///
/// let badge = Badge { label: "new".into(), hx: Interaction::default() };
/// assert_eq!(badge.render().unwrap().as_str(), r#"<span class="badge">new</span>"#);
/// ```
pub trait Component: Send + Sync + fmt::Debug {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// The component's htmx interaction fields
	fn interaction(&self) -> &Interaction;

	/// Attributes contributed by the component itself (classes, type, id).
	fn custom_attributes(&self) -> Attributes {
		Attributes::new()
	}

	/// The set interaction fields as HTML attributes.
	fn interaction_attributes(&self) -> Attributes {
		self.interaction().to_attributes()
	}

	/// Interaction attributes overlaid with custom attributes; a custom
	/// attribute replaces an interaction attribute of the same name.
	fn combined_attributes(&self) -> Attributes {
		let mut attrs = self.interaction_attributes();
		attrs.merge(self.custom_attributes());
		attrs
	}

	/// Renders the component to HTML
	fn render(&self) -> Result<Markup>;
}

impl<C: Component + ?Sized> Component for Box<C> {
	fn name(&self) -> &'static str {
		(**self).name()
	}

	fn interaction(&self) -> &Interaction {
		(**self).interaction()
	}

	fn custom_attributes(&self) -> Attributes {
		(**self).custom_attributes()
	}

	fn interaction_attributes(&self) -> Attributes {
		(**self).interaction_attributes()
	}

	fn combined_attributes(&self) -> Attributes {
		(**self).combined_attributes()
	}

	fn render(&self) -> Result<Markup> {
		(**self).render()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::html::Element;
	use rstest::rstest;

	#[derive(Debug, Default)]
	struct Widget {
		hx: Interaction,
		custom: Attributes,
	}

	impl Component for Widget {
		fn name(&self) -> &'static str {
			"Widget"
		}

		fn interaction(&self) -> &Interaction {
			&self.hx
		}

		fn custom_attributes(&self) -> Attributes {
			self.custom.clone()
		}

		fn render(&self) -> Result<Markup> {
			Element::new("div").attrs(self.combined_attributes()).render()
		}
	}

	#[derive(Debug, Default)]
	struct Plain {
		hx: Interaction,
	}

	impl Component for Plain {
		fn name(&self) -> &'static str {
			"Plain"
		}

		fn interaction(&self) -> &Interaction {
			&self.hx
		}

		fn render(&self) -> Result<Markup> {
			Element::new("span").attrs(self.combined_attributes()).render()
		}
	}

	#[rstest]
	fn test_custom_attributes_default_empty() {
		assert!(Plain::default().custom_attributes().is_empty());
		assert_eq!(Plain::default().render().unwrap().as_str(), "<span></span>");
	}

	#[rstest]
	fn test_custom_overrides_interaction_on_collision() {
		let widget = Widget {
			hx: Interaction {
				hx_get: Some("/from-hx".into()),
				hx_target: Some("#out".into()),
				..Default::default()
			},
			custom: Attributes::new().with("hx-get", "/from-custom"),
		};

		let attrs = widget.combined_attributes();
		assert_eq!(attrs.get("hx-get"), Some("/from-custom"));
		assert_eq!(attrs.get("hx-target"), Some("#out"));
		assert_eq!(attrs.len(), 2);
	}

	#[rstest]
	fn test_custom_class_is_verbatim() {
		let widget = Widget {
			custom: Attributes::new().with("class", "a  b <c>"),
			..Default::default()
		};
		assert_eq!(widget.combined_attributes().get("class"), Some("a  b <c>"));
	}

	#[rstest]
	fn test_boxed_component_delegates() {
		let boxed: Box<dyn Component> = Box::new(Widget {
			hx: Interaction {
				hx_post: Some("/save".into()),
				..Default::default()
			},
			custom: Attributes::new().with("id", "p"),
		});
		assert_eq!(boxed.name(), "Widget");
		assert_eq!(
			boxed.render().unwrap().as_str(),
			r#"<div hx-post="/save" id="p"></div>"#
		);
	}
}
