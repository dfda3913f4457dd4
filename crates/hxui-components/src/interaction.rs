//! htmx interaction attributes shared by every component.
//!
//! The vocabulary is closed: it is declared once below and every component
//! embeds one [`Interaction`] value. Field names carry the `hx_` prefix; the
//! emitted attribute name comes from [`attribute_name`].

use crate::attributes::Attributes;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Fields whose attribute name does not follow the mechanical transform.
///
/// `class_` is the field spelling of the reserved word `class`.
pub const ATTRIBUTE_NAME_EXCEPTIONS: &[(&str, &str)] = &[("class_", "class")];

/// Derives the HTML attribute name for a field name.
///
/// Exceptions win; otherwise trailing `_` markers are stripped and the
/// remaining `_` separators become `-`.
///
/// ```
/// use hxui_components::interaction::attribute_name;
///
/// assert_eq!(attribute_name("hx_swap_oob"), "hx-swap-oob");
/// assert_eq!(attribute_name("class_"), "class");
/// ```
pub fn attribute_name(field: &str) -> Cow<'_, str> {
	if let Some((_, name)) = ATTRIBUTE_NAME_EXCEPTIONS.iter().find(|(f, _)| *f == field) {
		return Cow::Borrowed(*name);
	}
	let trimmed = field.trim_end_matches('_');
	if trimmed.contains('_') {
		Cow::Owned(trimmed.replace('_', "-"))
	} else {
		Cow::Borrowed(trimmed)
	}
}

macro_rules! interaction_fields {
	($( $(#[$doc:meta])* $field:ident ),+ $(,)?) => {
		/// The optional htmx attributes of a component.
		///
		/// An unset field emits no attribute at all.
		#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
		pub struct Interaction {
			$( $(#[$doc])* pub $field: Option<String>, )+
		}

		impl Interaction {
			/// Every interaction field name, in declaration order.
			pub const FIELD_NAMES: &'static [&'static str] = &[$( stringify!($field) ),+];

			/// Returns the value of the named field, if the field exists and is set.
			pub fn get(&self, field: &str) -> Option<&str> {
				match field {
					$( stringify!($field) => self.$field.as_deref(), )+
					_ => None,
				}
			}

			/// Sets the named field. Returns `false` for a name outside the
			/// vocabulary.
			pub fn set(&mut self, field: &str, value: Option<String>) -> bool {
				match field {
					$( stringify!($field) => { self.$field = value; true } )+
					_ => false,
				}
			}

			fn values(&self) -> [Option<&str>; Interaction::FIELD_NAMES.len()] {
				[$( self.$field.as_deref() ),+]
			}
		}

		/// Chainable setters for every interaction field.
		///
		/// Implemented by each component so that
		/// `Button::new("Save").hx_post("/save").hx_swap("outerHTML")` reads
		/// the same for every variant.
		pub trait HxBuilder: Sized {
			/// Mutable access to the component's interaction fields.
			fn interaction_mut(&mut self) -> &mut Interaction;

			$(
				#[allow(missing_docs)]
				fn $field(mut self, value: impl Into<String>) -> Self {
					self.interaction_mut().$field = Some(value.into());
					self
				}
			)+
		}
	};
}

interaction_fields! {
	// Request methods
	hx_get,
	hx_post,
	hx_put,
	hx_patch,
	hx_delete,
	// Trigger and target
	hx_trigger,
	hx_target,
	hx_swap,
	// Content selection
	hx_select,
	hx_select_oob,
	hx_swap_oob,
	// Data and values
	hx_vals,
	hx_headers,
	hx_include,
	hx_params,
	hx_encoding,
	// URL and history
	hx_push_url,
	hx_replace_url,
	hx_history,
	hx_history_elt,
	// User feedback
	hx_confirm,
	hx_prompt,
	hx_indicator,
	hx_disabled_elt,
	// Progressive enhancement
	hx_boost,
	hx_preserve,
	// Request control
	hx_sync,
	hx_validate,
	hx_request,
	hx_ext,
	// Inheritance control
	hx_disinherit,
	hx_inherit,
	hx_disable,
	// Event handling
	hx_on,
}

static ATTRIBUTE_NAMES: LazyLock<Vec<Cow<'static, str>>> = LazyLock::new(|| {
	Interaction::FIELD_NAMES
		.iter()
		.map(|field| attribute_name(field))
		.collect()
});

impl Interaction {
	/// `(field, attribute)` names for the whole vocabulary.
	///
	/// Computed on first use and read-only afterwards.
	pub fn attribute_names() -> impl Iterator<Item = (&'static str, &'static str)> {
		Self::FIELD_NAMES
			.iter()
			.copied()
			.zip(ATTRIBUTE_NAMES.iter().map(|name| name.as_ref()))
	}

	/// The set fields as HTML attributes, in declaration order.
	pub fn to_attributes(&self) -> Attributes {
		self.values()
			.into_iter()
			.zip(ATTRIBUTE_NAMES.iter())
			.filter_map(|(value, name)| value.map(|v| (name.clone(), v.to_string())))
			.collect()
	}

	/// True when no field is set.
	pub fn is_empty(&self) -> bool {
		self.values().iter().all(Option::is_none)
	}
}
