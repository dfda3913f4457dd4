//! HTML element builder and trusted markup.
//!
//! [`Element`] is the only way components emit HTML. Text children and
//! attribute values are escaped on the way out; [`Markup`] children are
//! already-rendered HTML and are inserted verbatim, which is how one
//! component embeds another without double-escaping.

use crate::attributes::Attributes;
use crate::error::{ComponentError, Result};
use std::borrow::Cow;
use std::fmt;

/// A fragment of rendered, escape-safe HTML.
///
/// Outside this crate a `Markup` can only come from rendering a component
/// (or an [`Element`]) or from [`Markup::escape`], so embedding one can
/// never inject unescaped input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
	/// Escapes plain text into markup.
	pub fn escape(text: &str) -> Self {
		Self(html_escape::encode_text(text).into_owned())
	}

	pub(crate) fn trusted(html: String) -> Self {
		Self(html)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Markup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Markup> for String {
	fn from(markup: Markup) -> Self {
		markup.0
	}
}

/// A child of an [`Element`].
#[derive(Debug, Clone)]
enum Node {
	Text(String),
	Markup(Markup),
	Element(Element),
}

/// HTML element under construction.
#[derive(Debug, Clone)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Attributes,
	children: Vec<Node>,
	is_void: bool,
}

impl Element {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Attributes::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Sets an attribute, replacing a previous value for the same name.
	pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		self.attrs.insert(name, value);
		self
	}

	/// Sets every attribute of `attrs`, in order.
	pub fn attrs(mut self, attrs: Attributes) -> Self {
		self.attrs.merge(attrs);
		self
	}

	/// Appends a text child. It is HTML-escaped when rendered.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.children.push(Node::Text(text.into()));
		self
	}

	/// Appends already-rendered markup verbatim.
	pub fn markup(mut self, markup: Markup) -> Self {
		self.children.push(Node::Markup(markup));
		self
	}

	/// Appends a nested element.
	pub fn child(mut self, child: Element) -> Self {
		self.children.push(Node::Element(child));
		self
	}

	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attrs
	}

	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Renders the element and its descendants.
	///
	/// Fails if the tag or an attribute name would break out of the tag.
	pub fn render(&self) -> Result<Markup> {
		let mut output = String::new();
		self.render_into(&mut output)?;
		Ok(Markup::trusted(output))
	}

	fn render_into(&self, output: &mut String) -> Result<()> {
		if !is_valid_tag_name(&self.tag) {
			return Err(ComponentError::InvalidTag(self.tag.to_string()));
		}
		output.push('<');
		output.push_str(&self.tag);

		for (name, value) in self.attrs.iter() {
			if !is_valid_attribute_name(name) {
				return Err(ComponentError::InvalidAttribute(name.to_string()));
			}
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape::encode_double_quoted_attribute(value));
			output.push('"');
		}

		if self.is_void {
			output.push_str(" />");
			return Ok(());
		}

		output.push('>');
		for child in &self.children {
			match child {
				Node::Text(text) => output.push_str(&html_escape::encode_text(text)),
				Node::Markup(markup) => output.push_str(markup.as_str()),
				Node::Element(el) => el.render_into(output)?,
			}
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
		Ok(())
	}
}

/// Tag names start with an ASCII letter and continue with ASCII letters,
/// digits or `-`.
pub fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Attribute names may not be empty or contain whitespace, quotes, `<`,
/// `>`, `/`, `=` or control characters.
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace()
				|| c.is_control()
				|| matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
		})
}
