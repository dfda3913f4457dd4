//! Ordered HTML attribute mapping.

use std::borrow::Cow;

/// Ordered, key-unique mapping of attribute name to value.
///
/// Inserting an existing key replaces its value but keeps the position of
/// the first insertion, so merged mappings render in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: Vec<(Cow<'static, str>, String)>,
}

impl Attributes {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `name` to `value`, replacing any previous value.
	pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(n, _)| *n == name) {
			Some((_, existing)) => *existing = value,
			None => self.entries.push((name, value)),
		}
	}

	/// Builder form of [`insert`](Self::insert).
	pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		self.insert(name, value);
		self
	}

	/// Inserts every entry of `other`; on collision `other` wins.
	pub fn merge(&mut self, other: Attributes) {
		for (name, value) in other.entries {
			self.insert(name, value);
		}
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	pub fn contains_key(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
	}

	/// Attribute names in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(n, _)| n.as_ref())
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<Cow<'static, str>>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		for (name, value) in iter {
			attrs.insert(name, value);
		}
		attrs
	}
}

impl IntoIterator for Attributes {
	type Item = (Cow<'static, str>, String);
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_replaces_in_place() {
		let mut attrs = Attributes::new();
		attrs.insert("hx-get", "/a");
		attrs.insert("class", "x");
		attrs.insert("hx-get", "/b");

		assert_eq!(attrs.len(), 2);
		assert_eq!(attrs.get("hx-get"), Some("/b"));
		assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["hx-get", "class"]);
	}

	#[rstest]
	fn test_merge_later_wins() {
		let mut base = Attributes::new().with("class", "from-interaction").with("id", "a");
		base.merge(Attributes::new().with("class", "custom").with("type", "button"));

		assert_eq!(base.get("class"), Some("custom"));
		assert_eq!(base.get("id"), Some("a"));
		assert_eq!(base.keys().collect::<Vec<_>>(), vec!["class", "id", "type"]);
	}

	#[rstest]
	fn test_from_iter_dedupes() {
		let attrs: Attributes = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
		assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
	}

	#[rstest]
	fn test_missing_key() {
		let attrs = Attributes::new();
		assert!(attrs.is_empty());
		assert!(!attrs.contains_key("class"));
		assert_eq!(attrs.get("class"), None);
	}
}
