//! Preset resolution: semantic keys or raw class strings.

/// Fixed lookup table from a preset key to its class string.
pub type PresetTable = [(&'static str, &'static str)];

/// Returns the preset mapped to `key`, if there is one.
pub fn lookup(key: &str, table: &'static PresetTable) -> Option<&'static str> {
	table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolves `key` through `table`, falling back to `key` itself.
///
/// An unknown key is never an error: it is the raw class string the
/// caller wants verbatim.
///
/// ```
/// use hxui_components::presets::resolve;
///
/// const SIZES: &[(&str, &str)] = &[("md", "text-sm px-4 py-2.5")];
/// assert_eq!(resolve("md", SIZES), "text-sm px-4 py-2.5");
/// assert_eq!(resolve("text-2xl px-8", SIZES), "text-2xl px-8");
/// ```
pub fn resolve<'a>(key: &'a str, table: &'static PresetTable) -> &'a str {
	lookup(key, table).unwrap_or(key)
}
