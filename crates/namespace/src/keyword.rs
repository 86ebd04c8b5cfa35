//! Keyword descriptors.

use serde::{Deserialize, Serialize};

/// Metadata for one keyword of a library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordSpec {
	/// Keyword name as written in test data.
	pub name: String,
	/// Argument names, including defaults and varargs markers (`a=1`, `*rest`).
	#[serde(default)]
	pub args: Vec<String>,
	/// Documentation.
	#[serde(default)]
	pub doc: String,
	/// Owning library name.
	#[serde(default)]
	pub library: String,
}

impl KeywordSpec {
	pub fn new(name: impl Into<String>, library: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			args: Vec::new(),
			doc: String::new(),
			library: library.into(),
		}
	}

	pub fn with_args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.args = args.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
		self.doc = doc.into();
		self
	}

	/// First line of the documentation, for completion popups.
	pub fn short_doc(&self) -> &str {
		self.doc.lines().next().unwrap_or_default()
	}

	/// Name in the form used for matching, see [`normalize_keyword_name`].
	pub fn normalized_name(&self) -> String {
		normalize_keyword_name(&self.name)
	}
}

/// Normalizes a keyword name for matching: case-insensitive, ignoring spaces
/// and underscores. `"Log Many"`, `"log_many"` and `"LOGMANY"` are equal.
pub fn normalize_keyword_name(name: &str) -> String {
	name.chars()
		.filter(|c| !c.is_whitespace() && *c != '_')
		.flat_map(char::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("Log Many", "logmany")]
	#[case("log_many", "logmany")]
	#[case("  Should Be Equal  ", "shouldbeequal")]
	#[case("", "")]
	fn normalizes(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(normalize_keyword_name(input), expected);
	}

	#[test]
	fn deserializes_with_defaults() {
		let kw: KeywordSpec = serde_json::from_str(r#"{"name": "No Operation"}"#).unwrap();
		assert_eq!(kw, KeywordSpec::new("No Operation", ""));
	}

	#[test]
	fn short_doc_is_first_line() {
		let kw = KeywordSpec::new("Log", "BuiltIn").with_doc("Logs the message.\n\nMore text.");
		assert_eq!(kw.short_doc(), "Logs the message.");
		assert_eq!(KeywordSpec::new("Log", "BuiltIn").short_doc(), "");
	}
}
