//! Boundary to the test framework's library introspection.
//!
//! The cache never talks to the framework directly; it goes through a
//! [`LibraryIntrospector`]. Two implementations ship with the crate:
//!
//! * [`SpecDirIntrospector`]: reads pre-generated `<name>.json` spec files
//! * [`StaticIntrospector`]: serves libraries registered in memory

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::IntrospectError;
use crate::identity::LibraryIdentity;
use crate::keyword::KeywordSpec;

/// Produces keyword metadata for libraries.
pub trait LibraryIntrospector {
	/// Returns the keywords of the library identified by `id`.
	fn introspect(&self, id: &LibraryIdentity) -> Result<Vec<KeywordSpec>, IntrospectError>;

	/// Version of the test framework the metadata comes from.
	fn framework_version(&self) -> &str;
}

/// Source file extensions stripped from path-style library names.
const LIBRARY_SOURCE_EXTENSIONS: &[&str] = &[".py", ".java", ".class"];

/// On-disk library spec.
#[derive(Debug, Deserialize)]
struct LibrarySpecFile {
	#[serde(default)]
	name: Option<String>,
	#[serde(default)]
	version: Option<String>,
	#[serde(default)]
	keywords: Vec<KeywordSpec>,
}

/// Reads library specs from a list of directories.
///
/// A library named `Collections` is looked up as `Collections.json` in each
/// directory in order; the first hit wins. Library names given as paths
/// (`libs/MyLib.py`) use the file name without its source extension. Dotted
/// module names are kept whole. Import arguments do not select a different
/// spec.
#[derive(Debug, Clone)]
pub struct SpecDirIntrospector {
	dirs: Vec<PathBuf>,
	framework_version: String,
}

impl SpecDirIntrospector {
	pub fn new(dirs: Vec<PathBuf>, framework_version: impl Into<String>) -> Self {
		Self {
			dirs,
			framework_version: framework_version.into(),
		}
	}

	pub fn dirs(&self) -> &[PathBuf] {
		&self.dirs
	}

	fn spec_file_name(library: &str) -> String {
		let base = library.rsplit(['/', '\\']).next().unwrap_or(library);
		let stem = LIBRARY_SOURCE_EXTENSIONS
			.iter()
			.find_map(|ext| base.strip_suffix(ext))
			.unwrap_or(base);
		format!("{stem}.json")
	}

	fn read_spec(path: &Path) -> Result<Option<LibrarySpecFile>, IntrospectError> {
		let content = match std::fs::read_to_string(path) {
			Ok(content) => content,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
			Err(e) => {
				return Err(IntrospectError::Io {
					path: path.to_path_buf(),
					error: e,
				});
			}
		};
		serde_json::from_str(&content)
			.map(Some)
			.map_err(|e| IntrospectError::Parse {
				path: path.to_path_buf(),
				error: e,
			})
	}
}

impl LibraryIntrospector for SpecDirIntrospector {
	fn introspect(&self, id: &LibraryIdentity) -> Result<Vec<KeywordSpec>, IntrospectError> {
		let file_name = Self::spec_file_name(id.name());
		for dir in &self.dirs {
			let path = dir.join(&file_name);
			let Some(spec) = Self::read_spec(&path)? else {
				continue;
			};
			let library = spec.name.unwrap_or_else(|| id.name().to_string());
			tracing::debug!(
				library = %library,
				version = spec.version.as_deref().unwrap_or("unknown"),
				keywords = spec.keywords.len(),
				path = %path.display(),
				"loaded library spec"
			);
			return Ok(spec
				.keywords
				.into_iter()
				.map(|mut kw| {
					kw.library = library.clone();
					kw
				})
				.collect());
		}
		Err(IntrospectError::NotFound(id.name().to_string()))
	}

	fn framework_version(&self) -> &str {
		&self.framework_version
	}
}

/// In-memory introspector keyed by library name.
#[derive(Debug, Clone, Default)]
pub struct StaticIntrospector {
	libraries: HashMap<String, Vec<KeywordSpec>>,
	framework_version: String,
}

impl StaticIntrospector {
	pub fn new(framework_version: impl Into<String>) -> Self {
		Self {
			libraries: HashMap::new(),
			framework_version: framework_version.into(),
		}
	}

	/// Registers a library whose keywords are the given names.
	pub fn with_library<I, S>(mut self, name: &str, keywords: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let keywords = keywords
			.into_iter()
			.map(|kw| KeywordSpec::new(kw, name))
			.collect();
		self.libraries.insert(name.to_string(), keywords);
		self
	}

	/// Registers a library with full keyword specs.
	pub fn insert(&mut self, name: impl Into<String>, keywords: Vec<KeywordSpec>) {
		self.libraries.insert(name.into(), keywords);
	}
}

impl LibraryIntrospector for StaticIntrospector {
	fn introspect(&self, id: &LibraryIdentity) -> Result<Vec<KeywordSpec>, IntrospectError> {
		self.libraries
			.get(id.name())
			.cloned()
			.ok_or_else(|| IntrospectError::NotFound(id.name().to_string()))
	}

	fn framework_version(&self) -> &str {
		&self.framework_version
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn write_spec(dir: &Path, file: &str, content: &str) {
		std::fs::write(dir.join(file), content).unwrap();
	}

	#[test]
	fn reads_spec_and_tags_library() {
		let dir = tempfile::tempdir().unwrap();
		write_spec(
			dir.path(),
			"Collections.json",
			r#"{"name": "Collections", "version": "7.0", "keywords": [
				{"name": "Append To List", "args": ["list_", "*values"], "doc": "Adds values."},
				{"name": "Copy List", "args": ["list_"]}
			]}"#,
		);

		let introspector = SpecDirIntrospector::new(vec![dir.path().to_path_buf()], "7.0");
		let keywords = introspector
			.introspect(&LibraryIdentity::new("Collections", ["ignored"]))
			.unwrap();

		assert_eq!(keywords.len(), 2);
		assert_eq!(keywords[0].name, "Append To List");
		assert_eq!(keywords[0].args, vec!["list_".to_string(), "*values".to_string()]);
		assert!(keywords.iter().all(|kw| kw.library == "Collections"));
	}

	#[test]
	fn first_directory_wins_and_paths_use_stem() {
		let first = tempfile::tempdir().unwrap();
		let second = tempfile::tempdir().unwrap();
		write_spec(first.path(), "MyLib.json", r#"{"keywords": [{"name": "First"}]}"#);
		write_spec(second.path(), "MyLib.json", r#"{"keywords": [{"name": "Second"}]}"#);

		let introspector = SpecDirIntrospector::new(
			vec![first.path().to_path_buf(), second.path().to_path_buf()],
			"7.0",
		);
		let keywords = introspector
			.introspect(&LibraryIdentity::named("libs/MyLib.py"))
			.unwrap();

		assert_eq!(keywords, vec![KeywordSpec::new("First", "libs/MyLib.py")]);
	}

	#[test]
	fn spec_file_names() {
		assert_eq!(SpecDirIntrospector::spec_file_name("BuiltIn"), "BuiltIn.json");
		assert_eq!(SpecDirIntrospector::spec_file_name("C:\\libs\\Lib.java"), "Lib.json");
		assert_eq!(
			SpecDirIntrospector::spec_file_name("robot.libraries.Dialogs"),
			"robot.libraries.Dialogs.json"
		);
	}

	#[test]
	fn missing_and_malformed_specs() {
		let dir = tempfile::tempdir().unwrap();
		write_spec(dir.path(), "Broken.json", "{ not json");
		let introspector = SpecDirIntrospector::new(vec![dir.path().to_path_buf()], "7.0");

		assert!(matches!(
			introspector.introspect(&LibraryIdentity::named("Nope")),
			Err(IntrospectError::NotFound(name)) if name == "Nope"
		));
		assert!(matches!(
			introspector.introspect(&LibraryIdentity::named("Broken")),
			Err(IntrospectError::Parse { .. })
		));
	}

	#[test]
	fn static_introspector_ignores_args() {
		let introspector = StaticIntrospector::new("7.0").with_library("BuiltIn", ["Log", "No Operation"]);
		let keywords = introspector
			.introspect(&LibraryIdentity::new("BuiltIn", ["x"]))
			.unwrap();
		assert_eq!(keywords.len(), 2);
		assert_eq!(introspector.framework_version(), "7.0");
	}
}
