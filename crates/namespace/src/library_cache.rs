//! Process-lifetime memo of library keyword lists.
//!
//! Libraries are introspected the first time they are referenced and cached
//! forever afterwards. A library that fails to load is cached too, as an empty
//! list with a [`LoadStatus::Failed`] status, and is not retried.
//!
//! The default libraries (auto-imports plus [`BUILTIN_LIBRARY`]) are loaded
//! eagerly at construction. Unlike on-demand loads, a failure there is fatal
//! and returned to the caller.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use indexmap::IndexMap;
use ryde_messages::{Level, LogMessage, MessagePublisher};

use crate::error::{NamespaceError, Result};
use crate::identity::LibraryIdentity;
use crate::introspect::LibraryIntrospector;
use crate::keyword::KeywordSpec;

/// Library that is always part of the default set.
pub const BUILTIN_LIBRARY: &str = "BuiltIn";

/// Outcome of loading a library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
	/// Introspection succeeded (the keyword list may still be empty).
	Loaded,
	/// Introspection failed with the given error text.
	Failed(String),
}

/// A cached library.
#[derive(Debug, Clone)]
pub struct CachedLibrary {
	keywords: Arc<[KeywordSpec]>,
	status: LoadStatus,
}

impl CachedLibrary {
	pub fn keywords(&self) -> &Arc<[KeywordSpec]> {
		&self.keywords
	}

	pub fn status(&self) -> &LoadStatus {
		&self.status
	}
}

/// Keyword lists keyed by [`LibraryIdentity`].
pub struct LibraryKeywordCache {
	introspector: Arc<dyn LibraryIntrospector>,
	publisher: Arc<dyn MessagePublisher>,
	libraries: HashMap<LibraryIdentity, CachedLibrary>,
	/// Default libraries by name, in configuration order.
	default_libraries: IndexMap<String, Arc<[KeywordSpec]>>,
	default_keywords: Vec<KeywordSpec>,
}

impl LibraryKeywordCache {
	/// Builds the cache and eagerly loads the default libraries.
	///
	/// `auto_imports` holds settings of the form `name` or
	/// `name|arg1|arg2...`; [`BUILTIN_LIBRARY`] is appended. A later setting
	/// naming an already loaded library replaces its keywords but keeps its
	/// position.
	pub fn new(
		introspector: Arc<dyn LibraryIntrospector>,
		publisher: Arc<dyn MessagePublisher>,
		auto_imports: &[String],
	) -> Result<Self> {
		let default_libraries = load_default_libraries(&*introspector, auto_imports)?;
		let default_keywords = default_libraries
			.values()
			.flat_map(|keywords| keywords.iter().cloned())
			.collect();

		Ok(Self {
			introspector,
			publisher,
			libraries: HashMap::new(),
			default_libraries,
			default_keywords,
		})
	}

	/// Loads a library into the cache unless it is already there.
	///
	/// Never fails: an introspection error is published as a warning and the
	/// library is cached with no keywords.
	pub fn add_library(&mut self, name: &str, args: Option<&[String]>) {
		self.load(LibraryIdentity::from_parts(name, args));
	}

	/// Returns the keywords of a library, loading it first if needed.
	pub fn get_library_keywords(&mut self, name: &str, args: Option<&[String]>) -> Arc<[KeywordSpec]> {
		self.get(LibraryIdentity::from_parts(name, args))
	}

	/// Like [`get_library_keywords`](Self::get_library_keywords) for an
	/// existing identity.
	pub fn get(&mut self, id: LibraryIdentity) -> Arc<[KeywordSpec]> {
		Arc::clone(&self.load(id).keywords)
	}

	/// Looks up a library without loading it.
	pub fn cached(&self, name: &str, args: Option<&[String]>) -> Option<&CachedLibrary> {
		self.libraries.get(&LibraryIdentity::from_parts(name, args))
	}

	/// Load outcome for a cached library, `None` if it was never requested.
	pub fn library_status(&self, name: &str, args: Option<&[String]>) -> Option<&LoadStatus> {
		self.cached(name, args).map(CachedLibrary::status)
	}

	/// Keywords of all default libraries, concatenated in default order.
	///
	/// Returns a fresh vector on every call.
	pub fn get_default_keywords(&self) -> Vec<KeywordSpec> {
		self.default_keywords.clone()
	}

	/// Names of the default libraries, in order.
	pub fn default_library_names(&self) -> impl Iterator<Item = &str> {
		self.default_libraries.keys().map(String::as_str)
	}

	/// Number of libraries loaded on demand (defaults excluded).
	pub fn len(&self) -> usize {
		self.libraries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.libraries.is_empty()
	}

	fn load(&mut self, id: LibraryIdentity) -> &CachedLibrary {
		match self.libraries.entry(id) {
			Entry::Occupied(entry) => entry.into_mut(),
			Entry::Vacant(entry) => {
				let library = introspect_library(&*self.introspector, &*self.publisher, entry.key());
				entry.insert(library)
			}
		}
	}
}

impl std::fmt::Debug for LibraryKeywordCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LibraryKeywordCache")
			.field("libraries", &self.libraries.len())
			.field("default_libraries", &self.default_libraries.keys().collect::<Vec<_>>())
			.field("default_keywords", &self.default_keywords.len())
			.finish_non_exhaustive()
	}
}

fn introspect_library(
	introspector: &dyn LibraryIntrospector,
	publisher: &dyn MessagePublisher,
	id: &LibraryIdentity,
) -> CachedLibrary {
	match introspector.introspect(id) {
		Ok(keywords) => {
			tracing::debug!(library = %id, keywords = keywords.len(), "library loaded");
			CachedLibrary {
				keywords: keywords.into(),
				status: LoadStatus::Loaded,
			}
		}
		Err(err) => {
			publisher.publish(LogMessage::exception(
				format!("Importing library {} failed with exception {err}.", id.name()),
				&err,
				Level::Warn,
			));
			CachedLibrary {
				keywords: Arc::from(Vec::new()),
				status: LoadStatus::Failed(err.to_string()),
			}
		}
	}
}

fn load_default_libraries(
	introspector: &dyn LibraryIntrospector,
	auto_imports: &[String],
) -> Result<IndexMap<String, Arc<[KeywordSpec]>>> {
	let mut defaults = IndexMap::new();
	let settings = auto_imports
		.iter()
		.map(String::as_str)
		.chain(std::iter::once(BUILTIN_LIBRARY));

	for setting in settings {
		let id = LibraryIdentity::parse(setting);
		let keywords = introspector
			.introspect(&id)
			.map_err(|source| NamespaceError::DefaultLibrary {
				name: id.name().to_string(),
				source,
			})?;
		tracing::debug!(library = %id, keywords = keywords.len(), "default library loaded");
		defaults.insert(id.name().to_string(), Arc::from(keywords));
	}

	Ok(defaults)
}
