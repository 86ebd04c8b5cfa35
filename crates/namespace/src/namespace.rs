//! Keyword namespace used by completion and validation.

use std::sync::Arc;
use std::time::Duration;

use ryde_messages::MessagePublisher;

use crate::error::Result;
use crate::expiring::{Clock, ExpiringCache, MonotonicClock};
use crate::identity::LibraryIdentity;
use crate::introspect::LibraryIntrospector;
use crate::keyword::{KeywordSpec, normalize_keyword_name};
use crate::library_cache::LibraryKeywordCache;

/// Memo key for completion results: normalized prefix plus the imports in
/// effect.
type ContentKey = (String, Vec<LibraryIdentity>);

/// Keywords visible to a test data file.
///
/// Every file sees the default libraries; imported libraries are resolved
/// through the [`LibraryKeywordCache`]. Completion results are memoized for a
/// short time since editors ask for the same prefix on every keystroke.
#[derive(Debug)]
pub struct Namespace<C = MonotonicClock> {
	libraries: LibraryKeywordCache,
	content_cache: ExpiringCache<ContentKey, Vec<KeywordSpec>, C>,
}

impl Namespace {
	/// Builds a namespace, loading the default libraries.
	pub fn new(
		introspector: Arc<dyn LibraryIntrospector>,
		publisher: Arc<dyn MessagePublisher>,
		auto_imports: &[String],
		content_cache_timeout: Duration,
	) -> Result<Self> {
		Self::with_clock(
			introspector,
			publisher,
			auto_imports,
			content_cache_timeout,
			MonotonicClock,
		)
	}
}

impl<C: Clock> Namespace<C> {
	/// Like [`new`](Namespace::new), timing memoized completions with `clock`.
	pub fn with_clock(
		introspector: Arc<dyn LibraryIntrospector>,
		publisher: Arc<dyn MessagePublisher>,
		auto_imports: &[String],
		content_cache_timeout: Duration,
		clock: C,
	) -> Result<Self> {
		Ok(Self {
			libraries: LibraryKeywordCache::new(introspector, publisher, auto_imports)?,
			content_cache: ExpiringCache::with_clock(content_cache_timeout, clock),
		})
	}

	pub fn library_cache(&self) -> &LibraryKeywordCache {
		&self.libraries
	}

	/// Keywords of one library, loaded on first use.
	pub fn library_keywords(&mut self, name: &str, args: Option<&[String]>) -> Arc<[KeywordSpec]> {
		self.libraries.get_library_keywords(name, args)
	}

	pub fn default_keywords(&self) -> Vec<KeywordSpec> {
		self.libraries.get_default_keywords()
	}

	/// Default keywords followed by the keywords of each import, in order.
	pub fn keywords(&mut self, imports: &[LibraryIdentity]) -> Vec<KeywordSpec> {
		let mut keywords = self.libraries.get_default_keywords();
		for import in imports {
			keywords.extend(self.libraries.get(import.clone()).iter().cloned());
		}
		keywords
	}

	/// Keywords whose normalized name starts with the normalized `prefix`,
	/// sorted by name.
	pub fn suggestions(&mut self, prefix: &str, imports: &[LibraryIdentity]) -> Vec<KeywordSpec> {
		let key: ContentKey = (normalize_keyword_name(prefix), imports.to_vec());
		if let Some(hit) = self.content_cache.get(&key) {
			return hit.clone();
		}

		let mut matches: Vec<KeywordSpec> = self
			.keywords(imports)
			.into_iter()
			.filter(|kw| kw.normalized_name().starts_with(&key.0))
			.collect();
		matches.sort_by(|a, b| {
			a.name
				.to_lowercase()
				.cmp(&b.name.to_lowercase())
				.then_with(|| a.library.cmp(&b.library))
		});
		tracing::trace!(prefix, matches = matches.len(), "completion computed");

		self.content_cache.put(key, matches.clone());
		matches
	}

	/// True if `name` resolves to a keyword of the defaults or the imports.
	pub fn is_known_keyword(&mut self, name: &str, imports: &[LibraryIdentity]) -> bool {
		let wanted = normalize_keyword_name(name);
		if wanted.is_empty() {
			return false;
		}
		self.keywords(imports)
			.iter()
			.any(|kw| kw.normalized_name() == wanted)
	}
}
