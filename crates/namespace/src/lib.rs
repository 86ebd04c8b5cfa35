//! Keyword library cache and completion namespace.
//!
//! Editors ask which keywords are available to a test data file. Answering
//! means introspecting keyword libraries, which is slow, so results are
//! memoized.
//!
//! # Architecture
//!
//! * [`identity`]: [`LibraryIdentity`] keys and auto-import setting parsing
//! * [`keyword`]: [`KeywordSpec`] descriptors and name normalization
//! * [`introspect`]: the [`LibraryIntrospector`] boundary and its implementations
//! * [`library_cache`]: [`LibraryKeywordCache`], the process-lifetime memo
//! * [`expiring`]: [`ExpiringCache`], a short-lived key/value cache
//! * [`namespace`]: [`Namespace`], completion and validation on top of both
//!
//! # Failure handling
//!
//! A library that cannot be introspected on demand is cached as empty and a
//! warning is published on the message bus. Default libraries are different:
//! if one of them fails, building the cache fails.

pub mod error;
pub mod expiring;
pub mod identity;
pub mod introspect;
pub mod keyword;
pub mod library_cache;
pub mod namespace;

pub use error::{IntrospectError, NamespaceError, Result};
pub use expiring::{Clock, DEFAULT_TIMEOUT, ExpiringCache, MonotonicClock};
pub use identity::{LibraryIdentity, parse_library_setting};
pub use introspect::{LibraryIntrospector, SpecDirIntrospector, StaticIntrospector};
pub use keyword::{KeywordSpec, normalize_keyword_name};
pub use library_cache::{BUILTIN_LIBRARY, CachedLibrary, LibraryKeywordCache, LoadStatus};
pub use namespace::Namespace;
