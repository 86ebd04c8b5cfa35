//! Error types for library introspection and namespace construction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by a [`LibraryIntrospector`](crate::LibraryIntrospector).
#[derive(Debug, Error)]
pub enum IntrospectError {
	/// No spec is available for the library.
	#[error("library '{0}' not found")]
	NotFound(String),

	/// Error reading a library spec file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A library spec file is not valid.
	#[error("invalid library spec {path}: {error}")]
	Parse {
		/// Path to the offending file.
		path: PathBuf,
		/// The underlying JSON error.
		error: serde_json::Error,
	},

	/// The introspection routine itself failed.
	#[error("{0}")]
	Failed(String),
}

/// Errors that can occur when building a namespace.
#[derive(Debug, Error)]
pub enum NamespaceError {
	/// A default (auto-imported or built-in) library could not be loaded.
	#[error("failed to load default library '{name}': {source}")]
	DefaultLibrary {
		/// Library name from the auto-import setting.
		name: String,
		/// Why introspection failed.
		#[source]
		source: IntrospectError,
	},
}

/// Result type for namespace operations.
pub type Result<T> = std::result::Result<T, NamespaceError>;
