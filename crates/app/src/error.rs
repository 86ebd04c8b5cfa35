//! Error types for application start-up and plugins.

use std::path::PathBuf;

use ryde_namespace::NamespaceError;
use thiserror::Error;

/// Errors that abort application start-up.
#[derive(Debug, Error)]
pub enum AppError {
	/// The test framework is older than the oldest supported release.
	#[error("unsupported test framework version {found} (requires {required} or newer)")]
	UnsupportedFramework {
		/// Version reported by the introspector.
		found: String,
		/// Oldest supported version.
		required: &'static str,
	},

	/// The default libraries could not be loaded.
	#[error(transparent)]
	Namespace(#[from] NamespaceError),
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// A plugin refused to enable.
#[derive(Debug, Error)]
#[error("plugin '{plugin}' failed to enable: {reason}")]
pub struct PluginError {
	pub plugin: String,
	pub reason: String,
}

impl PluginError {
	pub fn new(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
		Self {
			plugin: plugin.into(),
			reason: reason.into(),
		}
	}
}

/// Test data could not be loaded.
#[derive(Debug, Error)]
#[error("failed to load {path}: {reason}")]
pub struct LoadError {
	pub path: PathBuf,
	pub reason: String,
}
