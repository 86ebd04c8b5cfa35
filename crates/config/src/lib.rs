//! Settings for ryde.
//!
//! Settings are written in TOML. Every key is optional:
//!
//! ```toml
//! # Libraries imported into every namespace. `name|arg1|arg2` passes
//! # import arguments.
//! auto_imports = ["Collections", "Remote|http://localhost:8270"]
//!
//! # Extra directories searched for plugins.
//! plugin_dirs = ["/home/me/.ryde/plugins"]
//!
//! # Installation root; `<install_root>/site-plugins` is searched too.
//! install_root = "/opt/ryde"
//!
//! # Lifetime of memoized completion results.
//! content_cache_timeout_ms = 500
//!
//! # Directories holding library spec files (`<name>.json`).
//! spec_dirs = ["/opt/ryde/specs"]
//! ```
//!
//! ryde looks for `$XDG_CONFIG_HOME/ryde/settings.toml` (or the platform
//! equivalent) unless a path is given explicitly.

pub mod error;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub use error::{ConfigError, Result};

/// Settings file name inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Default lifetime of memoized completion results, in milliseconds.
pub const DEFAULT_CONTENT_CACHE_TIMEOUT_MS: u64 = 500;

/// Parsed settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Auto-import library specs, `name` or `name|arg1|arg2...`.
	pub auto_imports: Vec<String>,
	/// User plugin directories.
	pub plugin_dirs: Vec<PathBuf>,
	/// Installation root.
	pub install_root: Option<PathBuf>,
	/// Lifetime of memoized completion results.
	pub content_cache_timeout_ms: u64,
	/// Library spec search directories.
	pub spec_dirs: Vec<PathBuf>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			auto_imports: Vec::new(),
			plugin_dirs: Vec::new(),
			install_root: None,
			content_cache_timeout_ms: DEFAULT_CONTENT_CACHE_TIMEOUT_MS,
			spec_dirs: Vec::new(),
		}
	}
}

impl Settings {
	/// Parse settings from a TOML string.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load settings from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::from_toml_str(&content)
	}

	/// Load settings from `path`, falling back to defaults when the file does
	/// not exist. Other I/O and parse errors are returned.
	pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		match std::fs::read_to_string(path) {
			Ok(content) => Self::from_toml_str(&content),
			Err(e) if e.kind() == ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "no settings file, using defaults");
				Ok(Self::default())
			}
			Err(e) => Err(ConfigError::Io {
				path: path.to_path_buf(),
				error: e,
			}),
		}
	}

	/// Default settings location, if the platform has a config directory.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("ryde").join(SETTINGS_FILE))
	}

	/// Directories searched for plugins: configured ones first, then
	/// `<install_root>/site-plugins`.
	pub fn plugin_search_dirs(&self) -> Vec<PathBuf> {
		let mut dirs = self.plugin_dirs.clone();
		if let Some(root) = &self.install_root {
			dirs.push(root.join("site-plugins"));
		}
		dirs
	}

	/// Lifetime of memoized completion results.
	pub fn content_cache_timeout(&self) -> Duration {
		Duration::from_millis(self.content_cache_timeout_ms)
	}
}
