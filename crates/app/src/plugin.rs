//! Plugins and the loader that enables them at start-up.
//!
//! Plugins are supplied by the host (core plugins compiled in, or whatever a
//! frontend discovers in the plugin search directories). The loader enables
//! them in order. A plugin that fails to enable is reported on the message
//! bus and left disabled; start-up continues.

use std::path::PathBuf;

use ryde_messages::{Level, LogMessage, MessagePublisher};

use crate::editor_provider::EditorProvider;
use crate::error::PluginError;

/// What a plugin may touch while enabling.
pub struct PluginContext<'a> {
	pub editors: &'a mut EditorProvider,
	pub messages: &'a dyn MessagePublisher,
}

/// An IDE extension.
pub trait Plugin {
	fn name(&self) -> &str;

	/// Hooks the plugin into the application.
	fn enable(&mut self, ctx: &mut PluginContext<'_>) -> Result<(), PluginError>;

	/// Undoes [`enable`](Self::enable).
	fn disable(&mut self, _ctx: &mut PluginContext<'_>) {}
}

/// Snapshot of a loaded plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginStatus {
	pub name: String,
	pub enabled: bool,
	/// Error text from the last failed enable.
	pub error: Option<String>,
}

struct LoadedPlugin {
	plugin: Box<dyn Plugin>,
	enabled: bool,
	error: Option<String>,
}

/// Owns the plugins and their enabled state.
pub struct PluginLoader {
	search_dirs: Vec<PathBuf>,
	plugins: Vec<LoadedPlugin>,
}

impl PluginLoader {
	pub fn new(search_dirs: Vec<PathBuf>, plugins: Vec<Box<dyn Plugin>>) -> Self {
		tracing::debug!(dirs = ?search_dirs, count = plugins.len(), "plugin loader created");
		Self {
			search_dirs,
			plugins: plugins
				.into_iter()
				.map(|plugin| LoadedPlugin {
					plugin,
					enabled: false,
					error: None,
				})
				.collect(),
		}
	}

	/// Directories a frontend should search for additional plugins.
	pub fn search_dirs(&self) -> &[PathBuf] {
		&self.search_dirs
	}

	/// Enables every plugin that is not enabled yet.
	pub fn enable_plugins(&mut self, ctx: &mut PluginContext<'_>) {
		for loaded in self.plugins.iter_mut().filter(|p| !p.enabled) {
			enable(loaded, ctx);
		}
	}

	/// Enables one plugin by name. Returns false if there is no such plugin
	/// or enabling failed.
	pub fn enable_plugin(&mut self, name: &str, ctx: &mut PluginContext<'_>) -> bool {
		match self.find_mut(name) {
			Some(loaded) if loaded.enabled => true,
			Some(loaded) => enable(loaded, ctx),
			None => false,
		}
	}

	/// Disables one plugin by name. Returns false if it was not enabled.
	pub fn disable_plugin(&mut self, name: &str, ctx: &mut PluginContext<'_>) -> bool {
		let Some(loaded) = self.find_mut(name).filter(|p| p.enabled) else {
			return false;
		};
		loaded.plugin.disable(ctx);
		loaded.enabled = false;
		tracing::info!(plugin = name, "plugin disabled");
		true
	}

	pub fn plugins(&self) -> Vec<PluginStatus> {
		self.plugins
			.iter()
			.map(|p| PluginStatus {
				name: p.plugin.name().to_string(),
				enabled: p.enabled,
				error: p.error.clone(),
			})
			.collect()
	}

	fn find_mut(&mut self, name: &str) -> Option<&mut LoadedPlugin> {
		self.plugins.iter_mut().find(|p| p.plugin.name() == name)
	}
}

fn enable(loaded: &mut LoadedPlugin, ctx: &mut PluginContext<'_>) -> bool {
	match loaded.plugin.enable(ctx) {
		Ok(()) => {
			tracing::info!(plugin = loaded.plugin.name(), "plugin enabled");
			loaded.enabled = true;
			loaded.error = None;
			true
		}
		Err(err) => {
			ctx.messages.publish(LogMessage::exception(
				format!("Enabling plugin {} failed.", loaded.plugin.name()),
				&err,
				Level::Error,
			));
			loaded.enabled = false;
			loaded.error = Some(err.reason);
			false
		}
	}
}
