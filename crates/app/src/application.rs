//! The application object tying the namespace, model, window and plugins
//! together.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ryde_config::Settings;
use ryde_messages::{LogMessage, MessageBus, MessagePublisher};
use ryde_namespace::{LibraryIntrospector, Namespace};

use crate::VERSION;
use crate::editor_provider::{EditorKind, EditorProvider, ObjectKind};
use crate::error::Result;
use crate::plugin::{Plugin, PluginContext, PluginLoader, PluginStatus};
use crate::version::check_framework_version;
use crate::window::{
	DataController, HighlightTarget, ItemRef, LoadObserver, MainWindow, MessageLoadObserver,
	TabKind,
};

/// Everything [`Application::start`] needs.
pub struct Startup<C, W> {
	pub settings: Settings,
	/// Test data to open right away.
	pub initial_path: Option<PathBuf>,
	pub introspector: Arc<dyn LibraryIntrospector>,
	pub controller: C,
	pub window: W,
	pub plugins: Vec<Box<dyn Plugin>>,
	pub messages: MessageBus,
}

/// A running IDE session.
pub struct Application<C, W> {
	namespace: Namespace,
	controller: C,
	window: W,
	editors: EditorProvider,
	plugins: PluginLoader,
	messages: MessageBus,
}

impl<C: DataController, W: MainWindow> Application<C, W> {
	/// Starts the application.
	///
	/// Fails if the test framework is too old or a default library cannot be
	/// loaded. Plugin and data loading failures are published on the message
	/// bus instead.
	pub fn start(startup: Startup<C, W>) -> Result<Self> {
		let Startup {
			settings,
			initial_path,
			introspector,
			controller,
			window,
			plugins,
			messages,
		} = startup;

		let framework_version = introspector.framework_version().to_string();
		check_framework_version(&framework_version)?;

		let namespace = Namespace::new(
			introspector,
			Arc::new(messages.clone()),
			&settings.auto_imports,
			settings.content_cache_timeout(),
		)?;

		let mut app = Self {
			namespace,
			controller,
			window,
			editors: EditorProvider::new(),
			plugins: PluginLoader::new(settings.plugin_search_dirs(), plugins),
			messages,
		};

		app.enable_plugins();
		if let Some(path) = &initial_path {
			app.load_data(path);
		}
		app.window.populate_tree(&app.controller);
		app.publish_system_info(&framework_version);

		Ok(app)
	}

	/// Loads test data from `path` and rebuilds the tree.
	pub fn open(&mut self, path: &Path) -> bool {
		let loaded = self.load_data(path);
		self.window.populate_tree(&self.controller);
		loaded
	}

	/// Highlights a location inside a test case or user keyword.
	///
	/// Selects the item in the tree, brings the editor page to the front and
	/// asks its editor to highlight `target`. Returns whether an editor did
	/// so.
	pub fn highlight(&mut self, item: &ItemRef, target: &HighlightTarget) -> bool {
		if !self.window.select_item(item) {
			tracing::debug!(item = %item.name, "no tree node for highlighted item");
		}
		let Some(index) = self.find_edit_tab() else {
			return false;
		};
		self.window.show_tab(index);

		let Some(editor) = self.window.page_mut(index).and_then(|tab| tab.editor_mut()) else {
			return false;
		};
		let highlighted = editor.highlight(target);
		if !highlighted {
			tracing::debug!(item = %item.name, "editor does not support highlighting");
		}
		highlighted
	}

	/// Index of the first editor page in the notebook.
	///
	/// Only one editor page is expected to be open.
	pub fn find_edit_tab(&self) -> Option<usize> {
		(0..self.window.page_count()).find(|&index| {
			self.window
				.page(index)
				.is_some_and(|tab| tab.kind() == TabKind::Editor)
		})
	}

	pub fn register_editor(&mut self, kind: ObjectKind, editor: EditorKind, activate: bool) {
		self.editors.register_editor(kind, editor, activate);
	}

	pub fn unregister_editor(&mut self, kind: ObjectKind, editor: EditorKind) -> bool {
		self.editors.unregister_editor(kind, editor)
	}

	pub fn activate_editor(&mut self, kind: ObjectKind, editor: EditorKind) -> bool {
		self.editors.set_active_editor(kind, editor)
	}

	pub fn get_editors(&self, kind: ObjectKind) -> &[EditorKind] {
		self.editors.get_editors(kind)
	}

	pub fn get_editor(&self, kind: ObjectKind) -> Option<EditorKind> {
		self.editors.get_editor(kind)
	}

	pub fn plugins(&self) -> Vec<PluginStatus> {
		self.plugins.plugins()
	}

	pub fn plugin_search_dirs(&self) -> &[PathBuf] {
		self.plugins.search_dirs()
	}

	pub fn disable_plugin(&mut self, name: &str) -> bool {
		let mut ctx = PluginContext {
			editors: &mut self.editors,
			messages: &self.messages,
		};
		self.plugins.disable_plugin(name, &mut ctx)
	}

	pub fn enable_plugin(&mut self, name: &str) -> bool {
		let mut ctx = PluginContext {
			editors: &mut self.editors,
			messages: &self.messages,
		};
		self.plugins.enable_plugin(name, &mut ctx)
	}

	/// The data model.
	pub fn model(&self) -> &C {
		&self.controller
	}

	pub fn window(&self) -> &W {
		&self.window
	}

	pub fn window_mut(&mut self) -> &mut W {
		&mut self.window
	}

	pub fn namespace(&self) -> &Namespace {
		&self.namespace
	}

	pub fn namespace_mut(&mut self) -> &mut Namespace {
		&mut self.namespace
	}

	pub fn messages(&self) -> &MessageBus {
		&self.messages
	}

	fn enable_plugins(&mut self) {
		let mut ctx = PluginContext {
			editors: &mut self.editors,
			messages: &self.messages,
		};
		self.plugins.enable_plugins(&mut ctx);
	}

	fn load_data(&mut self, path: &Path) -> bool {
		let mut observer = MessageLoadObserver::new(&self.messages);
		match self.controller.load_data(path, &mut observer) {
			Ok(()) => true,
			Err(err) => {
				tracing::warn!(path = %path.display(), error = %err, "loading test data failed");
				observer.error(&err.to_string());
				false
			}
		}
	}

	fn publish_system_info(&self, framework_version: &str) {
		self.messages.publish(LogMessage::info(format!(
			"Started ryde version {VERSION}, running on {}, test framework version {framework_version}.",
			std::env::consts::OS
		)));
	}
}

#[cfg(test)]
mod tests;
