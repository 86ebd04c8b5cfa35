// Frontends render through their own toolkit; the shell reports via tracing
// and the message bus only.
#![deny(clippy::print_stderr, clippy::print_stdout)]

//! Application shell for ryde.
//!
//! Wires the keyword [`Namespace`](ryde_namespace::Namespace), the data model,
//! the main window, the plugin loader and the editor registry into an
//! [`Application`]. The GUI and the data model are reached through the traits
//! in [`window`], so the shell runs headless in tests.
//!
//! * [`application`]: start-up sequence, editor registry passthroughs, highlighting
//! * [`editor_provider`]: which editors exist for which object kinds
//! * [`plugin`]: the [`Plugin`] trait and the [`PluginLoader`]
//! * [`version`]: the minimum test framework version gate
//! * [`window`]: window, tab, editor and data controller seams

pub mod application;
pub mod editor_provider;
pub mod error;
pub mod plugin;
pub mod version;
pub mod window;

pub use application::{Application, Startup};
pub use editor_provider::{EditorKind, EditorProvider, ObjectKind};
pub use error::{AppError, LoadError, PluginError, Result};
pub use plugin::{Plugin, PluginContext, PluginLoader, PluginStatus};
pub use version::{MIN_FRAMEWORK_VERSION, check_framework_version, compare_versions};
pub use window::{
	DataController, Editor, HighlightTarget, ItemKind, ItemRef, LoadObserver, MainWindow,
	MessageLoadObserver, Tab, TabKind,
};

/// Version of this build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
