//! Seams to the GUI and the data model.
//!
//! The application shell drives these traits; a frontend implements them on
//! top of its widget toolkit.

use std::path::{Path, PathBuf};

use ryde_messages::{Level, LogMessage, MessagePublisher};

use crate::error::LoadError;

/// Kind of item shown in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
	TestCase,
	UserKeyword,
}

/// Reference to a test case or user keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRef {
	pub kind: ItemKind,
	pub name: String,
	/// File the item is defined in.
	pub source: Option<PathBuf>,
}

impl ItemRef {
	pub fn test_case(name: impl Into<String>) -> Self {
		Self {
			kind: ItemKind::TestCase,
			name: name.into(),
			source: None,
		}
	}

	pub fn user_keyword(name: impl Into<String>) -> Self {
		Self {
			kind: ItemKind::UserKeyword,
			name: name.into(),
			source: None,
		}
	}
}

/// Location inside an item to highlight. `None` means unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightTarget {
	/// Text to highlight, e.g. a keyword name.
	pub object: Option<String>,
	pub row: Option<usize>,
	pub column: Option<usize>,
}

/// Kind of notebook page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
	/// The test case / user keyword editor.
	Editor,
	/// Anything else (log viewer, search results, plugin pages).
	Other,
}

/// Editor hosted in a notebook page.
pub trait Editor {
	/// Highlights `target`. Returns false when unsupported.
	fn highlight(&mut self, _target: &HighlightTarget) -> bool {
		false
	}
}

/// A notebook page.
pub trait Tab {
	fn kind(&self) -> TabKind;

	fn editor_mut(&mut self) -> Option<&mut dyn Editor>;
}

/// The main window: a tree of test data plus a notebook of pages.
pub trait MainWindow {
	/// Rebuilds the tree from the model.
	fn populate_tree(&mut self, model: &dyn DataController);

	/// Selects the tree node of `item`. Returns false if there is none.
	fn select_item(&mut self, item: &ItemRef) -> bool;

	fn page_count(&self) -> usize;

	fn page(&self, index: usize) -> Option<&dyn Tab>;

	fn page_mut(&mut self, index: usize) -> Option<&mut dyn Tab>;

	/// Brings a page to the front.
	fn show_tab(&mut self, index: usize);
}

/// Receives progress while test data loads.
pub trait LoadObserver {
	fn notify(&mut self) {}

	fn finish(&mut self) {}

	fn error(&mut self, _message: &str) {}
}

/// Owner of the loaded test data.
pub trait DataController {
	/// Loads test data from `path`, reporting progress to `observer`.
	fn load_data(&mut self, path: &Path, observer: &mut dyn LoadObserver) -> Result<(), LoadError>;

	/// Path of the loaded data, if any.
	fn data_path(&self) -> Option<&Path>;
}

/// [`LoadObserver`] that reports failures on the message bus.
pub struct MessageLoadObserver<'a> {
	publisher: &'a dyn MessagePublisher,
	steps: usize,
}

impl<'a> MessageLoadObserver<'a> {
	pub fn new(publisher: &'a dyn MessagePublisher) -> Self {
		Self { publisher, steps: 0 }
	}

	/// Progress notifications received so far.
	pub fn steps(&self) -> usize {
		self.steps
	}
}

impl LoadObserver for MessageLoadObserver<'_> {
	fn notify(&mut self) {
		self.steps += 1;
	}

	fn finish(&mut self) {
		tracing::debug!(steps = self.steps, "loading finished");
	}

	fn error(&mut self, message: &str) {
		self.publisher.publish(LogMessage::info(message).with_level(Level::Error));
	}
}
