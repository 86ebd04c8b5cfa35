use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use ryde_messages::{Level, MessageLog};
use ryde_namespace::{LibraryIdentity, StaticIntrospector};

use super::*;
use crate::error::{AppError, LoadError, PluginError};
use crate::window::{Editor, LoadObserver, Tab};

#[derive(Default)]
struct FakeController {
	path: Option<PathBuf>,
	fail: bool,
}

impl DataController for FakeController {
	fn load_data(&mut self, path: &Path, observer: &mut dyn LoadObserver) -> std::result::Result<(), LoadError> {
		if self.fail {
			return Err(LoadError {
				path: path.to_path_buf(),
				reason: "no such suite".into(),
			});
		}
		observer.notify();
		self.path = Some(path.to_path_buf());
		observer.finish();
		Ok(())
	}

	fn data_path(&self) -> Option<&Path> {
		self.path.as_deref()
	}
}

type Highlights = Rc<RefCell<Vec<HighlightTarget>>>;

struct GridEditor {
	supports_highlight: bool,
	highlights: Highlights,
}

impl Editor for GridEditor {
	fn highlight(&mut self, target: &HighlightTarget) -> bool {
		if !self.supports_highlight {
			return false;
		}
		self.highlights.borrow_mut().push(target.clone());
		true
	}
}

struct PlainEditor;

impl Editor for PlainEditor {}

enum FakeTab {
	Log,
	Edit(Box<dyn Editor>),
}

impl Tab for FakeTab {
	fn kind(&self) -> TabKind {
		match self {
			FakeTab::Log => TabKind::Other,
			FakeTab::Edit(_) => TabKind::Editor,
		}
	}

	fn editor_mut(&mut self) -> Option<&mut dyn Editor> {
		match self {
			FakeTab::Log => None,
			FakeTab::Edit(editor) => Some(editor.as_mut()),
		}
	}
}

#[derive(Default)]
struct FakeWindow {
	tabs: Vec<FakeTab>,
	populated_with: Vec<Option<PathBuf>>,
	selected: Vec<ItemRef>,
	shown: Vec<usize>,
}

impl MainWindow for FakeWindow {
	fn populate_tree(&mut self, model: &dyn DataController) {
		self.populated_with.push(model.data_path().map(Path::to_path_buf));
	}

	fn select_item(&mut self, item: &ItemRef) -> bool {
		self.selected.push(item.clone());
		true
	}

	fn page_count(&self) -> usize {
		self.tabs.len()
	}

	fn page(&self, index: usize) -> Option<&dyn Tab> {
		self.tabs.get(index).map(|tab| tab as &dyn Tab)
	}

	fn page_mut(&mut self, index: usize) -> Option<&mut dyn Tab> {
		self.tabs.get_mut(index).map(|tab| tab as &mut dyn Tab)
	}

	fn show_tab(&mut self, index: usize) {
		self.shown.push(index);
	}
}

struct RegisteringPlugin;

impl Plugin for RegisteringPlugin {
	fn name(&self) -> &str {
		"text-edit"
	}

	fn enable(&mut self, ctx: &mut PluginContext<'_>) -> std::result::Result<(), PluginError> {
		ctx.editors
			.register_editor(ObjectKind("test-case"), EditorKind("text"), true);
		Ok(())
	}

	fn disable(&mut self, ctx: &mut PluginContext<'_>) {
		ctx.editors
			.unregister_editor(ObjectKind("test-case"), EditorKind("text"));
	}
}

fn introspector(version: &str) -> Arc<dyn LibraryIntrospector> {
	Arc::new(
		StaticIntrospector::new(version)
			.with_library("BuiltIn", ["Log", "No Operation"])
			.with_library("Collections", ["Copy List"]),
	)
}

fn startup(window: FakeWindow) -> (Startup<FakeController, FakeWindow>, MessageLog) {
	let messages = MessageBus::new();
	let log = MessageLog::new();
	log.attach(&messages);
	let startup = Startup {
		settings: Settings {
			auto_imports: vec!["Collections".into()],
			..Settings::default()
		},
		initial_path: None,
		introspector: introspector("7.0"),
		controller: FakeController::default(),
		window,
		plugins: vec![Box::new(RegisteringPlugin) as Box<dyn Plugin>],
		messages,
	};
	(startup, log)
}

fn start(window: FakeWindow) -> (Application<FakeController, FakeWindow>, MessageLog) {
	let (startup, log) = startup(window);
	(Application::start(startup).unwrap(), log)
}

#[test]
fn start_loads_data_populates_tree_and_reports() {
	let (mut startup, log) = startup(FakeWindow::default());
	startup.initial_path = Some(PathBuf::from("suites/login.robot"));

	let app = Application::start(startup).unwrap();

	assert_eq!(app.model().data_path(), Some(Path::new("suites/login.robot")));
	assert_eq!(
		app.window().populated_with,
		vec![Some(PathBuf::from("suites/login.robot"))]
	);
	let info = log.at_level(Level::Info);
	assert_eq!(info.len(), 1);
	assert!(info[0].message.starts_with("Started ryde version"));
	assert!(info[0].message.contains("test framework version 7.0"));
}

#[test]
fn start_without_path_still_populates() {
	let (app, _log) = start(FakeWindow::default());
	assert_eq!(app.window().populated_with, vec![None]);
}

#[test]
fn old_framework_is_rejected() {
	let (mut startup, _log) = startup(FakeWindow::default());
	startup.introspector = introspector("2.1");

	assert!(matches!(
		Application::start(startup),
		Err(AppError::UnsupportedFramework { .. })
	));
}

#[test]
fn missing_default_library_is_fatal() {
	let (mut startup, _log) = startup(FakeWindow::default());
	startup.settings.auto_imports = vec!["Selenium|chrome".into()];

	let err = Application::start(startup).err().unwrap();
	assert!(matches!(err, AppError::Namespace(_)));
	assert!(err.to_string().contains("Selenium"));
}

#[test]
fn load_failure_is_reported_not_fatal() {
	let (mut startup, log) = startup(FakeWindow::default());
	startup.controller.fail = true;
	startup.initial_path = Some(PathBuf::from("missing.robot"));

	let mut app = Application::start(startup).unwrap();

	let errors = log.at_level(Level::Error);
	assert_eq!(errors.len(), 1);
	assert!(errors[0].message.contains("no such suite"));
	assert!(!app.open(Path::new("other.robot")));
	assert_eq!(app.window().populated_with.len(), 2);
}

#[test]
fn plugins_register_editors_at_start() {
	let (mut app, _log) = start(FakeWindow::default());
	let kind = ObjectKind("test-case");

	assert_eq!(app.get_editor(kind), Some(EditorKind("text")));
	app.register_editor(kind, EditorKind("grid"), false);
	assert_eq!(app.get_editors(kind), &[EditorKind("text"), EditorKind("grid")]);
	assert!(app.activate_editor(kind, EditorKind("grid")));
	assert_eq!(app.get_editor(kind), Some(EditorKind("grid")));

	assert!(app.disable_plugin("text-edit"));
	assert_eq!(app.get_editors(kind), &[EditorKind("grid")]);
	assert!(!app.plugins()[0].enabled);
	assert!(app.enable_plugin("text-edit"));
	assert!(app.unregister_editor(kind, EditorKind("text")));
}

#[test]
fn highlight_uses_first_editor_tab() {
	let first: Highlights = Rc::default();
	let second: Highlights = Rc::default();
	let window = FakeWindow {
		tabs: vec![
			FakeTab::Log,
			FakeTab::Edit(Box::new(GridEditor {
				supports_highlight: true,
				highlights: first.clone(),
			})),
			FakeTab::Edit(Box::new(GridEditor {
				supports_highlight: true,
				highlights: second.clone(),
			})),
		],
		..FakeWindow::default()
	};
	let (mut app, _log) = start(window);
	let item = ItemRef::user_keyword("Login With Credentials");
	let target = HighlightTarget {
		object: Some("Input Text".into()),
		row: Some(2),
		column: None,
	};

	assert_eq!(app.find_edit_tab(), Some(1));
	assert!(app.highlight(&item, &target));

	assert_eq!(app.window().selected, vec![item]);
	assert_eq!(app.window().shown, vec![1]);
	assert_eq!(*first.borrow(), vec![target]);
	assert!(second.borrow().is_empty());
}

#[test]
fn highlight_without_editor_tab_does_nothing() {
	let window = FakeWindow {
		tabs: vec![FakeTab::Log],
		..FakeWindow::default()
	};
	let (mut app, _log) = start(window);

	assert!(!app.highlight(&ItemRef::test_case("Valid Login"), &HighlightTarget::default()));
	assert!(app.window().shown.is_empty());
}

#[test]
fn highlight_with_unsupporting_editor_still_shows_tab() {
	let window = FakeWindow {
		tabs: vec![FakeTab::Edit(Box::new(PlainEditor))],
		..FakeWindow::default()
	};
	let (mut app, _log) = start(window);

	assert!(!app.highlight(&ItemRef::test_case("Valid Login"), &HighlightTarget::default()));
	assert_eq!(app.window().shown, vec![0]);
}

#[test]
fn namespace_sees_auto_imports() {
	let (mut app, _log) = start(FakeWindow::default());

	let names: Vec<String> = app
		.namespace()
		.default_keywords()
		.into_iter()
		.map(|kw| kw.name)
		.collect();
	assert_eq!(names, vec!["Copy List", "Log", "No Operation"]);

	let imports = [LibraryIdentity::named("Unknown")];
	assert_eq!(app.namespace_mut().suggestions("no", &imports).len(), 1);
	assert!(app.plugin_search_dirs().is_empty());
	assert_eq!(app.messages().listener_count(), 1);
}
