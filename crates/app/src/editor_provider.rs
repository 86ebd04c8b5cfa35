//! Registry of editors available for each kind of model object.
//!
//! Plugins register editors for object kinds (test case, user keyword,
//! resource file...). Several editors may exist for one kind; one of them can
//! be marked active and is the one opened by default.

use indexmap::IndexMap;

/// Kind of model object an editor edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectKind(pub &'static str);

/// Identifier of an editor implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorKind(pub &'static str);

#[derive(Debug, Default)]
struct EditorList {
	editors: Vec<EditorKind>,
	active: Option<EditorKind>,
}

/// Object kind to editors mapping.
#[derive(Debug, Default)]
pub struct EditorProvider {
	kinds: IndexMap<ObjectKind, EditorList>,
}

impl EditorProvider {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `editor` for `kind`, making it active if `activate` is set.
	///
	/// Registering the same editor twice keeps a single entry.
	pub fn register_editor(&mut self, kind: ObjectKind, editor: EditorKind, activate: bool) {
		let list = self.kinds.entry(kind).or_default();
		if !list.editors.contains(&editor) {
			list.editors.push(editor);
		}
		if activate {
			list.active = Some(editor);
		}
		tracing::debug!(kind = kind.0, editor = editor.0, activate, "editor registered");
	}

	/// Removes `editor` from `kind`. Returns false if it was not registered.
	pub fn unregister_editor(&mut self, kind: ObjectKind, editor: EditorKind) -> bool {
		let Some(list) = self.kinds.get_mut(&kind) else {
			return false;
		};
		let before = list.editors.len();
		list.editors.retain(|e| *e != editor);
		if list.active == Some(editor) {
			list.active = None;
		}
		list.editors.len() != before
	}

	/// Marks a registered editor active. Returns false if it is unknown.
	pub fn set_active_editor(&mut self, kind: ObjectKind, editor: EditorKind) -> bool {
		match self.kinds.get_mut(&kind) {
			Some(list) if list.editors.contains(&editor) => {
				list.active = Some(editor);
				true
			}
			_ => false,
		}
	}

	/// All editors registered for `kind`, in registration order.
	pub fn get_editors(&self, kind: ObjectKind) -> &[EditorKind] {
		self.kinds
			.get(&kind)
			.map(|list| list.editors.as_slice())
			.unwrap_or_default()
	}

	/// The active editor for `kind`, or the first registered one.
	pub fn get_editor(&self, kind: ObjectKind) -> Option<EditorKind> {
		let list = self.kinds.get(&kind)?;
		list.active.or_else(|| list.editors.first().copied())
	}
}
