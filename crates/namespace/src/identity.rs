//! Library identities and auto-import setting parsing.

use std::fmt;

/// Separator between the library name and its arguments in import settings.
pub const ARG_SEPARATOR: char = '|';

/// A library name together with its import arguments.
///
/// Two identities are equal when the names match and the argument lists match
/// element-wise. Absent arguments and an empty argument list are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LibraryIdentity {
	name: String,
	args: Vec<String>,
}

impl LibraryIdentity {
	/// Creates an identity from a name and arguments.
	pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			args: args.into_iter().map(Into::into).collect(),
		}
	}

	/// Creates an identity for a library imported without arguments.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			args: Vec::new(),
		}
	}

	/// Creates an identity from optional arguments; `None` means no arguments.
	pub fn from_parts(name: &str, args: Option<&[String]>) -> Self {
		Self {
			name: name.to_string(),
			args: args.map(<[String]>::to_vec).unwrap_or_default(),
		}
	}

	/// Parses an auto-import setting (`name` or `name|arg1|arg2...`).
	pub fn parse(setting: &str) -> Self {
		let (name, args) = parse_library_setting(setting);
		Self {
			name,
			args: args.unwrap_or_default(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn args(&self) -> &[String] {
		&self.args
	}
}

impl fmt::Display for LibraryIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		for arg in &self.args {
			write!(f, "{ARG_SEPARATOR}{arg}")?;
		}
		Ok(())
	}
}

/// Splits an auto-import setting into a library name and its arguments.
///
/// `"Collections|arg1|arg2"` yields `("Collections", Some(["arg1", "arg2"]))`,
/// `"BuiltIn"` yields `("BuiltIn", None)`. Parts are not trimmed.
pub fn parse_library_setting(setting: &str) -> (String, Option<Vec<String>>) {
	let mut parts = setting.split(ARG_SEPARATOR);
	let name = parts.next().unwrap_or_default().to_string();
	let args: Vec<String> = parts.map(str::to_string).collect();
	if args.is_empty() {
		(name, None)
	} else {
		(name, Some(args))
	}
}
