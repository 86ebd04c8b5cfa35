use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ryde_namespace::LibraryIdentity;

/// Framework version assumed when none is given.
pub const DEFAULT_FRAMEWORK_VERSION: &str = "7.0";

#[derive(Parser, Debug)]
#[command(name = "ryde")]
#[command(about = "Inspect keyword libraries the way the ryde IDE sees them")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Settings file (defaults to the platform config directory)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Extra directory holding library spec files, searched after the
	/// configured ones
	#[arg(long = "spec-dir", value_name = "DIR")]
	pub spec_dirs: Vec<PathBuf>,

	/// Test framework version reported for the spec files
	#[arg(long, value_name = "VERSION", default_value = DEFAULT_FRAMEWORK_VERSION)]
	pub framework_version: String,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// List the keywords of one library
	Keywords {
		/// Library name
		library: String,
		/// Import arguments
		args: Vec<String>,
	},
	/// List the keywords every file sees
	Defaults,
	/// Complete a keyword prefix
	Complete {
		/// Prefix typed so far
		prefix: String,
		/// Imported library, `name` or `name|arg1|arg2`
		#[arg(long = "import", short = 'i', value_name = "LIBRARY", value_parser = parse_import)]
		imports: Vec<LibraryIdentity>,
	},
	/// Check whether a keyword resolves
	Check {
		/// Keyword name
		keyword: String,
		/// Imported library, `name` or `name|arg1|arg2`
		#[arg(long = "import", short = 'i', value_name = "LIBRARY", value_parser = parse_import)]
		imports: Vec<LibraryIdentity>,
	},
}

fn parse_import(value: &str) -> Result<LibraryIdentity, String> {
	if value.trim().is_empty() {
		return Err("library name is empty".to_string());
	}
	Ok(LibraryIdentity::parse(value))
}
