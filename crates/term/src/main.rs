//! ryde command line frontend.
//!
//! Builds the same keyword namespace the IDE uses (settings, spec
//! directories, default libraries) and answers queries against it:
//! - list the keywords of a library
//! - list the default keywords
//! - complete a keyword prefix
//! - check whether a keyword resolves

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use ryde_app::check_framework_version;
use ryde_config::Settings;
use ryde_messages::{Level, MessageBus};
use ryde_namespace::{KeywordSpec, Namespace, SpecDirIntrospector};
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let settings = load_settings(cli.config.as_deref())?;
	let mut namespace = build_namespace(&cli, &settings)?;

	match cli.command {
		Command::Keywords { library, args } => {
			let args = (!args.is_empty()).then_some(args.as_slice());
			print_keywords(&namespace.library_keywords(&library, args));
		}
		Command::Defaults => print_keywords(&namespace.default_keywords()),
		Command::Complete { prefix, imports } => {
			print_keywords(&namespace.suggestions(&prefix, &imports));
		}
		Command::Check { keyword, imports } => {
			if !namespace.is_known_keyword(&keyword, &imports) {
				println!("{keyword}: not found");
				return Ok(ExitCode::FAILURE);
			}
			println!("{keyword}: ok");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn load_settings(explicit: Option<&std::path::Path>) -> anyhow::Result<Settings> {
	if let Some(path) = explicit {
		return Settings::load(path)
			.with_context(|| format!("failed to load settings from {}", path.display()));
	}
	match Settings::default_path() {
		Some(path) => Settings::load_or_default(&path)
			.with_context(|| format!("failed to load settings from {}", path.display())),
		None => Ok(Settings::default()),
	}
}

fn build_namespace(cli: &Cli, settings: &Settings) -> anyhow::Result<Namespace> {
	check_framework_version(&cli.framework_version)?;

	let spec_dirs: Vec<PathBuf> = settings
		.spec_dirs
		.iter()
		.chain(&cli.spec_dirs)
		.cloned()
		.collect();
	info!(dirs = ?spec_dirs, version = %cli.framework_version, "building namespace");
	let introspector = SpecDirIntrospector::new(spec_dirs, cli.framework_version.clone());

	let messages = MessageBus::new();
	messages.subscribe(|message| {
		if matches!(message.level, Level::Warn | Level::Error) {
			eprintln!("{message}");
		}
	});

	let namespace = Namespace::new(
		Arc::new(introspector),
		Arc::new(messages),
		&settings.auto_imports,
		settings.content_cache_timeout(),
	)?;
	Ok(namespace)
}

fn print_keywords(keywords: &[KeywordSpec]) {
	for keyword in keywords {
		let args = keyword.args.join(", ");
		println!("{}\t{}\t[{args}]\t{}", keyword.name, keyword.library, keyword.short_doc());
	}
}

/// Default `tracing` filter.
///
/// Published messages reach stderr through the bus listener, so the bus's own
/// events are silenced.
fn log_directives(verbose: bool) -> &'static str {
	if verbose {
		"ryde=debug,ryde_namespace=debug,ryde_app=debug,ryde_messages::bus=off,warn"
	} else {
		"ryde_messages::bus=off,warn"
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(log_directives(verbose)));

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}
