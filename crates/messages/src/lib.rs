//! Log messages and the bus that carries them.
//!
//! Producers (the keyword cache, the plugin loader, the application shell)
//! publish [`LogMessage`]s through a [`MessagePublisher`]. Listeners such as a
//! log viewer panel subscribe to a [`MessageBus`] and receive every message
//! synchronously, in subscription order.
//!
//! * [`bus`]: [`MessageBus`], [`Subscription`] and the publisher trait
//! * [`log`]: [`MessageLog`], a bounded listener that records messages

pub mod bus;
pub mod log;

use std::fmt;

pub use bus::{MessageBus, MessagePublisher, NullPublisher, Subscription};
pub use log::{MAX_LOG_MESSAGES, MessageLog};

/// Severity level for a published message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
	/// Informational message (default).
	#[default]
	Info,
	/// Something failed but the application carried on.
	Warn,
	/// An operation failed and the user should know.
	Error,
	/// Developer diagnostics.
	Debug,
}

impl Level {
	/// Upper-case name used in log viewers (`"INFO"`, `"WARN"`, ...).
	pub const fn as_str(self) -> &'static str {
		match self {
			Level::Info => "INFO",
			Level::Warn => "WARN",
			Level::Error => "ERROR",
			Level::Debug => "DEBUG",
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single published log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
	/// Human readable description.
	pub message: String,
	/// Text of the underlying error, when the message reports one.
	pub exception: Option<String>,
	/// Severity.
	pub level: Level,
}

impl LogMessage {
	/// Creates an informational message.
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			exception: None,
			level: Level::Info,
		}
	}

	/// Creates a message reporting `error` at `level`.
	pub fn exception(message: impl Into<String>, error: &dyn std::error::Error, level: Level) -> Self {
		Self {
			message: message.into(),
			exception: Some(error.to_string()),
			level,
		}
	}

	/// Overrides the level.
	pub fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}
}

impl fmt::Display for LogMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.level, self.message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_names() {
		assert_eq!(Level::Info.to_string(), "INFO");
		assert_eq!(Level::Warn.to_string(), "WARN");
		assert_eq!(Level::Error.as_str(), "ERROR");
		assert_eq!(Level::default(), Level::Info);
	}

	#[test]
	fn exception_message_keeps_error_text() {
		let err = std::io::Error::other("boom");
		let msg = LogMessage::exception("loading failed", &err, Level::Warn);
		assert_eq!(msg.exception.as_deref(), Some("boom"));
		assert_eq!(msg.level, Level::Warn);
		assert_eq!(msg.to_string(), "[WARN] loading failed");
	}
}
