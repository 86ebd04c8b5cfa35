//! Bounded in-memory record of published messages.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Level, LogMessage, MessageBus, Subscription};

/// Maximum number of messages a [`MessageLog`] retains.
pub const MAX_LOG_MESSAGES: usize = 1000;

/// Listener that keeps the most recent messages, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
	entries: Arc<RwLock<VecDeque<LogMessage>>>,
}

impl MessageLog {
	/// Creates an empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Subscribes this log to `bus`.
	pub fn attach(&self, bus: &MessageBus) -> Subscription {
		let log = self.clone();
		bus.subscribe(move |msg| log.push(msg.clone()))
	}

	/// Appends a message, evicting the oldest if at capacity.
	pub fn push(&self, message: LogMessage) {
		let mut entries = self.entries.write();
		if entries.len() >= MAX_LOG_MESSAGES {
			entries.pop_front();
		}
		entries.push_back(message);
	}

	/// Snapshot of all retained messages.
	pub fn messages(&self) -> Vec<LogMessage> {
		self.entries.read().iter().cloned().collect()
	}

	/// Retained messages at `level`.
	pub fn at_level(&self, level: Level) -> Vec<LogMessage> {
		self.entries
			.read()
			.iter()
			.filter(|msg| msg.level == level)
			.cloned()
			.collect()
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	pub fn clear(&self) {
		self.entries.write().clear();
	}
}
