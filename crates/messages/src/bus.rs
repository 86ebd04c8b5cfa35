//! Synchronous publish/subscribe channel for [`LogMessage`]s.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::{Level, LogMessage};

type Listener = Arc<dyn Fn(&LogMessage) + Send + Sync>;

/// Anything that accepts published messages.
pub trait MessagePublisher: Send + Sync {
	/// Delivers `message` to whoever is listening.
	fn publish(&self, message: LogMessage);
}

/// Publisher that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPublisher;

impl MessagePublisher for NullPublisher {
	fn publish(&self, _message: LogMessage) {}
}

/// Handle returned by [`MessageBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct BusInner {
	listeners: Mutex<Vec<(Subscription, Listener)>>,
	next_id: AtomicU64,
}

/// Cloneable handle to a shared message bus.
///
/// Every clone publishes to and subscribes on the same listener list.
/// Delivery happens on the publishing thread; listeners run outside the lock,
/// so a listener may subscribe or unsubscribe while being called.
#[derive(Clone)]
pub struct MessageBus {
	inner: Arc<BusInner>,
}

impl MessageBus {
	/// Creates a bus with no listeners.
	pub fn new() -> Self {
		Self {
			inner: Arc::new(BusInner {
				listeners: Mutex::new(Vec::new()),
				next_id: AtomicU64::new(1),
			}),
		}
	}

	/// Registers a listener and returns its subscription handle.
	pub fn subscribe(&self, listener: impl Fn(&LogMessage) + Send + Sync + 'static) -> Subscription {
		let id = Subscription(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
		self.inner.listeners.lock().push((id, Arc::new(listener)));
		id
	}

	/// Removes a listener. Returns false if it was not subscribed.
	pub fn unsubscribe(&self, subscription: Subscription) -> bool {
		let mut listeners = self.inner.listeners.lock();
		let before = listeners.len();
		listeners.retain(|(id, _)| *id != subscription);
		listeners.len() != before
	}

	/// Number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.inner.listeners.lock().len()
	}
}

impl Default for MessageBus {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for MessageBus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MessageBus")
			.field("listeners", &self.listener_count())
			.finish()
	}
}

impl MessagePublisher for MessageBus {
	fn publish(&self, message: LogMessage) {
		trace_message(&message);
		let listeners: Vec<Listener> = self
			.inner
			.listeners
			.lock()
			.iter()
			.map(|(_, listener)| Arc::clone(listener))
			.collect();
		for listener in listeners {
			listener(&message);
		}
	}
}

fn trace_message(message: &LogMessage) {
	let exception = message.exception.as_deref().unwrap_or_default();
	match message.level {
		Level::Error => tracing::error!(exception, "{}", message.message),
		Level::Warn => tracing::warn!(exception, "{}", message.message),
		Level::Info => tracing::info!("{}", message.message),
		Level::Debug => tracing::debug!("{}", message.message),
	}
}

#[cfg(test)]
mod tests;
