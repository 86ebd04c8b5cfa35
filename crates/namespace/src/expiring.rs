//! Key/value cache whose entries go stale after a fixed timeout.
//!
//! Staleness is checked lazily on read. Nothing is ever removed: an expired
//! entry stays in the map until the key is written again, so memory grows with
//! the number of distinct keys.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Default entry lifetime.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Source of the current time.
pub trait Clock {
	fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
	#[inline]
	fn now(&self) -> Instant {
		Instant::now()
	}
}

#[derive(Debug, Clone)]
struct TimedEntry<V> {
	inserted_at: Instant,
	value: V,
}

/// Cache with a fixed time-to-live per entry.
#[derive(Debug, Clone)]
pub struct ExpiringCache<K, V, C = MonotonicClock> {
	entries: HashMap<K, TimedEntry<V>>,
	timeout: Duration,
	clock: C,
}

impl<K: Eq + Hash, V> ExpiringCache<K, V> {
	/// Creates a cache with [`DEFAULT_TIMEOUT`].
	pub fn new() -> Self {
		Self::with_timeout(DEFAULT_TIMEOUT)
	}

	pub fn with_timeout(timeout: Duration) -> Self {
		Self::with_clock(timeout, MonotonicClock)
	}
}

impl<K: Eq + Hash, V> Default for ExpiringCache<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K: Eq + Hash, V, C: Clock> ExpiringCache<K, V, C> {
	/// Creates a cache reading time from `clock`.
	pub fn with_clock(timeout: Duration, clock: C) -> Self {
		Self {
			entries: HashMap::new(),
			timeout,
			clock,
		}
	}

	/// Returns the value for `key` if it was stored less than the timeout ago.
	pub fn get<Q>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		Q: Eq + Hash + ?Sized,
	{
		let entry = self.entries.get(key)?;
		self.is_valid(entry.inserted_at).then_some(&entry.value)
	}

	/// Stores `value`, replacing any previous entry and restarting its lifetime.
	pub fn put(&mut self, key: K, value: V) {
		let inserted_at = self.clock.now();
		self.entries.insert(key, TimedEntry { inserted_at, value });
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// Number of stored entries, stale ones included.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn is_valid(&self, inserted_at: Instant) -> bool {
		self.clock.now().saturating_duration_since(inserted_at) < self.timeout
	}
}

/// Clock that only moves when told to.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ManualClock(std::rc::Rc<std::cell::Cell<Instant>>);

#[cfg(test)]
impl ManualClock {
	pub(crate) fn new() -> Self {
		Self(std::rc::Rc::new(std::cell::Cell::new(Instant::now())))
	}

	pub(crate) fn advance(&self, by: Duration) {
		self.0.set(self.0.get() + by);
	}
}

#[cfg(test)]
impl Clock for ManualClock {
	fn now(&self) -> Instant {
		self.0.get()
	}
}
