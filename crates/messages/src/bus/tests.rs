use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use super::*;

fn recorder(bus: &MessageBus) -> (Subscription, Arc<Mutex<Vec<String>>>) {
	let seen = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&seen);
	let sub = bus.subscribe(move |msg| sink.lock().push(msg.message.clone()));
	(sub, seen)
}

#[test]
fn publish_reaches_every_listener_in_order() {
	let bus = MessageBus::new();
	let order = Arc::new(Mutex::new(Vec::new()));
	for tag in ["first", "second"] {
		let order = Arc::clone(&order);
		bus.subscribe(move |_| order.lock().push(tag));
	}

	bus.publish(LogMessage::info("hello"));

	assert_eq!(*order.lock(), vec!["first", "second"]);
}

#[test]
fn unsubscribe_stops_delivery() {
	let bus = MessageBus::new();
	let (sub, seen) = recorder(&bus);

	bus.publish(LogMessage::info("one"));
	assert!(bus.unsubscribe(sub));
	assert!(!bus.unsubscribe(sub));
	bus.publish(LogMessage::info("two"));

	assert_eq!(*seen.lock(), vec!["one".to_string()]);
	assert_eq!(bus.listener_count(), 0);
}

#[test]
fn clones_share_listeners() {
	let bus = MessageBus::new();
	let (_sub, seen) = recorder(&bus);

	let other = bus.clone();
	other.publish(LogMessage::info("via clone"));

	assert_eq!(*seen.lock(), vec!["via clone".to_string()]);
}

#[test]
fn listener_may_subscribe_during_delivery() {
	let bus = MessageBus::new();
	let handle = bus.clone();
	bus.subscribe(move |_| {
		handle.subscribe(|_| {});
	});

	bus.publish(LogMessage::info("grow"));

	assert_eq!(bus.listener_count(), 2);
}

#[test]
fn null_publisher_accepts_messages() {
	NullPublisher.publish(LogMessage::info("dropped"));
}
