//! Cross-component notification channel.
//!
//! The timeline publishes the event a user picked; other mounted components
//! observe it without either side holding a reference to the other. Delivery
//! is synchronous and best-effort: publishing with no subscribers is a no-op
//! and late subscribers get no replay. Dispatch happens on the single UI
//! thread, but the bus travels through Leptos context and its subscriptions
//! drop inside `on_cleanup`, both of which require `Send + Sync`, so the
//! registry is sync all the way down.

use std::sync::{Arc, Mutex, Weak};

use log::trace;

use crate::data::TimelineEvent;

type Handler = Arc<dyn Fn(&TimelineEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
	next_id: usize,
	handlers: Vec<(usize, Handler)>,
}

/// In-process broadcast channel for timeline selections.
///
/// Cheap to clone; clones share one subscriber registry. Provided to the
/// component tree through Leptos context.
#[derive(Clone, Default)]
pub struct TimelineBus {
	inner: Arc<Mutex<Registry>>,
}

impl TimelineBus {
	/// Create an empty bus.
	pub fn new() -> Self {
		Self::default()
	}

	/// Deliver `event` to every live subscriber.
	pub fn publish(&self, event: &TimelineEvent) {
		// Snapshot before dispatch so a handler may publish or subscribe
		// without re-entering the registry lock.
		let handlers: Vec<Handler> = self
			.inner
			.lock()
			.unwrap()
			.handlers
			.iter()
			.map(|(_, h)| h.clone())
			.collect();
		trace!(
			"timeline event {:?} published to {} subscriber(s)",
			event.title,
			handlers.len()
		);
		for handler in handlers {
			handler(event);
		}
	}

	/// Register `handler` for future publications.
	///
	/// The handler stays registered until the returned [`Subscription`] is
	/// dropped; tie it to component lifetime with `on_cleanup`.
	#[must_use]
	pub fn subscribe(&self, handler: impl Fn(&TimelineEvent) + Send + Sync + 'static) -> Subscription {
		let mut registry = self.inner.lock().unwrap();
		let id = registry.next_id;
		registry.next_id += 1;
		registry.handlers.push((id, Arc::new(handler)));
		Subscription {
			id,
			registry: Arc::downgrade(&self.inner),
		}
	}

	/// Number of live subscribers.
	pub fn subscriber_count(&self) -> usize {
		self.inner.lock().unwrap().handlers.len()
	}
}

/// Handle to one registered subscriber; dropping it unregisters.
pub struct Subscription {
	id: usize,
	registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade() {
			if let Ok(mut registry) = registry.lock() {
				registry.handlers.retain(|(id, _)| *id != self.id);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicU32, Ordering};

	fn sample_event() -> TimelineEvent {
		TimelineEvent {
			time: "1970-09-18".into(),
			title: "Single Release".into(),
			description: "Charted at #4 in the UK.".into(),
			linked_region: Some("Chorus".into()),
		}
	}

	#[test]
	fn bus_and_subscription_cross_context_bounds() {
		// Context provision and `on_cleanup` both demand these bounds.
		fn assert_bounds<T: Send + Sync>() {}
		assert_bounds::<TimelineBus>();
		assert_bounds::<Subscription>();
	}

	#[test]
	fn publish_without_subscribers_is_a_noop() {
		let bus = TimelineBus::new();
		bus.publish(&sample_event());
		assert_eq!(bus.subscriber_count(), 0);
	}

	#[test]
	fn one_subscriber_receives_exactly_one_call() {
		let bus = TimelineBus::new();
		let calls = Arc::new(AtomicU32::new(0));
		let seen = Arc::new(Mutex::new(None::<TimelineEvent>));
		let (calls_in, seen_in) = (calls.clone(), seen.clone());
		let _sub = bus.subscribe(move |event| {
			calls_in.fetch_add(1, Ordering::SeqCst);
			*seen_in.lock().unwrap() = Some(event.clone());
		});

		bus.publish(&sample_event());
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(*seen.lock().unwrap(), Some(sample_event()));
	}

	#[test]
	fn every_subscriber_sees_every_publication() {
		let bus = TimelineBus::new();
		let a = Arc::new(AtomicU32::new(0));
		let b = Arc::new(AtomicU32::new(0));
		let a_in = a.clone();
		let b_in = b.clone();
		let _sub_a = bus.subscribe(move |_| {
			a_in.fetch_add(1, Ordering::SeqCst);
		});
		let _sub_b = bus.subscribe(move |_| {
			b_in.fetch_add(1, Ordering::SeqCst);
		});

		bus.publish(&sample_event());
		bus.publish(&sample_event());
		assert_eq!((a.load(Ordering::SeqCst), b.load(Ordering::SeqCst)), (2, 2));
	}

	#[test]
	fn dropping_the_subscription_stops_delivery() {
		let bus = TimelineBus::new();
		let calls = Arc::new(AtomicU32::new(0));
		let calls_in = calls.clone();
		let sub = bus.subscribe(move |_| {
			calls_in.fetch_add(1, Ordering::SeqCst);
		});

		bus.publish(&sample_event());
		drop(sub);
		bus.publish(&sample_event());
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(bus.subscriber_count(), 0);
	}

	#[test]
	fn late_subscribers_get_no_replay() {
		let bus = TimelineBus::new();
		bus.publish(&sample_event());

		let calls = Arc::new(AtomicU32::new(0));
		let calls_in = calls.clone();
		let _sub = bus.subscribe(move |_| {
			calls_in.fetch_add(1, Ordering::SeqCst);
		});
		assert_eq!(calls.load(Ordering::SeqCst), 0);

		bus.publish(&sample_event());
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn clones_share_one_registry() {
		let bus = TimelineBus::new();
		let other = bus.clone();
		let calls = Arc::new(AtomicU32::new(0));
		let calls_in = calls.clone();
		let _sub = other.subscribe(move |_| {
			calls_in.fetch_add(1, Ordering::SeqCst);
		});

		bus.publish(&sample_event());
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}
}
