//! Store - Observable Value Container
//!
//! `Store<T>` is the reactive primitive behind every piece of client state.
//! It holds a current value that can be read, replaced wholesale, or replaced
//! through a transform of the previous value, and it notifies registered
//! observers synchronously on every change.
//!
//! ## Key Properties
//!
//! - **Immediate delivery**: `subscribe()` invokes the observer once with the
//!   current value before returning.
//! - **Synchronous notification**: `set()` and `update()` notify every live
//!   observer, in subscription order, before they return.
//! - **No equality check**: observers fire even when the new value equals the
//!   previous one.
//! - **Lightweight**: `Store<T>` shares its value via `Rc<RefCell<T>>`, so
//!   clones are cheap and refer to the same underlying cell.

use core::cell::RefCell;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::subscription::Subscription;

/// Unique identifier for a registered observer
///
/// Identifiers are allocated from a monotonically increasing counter, so the
/// natural `Ord` on `SubscriberId` equals subscription order. The observer
/// registry relies on this to notify in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(usize);

impl SubscriberId {
	fn new() -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

/// Type alias for observer callbacks
type ObserverFn<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// Observer registry: iteration order equals insertion order because
/// `SubscriberId` is monotonic.
type Registry<T> = Rc<RefCell<BTreeMap<SubscriberId, ObserverFn<T>>>>;

/// A holder of a current value that notifies observers on every change
///
/// ## Type Parameter
///
/// * `T` - The type of value held. Must be `'static`.
///
/// ## Cloning
///
/// `Store<T>` implements `Clone` and shares both the value and the observer
/// registry. All clones of the same store observe and mutate the same cell.
pub struct Store<T: 'static> {
	value: Rc<RefCell<T>>,
	registry: Registry<T>,
}

impl<T: 'static> Store<T> {
	/// Create a new store holding `value`
	///
	/// Total: any value of the declared type is accepted.
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			registry: Rc::new(RefCell::new(BTreeMap::new())),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Read the current value without cloning
	///
	/// Useful for large values such as the comment list.
	///
	/// # Example
	///
	/// ```
	/// # use washroom_reactive::Store;
	/// let names = Store::new(vec!["north", "library"]);
	/// assert_eq!(names.with(|v| v.len()), 2);
	/// ```
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Register an observer
	///
	/// The observer is invoked once immediately with the current value, and
	/// thereafter exactly once per completed `set`/`update`, synchronously,
	/// in subscription order.
	///
	/// The returned [`Subscription`] deregisters the observer when
	/// [`Subscription::unsubscribe`] is called; dropping the handle without
	/// unsubscribing keeps the observer live for the lifetime of the store.
	#[must_use = "dropping the handle keeps the observer subscribed; hold it to unsubscribe later"]
	pub fn subscribe<F>(&self, observer: F) -> Subscription
	where
		F: FnMut(&T) + 'static,
	{
		let id = SubscriberId::new();
		let observer: ObserverFn<T> = Rc::new(RefCell::new(observer));
		self.registry.borrow_mut().insert(id, Rc::clone(&observer));

		// Contract: deliver the current value before subscribe() returns.
		{
			let value = self.value.borrow();
			(observer.borrow_mut())(&value);
		}

		let registry = Rc::downgrade(&self.registry);
		Subscription::new(Box::new(move || {
			if let Some(registry) = registry.upgrade() {
				registry.borrow_mut().remove(&id);
			}
		}))
	}

	/// Replace the current value unconditionally
	///
	/// No equality check is performed: observers fire even if `value` equals
	/// the previous value. Notification completes before `set` returns.
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Replace the current value through a transform of the previous value
	///
	/// `f` is invoked exactly once. The next value is fully computed before
	/// the store is written, so a panicking `f` propagates to the caller and
	/// leaves the value unchanged.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&T) -> T,
	{
		let next = {
			let current = self.value.borrow();
			f(&current)
		};
		self.set(next);
	}

	/// Number of currently registered observers (mainly for tests)
	pub fn observer_count(&self) -> usize {
		self.registry.borrow().len()
	}

	/// Notify every live observer with the current value, in subscription
	/// order.
	fn notify(&self) {
		// Snapshot before invoking so observers that subscribe or
		// unsubscribe mid-notification cannot corrupt the iteration.
		// Observers added during this notification are not called for it.
		let snapshot: Vec<ObserverFn<T>> = self.registry.borrow().values().cloned().collect();

		tracing::trace!(observers = snapshot.len(), "store change notification");

		for observer in snapshot {
			let value = self.value.borrow();
			(observer.borrow_mut())(&value);
		}
	}
}

impl<T: 'static> Clone for Store<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			registry: Rc::clone(&self.registry),
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Store<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Store")
			.field("value", &self.value.borrow())
			.field("observers", &self.registry.borrow().len())
			.finish()
	}
}
