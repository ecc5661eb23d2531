//! Subscription handles for deregistering store observers

use core::cell::RefCell;
use core::fmt;

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) deregisters the
/// observer; calling it more than once is a no-op. The handle holds only a
/// weak reference to the store's registry, so it never keeps a dropped store
/// alive.
///
/// Dropping the handle does *not* unsubscribe: the observer stays registered
/// for the lifetime of the store, matching the explicit-unsubscription
/// contract of the UI layer.
#[must_use = "hold the handle to be able to unsubscribe the observer later"]
pub struct Subscription {
	cancel: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
	pub(crate) fn new(cancel: Box<dyn FnOnce()>) -> Self {
		Self {
			cancel: RefCell::new(Some(cancel)),
		}
	}

	/// Deregister the observer
	///
	/// Idempotent: the second and later calls do nothing.
	pub fn unsubscribe(&self) {
		if let Some(cancel) = self.cancel.borrow_mut().take() {
			cancel();
		}
	}

	/// Whether the observer is still registered through this handle
	pub fn is_active(&self) -> bool {
		self.cancel.borrow().is_some()
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.is_active())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use crate::Store;
	use rstest::rstest;

	#[rstest]
	fn handle_reports_active_state() {
		let store = Store::new(0);
		let subscription = store.subscribe(|_| {});

		assert!(subscription.is_active());
		subscription.unsubscribe();
		assert!(!subscription.is_active());
	}

	#[rstest]
	fn unsubscribe_after_store_drop_is_harmless() {
		let store = Store::new(0);
		let subscription = store.subscribe(|_| {});

		drop(store);
		subscription.unsubscribe();
		assert!(!subscription.is_active());
	}
}
