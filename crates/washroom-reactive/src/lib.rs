//! # Washroom Reactive
//!
//! Observable value containers for driving UI re-rendering.
//!
//! `Store<T>` holds a current value and notifies registered observers
//! synchronously on every change. Observers receive the current value
//! immediately upon subscription and once per subsequent `set`/`update`.
//!
//! ## Example
//!
//! ```
//! use washroom_reactive::Store;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let rating = Store::new(0.0_f64);
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let subscription = rating.subscribe(move |value| {
//!     sink.borrow_mut().push(*value);
//! });
//!
//! rating.set(4.0);
//! rating.update(|value| value + 1.0);
//!
//! assert_eq!(*seen.borrow(), vec![0.0, 4.0, 5.0]);
//! subscription.unsubscribe();
//! ```
//!
//! The whole system is single-threaded and run-to-completion: notification
//! for a given `set`/`update` call finishes before the call returns, and
//! stores are `!Send`/`!Sync` by construction (`Rc` sharing).

pub mod store;
pub mod subscription;

pub use store::{Store, SubscriberId};
pub use subscription::Subscription;
