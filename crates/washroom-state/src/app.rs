//! Application state root
//!
//! The stores are deliberately not module-level globals: the application
//! constructs one `AppState` at startup and hands it to the UI layer, keeping
//! ownership and testability explicit. Lifecycle is process lifetime; there
//! is no teardown.

use crate::comments::CommentStore;
use crate::ratings::RatingStores;

/// Everything the UI layer binds to
#[derive(Debug, Clone, Default)]
pub struct AppState {
	pub ratings: RatingStores,
	pub comments: CommentStore,
}

impl AppState {
	pub fn new() -> Self {
		Self::default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn fresh_state_is_zeroed_and_empty() {
		let state = AppState::new();
		assert_eq!(state.ratings.overall.get(), 0.0);
		assert_eq!(state.ratings.average.get(), 0.0);
		assert!(state.comments.is_empty());
	}

	#[rstest]
	fn clones_alias_the_same_stores() {
		let state = AppState::new();
		let ui_handle = state.clone();

		state.ratings.overall.set(4.5);

		assert_eq!(ui_handle.ratings.overall.get(), 4.5);
	}
}
