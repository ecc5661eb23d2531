//! Append-only comment list

use serde::{Deserialize, Serialize};
use washroom_reactive::{Store, Subscription};

/// A user-submitted text entry
///
/// Comments live for the running client session only: appended in insertion
/// order, never deduplicated, never deleted, discarded on reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
	/// Free-text body
	pub text: String,
	/// Identifying author label
	pub user: String,
}

impl Comment {
	pub fn new(text: impl Into<String>, user: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			user: user.into(),
		}
	}
}

/// Reactive container for the ordered comment sequence
///
/// Wraps a `Store<Vec<Comment>>` starting empty and adds the append
/// operation. Appends are non-destructive: a sequence value captured before
/// an append is unaffected by it.
#[derive(Debug, Clone)]
pub struct CommentStore {
	inner: Store<Vec<Comment>>,
}

impl CommentStore {
	/// Create an empty comment store
	pub fn new() -> Self {
		Self {
			inner: Store::new(Vec::new()),
		}
	}

	/// Append `comment` to the end of the sequence
	///
	/// Produces a new sequence with all prior elements preserved in order and
	/// notifies observers per `update` semantics. The debug log line is a
	/// diagnostic side effect, not part of the contract.
	pub fn add_comment(&self, comment: Comment) {
		tracing::debug!(user = %comment.user, "appending comment");
		self.inner.update(|existing| {
			let mut next = existing.clone();
			next.push(comment);
			next
		});
	}

	/// Snapshot of the current sequence
	pub fn get(&self) -> Vec<Comment> {
		self.inner.get()
	}

	/// Number of comments without cloning the sequence
	pub fn len(&self) -> usize {
		self.inner.with(Vec::len)
	}

	pub fn is_empty(&self) -> bool {
		self.inner.with(Vec::is_empty)
	}

	/// Register an observer on the sequence
	///
	/// Same contract as [`Store::subscribe`]: called immediately with the
	/// current sequence, then once per append.
	#[must_use = "dropping the handle keeps the observer subscribed; hold it to unsubscribe later"]
	pub fn subscribe<F>(&self, observer: F) -> Subscription
	where
		F: FnMut(&[Comment]) + 'static,
	{
		let mut observer = observer;
		self.inner.subscribe(move |comments| observer(comments))
	}

	/// The underlying store, for callers that need raw `set`/`update` access
	pub fn store(&self) -> &Store<Vec<Comment>> {
		&self.inner
	}
}

impl Default for CommentStore {
	fn default() -> Self {
		Self::new()
	}
}
