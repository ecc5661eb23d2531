//! # Washroom
//!
//! Client-side state layer for the washroom-rating frontend.
//!
//! This facade re-exports the workspace members:
//!
//! - [`reactive`] — the observable value container ([`Store`]) the rest of
//!   the state layer is built on
//! - [`state`] — ratings, comments, bathroom records, and the [`AppState`]
//!   handed to the UI layer (feature `state`, on by default)
//! - [`theme`] — the typed styling/build configuration (feature `theme`, on
//!   by default)
//!
//! ## Example
//!
//! ```
//! use washroom::state::{AppState, Comment};
//!
//! let state = AppState::new();
//! state.ratings.cleanliness.set(4.0);
//! state.comments.add_comment(Comment::new("Clean", "alice"));
//!
//! assert_eq!(state.comments.get().len(), 1);
//! ```

pub use washroom_reactive as reactive;

#[cfg(feature = "state")]
pub use washroom_state as state;

#[cfg(feature = "theme")]
pub use washroom_theme as theme;

pub use washroom_reactive::{Store, Subscription};

#[cfg(feature = "state")]
pub use washroom_state::AppState;
