//! # Washroom State
//!
//! Domain state for the washroom-rating client, built on
//! [`washroom_reactive::Store`].
//!
//! The UI layer receives an [`AppState`] at initialization and binds elements
//! by subscribing to its stores; user interaction events write back through
//! `set`/`update`/[`CommentStore::add_comment`]. Nothing here persists across
//! reloads and nothing performs I/O.

pub mod app;
pub mod bathroom;
pub mod comments;
pub mod ratings;

pub use app::AppState;
pub use bathroom::{Bathroom, GenderAccess};
pub use comments::{Comment, CommentStore};
pub use ratings::{Rating, RatingStores};
