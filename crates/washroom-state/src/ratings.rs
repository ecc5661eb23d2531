//! Rating cells for the four evaluation categories

use washroom_reactive::Store;

/// A numeric score for one evaluation category
///
/// Scores default to 0.0 and carry no enforced bounds; the range is an
/// application-level convention of the UI layer.
pub type Rating = f64;

/// The independently owned rating cells
///
/// The four category cells and the aggregate cell are fully independent: no
/// relationship between them is enforced, and writing one never touches the
/// others. The UI layer that computes an aggregate must write `average`
/// explicitly.
#[derive(Debug, Clone)]
pub struct RatingStores {
	/// Wheelchair/step-free accessibility score
	pub accessibility: Store<Rating>,
	/// Cleanliness score
	pub cleanliness: Store<Rating>,
	/// Menstrual-product availability score
	pub menstrual: Store<Rating>,
	/// Overall score
	pub overall: Store<Rating>,
	/// Single aggregate score cell
	pub average: Store<Rating>,
}

impl RatingStores {
	/// Create the rating cells, all starting at 0.0
	pub fn new() -> Self {
		Self {
			accessibility: Store::new(0.0),
			cleanliness: Store::new(0.0),
			menstrual: Store::new(0.0),
			overall: Store::new(0.0),
			average: Store::new(0.0),
		}
	}
}

impl Default for RatingStores {
	fn default() -> Self {
		Self::new()
	}
}
