//! Bathroom record shape
//!
//! Pure data shared with other parts of the system; no behavior attaches to
//! it here.

use serde::{Deserialize, Serialize};

/// Which gender marking the bathroom carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderAccess {
	#[serde(rename = "M")]
	Male,
	#[serde(rename = "F")]
	Female,
	#[serde(rename = "U")]
	Unisex,
}

/// An identifying record for one bathroom
///
/// Serializes with camelCase keys to match the client JSON shape; `color` is
/// an optional display hint and is omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bathroom {
	pub id: i64,
	pub name: String,
	pub gender: GenderAccess,
	pub accessible: bool,
	pub menstrual_products: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
}
