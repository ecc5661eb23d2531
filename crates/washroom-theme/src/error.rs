//! Error types for washroom-theme

use thiserror::Error;

/// Error type for theme configuration
#[derive(Debug, Error)]
pub enum ThemeError {
	/// A palette step holds something that is not a hex color
	#[error("invalid hex color for step {step}: {value:?}")]
	InvalidColor { step: u16, value: String },

	/// The content glob list is empty, so the build tool would scan nothing
	#[error("content globs must not be empty")]
	NoContentGlobs,
}

/// Result type for theme configuration
pub type Result<T> = std::result::Result<T, ThemeError>;
