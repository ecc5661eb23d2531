//! Primary color ramp
//!
//! An 11-step palette keyed 50–950, serialized as a numeric-keyed map to
//! match the build tool's `theme.extend.colors.primary` shape.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// The palette steps, lightest to darkest
pub const STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// An 11-step color ramp
///
/// Each step holds a `#RGB` or `#RRGGBB` hex color. The default ramp is the
/// red palette the frontend ships with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRamp {
	#[serde(rename = "50")]
	shade_50: String,
	#[serde(rename = "100")]
	shade_100: String,
	#[serde(rename = "200")]
	shade_200: String,
	#[serde(rename = "300")]
	shade_300: String,
	#[serde(rename = "400")]
	shade_400: String,
	#[serde(rename = "500")]
	shade_500: String,
	#[serde(rename = "600")]
	shade_600: String,
	#[serde(rename = "700")]
	shade_700: String,
	#[serde(rename = "800")]
	shade_800: String,
	#[serde(rename = "900")]
	shade_900: String,
	#[serde(rename = "950")]
	shade_950: String,
}

impl ColorRamp {
	/// Build a ramp from 11 hex colors ordered lightest to darkest
	///
	/// # Errors
	///
	/// Returns [`ThemeError::InvalidColor`] for the first entry that is not a
	/// `#RGB`/`#RRGGBB` hex color.
	pub fn from_steps(colors: [&str; 11]) -> Result<Self> {
		for (step, color) in STEPS.into_iter().zip(colors) {
			if !is_hex_color(color) {
				return Err(ThemeError::InvalidColor {
					step,
					value: color.to_string(),
				});
			}
		}
		let [c50, c100, c200, c300, c400, c500, c600, c700, c800, c900, c950] =
			colors.map(str::to_string);
		Ok(Self {
			shade_50: c50,
			shade_100: c100,
			shade_200: c200,
			shade_300: c300,
			shade_400: c400,
			shade_500: c500,
			shade_600: c600,
			shade_700: c700,
			shade_800: c800,
			shade_900: c900,
			shade_950: c950,
		})
	}

	/// Look up one step
	///
	/// Returns `None` for a step number that is not part of the ramp.
	pub fn get(&self, step: u16) -> Option<&str> {
		let color = match step {
			50 => &self.shade_50,
			100 => &self.shade_100,
			200 => &self.shade_200,
			300 => &self.shade_300,
			400 => &self.shade_400,
			500 => &self.shade_500,
			600 => &self.shade_600,
			700 => &self.shade_700,
			800 => &self.shade_800,
			900 => &self.shade_900,
			950 => &self.shade_950,
			_ => return None,
		};
		Some(color)
	}

	/// Iterate the steps lightest to darkest
	pub fn steps(&self) -> impl Iterator<Item = (u16, &str)> {
		STEPS.into_iter().map(|step| {
			// STEPS only contains valid step numbers.
			(step, self.get(step).unwrap_or_default())
		})
	}
}

impl Default for ColorRamp {
	/// The shipped red palette
	fn default() -> Self {
		Self {
			shade_50: "#FFDBDB".into(),
			shade_100: "#FFB8B8".into(),
			shade_200: "#FF7070".into(),
			shade_300: "#FF2929".into(),
			shade_400: "#E00000".into(),
			shade_500: "#990000".into(),
			shade_600: "#7A0000".into(),
			shade_700: "#5C0000".into(),
			shade_800: "#3D0000".into(),
			shade_900: "#1F0000".into(),
			shade_950: "#0F0000".into(),
		}
	}
}

fn is_hex_color(value: &str) -> bool {
	match value.strip_prefix('#') {
		Some(digits) => {
			matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn default_ramp_matches_shipped_palette() {
		let ramp = ColorRamp::default();
		assert_eq!(ramp.get(50), Some("#FFDBDB"));
		assert_eq!(ramp.get(500), Some("#990000"));
		assert_eq!(ramp.get(950), Some("#0F0000"));
		assert_eq!(ramp.get(475), None);
	}

	#[rstest]
	fn serializes_as_numeric_keyed_map() {
		let json = serde_json::to_value(ColorRamp::default()).unwrap();
		assert_eq!(json["50"], "#FFDBDB");
		assert_eq!(json["900"], "#1F0000");
		assert_eq!(json.as_object().unwrap().len(), 11);
	}

	#[rstest]
	fn from_steps_accepts_short_and_long_hex() {
		let ramp = ColorRamp::from_steps([
			"#fff", "#eee", "#ddd", "#ccc", "#bbb", "#aaa", "#999", "#888808", "#777", "#666",
			"#555",
		])
		.unwrap();
		assert_eq!(ramp.get(700), Some("#888808"));
	}

	#[rstest]
	#[case("990000")]
	#[case("#99000")]
	#[case("#99zz00")]
	#[case("")]
	fn from_steps_rejects_invalid_hex(#[case] bad: &str) {
		let mut colors = ["#111111"; 11];
		colors[5] = bad;
		let err = ColorRamp::from_steps(colors).unwrap_err();
		match err {
			ThemeError::InvalidColor { step, value } => {
				assert_eq!(step, 500);
				assert_eq!(value, bad);
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[rstest]
	fn steps_iterates_lightest_to_darkest() {
		let ramp = ColorRamp::default();
		let steps: Vec<u16> = ramp.steps().map(|(step, _)| step).collect();
		assert_eq!(steps, STEPS.to_vec());
	}
}
